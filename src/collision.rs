// collision.rs - Axis-aligned overlap test for buckets and raindrops

use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

/// Builds the bounding box of a square game object from its center.
pub fn square_aabb(center: Vec2, size: f32) -> Aabb2d {
    Aabb2d::new(center, Vec2::splat(size / 2.0))
}

/// True when two squares overlap: their x intervals intersect and their
/// y intervals intersect.
pub fn squares_overlap(a: Vec2, b: Vec2, size: f32) -> bool {
    square_aabb(a, size).intersects(&square_aabb(b, size))
}
