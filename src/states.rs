// states.rs - The screen state machine
//
// This app uses Bevy's States system to control screen flow:
//
// Loading state: show the welcome text, poll asset loading, wait for a tap
// Playing state: run the raindrop simulation
//
// STATE SYSTEM CONCEPTS:
// - init_state::<T>()    - Register a state type and start in its Default variant
// - OnEnter(State)       - System runs once when entering this state
// - OnExit(State)        - System runs once when leaving this state
// - run_if(in_state(S))  - System only runs while in state S
// - NextState<T>         - Resource to request state transitions
//
// There is no transition back: once Playing is entered it is the active
// screen until the process exits.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Queue asset loads, redraw the welcome text until they finish,
    /// then wait for a pointer press.
    #[default]
    Loading,
    /// The raindrop simulation. Terminal state.
    Playing,
}
