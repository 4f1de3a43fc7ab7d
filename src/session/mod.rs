//! The GameState controller.
//!
//! [`GameSession`] is the single owned state object behind the whole
//! screen flow: phase transitions, the round counter, the in-progress
//! assignment, the score history, and the elapsed-time clock. The
//! presentation layer reads from it and invokes its action handlers;
//! it never mutates state any other way.

pub mod action;
pub mod state;
pub mod timer;

pub use action::SessionAction;
pub use state::{GameSession, TransitionToken};
pub use timer::Timer;
