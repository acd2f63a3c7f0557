//! Navigation state for multi-step form wizards.
//!
//! A [`WizardState`] holds the ordered steps, the data captured for each of
//! them and the active step index. Advancing is gated on the active step's
//! validity; retreating never discards captured values.

mod builder;
mod log;
mod state;
mod step;

pub use builder::{Empty, HasSteps, WizardBuilder};
pub use log::{Transition, TransitionKind, TransitionLog};
pub use state::WizardState;
pub use step::Step;
