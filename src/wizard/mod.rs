//! Registration wizard core
//!
//! A three-step form modelled as a state machine:
//!
//! - `state`: the state record and its parts (steps, fields, form data, errors)
//! - `action`: the actions that drive it
//! - `reducer`: the pure `(state, action) -> state` function
//! - `validation`: per-step field checks and the Next gate
//! - `view`: a front-end independent description of what to draw
//! - `controller`: a session that dispatches through the reducer
//!
//! Nothing here touches the terminal, so the whole state machine can be
//! exercised without a renderer.

pub mod action;
pub mod controller;
pub mod reducer;
pub mod state;
pub mod validation;
pub mod view;

pub use action::{Action, ActionKind};
pub use controller::{Advance, Transition, TransitionObserver, Wizard};
pub use reducer::reduce;
pub use state::{ErrorMap, Field, FormData, Step, WizardState};
pub use validation::{is_next_disabled, is_valid_email, validate_step};
pub use view::{Button, ButtonView, WizardView};
