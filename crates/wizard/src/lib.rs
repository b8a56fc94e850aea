//! Public attendance wizard.
//!
//! Guests walk a fixed sequence of steps: look up their national id, see the
//! invitation (or their previous answer), pick a response, declare who comes
//! along, and land on a confirmation. [`flow::WizardFlow`] owns the state
//! machine; [`views`] carries the copy each screen shows.

pub mod error;
pub mod event;
pub mod flow;
pub mod views;

pub use error::WizardError;
pub use event::EventDetails;
pub use flow::{WizardFlow, WizardStep};
pub use views::StepView;
