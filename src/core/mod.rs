pub mod engine;
pub mod person_queue;
pub mod session;
pub mod vial_stack;

pub use crate::domain::model::{BatchOutcome, Person, TerminationReason, Vial};
pub use crate::domain::ports::SessionConfig;
pub use crate::utils::error::Result;
