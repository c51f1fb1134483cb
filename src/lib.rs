pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::menu::{Menu, MenuCommand};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    engine::VaccinationEngine, person_queue::PersonQueue, session::SessionSettings,
    session::SessionState, vial_stack::VialStack,
};
pub use domain::model::{BatchOutcome, Person, TerminationReason, Vial};
pub use domain::ports::SessionConfig;
pub use utils::error::{Result, VaccinationError};
