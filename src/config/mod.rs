pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::TomlConfig;
    use crate::core::engine::DEFAULT_DAILY_CAP;
    use crate::core::session::{DEFAULT_DOSES_PER_VIAL, DEFAULT_VIAL_COUNT};
    use crate::domain::ports::SessionConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "vaccine-queue")]
    #[command(about = "Vaccination queue and vial stock for a single session")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Vaccination date (dd/mm/yyyy); prompted for when omitted
        #[arg(long)]
        pub date: Option<String>,

        /// Maximum vaccinations per batch
        #[arg(long)]
        pub daily_cap: Option<usize>,

        /// Number of vials stocked at session start
        #[arg(long)]
        pub vials: Option<usize>,

        /// Doses in each starting vial
        #[arg(long)]
        pub doses_per_vial: Option<u32>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Loads the file named by `--config` (or defaults) and applies flag overrides on top.
        pub fn load(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            if let Some(date) = &self.date {
                config.session.date = Some(date.clone());
            }
            if let Some(cap) = self.daily_cap {
                config.session.daily_cap = Some(cap);
            }
            if let Some(count) = self.vials {
                config.vials.count = Some(count);
            }
            if let Some(doses) = self.doses_per_vial {
                config.vials.doses_per_vial = Some(doses);
            }

            config.validate()?;
            Ok(config)
        }
    }

    impl SessionConfig for CliConfig {
        fn daily_cap(&self) -> usize {
            self.daily_cap.unwrap_or(DEFAULT_DAILY_CAP)
        }

        fn vial_count(&self) -> usize {
            self.vials.unwrap_or(DEFAULT_VIAL_COUNT)
        }

        fn doses_per_vial(&self) -> u32 {
            self.doses_per_vial.unwrap_or(DEFAULT_DOSES_PER_VIAL)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validation::validate_non_empty_string("config", path)?;
            }
            validation::validate_positive_number("daily_cap", SessionConfig::daily_cap(self), 1)?;
            validation::validate_positive_number(
                "doses_per_vial",
                SessionConfig::doses_per_vial(self) as usize,
                1,
            )?;
            if let Some(date) = &self.date {
                validation::parse_session_date("date", date)?;
            }
            Ok(())
        }
    }

}
