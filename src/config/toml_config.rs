use crate::core::engine::DEFAULT_DAILY_CAP;
use crate::core::session::{DEFAULT_DOSES_PER_VIAL, DEFAULT_VIAL_COUNT};
use crate::domain::ports::SessionConfig;
use crate::utils::error::{Result, VaccinationError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub vials: VialsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSection {
    /// Vaccination date, dd/mm/yyyy. Prompted for when absent.
    pub date: Option<String>,
    pub daily_cap: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VialsSection {
    pub count: Option<usize>,
    pub doses_per_vial: Option<u32>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| VaccinationError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VaccinationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VaccinationError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("session.daily_cap", self.daily_cap(), 1)?;
        validation::validate_positive_number(
            "vials.doses_per_vial",
            self.doses_per_vial() as usize,
            1,
        )?;
        if let Some(date) = &self.session.date {
            validation::validate_non_empty_string("session.date", date)?;
            validation::parse_session_date("session.date", date)?;
        }
        Ok(())
    }

    pub fn session_date(&self) -> Result<Option<NaiveDate>> {
        self.session
            .date
            .as_deref()
            .map(|d| validation::parse_session_date("session.date", d))
            .transpose()
    }
}

impl SessionConfig for TomlConfig {
    fn daily_cap(&self) -> usize {
        self.session.daily_cap.unwrap_or(DEFAULT_DAILY_CAP)
    }

    fn vial_count(&self) -> usize {
        self.vials.count.unwrap_or(DEFAULT_VIAL_COUNT)
    }

    fn doses_per_vial(&self) -> u32 {
        self.vials.doses_per_vial.unwrap_or(DEFAULT_DOSES_PER_VIAL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
