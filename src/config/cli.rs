use crate::config::toml_config::TomlConfig;
use crate::core::{ServiceClass, SessionSettings, TransportMode, TravelRequest};
use crate::domain::model::passenger_count;
use crate::utils::error::{FareError, Result};
use crate::utils::validation::{validate_positive_finite, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "travel-cost")]
#[command(about = "Calculate the cost of a plane, train or bus booking")]
pub struct CliConfig {
    /// Transport mode; omit together with --distance to answer prompts instead
    #[arg(short, long, value_enum)]
    pub mode: Option<TransportMode>,

    /// Trip distance
    #[arg(short, long, allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Number of passengers
    #[arg(short, long, allow_negative_numbers = true)]
    pub passengers: Option<i64>,

    /// Service class
    #[arg(long = "class", value_enum)]
    pub service_class: Option<ServiceClass>,

    #[arg(long, help = "Passenger travels with checked baggage")]
    pub baggage: bool,

    #[arg(long, help = "Apply the child discount")]
    pub child: bool,

    #[arg(long, help = "Apply the senior discount")]
    pub senior: bool,

    /// Regional price multiplier (overrides the config file)
    #[arg(long)]
    pub regional_coefficient: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the quote as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the binary should do once arguments and config are merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Interactive,
    Single {
        mode: TransportMode,
        request: TravelRequest,
    },
}

impl CliConfig {
    /// Loads the file named by `--config`, or built-in defaults when absent.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// 應用命令列覆蓋設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(coefficient) = self.regional_coefficient {
            config.pricing.regional_coefficient = coefficient;
            tracing::debug!("Regional coefficient overridden to: {}", coefficient);
        }
    }

    /// Decides between the interactive shell and a one-shot calculation.
    pub fn invocation(&self, config: &TomlConfig) -> Result<Invocation> {
        let distance = match (self.mode, self.distance) {
            (None, None) => {
                let ignored = self.trip_flags();
                if !ignored.is_empty() {
                    return Err(FareError::ConfigError {
                        message: format!(
                            "{} given without --distance; pass --mode and --distance or drop them to answer prompts",
                            ignored.join(", ")
                        ),
                    });
                }
                return Ok(Invocation::Interactive);
            }
            (Some(_), None) => {
                return Err(FareError::ConfigError {
                    message: "--distance is required when --mode is given".to_string(),
                })
            }
            (_, Some(distance)) => distance,
        };

        let mode = self
            .mode
            .or_else(|| config.default_mode())
            .ok_or_else(|| FareError::ConfigError {
                message: "--mode is required unless [defaults] mode is configured".to_string(),
            })?;

        let passengers = match self.passengers {
            Some(value) => passenger_count(value)?,
            None => config.default_passengers().unwrap_or(1),
        };

        let service_class = self
            .service_class
            .or_else(|| config.default_service_class())
            .unwrap_or_default();

        let request = TravelRequest::new(
            distance,
            passengers,
            service_class,
            self.baggage,
            self.child,
            self.senior,
            config.regional_coefficient(),
        )?;

        Ok(Invocation::Single { mode, request })
    }

    /// Trip flags that only apply to a one-shot calculation.
    fn trip_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.passengers.is_some() {
            flags.push("--passengers");
        }
        if self.service_class.is_some() {
            flags.push("--class");
        }
        if self.baggage {
            flags.push("--baggage");
        }
        if self.child {
            flags.push("--child");
        }
        if self.senior {
            flags.push("--senior");
        }
        flags
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(coefficient) = self.regional_coefficient {
            validate_positive_finite("regional_coefficient", coefficient)?;
        }
        Ok(())
    }
}
