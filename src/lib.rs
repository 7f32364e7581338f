pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Invocation};

pub use app::InteractiveSession;
pub use config::TomlConfig;
pub use core::{context::CalculationContext, quote::Quote};
pub use domain::model::{ServiceClass, TransportMode, TravelRequest};
pub use domain::ports::{PricingPolicy, SessionSettings};
pub use utils::error::{FareError, Result};
