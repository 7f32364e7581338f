pub mod context;
pub mod pricing;
pub mod quote;

pub use crate::domain::model::{ServiceClass, TransportMode, TravelRequest};
pub use crate::domain::ports::{PricingPolicy, SessionSettings};
pub use crate::utils::error::Result;
