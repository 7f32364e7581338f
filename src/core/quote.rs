use crate::core::context::CalculationContext;
use crate::core::{TransportMode, TravelRequest};
use crate::utils::error::Result;
use serde::Serialize;

/// One computed fare, ready to be printed or serialized.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub mode: TransportMode,
    pub request: TravelRequest,
    pub cost: f64,
}

impl Quote {
    pub fn compute(mode: TransportMode, request: TravelRequest) -> Result<Self> {
        let mut context = CalculationContext::new();
        context.select_mode(mode);
        let cost = context.compute(&request)?;

        Ok(Self {
            mode,
            request,
            cost,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
