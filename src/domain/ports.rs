use crate::domain::model::TravelRequest;

/// A stateless pricing rule for one transport mode.
pub trait PricingPolicy: Send + Sync {
    fn name(&self) -> &'static str;
    fn calculate_cost(&self, request: &TravelRequest) -> f64;
}

/// Session-wide settings the request-building shell needs.
pub trait SessionSettings {
    fn regional_coefficient(&self) -> f64;
}
