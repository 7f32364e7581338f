use crate::core::{PricingPolicy, TransportMode, TravelRequest};
use crate::utils::error::{FareError, Result};

/// Holds the currently selected pricing policy for one session.
///
/// Starts unselected; `compute` fails with [`FareError::NoPolicySelected`]
/// until a policy is chosen. Selecting again replaces the previous choice.
/// Not meant to be shared between concurrent callers: give each caller
/// its own context.
#[derive(Default)]
pub struct CalculationContext<'a> {
    policy: Option<&'a dyn PricingPolicy>,
}

impl<'a> CalculationContext<'a> {
    pub fn new() -> Self {
        Self { policy: None }
    }

    pub fn select_policy(&mut self, policy: &'a dyn PricingPolicy) {
        tracing::debug!("Selected pricing policy: {}", policy.name());
        self.policy = Some(policy);
    }

    pub fn select_mode(&mut self, mode: TransportMode) {
        self.select_policy(mode.policy());
    }

    /// Name of the selected policy, if any.
    pub fn selected(&self) -> Option<&'static str> {
        self.policy.map(|policy| policy.name())
    }

    pub fn compute(&self, request: &TravelRequest) -> Result<f64> {
        let policy = self.policy.ok_or(FareError::NoPolicySelected)?;
        let cost = policy.calculate_cost(request);
        tracing::debug!(
            "Computed {} fare: {} (distance={}, passengers={})",
            policy.name(),
            cost,
            request.distance(),
            request.passengers()
        );
        Ok(cost)
    }
}

impl std::fmt::Debug for CalculationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculationContext")
            .field("policy", &self.selected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::{BusPolicy, PlanePolicy};
    use crate::core::ServiceClass;

    fn sample_request() -> TravelRequest {
        TravelRequest::new(100.0, 2, ServiceClass::Business, true, false, false, 1.1).unwrap()
    }

    #[test]
    fn test_compute_without_selection_fails() {
        let context = CalculationContext::new();
        let result = context.compute(&sample_request());

        assert!(matches!(result, Err(FareError::NoPolicySelected)));
        assert!(context.selected().is_none());
    }

    #[test]
    fn test_compute_delegates_to_selected_policy() {
        let request = sample_request();
        let mut context = CalculationContext::new();

        context.select_policy(&PlanePolicy);
        assert_eq!(context.compute(&request).unwrap(), PlanePolicy.calculate_cost(&request));
        assert_eq!(context.selected(), Some("plane"));
    }

    #[test]
    fn test_reselect_replaces_policy() {
        let request = sample_request();
        let mut context = CalculationContext::new();

        context.select_mode(TransportMode::Plane);
        context.select_policy(&BusPolicy);

        assert_eq!(context.selected(), Some("bus"));
        assert_eq!(context.compute(&request).unwrap(), BusPolicy.calculate_cost(&request));
    }

    #[test]
    fn test_failed_compute_leaves_state_unselected() {
        let context = CalculationContext::default();
        assert!(context.compute(&sample_request()).is_err());
        assert!(context.compute(&sample_request()).is_err());
        assert_eq!(format!("{:?}", context), "CalculationContext { policy: None }");
    }
}
