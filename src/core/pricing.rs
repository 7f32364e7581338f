use crate::core::{PricingPolicy, ServiceClass, TransportMode, TravelRequest};

const PLANE_RATE: f64 = 0.5;
const PLANE_BUSINESS_MULTIPLIER: f64 = 1.8;
const PLANE_BAGGAGE_FEE: f64 = 50.0;
const PLANE_CHILD_DISCOUNT: f64 = 0.7;
const PLANE_SENIOR_DISCOUNT: f64 = 0.8;
const PLANE_GROUP_SIZE: u32 = 5;
const PLANE_GROUP_DISCOUNT: f64 = 0.9;

const TRAIN_RATE: f64 = 0.3;
const TRAIN_BUSINESS_MULTIPLIER: f64 = 1.5;
const TRAIN_CHILD_DISCOUNT: f64 = 0.8;
const TRAIN_SENIOR_DISCOUNT: f64 = 0.85;

const BUS_RATE: f64 = 0.2;
const BUS_GROUP_SIZE: u32 = 10;
const BUS_GROUP_DISCOUNT: f64 = 0.85;

/// Scales a per-passenger fare by head count and region.
fn scale(fare: f64, request: &TravelRequest) -> f64 {
    fare * f64::from(request.passengers()) * request.regional_coefficient()
}

/// Plane pricing: business multiplier, flat baggage fee, then age and
/// group discounts. Child and senior discounts compound when both are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanePolicy;

impl PlanePolicy {
    fn apply_discounts(&self, mut total: f64, request: &TravelRequest) -> f64 {
        if request.is_child() {
            total *= PLANE_CHILD_DISCOUNT;
        }
        if request.is_senior() {
            total *= PLANE_SENIOR_DISCOUNT;
        }
        if request.passengers() >= PLANE_GROUP_SIZE {
            total *= PLANE_GROUP_DISCOUNT;
        }
        total
    }
}

impl PricingPolicy for PlanePolicy {
    fn name(&self) -> &'static str {
        "plane"
    }

    fn calculate_cost(&self, request: &TravelRequest) -> f64 {
        let mut fare = request.distance() * PLANE_RATE;

        if request.service_class() == ServiceClass::Business {
            fare *= PLANE_BUSINESS_MULTIPLIER;
        }

        // baggage fee is charged per passenger, after the class multiplier
        if request.has_baggage() {
            fare += PLANE_BAGGAGE_FEE;
        }

        self.apply_discounts(scale(fare, request), request)
    }
}

/// Train pricing: business multiplier and compounding age discounts.
/// No baggage fee and no group discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainPolicy;

impl TrainPolicy {
    fn apply_discounts(&self, mut total: f64, request: &TravelRequest) -> f64 {
        if request.is_child() {
            total *= TRAIN_CHILD_DISCOUNT;
        }
        if request.is_senior() {
            total *= TRAIN_SENIOR_DISCOUNT;
        }
        total
    }
}

impl PricingPolicy for TrainPolicy {
    fn name(&self) -> &'static str {
        "train"
    }

    fn calculate_cost(&self, request: &TravelRequest) -> f64 {
        let mut fare = request.distance() * TRAIN_RATE;

        if request.service_class() == ServiceClass::Business {
            fare *= TRAIN_BUSINESS_MULTIPLIER;
        }

        self.apply_discounts(scale(fare, request), request)
    }
}

/// Bus pricing: flat rate with a large-group discount only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusPolicy;

impl PricingPolicy for BusPolicy {
    fn name(&self) -> &'static str {
        "bus"
    }

    fn calculate_cost(&self, request: &TravelRequest) -> f64 {
        let mut total = scale(request.distance() * BUS_RATE, request);

        if request.passengers() >= BUS_GROUP_SIZE {
            total *= BUS_GROUP_DISCOUNT;
        }
        total
    }
}

impl TransportMode {
    /// The shared stateless policy for this mode.
    pub fn policy(&self) -> &'static dyn PricingPolicy {
        match self {
            TransportMode::Plane => &PlanePolicy,
            TransportMode::Train => &TrainPolicy,
            TransportMode::Bus => &BusPolicy,
        }
    }
}
