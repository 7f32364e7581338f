use crate::utils::error::{FareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ServiceClass {
    #[default]
    Economy,
    Business,
}

impl ServiceClass {
    /// Menu code used by the interactive shell: 2 is business, anything else economy.
    pub fn from_menu_code(code: i64) -> Self {
        if code == 2 {
            ServiceClass::Business
        } else {
            ServiceClass::Economy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Plane,
    Train,
    Bus,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Plane,
        TransportMode::Train,
        TransportMode::Bus,
    ];

    /// Maps the interactive menu choice ("1", "2", "3") to a mode.
    pub fn from_menu_choice(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(TransportMode::Plane),
            "2" => Ok(TransportMode::Train),
            "3" => Ok(TransportMode::Bus),
            other => Err(FareError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            TransportMode::Plane => "Plane",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportMode::Plane => "plane",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
        })
    }
}

/// A validated booking request. Only obtainable through [`TravelRequest::new`]
/// (deserialization runs the same checks), so every instance has
/// `distance > 0` and `passengers > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TravelRequestFields")]
pub struct TravelRequest {
    distance: f64,
    passengers: u32,
    service_class: ServiceClass,
    has_baggage: bool,
    is_child: bool,
    is_senior: bool,
    regional_coefficient: f64,
}

impl TravelRequest {
    pub fn new(
        distance: f64,
        passengers: u32,
        service_class: ServiceClass,
        has_baggage: bool,
        is_child: bool,
        is_senior: bool,
        regional_coefficient: f64,
    ) -> Result<Self> {
        // NaN fails this comparison too
        if !(distance > 0.0) {
            return Err(FareError::invalid_request(
                "distance",
                distance,
                "must be greater than 0",
            ));
        }
        if passengers == 0 {
            return Err(FareError::invalid_request(
                "passengers",
                passengers,
                "must be at least 1",
            ));
        }

        Ok(Self {
            distance,
            passengers,
            service_class,
            has_baggage,
            is_child,
            is_senior,
            regional_coefficient,
        })
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    pub fn has_baggage(&self) -> bool {
        self.has_baggage
    }

    pub fn is_child(&self) -> bool {
        self.is_child
    }

    pub fn is_senior(&self) -> bool {
        self.is_senior
    }

    pub fn regional_coefficient(&self) -> f64 {
        self.regional_coefficient
    }
}

#[derive(Debug, Deserialize)]
struct TravelRequestFields {
    distance: f64,
    passengers: i64,
    #[serde(default)]
    service_class: ServiceClass,
    #[serde(default)]
    has_baggage: bool,
    #[serde(default)]
    is_child: bool,
    #[serde(default)]
    is_senior: bool,
    regional_coefficient: f64,
}

impl TryFrom<TravelRequestFields> for TravelRequest {
    type Error = FareError;

    fn try_from(fields: TravelRequestFields) -> Result<Self> {
        TravelRequest::new(
            fields.distance,
            passenger_count(fields.passengers)?,
            fields.service_class,
            fields.has_baggage,
            fields.is_child,
            fields.is_senior,
            fields.regional_coefficient,
        )
    }
}

/// Converts a signed passenger count read from user input, rejecting
/// zero, negative and out-of-range values.
pub fn passenger_count(value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(FareError::invalid_request(
            "passengers",
            value,
            "must be at least 1",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_fields() {
        let request =
            TravelRequest::new(123.5, 3, ServiceClass::Business, true, false, true, 1.1).unwrap();

        assert_eq!(request.distance(), 123.5);
        assert_eq!(request.passengers(), 3);
        assert_eq!(request.service_class(), ServiceClass::Business);
        assert!(request.has_baggage());
        assert!(!request.is_child());
        assert!(request.is_senior());
        assert_eq!(request.regional_coefficient(), 1.1);
    }

    #[test]
    fn test_new_rejects_non_positive_distance() {
        for distance in [0.0, -0.5, -100.0, f64::NAN] {
            let result = TravelRequest::new(distance, 1, ServiceClass::Economy, false, false, false, 1.0);
            assert!(
                matches!(result, Err(FareError::InvalidRequest { ref field, .. }) if field == "distance"),
                "distance {} should be rejected",
                distance
            );
        }
    }

    #[test]
    fn test_new_rejects_zero_passengers() {
        let result = TravelRequest::new(10.0, 0, ServiceClass::Economy, false, false, false, 1.0);
        assert!(matches!(result, Err(FareError::InvalidRequest { ref field, .. }) if field == "passengers"));
    }

    #[test]
    fn test_passenger_count_rejects_negative() {
        assert_eq!(passenger_count(4).unwrap(), 4);
        assert!(passenger_count(0).is_err());
        assert!(passenger_count(-3).is_err());
        assert!(passenger_count(i64::MAX).is_err());
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(TransportMode::from_menu_choice("1").unwrap(), TransportMode::Plane);
        assert_eq!(TransportMode::from_menu_choice(" 2 ").unwrap(), TransportMode::Train);
        assert_eq!(TransportMode::from_menu_choice("3").unwrap(), TransportMode::Bus);
        assert!(matches!(
            TransportMode::from_menu_choice("4"),
            Err(FareError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_service_class_menu_code() {
        assert_eq!(ServiceClass::from_menu_code(2), ServiceClass::Business);
        assert_eq!(ServiceClass::from_menu_code(1), ServiceClass::Economy);
        assert_eq!(ServiceClass::from_menu_code(7), ServiceClass::Economy);
    }

    #[test]
    fn test_json_round_trip() {
        let request =
            TravelRequest::new(250.0, 4, ServiceClass::Business, true, true, false, 1.1).unwrap();

        let json = serde_json::to_string(&request).unwrap();
        let decoded: TravelRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_deserialize_fills_optional_flags() {
        let request: TravelRequest = toml::from_str(
            "distance = 80.0\npassengers = 2\nservice_class = \"business\"\nregional_coefficient = 1.0\n",
        )
        .unwrap();

        assert_eq!(request.service_class(), ServiceClass::Business);
        assert!(!request.has_baggage());
        assert!(!request.is_child());
        assert!(!request.is_senior());
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let bad_distance = serde_json::from_str::<TravelRequest>(
            r#"{"distance": -1.0, "passengers": 2, "regional_coefficient": 1.0}"#,
        );
        assert!(bad_distance.is_err());

        let zero_distance = serde_json::from_str::<TravelRequest>(
            r#"{"distance": 0.0, "passengers": 2, "regional_coefficient": 1.0}"#,
        );
        assert!(zero_distance.is_err());

        let no_passengers = serde_json::from_str::<TravelRequest>(
            r#"{"distance": 10.0, "passengers": 0, "regional_coefficient": 1.0}"#,
        );
        let err = no_passengers.unwrap_err().to_string();
        assert!(err.contains("passengers"), "unexpected error: {}", err);

        let negative = serde_json::from_str::<TravelRequest>(
            r#"{"distance": 10.0, "passengers": -3, "regional_coefficient": 1.0}"#,
        );
        assert!(negative.is_err());
    }
}
