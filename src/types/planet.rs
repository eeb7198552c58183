use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Full field set for both planet creation and replacement. Missing fields
/// are rejected by body deserialization before this type is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RPlanetUpsert {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl RPlanetUpsert {
    /// Checks every field except `planet_name` (the name gets its own
    /// duplicate handling at the call sites). "Empty" covers the empty
    /// string and numeric zero, so a legitimate value of 0.0 is
    /// indistinguishable from a missing one.
    pub fn validate_fields(&self) -> Result<(), AppError> {
        non_empty("planet_type", &self.planet_type)?;
        non_empty("home_star", &self.home_star)?;
        non_zero("mass", self.mass)?;
        non_zero("radius", self.radius)?;
        non_zero("distance", self.distance)?;
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is empty", field)));
    }
    Ok(())
}

fn non_zero(field: &str, value: f64) -> Result<(), AppError> {
    if value == 0.0 {
        return Err(AppError::Validation(format!("{} is empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mars() -> RPlanetUpsert {
        RPlanetUpsert {
            planet_name: "Mars".to_string(),
            planet_type: "Class M".to_string(),
            home_star: "Sun".to_string(),
            mass: 6.39e23,
            radius: 3389.0,
            distance: 227.9e6,
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(mars().validate_fields().is_ok());
    }

    #[test]
    fn test_empty_string_field_rejected() {
        let mut planet = mars();
        planet.home_star = "".to_string();
        let err = planet.validate_fields().unwrap_err();
        assert_eq!(err.to_string(), "home_star is empty");
    }

    #[test]
    fn test_zero_numeric_field_rejected() {
        let mut planet = mars();
        planet.mass = 0.0;
        let err = planet.validate_fields().unwrap_err();
        assert_eq!(err.to_string(), "mass is empty");
    }
}
