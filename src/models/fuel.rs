use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Fuel burned by the household car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Ethanol,
    #[default]
    Gasoline,
    Diesel,
}

impl FuelType {
    /// Returns the stable identifier used in DOM values and serialized output
    pub fn key(&self) -> &'static str {
        match self {
            FuelType::Ethanol => "ethanol",
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
        }
    }

    /// Returns the button label
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Ethanol => "ETHANOL",
            FuelType::Gasoline => "GASOLINE",
            FuelType::Diesel => "DIESEL",
        }
    }

    /// All fuel types, in display order.
    pub fn all() -> &'static [FuelType] {
        &[FuelType::Ethanol, FuelType::Gasoline, FuelType::Diesel]
    }

    /// kg CO₂ emitted per kilometer driven on this fuel
    pub fn emission_factor(&self) -> f64 {
        EmissionFactors::STANDARD.factor(*self)
    }

    /// Parses a fuel key, falling back to gasoline for anything unrecognised.
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FuelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ethanol" => Ok(FuelType::Ethanol),
            "gasoline" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            _ => Err(AppError::UnknownFuelType(s.to_string())),
        }
    }
}

/// Per-kilometer emission factors (kg CO₂/km) for each fuel type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactors {
    pub ethanol: f64,
    pub gasoline: f64,
    pub diesel: f64,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        ethanol: 0.18,
        gasoline: 0.21,
        diesel: 0.25,
    };

    pub fn factor(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Ethanol => self.ethanol,
            FuelType::Gasoline => self.gasoline,
            FuelType::Diesel => self.diesel,
        }
    }

    /// Looks up a factor by fuel key. Unknown keys get the gasoline factor.
    pub fn factor_for_key(&self, key: &str) -> f64 {
        match key.parse::<FuelType>() {
            Ok(fuel) => self.factor(fuel),
            Err(_) => self.gasoline,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}
