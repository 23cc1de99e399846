/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Emission factor for household electricity (kg CO₂ per kWh)
    pub const ELECTRICITY_FACTOR: f64 = 0.5;

    /// Monthly reference goal (kg CO₂); estimates above it show a warning
    pub const REFERENCE_GOAL_KG: f64 = 400.0;

    /// Decimal places shown for the estimate
    pub const DISPLAY_DECIMALS: usize = 2;

    /// Log estimator events to the browser console
    pub const ENABLE_DEBUG_LOGGING: bool = true;
}
