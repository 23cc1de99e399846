pub mod amount_input;
pub mod estimate_display;
pub mod fuel_selector;

pub use amount_input::AmountInput;
pub use estimate_display::EstimateDisplay;
pub use fuel_selector::FuelSelector;
