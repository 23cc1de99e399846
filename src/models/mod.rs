pub mod error;
pub mod estimate;
pub mod form;
pub mod fuel;
