#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Unknown fuel type: {0}")]
    UnknownFuelType(String),
}
