pub mod use_estimator;
