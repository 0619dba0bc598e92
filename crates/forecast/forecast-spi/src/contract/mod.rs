//! Contract module containing trait definitions for the forecast stages

mod anomaly_detector;
mod localizer;
mod noise_estimator;
mod trend_estimator;

pub use anomaly_detector::AnomalyDetector;
pub use localizer::Localizer;
pub use noise_estimator::NoiseEstimator;
pub use trend_estimator::TrendEstimator;
