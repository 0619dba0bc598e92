//! Model module containing data structures

mod anomaly;
mod document;
mod forecast_point;
mod ledger;
mod observation;
mod recommendation;
mod request;
mod scenario;
mod stats;
mod trend;

pub use anomaly::{Anomaly, AnomalyKind, AnomalyRecord, AnomalySeverity};
pub use document::{ForecastDocument, ScenarioDocument};
pub use forecast_point::ForecastPoint;
pub use ledger::{Direction, LedgerRecord};
pub use observation::{History, Observation};
pub use recommendation::{Advice, AdviceSeverity, Recommendation};
pub use request::ForecastRequest;
pub use scenario::{ScenarioPoint, ScenarioReport, ScenarioSummary};
pub use stats::Stats;
pub use trend::Trend;
