//! Rendering of structured results into user-facing text.

use crate::model::{Advice, AnomalyKind};

/// Renders descriptions for one language.
pub trait Localizer: Send + Sync {
    /// Description attached to an anomaly of the given kind
    fn anomaly_description(&self, kind: AnomalyKind) -> String;

    /// Title and description of a recommendation card
    fn advice(&self, advice: &Advice) -> (String, String);
}
