//! Risk scoring: per-symbol indicators and the composite assessment.

mod model;
mod scorer;

pub use model::{Indicator, RiskAssessment, ScoreSample, NEUTRAL_SCORE};
pub use scorer::{normalize_to_risk_score, score_snapshot};
