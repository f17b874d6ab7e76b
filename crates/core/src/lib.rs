//! RiskPulse core crate.
//!
//! Derives a 0-100 "risk-on / risk-off" assessment from a market snapshot:
//! each symbol's day-over-day return is mapped onto a risk score, the
//! volatility index is inverted, and the composite is a weight-averaged
//! mean over the universe weights.

pub mod risk;

pub use risk::{
    normalize_to_risk_score, score_snapshot, Indicator, RiskAssessment, ScoreSample, NEUTRAL_SCORE,
};
