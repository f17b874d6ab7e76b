use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite score of a snapshot with no usable signal.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Per-symbol scoring detail, one per snapshot entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// The symbol this indicator was derived from.
    pub symbol: String,

    /// Day-over-day percent return.
    #[serde(rename = "return")]
    pub return_pct: f64,

    /// Risk score contribution, in [0, 100]; already inverted for
    /// volatility-index symbols.
    pub value: f64,

    /// Weight in the composite score.
    pub weight: f64,
}

/// One timestamped composite-score sample.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSample {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
}

/// The display-facing risk assessment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Weighted composite score, in [0, 100]. Higher means risk-on.
    pub risk_score: f64,

    /// Per-symbol detail, in the snapshot's iteration order.
    pub indicators: Vec<Indicator>,

    /// Reserved for historical scores; always empty.
    pub history: Vec<ScoreSample>,

    /// Exactly one sample per computation, timestamped at scoring time.
    pub hourly_history: Vec<ScoreSample>,
}

impl RiskAssessment {
    /// The neutral default returned for an empty snapshot.
    pub fn neutral() -> Self {
        Self {
            risk_score: NEUTRAL_SCORE,
            indicators: Vec::new(),
            history: Vec::new(),
            hourly_history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_assessment_shape() {
        let assessment = RiskAssessment::neutral();
        assert_eq!(assessment.risk_score, 50.0);
        assert!(assessment.indicators.is_empty());
        assert!(assessment.history.is_empty());
        assert!(assessment.hourly_history.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let assessment = RiskAssessment {
            risk_score: 70.0,
            indicators: vec![Indicator {
                symbol: "SPY".to_string(),
                return_pct: 2.0,
                value: 70.0,
                weight: 1.0,
            }],
            history: Vec::new(),
            hourly_history: vec![ScoreSample {
                timestamp: Utc::now(),
                score: 70.0,
            }],
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["riskScore"], 70.0);
        assert_eq!(json["indicators"][0]["return"], 2.0);
        assert_eq!(json["indicators"][0]["symbol"], "SPY");
        assert_eq!(json["hourlyHistory"][0]["score"], 70.0);
        assert!(json["history"].as_array().unwrap().is_empty());
    }
}
