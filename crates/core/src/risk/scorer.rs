//! The scoring transform: linear normalization, volatility-index inversion
//! and the weighted composite.

use chrono::Utc;
use tracing::debug;

use riskpulse_market_data::models::{latest_return, MarketSnapshot};
use riskpulse_market_data::universe;

use super::model::{Indicator, RiskAssessment, ScoreSample};

/// Map a percent return onto a 0-100 risk score.
///
/// Linear, centered at 50: each percentage point of return shifts the score
/// by 10 points, saturating at the boundaries (so +-5% pins the score).
pub fn normalize_to_risk_score(percent_change: f64) -> f64 {
    (50.0 + percent_change * 10.0).clamp(0.0, 100.0)
}

/// Score a snapshot into a [`RiskAssessment`].
///
/// An empty snapshot yields the neutral default: score 50, no indicators,
/// empty histories.
pub fn score_snapshot(snapshot: &MarketSnapshot) -> RiskAssessment {
    if snapshot.is_empty() {
        return RiskAssessment::neutral();
    }

    let mut indicators = Vec::with_capacity(snapshot.len());
    for (symbol, returns) in snapshot {
        let return_pct = latest_return(returns);
        let raw = normalize_to_risk_score(return_pct);

        // A rising volatility index is risk-off, so its score flips.
        let value = if universe::is_inverted(symbol) {
            100.0 - raw
        } else {
            raw
        };
        let weight = universe::weight_for(symbol);

        debug!(%symbol, return_pct, value, weight, "scored indicator");
        indicators.push(Indicator {
            symbol: symbol.clone(),
            return_pct,
            value,
            weight,
        });
    }

    let total_weight: f64 = indicators.iter().map(|i| i.weight).sum();
    let risk_score =
        indicators.iter().map(|i| i.value * i.weight).sum::<f64>() / total_weight;
    debug!(risk_score, "composite risk score");

    RiskAssessment {
        risk_score,
        indicators,
        history: Vec::new(),
        hourly_history: vec![ScoreSample {
            timestamp: Utc::now(),
            score: risk_score,
        }],
    }
}
