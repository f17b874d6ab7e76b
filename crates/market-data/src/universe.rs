//! The fixed symbol universe and its per-symbol configuration.
//!
//! Each symbol carries its upstream query alias, its weight in the composite
//! score and whether its score is inverted, so the universe can grow without
//! touching fetch or scoring logic.

/// Weight applied to any symbol absent from the universe table.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Configuration record for one tradable instrument.
#[derive(Clone, Copy, Debug)]
pub struct SymbolSpec {
    /// The symbol the snapshot is keyed by (e.g. "VIX").
    pub symbol: &'static str,
    /// Upstream query alias, when it differs from the symbol (e.g. "^VIX").
    pub query_alias: Option<&'static str>,
    /// Weight in the composite risk score.
    pub weight: f64,
    /// Whether the risk score is inverted (rising value = risk-off).
    pub invert: bool,
}

impl SymbolSpec {
    /// The symbol to send upstream: the alias if one exists, else the
    /// plain symbol.
    pub fn query_symbol(&self) -> &'static str {
        self.query_alias.unwrap_or(self.symbol)
    }
}

/// The fixed 8-symbol universe.
pub static UNIVERSE: &[SymbolSpec] = &[
    // S&P 500 ETF - major market indicator
    SymbolSpec { symbol: "SPY", query_alias: None, weight: 1.0, invert: false },
    // NASDAQ ETF - tech sector
    SymbolSpec { symbol: "QQQ", query_alias: None, weight: 0.8, invert: false },
    // Gold ETF - safe haven
    SymbolSpec { symbol: "GLD", query_alias: None, weight: 0.6, invert: false },
    // 20+ Year Treasury Bond ETF - safe haven
    SymbolSpec { symbol: "TLT", query_alias: None, weight: 0.6, invert: false },
    // Volatility index - fear gauge, rises when markets are risk-off
    SymbolSpec { symbol: "VIX", query_alias: Some("^VIX"), weight: 1.2, invert: true },
    // Bitcoin - high volatility asset
    SymbolSpec { symbol: "BTC-USD", query_alias: None, weight: 0.4, invert: false },
    // Copper futures - economic indicator
    SymbolSpec { symbol: "HG=F", query_alias: None, weight: 0.7, invert: false },
    // AUD/JPY - risk currency pair
    SymbolSpec { symbol: "AUDJPY=X", query_alias: None, weight: 0.8, invert: false },
];

/// Look up the configuration record for a symbol.
pub fn spec_for(symbol: &str) -> Option<&'static SymbolSpec> {
    UNIVERSE.iter().find(|spec| spec.symbol == symbol)
}

/// The composite-score weight for a symbol, defaulting to
/// [`DEFAULT_WEIGHT`] for symbols outside the table.
pub fn weight_for(symbol: &str) -> f64 {
    spec_for(symbol).map(|spec| spec.weight).unwrap_or(DEFAULT_WEIGHT)
}

/// Whether a symbol's risk score is inverted.
pub fn is_inverted(symbol: &str) -> bool {
    spec_for(symbol).map(|spec| spec.invert).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_has_eight_symbols() {
        assert_eq!(UNIVERSE.len(), 8);
    }

    #[test]
    fn vix_is_the_only_aliased_symbol() {
        for spec in UNIVERSE {
            if spec.symbol == "VIX" {
                assert_eq!(spec.query_symbol(), "^VIX");
            } else {
                assert_eq!(spec.query_symbol(), spec.symbol);
            }
        }
    }

    #[test]
    fn vix_is_the_only_inverted_symbol() {
        for spec in UNIVERSE {
            assert_eq!(spec.invert, spec.symbol == "VIX");
        }
    }

    #[test]
    fn table_weights() {
        assert_eq!(weight_for("SPY"), 1.0);
        assert_eq!(weight_for("QQQ"), 0.8);
        assert_eq!(weight_for("GLD"), 0.6);
        assert_eq!(weight_for("TLT"), 0.6);
        assert_eq!(weight_for("VIX"), 1.2);
        assert_eq!(weight_for("BTC-USD"), 0.4);
        assert_eq!(weight_for("HG=F"), 0.7);
        assert_eq!(weight_for("AUDJPY=X"), 0.8);
    }

    #[test]
    fn unknown_symbols_get_the_default_weight() {
        assert_eq!(weight_for("IWM"), DEFAULT_WEIGHT);
        assert!(!is_inverted("IWM"));
    }
}
