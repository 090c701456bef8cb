use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Capital gains split by taxing section. `stcg_other` is taxed at slab
/// rates and folds into gross income; the other three are taxed at flat
/// rates outside the slab system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CapitalGainsInputs {
    /// Short-term gains on equity (section 111A, flat 15%)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub stcg_111a: Decimal,
    /// Other short-term gains, taxed at slab rates
    #[serde(default)]
    #[schemars(with = "f64")]
    pub stcg_other: Decimal,
    /// Long-term gains on equity (section 112A, 10% above ₹1,00,000)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ltcg_112a: Decimal,
    /// Other long-term gains (section 112, flat 20%)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ltcg_other: Decimal,
}

impl CapitalGainsInputs {
    /// Equity LTCG above the ₹1,00,000 annual exemption
    pub fn taxable_equity_ltcg(&self) -> Decimal {
        (self.ltcg_112a - dec!(100000)).max(Decimal::ZERO)
    }

    /// Flat-rate tax on the special-rate gains: 15% on 111A short-term
    /// gains, 10% on taxable 112A long-term gains, 20% on 112 long-term
    /// gains. Identical for both regimes and applied before the rebate.
    pub fn special_rate_tax(&self) -> Decimal {
        dec!(0.15) * self.stcg_111a
            + dec!(0.10) * self.taxable_equity_ltcg()
            + dec!(0.20) * self.ltcg_other
    }
}
