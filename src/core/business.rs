use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Business or professional income figures
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BusinessInputs {
    /// Gross receipts / turnover
    #[serde(default)]
    #[schemars(with = "f64")]
    pub turnover: Decimal,
    #[serde(default)]
    #[schemars(with = "f64")]
    pub expenses: Decimal,
    #[serde(default)]
    #[schemars(with = "f64")]
    pub depreciation: Decimal,
}

impl BusinessInputs {
    /// Net business income, floored at zero. Losses are not carried forward.
    pub fn net_income(&self) -> Decimal {
        (self.turnover - self.expenses - self.depreciation).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn net_income_basic() {
        let b = BusinessInputs {
            turnover: dec!(1000000),
            expenses: dec!(600000),
            depreciation: dec!(100000),
        };
        assert_eq!(b.net_income(), dec!(300000));
    }

    #[test]
    fn net_income_floored_at_zero() {
        let b = BusinessInputs {
            turnover: dec!(100000),
            expenses: dec!(150000),
            depreciation: dec!(20000),
        };
        assert_eq!(b.net_income(), dec!(0));
    }
}
