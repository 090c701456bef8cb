use crate::core::india::Regime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Annual salary components. All amounts are non-negative whole-rupee figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SalaryInputs {
    /// Basic salary
    #[serde(default)]
    #[schemars(with = "f64")]
    pub basic: Decimal,
    /// Dearness allowance
    #[serde(default)]
    #[schemars(with = "f64")]
    pub da: Decimal,
    /// House rent allowance received
    #[serde(default)]
    #[schemars(with = "f64")]
    pub hra: Decimal,
    /// Actual rent paid over the year
    #[serde(default)]
    #[schemars(with = "f64")]
    pub rent_paid: Decimal,
    /// Metro-city residence (raises the HRA exemption rate from 40% to 50%)
    #[serde(default)]
    pub metro: bool,
    /// Other allowances
    #[serde(default)]
    #[schemars(with = "f64")]
    pub allowances: Decimal,
    /// Perquisites
    #[serde(default)]
    #[schemars(with = "f64")]
    pub perquisites: Decimal,
    /// Bonus
    #[serde(default)]
    #[schemars(with = "f64")]
    pub bonus: Decimal,
}

impl SalaryInputs {
    /// HRA exemption under section 10(13A): least of HRA received,
    /// 50%/40% of basic+DA (metro/non-metro), and rent paid less 10% of
    /// basic+DA. Zero unless both HRA and rent are positive. The rent-based
    /// term is clamped at zero so low rent can never drive the minimum
    /// negative.
    pub fn hra_exemption(&self) -> Decimal {
        if self.hra <= Decimal::ZERO || self.rent_paid <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let base = self.basic + self.da;
        let rate = if self.metro { dec!(0.5) } else { dec!(0.4) };
        let rent_over_tenth = (self.rent_paid - dec!(0.1) * base).max(Decimal::ZERO);
        self.hra.min(rate * base).min(rent_over_tenth)
    }

    /// Gross salary before exemptions and deductions
    pub fn gross_salary(&self) -> Decimal {
        self.basic + self.da + self.hra + self.allowances + self.perquisites + self.bonus
    }

    /// Salary income after the HRA exemption and the regime's standard
    /// deduction, floored at zero.
    pub fn taxable_salary(&self, regime: Regime) -> Decimal {
        (self.gross_salary() - self.hra_exemption() - regime.standard_deduction())
            .max(Decimal::ZERO)
    }
}
