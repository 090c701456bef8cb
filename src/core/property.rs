use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Occupancy type of a house property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum PropertyKind {
    #[default]
    SelfOccupied,
    LetOut,
}

impl PropertyKind {
    pub fn display(&self) -> &'static str {
        match self {
            PropertyKind::SelfOccupied => "Self-occupied",
            PropertyKind::LetOut => "Let-out",
        }
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One house property. Rent is monthly; municipal taxes and loan interest
/// are annual figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PropertyRecord {
    #[serde(default)]
    pub kind: PropertyKind,
    /// Monthly rent received (let-out only; ignored for self-occupied)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub monthly_rent: Decimal,
    /// Municipal taxes paid over the year
    #[serde(default)]
    #[schemars(with = "f64")]
    pub municipal_taxes: Decimal,
    /// Home loan interest paid over the year
    #[serde(default)]
    #[schemars(with = "f64")]
    pub loan_interest: Decimal,
}

/// Computed income breakdown for one property
#[derive(Debug, Clone)]
pub struct HouseIncomeResult {
    pub kind: PropertyKind,
    /// Net annual value: annual rent less municipal taxes (zero when
    /// self-occupied)
    pub nav: Decimal,
    /// Statutory 30%-of-NAV deduction
    pub standard_deduction: Decimal,
    pub loan_interest: Decimal,
    /// Net income from this property; negative values are losses
    pub income: Decimal,
}

impl PropertyRecord {
    /// Compute this property's income under section 24.
    ///
    /// Self-occupied: NAV is nil and the loan-interest loss is capped at
    /// ₹2,00,000. Let-out: NAV less the 30% standard deduction less the full
    /// loan interest, with no cap on the loss.
    pub fn house_income(&self) -> HouseIncomeResult {
        match self.kind {
            PropertyKind::SelfOccupied => HouseIncomeResult {
                kind: self.kind,
                nav: Decimal::ZERO,
                standard_deduction: Decimal::ZERO,
                loan_interest: self.loan_interest,
                income: -self.loan_interest.min(dec!(200000)),
            },
            PropertyKind::LetOut => {
                let nav = self.monthly_rent * dec!(12) - self.municipal_taxes;
                let standard_deduction = dec!(0.3) * nav;
                HouseIncomeResult {
                    kind: self.kind,
                    nav,
                    standard_deduction,
                    loan_interest: self.loan_interest,
                    income: nav - standard_deduction - self.loan_interest,
                }
            }
        }
    }
}

/// Sum of per-property incomes; may be negative when losses dominate.
pub fn total_house_income(properties: &[PropertyRecord]) -> Decimal {
    properties.iter().map(|p| p.house_income().income).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_occupied_loss_capped() {
        let p = PropertyRecord {
            kind: PropertyKind::SelfOccupied,
            loan_interest: dec!(250000),
            ..Default::default()
        };
        let result = p.house_income();
        assert_eq!(result.nav, dec!(0));
        assert_eq!(result.standard_deduction, dec!(0));
        assert_eq!(result.income, dec!(-200000));
    }

    #[test]
    fn self_occupied_small_loan_uncapped() {
        let p = PropertyRecord {
            kind: PropertyKind::SelfOccupied,
            loan_interest: dec!(80000),
            ..Default::default()
        };
        assert_eq!(p.house_income().income, dec!(-80000));
    }

    #[test]
    fn self_occupied_income_stays_in_loss_band() {
        for loan in [dec!(0), dec!(100000), dec!(200000), dec!(1000000)] {
            let p = PropertyRecord {
                kind: PropertyKind::SelfOccupied,
                loan_interest: loan,
                ..Default::default()
            };
            let income = p.house_income().income;
            assert!(income <= dec!(0) && income >= dec!(-200000));
        }
    }

    #[test]
    fn let_out_breakdown() {
        // rent 20,000/month, municipal 10,000, loan 50,000
        let p = PropertyRecord {
            kind: PropertyKind::LetOut,
            monthly_rent: dec!(20000),
            municipal_taxes: dec!(10000),
            loan_interest: dec!(50000),
        };
        let result = p.house_income();
        assert_eq!(result.nav, dec!(230000));
        assert_eq!(result.standard_deduction, dec!(69000.0));
        assert_eq!(result.income, dec!(111000.0));
    }

    #[test]
    fn let_out_loss_not_capped() {
        let p = PropertyRecord {
            kind: PropertyKind::LetOut,
            monthly_rent: dec!(5000),
            municipal_taxes: dec!(10000),
            loan_interest: dec!(400000),
        };
        // NAV 50,000, deduction 15,000, income 35,000 - 400,000
        assert_eq!(p.house_income().income, dec!(-365000.0));
    }

    #[test]
    fn total_house_income_sums_properties() {
        let properties = vec![
            PropertyRecord {
                kind: PropertyKind::SelfOccupied,
                loan_interest: dec!(250000),
                ..Default::default()
            },
            PropertyRecord {
                kind: PropertyKind::LetOut,
                monthly_rent: dec!(20000),
                municipal_taxes: dec!(10000),
                loan_interest: dec!(50000),
            },
        ];
        assert_eq!(total_house_income(&properties), dec!(-89000.0));
    }
}
