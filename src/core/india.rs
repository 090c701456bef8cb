use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tax regime choice for FY 2024-25
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Regime {
    Old,
    #[default]
    New,
}

impl Regime {
    /// Standard deduction on salary for this regime
    pub fn standard_deduction(&self) -> Decimal {
        match self {
            // Old regime: ₹50,000
            Regime::Old => dec!(50000),
            // New regime: raised to ₹75,000 in FY 2024-25
            Regime::New => dec!(75000),
        }
    }

    /// Taxable income ceiling for the section 87A rebate
    pub fn rebate_threshold(&self) -> Decimal {
        match self {
            Regime::Old => dec!(500000),
            Regime::New => dec!(700000),
        }
    }

    /// Maximum section 87A rebate amount
    pub fn rebate_amount(&self) -> Decimal {
        match self {
            Regime::Old => dec!(12500),
            Regime::New => dec!(25000),
        }
    }

    /// Slab schedule for this regime. Old-regime slabs depend on the
    /// taxpayer's age bracket; the New regime is age-independent.
    pub fn schedule(&self, age: AgeBracket) -> Vec<Slab> {
        match self {
            Regime::Old => old_regime_schedule(age),
            Regime::New => new_regime_schedule(),
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Old => write!(f, "Old"),
            Regime::New => write!(f, "New"),
        }
    }
}

/// Age bracket for Old-regime basic exemption limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum AgeBracket {
    /// Below 60 years
    #[default]
    #[serde(rename = "<60")]
    Under60,
    /// Senior citizen (60 to 80 years)
    #[serde(rename = "60-80")]
    Senior,
    /// Super senior citizen (above 80 years)
    #[serde(rename = ">80")]
    SuperSenior,
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeBracket::Under60 => write!(f, "<60"),
            AgeBracket::Senior => write!(f, "60-80"),
            AgeBracket::SuperSenior => write!(f, ">80"),
        }
    }
}

/// One row of a slab schedule: a bracket width and its marginal rate.
/// `width: None` marks the top bracket, which absorbs all remaining income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    fn bounded(width: Decimal, rate: Decimal) -> Self {
        Slab {
            width: Some(width),
            rate,
        }
    }

    fn unbounded(rate: Decimal) -> Self {
        Slab { width: None, rate }
    }
}

/// Old-regime slab schedule for FY 2024-25. The basic exemption widens with
/// age (₹2.5L / ₹3L / ₹5L); rates above it are common to all brackets.
pub fn old_regime_schedule(age: AgeBracket) -> Vec<Slab> {
    match age {
        AgeBracket::Under60 => vec![
            Slab::bounded(dec!(250000), dec!(0)),
            Slab::bounded(dec!(250000), dec!(0.05)),
            Slab::bounded(dec!(500000), dec!(0.20)),
            Slab::unbounded(dec!(0.30)),
        ],
        AgeBracket::Senior => vec![
            Slab::bounded(dec!(300000), dec!(0)),
            Slab::bounded(dec!(200000), dec!(0.05)),
            Slab::bounded(dec!(500000), dec!(0.20)),
            Slab::unbounded(dec!(0.30)),
        ],
        AgeBracket::SuperSenior => vec![
            Slab::bounded(dec!(500000), dec!(0)),
            Slab::bounded(dec!(500000), dec!(0.20)),
            Slab::unbounded(dec!(0.30)),
        ],
    }
}

/// New-regime slab schedule for FY 2024-25, age-independent.
pub fn new_regime_schedule() -> Vec<Slab> {
    vec![
        Slab::bounded(dec!(300000), dec!(0)),
        Slab::bounded(dec!(400000), dec!(0.05)),
        Slab::bounded(dec!(300000), dec!(0.10)),
        Slab::bounded(dec!(300000), dec!(0.15)),
        Slab::bounded(dec!(300000), dec!(0.20)),
        Slab::unbounded(dec!(0.30)),
    ]
}

/// Walk a slab schedule and accumulate the marginal tax on `income`.
///
/// Each bracket taxes `min(max(income - floor, 0), width)` at its rate, so
/// income ending inside a bracket is handled exactly and the result is
/// continuous and non-decreasing in income.
pub fn slab_tax(schedule: &[Slab], income: Decimal) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut floor = Decimal::ZERO;
    for slab in schedule {
        let above_floor = (income - floor).max(Decimal::ZERO);
        let in_slab = match slab.width {
            Some(width) => above_floor.min(width),
            None => above_floor,
        };
        tax += in_slab * slab.rate;
        log::debug!(
            "Slab from {}: taxable={}, rate={}, tax so far={}",
            floor,
            in_slab,
            slab.rate,
            tax
        );
        match slab.width {
            Some(width) => floor += width,
            None => break,
        }
    }
    tax
}

/// Health & education cess: flat 4% on the post-rebate tax
pub fn health_education_cess(tax: Decimal) -> Decimal {
    tax * dec!(0.04)
}
