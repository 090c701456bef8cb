use crate::core::india::{health_education_cess, slab_tax, Regime};
use crate::core::inputs::{InputError, TaxInputs};
use crate::core::property::total_house_income;
use rust_decimal::Decimal;

/// Computed liability under one regime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeResult {
    pub regime: Regime,
    /// Aggregate income across heads before itemized deductions
    pub gross_income: Decimal,
    /// Income the slab schedule is applied to, floored at zero
    pub taxable_income: Decimal,
    pub slab_tax: Decimal,
    pub special_rate_tax: Decimal,
    /// Section 87A rebate actually applied (never more than the tax due)
    pub rebate: Decimal,
    pub cess: Decimal,
    /// Final payable tax including cess
    pub total_tax: Decimal,
}

/// Outcome of running both regimes over the same inputs
#[derive(Debug, Clone)]
pub struct Comparison {
    pub old: RegimeResult,
    pub new: RegimeResult,
    pub winner: Regime,
    pub savings: Decimal,
}

/// Run the full pipeline for one regime: aggregate income, apply itemized
/// deductions (Old regime only), slab tax plus special-rate gains tax, the
/// section 87A rebate, then the 4% cess. The rebate must come before the
/// cess.
pub fn compute_regime(inputs: &TaxInputs, regime: Regime) -> RegimeResult {
    let taxable_salary = inputs.salary.taxable_salary(regime);
    let house_income = total_house_income(&inputs.properties);
    let business_income = inputs.business.net_income();
    let gross_income = taxable_salary
        + house_income
        + business_income
        + inputs.capital_gains.stcg_other
        + inputs.other_income;

    // Itemized deductions apply in the Old regime only
    let deductions = match regime {
        Regime::Old => inputs.deductions.total(&inputs.deduction_caps),
        Regime::New => Decimal::ZERO,
    };
    let taxable_income = (gross_income - deductions).max(Decimal::ZERO);

    let slab = slab_tax(&regime.schedule(inputs.age_bracket), taxable_income);
    let special = inputs.capital_gains.special_rate_tax();
    let before_rebate = slab + special;

    let rebate = if taxable_income <= regime.rebate_threshold() {
        regime.rebate_amount().min(before_rebate)
    } else {
        Decimal::ZERO
    };
    let after_rebate = before_rebate - rebate;
    let cess = health_education_cess(after_rebate);

    log::debug!(
        "{} regime: gross={}, taxable={}, slab={}, special={}, rebate={}, cess={}",
        regime,
        gross_income,
        taxable_income,
        slab,
        special,
        rebate,
        cess
    );

    RegimeResult {
        regime,
        gross_income,
        taxable_income,
        slab_tax: slab,
        special_rate_tax: special,
        rebate,
        cess,
        total_tax: after_rebate + cess,
    }
}

/// Compute both regimes from one validated input snapshot and pick the
/// cheaper one. Equal totals resolve to the New regime.
pub fn compute_tax_comparison(inputs: &TaxInputs) -> Result<Comparison, InputError> {
    inputs.validate()?;

    let old = compute_regime(inputs, Regime::Old);
    let new = compute_regime(inputs, Regime::New);

    let winner = if old.total_tax < new.total_tax {
        Regime::Old
    } else {
        Regime::New
    };
    let savings = (old.total_tax - new.total_tax).abs();

    Ok(Comparison {
        old,
        new,
        winner,
        savings,
    })
}
