pub mod business;
pub mod deductions;
pub mod gains;
pub mod india;
pub mod inputs;
pub mod property;
pub mod regime;
pub mod salary;

// Flat public surface for domain types and functions.
pub use business::BusinessInputs;
pub use deductions::{DeductionCaps, DeductionInputs};
pub use gains::CapitalGainsInputs;
pub use india::{
    health_education_cess, new_regime_schedule, old_regime_schedule, slab_tax, AgeBracket, Regime,
    Slab,
};
pub use inputs::{InputError, ResidentialStatus, TaxInputs};
pub use property::{total_house_income, HouseIncomeResult, PropertyKind, PropertyRecord};
pub use regime::{compute_regime, compute_tax_comparison, Comparison, RegimeResult};
pub use salary::SalaryInputs;
