use crate::core::business::BusinessInputs;
use crate::core::deductions::{DeductionCaps, DeductionInputs};
use crate::core::gains::CapitalGainsInputs;
use crate::core::india::AgeBracket;
use crate::core::property::PropertyRecord;
use crate::core::salary::SalaryInputs;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("negative amount for {field}: {value}")]
    NegativeAmount { field: String, value: Decimal },
    #[error("number of properties must be between 1 and 3, got {count}")]
    PropertyCount { count: usize },
}

/// Residential status for the year. Collected and reported but currently
/// inert: the computation taxes all entered income the same way regardless
/// of status, as the source logic does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ResidentialStatus {
    #[default]
    Resident,
    /// Resident but not ordinarily resident
    #[serde(rename = "RNOR")]
    Rnor,
    NonResident,
}

impl std::fmt::Display for ResidentialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResidentialStatus::Resident => write!(f, "Resident"),
            ResidentialStatus::Rnor => write!(f, "RNOR"),
            ResidentialStatus::NonResident => write!(f, "Non-Resident"),
        }
    }
}

/// Complete input snapshot for one computation run. Built once by the
/// caller, never mutated; every figure the engine reads comes from here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaxInputs {
    #[serde(default)]
    pub residential_status: ResidentialStatus,
    #[serde(default)]
    pub age_bracket: AgeBracket,
    #[serde(default)]
    pub salary: SalaryInputs,
    /// House properties, 1 to 3 entries
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub business: BusinessInputs,
    #[serde(default)]
    pub capital_gains: CapitalGainsInputs,
    #[serde(default)]
    pub deductions: DeductionInputs,
    /// Interest, dividends, gifts and other residual income
    #[serde(default)]
    #[schemars(with = "f64")]
    pub other_income: Decimal,
    #[serde(default)]
    pub deduction_caps: DeductionCaps,
}

impl TaxInputs {
    /// Collect every validation issue in the snapshot.
    pub fn validation_issues(&self) -> Vec<InputError> {
        let mut issues = Vec::new();

        let count = self.properties.len();
        if !(1..=3).contains(&count) {
            issues.push(InputError::PropertyCount { count });
        }

        check(&mut issues, "salary.basic", self.salary.basic);
        check(&mut issues, "salary.da", self.salary.da);
        check(&mut issues, "salary.hra", self.salary.hra);
        check(&mut issues, "salary.rent_paid", self.salary.rent_paid);
        check(&mut issues, "salary.allowances", self.salary.allowances);
        check(&mut issues, "salary.perquisites", self.salary.perquisites);
        check(&mut issues, "salary.bonus", self.salary.bonus);

        for (i, property) in self.properties.iter().enumerate() {
            check(
                &mut issues,
                &format!("properties[{i}].monthly_rent"),
                property.monthly_rent,
            );
            check(
                &mut issues,
                &format!("properties[{i}].municipal_taxes"),
                property.municipal_taxes,
            );
            check(
                &mut issues,
                &format!("properties[{i}].loan_interest"),
                property.loan_interest,
            );
        }

        check(&mut issues, "business.turnover", self.business.turnover);
        check(&mut issues, "business.expenses", self.business.expenses);
        check(
            &mut issues,
            "business.depreciation",
            self.business.depreciation,
        );

        check(
            &mut issues,
            "capital_gains.stcg_111a",
            self.capital_gains.stcg_111a,
        );
        check(
            &mut issues,
            "capital_gains.stcg_other",
            self.capital_gains.stcg_other,
        );
        check(
            &mut issues,
            "capital_gains.ltcg_112a",
            self.capital_gains.ltcg_112a,
        );
        check(
            &mut issues,
            "capital_gains.ltcg_other",
            self.capital_gains.ltcg_other,
        );

        check(&mut issues, "deductions.ded_80c", self.deductions.ded_80c);
        check(&mut issues, "deductions.ded_80d", self.deductions.ded_80d);
        check(
            &mut issues,
            "deductions.ded_80tta",
            self.deductions.ded_80tta,
        );

        check(&mut issues, "other_income", self.other_income);

        issues
    }

    /// Fail fast on the first validation issue.
    pub fn validate(&self) -> Result<(), InputError> {
        match self.validation_issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

fn check(issues: &mut Vec<InputError>, field: &str, value: Decimal) {
    if value < Decimal::ZERO {
        issues.push(InputError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
}
