//! Report command - full Old vs New regime computation and comparison

use crate::cmd::read_inputs;
use crate::core::{compute_tax_comparison, Comparison, RegimeResult, TaxInputs};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Financial year the slab tables are encoded for
const FINANCIAL_YEAR: &str = "2024-25";

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// JSON file containing the tax inputs (or "-" for stdin)
    #[arg(short, long)]
    inputs: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Write the per-property breakdown as CSV
    #[arg(long)]
    csv: bool,
}

/// Row for the house-property breakdown (table and CSV output)
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PropertyRow {
    #[tabled(rename = "Property")]
    pub property: String,

    #[tabled(rename = "Type")]
    pub kind: String,

    #[tabled(rename = "NAV (₹)")]
    pub nav: String,

    #[tabled(rename = "30% Deduction (₹)")]
    pub standard_deduction: String,

    #[tabled(rename = "Loan Interest (₹)")]
    pub loan_interest: String,

    #[tabled(rename = "Income (₹)")]
    pub income: String,
}

/// Regime figures for JSON output
#[derive(Debug, Serialize)]
struct RegimeData {
    gross_income: String,
    taxable_income: String,
    slab_tax: String,
    special_rate_tax: String,
    rebate: String,
    cess: String,
    total_tax: String,
}

impl From<&RegimeResult> for RegimeData {
    fn from(result: &RegimeResult) -> Self {
        RegimeData {
            gross_income: format!("{:.2}", result.gross_income),
            taxable_income: format!("{:.2}", result.taxable_income),
            slab_tax: format!("{:.2}", result.slab_tax),
            special_rate_tax: format!("{:.2}", result.special_rate_tax),
            rebate: format!("{:.2}", result.rebate),
            cess: format!("{:.2}", result.cess),
            total_tax: format!("{:.2}", result.total_tax),
        }
    }
}

/// Report data for JSON output
#[derive(Debug, Serialize)]
struct ReportData {
    financial_year: String,
    residential_status: String,
    age_bracket: String,
    gross_salary: String,
    hra_exemption: String,
    properties: Vec<PropertyRow>,
    total_house_income: String,
    net_business_income: String,
    old_regime: RegimeData,
    new_regime: RegimeData,
    winner: String,
    savings: String,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = read_inputs(&self.inputs)?;
        let comparison = compute_tax_comparison(&inputs)?;

        if self.csv {
            self.write_csv(&build_property_rows(&inputs))
        } else if self.json {
            self.print_json(&inputs, &comparison)
        } else {
            self.print_report(&inputs, &comparison);
            Ok(())
        }
    }

    fn print_report(&self, inputs: &TaxInputs, comparison: &Comparison) {
        println!();
        println!(
            "TAX REPORT FY {} ({}, age {})",
            FINANCIAL_YEAR, inputs.residential_status, inputs.age_bracket
        );
        println!();

        println!("SALARY");
        println!(
            "  Gross Salary: {} | HRA Exemption: {}",
            format_inr(inputs.salary.gross_salary()),
            format_inr(inputs.salary.hra_exemption())
        );
        println!();

        println!("HOUSE PROPERTY");
        print_table(&build_property_rows(inputs));
        println!(
            "  Total House Property Income: {}",
            format_inr_signed(crate::core::total_house_income(&inputs.properties))
        );
        println!();

        println!("BUSINESS");
        println!(
            "  Net Business Income: {}",
            format_inr(inputs.business.net_income())
        );
        println!();

        println!("TAX COMPUTATION (incl. 4% cess)");
        print_table(&build_comparison_rows(comparison));
        println!();

        println!(
            "{} Regime is better. You save {}",
            comparison.winner,
            format_inr(comparison.savings)
        );
        println!();
    }

    fn print_json(&self, inputs: &TaxInputs, comparison: &Comparison) -> anyhow::Result<()> {
        let data = ReportData {
            financial_year: FINANCIAL_YEAR.to_string(),
            residential_status: inputs.residential_status.to_string(),
            age_bracket: inputs.age_bracket.to_string(),
            gross_salary: format!("{:.2}", inputs.salary.gross_salary()),
            hra_exemption: format!("{:.2}", inputs.salary.hra_exemption()),
            properties: build_property_rows(inputs),
            total_house_income: format!(
                "{:.2}",
                crate::core::total_house_income(&inputs.properties)
            ),
            net_business_income: format!("{:.2}", inputs.business.net_income()),
            old_regime: RegimeData::from(&comparison.old),
            new_regime: RegimeData::from(&comparison.new),
            winner: comparison.winner.to_string(),
            savings: format!("{:.2}", comparison.savings),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn write_csv(&self, rows: &[PropertyRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the regime comparison table
#[derive(Debug, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "")]
    measure: String,

    #[tabled(rename = "Old Regime (₹)")]
    old: String,

    #[tabled(rename = "New Regime (₹)")]
    new: String,
}

fn print_table<T: Tabled>(rows: &[T]) {
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn build_comparison_rows(comparison: &Comparison) -> Vec<ComparisonRow> {
    let row = |measure: &str, pick: fn(&RegimeResult) -> Decimal| ComparisonRow {
        measure: measure.to_string(),
        old: format!("{:.2}", pick(&comparison.old)),
        new: format!("{:.2}", pick(&comparison.new)),
    };
    vec![
        row("Gross Income", |r| r.gross_income),
        row("Taxable Income", |r| r.taxable_income),
        row("Slab Tax", |r| r.slab_tax),
        row("Special-Rate Tax", |r| r.special_rate_tax),
        row("Rebate (87A)", |r| r.rebate),
        row("Cess (4%)", |r| r.cess),
        row("Total Tax", |r| r.total_tax),
    ]
}

fn build_property_rows(inputs: &TaxInputs) -> Vec<PropertyRow> {
    inputs
        .properties
        .iter()
        .enumerate()
        .map(|(i, property)| {
            let result = property.house_income();
            PropertyRow {
                property: format!("Property {}", i + 1),
                kind: result.kind.display().to_string(),
                nav: format!("{:.2}", result.nav),
                standard_deduction: format!("{:.2}", result.standard_deduction),
                loan_interest: format!("{:.2}", result.loan_interest),
                income: format!("{:.2}", result.income),
            }
        })
        .collect()
}

fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

fn format_inr_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-₹{:.2}", amount.abs())
    } else {
        format!("₹{:.2}", amount)
    }
}
