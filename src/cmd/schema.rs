//! Schema command - print expected input and export formats

use crate::core::TaxInputs;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input format
    JsonSchema,
    /// CSV header row of the property-breakdown export
    CsvHeader,
    /// CSV column descriptions of the property-breakdown export
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(TaxInputs);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("Property Breakdown CSV Export");
        println!("=============================");
        println!();
        for (name, description) in CSV_FIELD_DESCRIPTIONS {
            println!("{:20}  {}", name, description);
        }
        println!();
        println!("All amounts are annual rupee figures; input rent is monthly");
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &[
    "property",
    "kind",
    "nav",
    "standard_deduction",
    "loan_interest",
    "income",
];

const CSV_FIELD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("property", "Property label (Property 1, Property 2, ...)"),
    ("kind", "Self-occupied or Let-out"),
    (
        "nav",
        "Net annual value: annual rent less municipal taxes (zero when self-occupied)",
    ),
    ("standard_deduction", "Statutory 30% of NAV"),
    ("loan_interest", "Home loan interest claimed"),
    (
        "income",
        "Net property income; negative values are losses (self-occupied loss capped at 200000)",
    ),
];
