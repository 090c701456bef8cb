pub mod report;
pub mod schema;
pub mod validate;

use crate::core::TaxInputs;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a TaxInputs snapshot (JSON) from a file, or stdin with "-"
pub fn read_inputs(path: &Path) -> anyhow::Result<TaxInputs> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<TaxInputs> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let inputs: TaxInputs = serde_json::from_reader(reader)?;
    Ok(inputs)
}

fn read_from_stdin() -> anyhow::Result<TaxInputs> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let inputs: TaxInputs = serde_json::from_slice(&buffer)?;
    Ok(inputs)
}
