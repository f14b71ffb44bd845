use super::*;
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs::File;
use std::io::{self, Read};
use tracing::*;

/// One rendered row of a batch: either a formula and diagram, or the
/// reason the name could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRecord {
    pub name: String,
    pub formula: String,
    pub diagram: String,
    pub error: String,
}

impl RenderRecord {
    /// Parse and draw `name`. Failures are kept in the record.
    pub fn render(name: &str, options: &DrawOptions) -> Self {
        let drawn = parse_name(name).and_then(|parsed| {
            let grid = render(&parsed, options)?;
            let graph = molecule_graph(&parsed)?;
            Ok((grid, graph))
        });

        match drawn {
            Ok((grid, graph)) => Self {
                name: name.to_string(),
                formula: molecular_formula(&graph),
                diagram: grid.to_string(),
                error: String::new(),
            },
            Err(err) => {
                warn!("Could not draw {:?}: {}", name, err);
                Self {
                    name: name.to_string(),
                    formula: String::new(),
                    diagram: String::new(),
                    error: err.to_string(),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Read compound names from the first column of CSV text with a header row.
/// Rows with an empty name are skipped.
pub fn read_names(csv_data: &str) -> anyhow::Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut names = Vec::new();
    for result in rdr.records() {
        let record: StringRecord = result.context("Error reading name record")?;
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            warn!("Skipping record with empty name: {:?}", record);
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

pub fn render_records(csv_data: &str, options: &DrawOptions) -> anyhow::Result<Vec<RenderRecord>> {
    Ok(read_names(csv_data)?
        .iter()
        .map(|name| RenderRecord::render(name, options))
        .collect())
}

/// Write `records` as CSV with a `name,formula,diagram,error` header.
pub fn write_records<W: io::Write>(records: &[RenderRecord], writer: W) -> anyhow::Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["name", "formula", "diagram", "error"])?;
    for record in records {
        wtr.write_record([&record.name, &record.formula, &record.diagram, &record.error])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render every name listed in `input_csv` and write the results to
/// `output_csv`.
pub fn render_csv_database(input_csv: &str, output_csv: &str, options: &DrawOptions) -> anyhow::Result<()> {
    let mut csv_data = String::new();
    File::open(input_csv)
        .with_context(|| format!("Failed to open {}", input_csv))?
        .read_to_string(&mut csv_data)
        .with_context(|| format!("Failed to read {}", input_csv))?;

    let records = render_records(&csv_data, options)?;
    let failed = records.iter().filter(|record| !record.is_ok()).count();

    let file = File::create(output_csv).with_context(|| format!("Failed to create {}", output_csv))?;
    write_records(&records, file)?;
    info!(
        "Rendered {} of {} names to {}",
        records.len() - failed,
        records.len(),
        output_csv
    );
    Ok(())
}
