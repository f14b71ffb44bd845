use anyhow::{bail, Result};
use skeletal::*;

fn main() -> Result<()> {
    init_logging("info");
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input_csv, output_csv] = args.as_slice() else {
        bail!("usage: render-database <input.csv> <output.csv>");
    };
    render_csv_database(input_csv, output_csv, &DrawOptions::default())?;
    Ok(())
}
