use anyhow::{bail, Context, Result};
use skeletal::*;

const USAGE: &str = "usage: skeletal [--ascii] [--no-trim] [--log <level>] <name>...";

fn main() -> Result<()> {
    let mut options = DrawOptions::default();
    let mut level = String::from("warn");
    let mut names = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ascii" => options.glyphs = Glyphs::ascii(),
            "--no-trim" => options.trim_edges = false,
            "--log" => level = args.next().context(USAGE)?,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            name => names.push(name.to_string()),
        }
    }
    if names.is_empty() {
        bail!(USAGE);
    }
    init_logging(&level);

    for name in &names {
        let parsed = parse_name(name).with_context(|| format!("Failed to parse {:?}", name))?;
        let grid = render(&parsed, &options).with_context(|| format!("Failed to draw {:?}", name))?;
        let formula = molecular_formula(&molecule_graph(&parsed)?);
        println!("{} ({})\n{}\n", name, formula, grid);
    }
    Ok(())
}
