//! Draw skeletal diagrams of simple organic compounds from their
//! dash-delimited substitutive names.
//!
//! ```
//! let grid = skeletal::draw("2-chlorobutan").unwrap();
//! assert_eq!(grid.rows()[2].trim_end(), "CH₃ -- CH -- CH₂ -- CH₃");
//! ```

mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod cursor;
pub use cursor::*;

mod parse;
pub use parse::*;

mod render;
pub use render::*;

mod visualize;
pub use visualize::*;

mod database;
pub use database::*;

use tracing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    C,
    H,
    O,
    F,
    Cl,
    Br,
    I,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::C => "C",
            Element::H => "H",
            Element::O => "O",
            Element::F => "F",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bond {
    Single,
    Double,
    Triple,
}

impl Bond {
    pub fn order(&self) -> usize {
        match self {
            Bond::Single => 1,
            Bond::Double => 2,
            Bond::Triple => 3,
        }
    }
}

/// A compound with every atom explicit, hydrogens included.
pub type MoleculeGraph = petgraph::graph::UnGraph<Element, Bond>;

/// Install a `tracing` subscriber printing events up to `level`
/// (`error`, `warn`, `info`, `debug` or `trace`; anything else means `info`).
/// Calling it again after a subscriber is installed does nothing.
pub fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Parse `name` and draw it with the default options.
pub fn draw(name: &str) -> Result<Grid> {
    draw_with(name, &DrawOptions::default())
}

/// Parse `name` and draw it.
pub fn draw_with(name: &str, options: &DrawOptions) -> Result<Grid> {
    let parsed = parse_name(name)?;
    let grid = render(&parsed, options)?;
    debug!("Drew {:?} on a {}x{} grid", name, grid.height(), grid.length());
    Ok(grid)
}
