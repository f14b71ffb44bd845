use thiserror::Error;

/// Everything that can stop a compound name from becoming a diagram.
///
/// None of these are recoverable: a failed conversion never yields a
/// partially parsed name or a partially drawn grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The name does not follow the dash-delimited grammar, including the
    /// case where no token carries a main chain root.
    #[error("invalid compound name {name:?}: {detail}")]
    NameFormat { name: String, detail: String },

    /// A locant points outside the main chain.
    #[error("{role} locant {locant} is out of range for a chain of {carbons} carbon(s)")]
    LocantRange {
        locant: u32,
        carbons: u32,
        role: &'static str,
    },

    /// A backbone carbon was given more substituents than it has free directions.
    #[error("carbon {carbon} carries {occurrences} substituent(s) but has room for {capacity}")]
    ValenceOverflow {
        carbon: u32,
        occurrences: usize,
        capacity: usize,
    },
}

impl Error {
    pub(crate) fn name_format(name: &str, detail: impl Into<String>) -> Self {
        Error::NameFormat {
            name: name.to_string(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
