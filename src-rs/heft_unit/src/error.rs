use std::{error, fmt};

/// An error produced by unit resolution or conversion lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The requested symbol is not a key in the conversion table.
    ///
    /// This is raised both when resolving a symbol at construction time and
    /// when a conversion target has no path from the source unit. It is a
    /// programmer or input error and is surfaced immediately to the caller.
    UnknownUnit {
        /// The symbol that failed to resolve
        symbol: String,
    },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit { symbol } => write!(f, "unknown unit '{symbol}'"),
        }
    }
}

impl error::Error for UnitError {}
