use std::str::FromStr;

/// What to do on reading a line which is not of the expected format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorPolicy {
    /// Stop canonicalisation, and return the error.
    ///
    /// Any lines written before the malformed line remain written.
    Abort = 0,

    /// Note the line is skipped, and continue from the next line.
    Skip,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl ErrorPolicy {
    /// The minimum ErrorPolicy type.
    pub const MIN: ErrorPolicy = ErrorPolicy::Abort;

    /// The maximum ErrorPolicy type.
    pub const MAX: ErrorPolicy = ErrorPolicy::Skip;
}

impl FromStr for ErrorPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),

            "skip" => Ok(Self::Skip),

            _unkown_string => Err(()),
        }
    }
}
