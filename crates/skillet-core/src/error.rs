use std::fmt;

/// Machine-readable error codes for scripting-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    MissingColumn,
    CsvReadFailed,
    PairingTableInvalid,
    ReportWriteFailed,
    GraphInconsistent,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::MissingColumn => "E2001",
            Self::CsvReadFailed => "E2002",
            Self::PairingTableInvalid => "E3001",
            Self::ReportWriteFailed => "E5001",
            Self::GraphInconsistent => "E9001",
            Self::InternalUnexpected => "E9002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::MissingColumn => "Required column missing from recipe table",
            Self::CsvReadFailed => "Recipe table read failed",
            Self::PairingTableInvalid => "Pairing-score table invalid",
            Self::ReportWriteFailed => "Report write failed",
            Self::GraphInconsistent => "Co-occurrence graph inconsistent",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in skillet.toml and retry."),
            Self::MissingColumn => {
                Some("The recipe table needs id, title, and ingredients columns.")
            }
            Self::CsvReadFailed => Some("Check the input path and CSV quoting."),
            Self::PairingTableInvalid => {
                Some("Pairing rows are `ingredient_a,ingredient_b,score`.")
            }
            Self::ReportWriteFailed => Some("Check disk space and write permissions."),
            Self::GraphInconsistent => None,
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
