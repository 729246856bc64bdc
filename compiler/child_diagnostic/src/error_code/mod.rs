//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating when the problem is detected. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Line classification and block structure
/// - E2xxx: Runtime errors
/// - W1xxx: Warnings from `child check`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// Unknown command
    E1001,
    /// Malformed statement (missing or repeated separator, bad name)
    E1002,
    /// Block without a matching `end`
    E1003,
    /// Unrecognized condition
    E1004,

    // Runtime Errors (E2xxx)
    /// Expression cannot be evaluated
    E2001,
    /// Index out of range
    E2002,
    /// List does not exist
    E2003,
    /// Name is not a list
    E2004,
    /// Unknown procedure
    E2005,
    /// Wrong number of arguments
    E2006,
    /// Value has the wrong type for the statement
    E2007,
    /// Too many nested procedure calls
    E2008,
    /// No input available for `ask`
    E2009,

    // Warnings (W1xxx)
    /// `end` without an open block
    W1001,
    /// `otherwise` outside an `if`
    W1002,
    /// Second `otherwise` in the same `if`
    W1003,
}

impl ErrorCode {
    /// All error codes, for exhaustive lookup.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::W1003,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::W1003 => "W1003",
        }
    }

    /// Check if this is a syntax or block-structure error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is a runtime error (E2xxx range).
    pub fn is_runtime_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
                | ErrorCode::E2006
                | ErrorCode::E2007
                | ErrorCode::E2008
                | ErrorCode::E2009
        )
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001 | ErrorCode::W1002 | ErrorCode::W1003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"` or `"w1001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
