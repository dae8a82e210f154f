//! Error codes for the SLC diagnostic system.
//!
//! Codes are grouped by the kind of rule that was broken:
//! - `E1xx` - Structural errors (missing or misplaced declarations)
//! - `E2xx` - Naming errors (list and shape names)
//! - `E3xx` - Parameter errors (the `key:value` list in a shape header)
//! - `W0xx` - Line lint warnings (advisory, never fatal)

use std::fmt;

/// Broad family an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing List declaration, missing shapes, missing Style block.
    Structural,
    /// Bad, reserved, mismatched or duplicate names.
    Naming,
    /// Malformed `key:value` pieces or unparsable values.
    Parameter,
    /// Advisory line checks.
    Lint,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Structural => "structural error",
            ErrorCategory::Naming => "naming error",
            ErrorCategory::Parameter => "parameter error",
            ErrorCategory::Lint => "lint",
        };
        f.write_str(name)
    }
}

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structural Errors (E1xx)
    // =========================================================================
    /// Missing List declaration.
    ///
    /// The source contains no `Create List <Name>() {` header.
    E100,

    /// No shapes declared.
    ///
    /// The List declaration is not followed by any shape header.
    E101,

    /// Missing Style block.
    ///
    /// A shape header is not followed by `Style { ... }` before the next
    /// header or the end of the source.
    E102,

    /// Duplicate List declaration.
    E103,

    // =========================================================================
    // Naming Errors (E2xx)
    // =========================================================================
    /// List name does not start with an uppercase letter.
    E200,

    /// List name does not match the file name.
    E201,

    /// Shape has no name.
    E202,

    /// Shape uses the reserved name `List`.
    E203,

    /// Shape name does not start with an uppercase letter.
    E204,

    /// Shape name is already used in this document.
    E205,

    // =========================================================================
    // Parameter Errors (E3xx)
    // =========================================================================
    /// A parameter is not of the form `key:value`.
    E300,

    /// A parameter value is not an integer, a decimal or a quoted string.
    E301,

    // =========================================================================
    // Lint Warnings (W0xx)
    // =========================================================================
    /// A `Create` line does not end with `{`.
    W001,

    /// A `Style` line has no `{`.
    W002,

    /// A line is not a recognised instruction.
    W003,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::W001 => "W001",
            ErrorCode::W002 => "W002",
            ErrorCode::W003 => "W003",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "missing list declaration",
            ErrorCode::E101 => "no shapes declared",
            ErrorCode::E102 => "missing style block",
            ErrorCode::E103 => "duplicate list declaration",
            ErrorCode::E200 => "lowercase list name",
            ErrorCode::E201 => "list name does not match file name",
            ErrorCode::E202 => "missing shape name",
            ErrorCode::E203 => "reserved shape name",
            ErrorCode::E204 => "lowercase shape name",
            ErrorCode::E205 => "duplicate shape name",
            ErrorCode::E300 => "malformed parameter",
            ErrorCode::E301 => "invalid parameter value",
            ErrorCode::W001 => "missing '{' after Create",
            ErrorCode::W002 => "missing '{' after Style",
            ErrorCode::W003 => "unknown instruction",
        }
    }

    /// Returns the family this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E100
            | ErrorCode::E101
            | ErrorCode::E102
            | ErrorCode::E103 => ErrorCategory::Structural,
            ErrorCode::E200
            | ErrorCode::E201
            | ErrorCode::E202
            | ErrorCode::E203
            | ErrorCode::E204
            | ErrorCode::E205 => ErrorCategory::Naming,
            ErrorCode::E300 | ErrorCode::E301 => ErrorCategory::Parameter,
            ErrorCode::W001 | ErrorCode::W002 | ErrorCode::W003 => ErrorCategory::Lint,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
