//! Native status codes and their descriptions.
//!
//! Easel functions return an `int` status. [`STATUS_TABLE`] maps every code the
//! library can return to its symbolic name and a human-readable description.
//! The table is a `static` slice, so concurrent readers need no synchronization.

use serde::Serialize;

/// Placeholder returned by [`lookup`] for codes missing from the table.
pub const UNKNOWN_STATUS: &str = "unknown error code";

/// A single row of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// Integer value returned by the native call.
    pub code: i32,
    /// Symbolic name of the code in the native headers (e.g. `eslEMEM`).
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

macro_rules! status_table {
    ($( $variant:ident = $code:literal, $name:literal, $desc:literal; )*) => {
        /// Status codes returned by native Easel calls.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[repr(i32)]
        pub enum Status {
            $(
                #[doc = $desc]
                $variant = $code,
            )*
        }

        /// Every status code the native library can return, ordered by code.
        pub static STATUS_TABLE: &[StatusEntry] = &[
            $( StatusEntry { code: $code, name: $name, description: $desc }, )*
        ];

        impl Status {
            /// Convert a raw status code into a [`Status`], if it is known.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Symbolic name used by the native headers.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// Human-readable description.
            pub fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )*
                }
            }
        }
    };
}

status_table! {
    Ok = 0, "eslOK", "no error/success";
    Fail = 1, "eslFAIL", "failure";
    Eol = 2, "eslEOL", "end-of-line (often normal)";
    Eof = 3, "eslEOF", "end-of-file (often normal)";
    Eod = 4, "eslEOD", "end-of-data (often normal)";
    Mem = 5, "eslEMEM", "malloc or realloc failed";
    NotFound = 6, "eslENOTFOUND", "file or key not found";
    Format = 7, "eslEFORMAT", "file format not correctly detected";
    Ambiguous = 8, "eslEAMBIGUOUS", "an ambiguity of some sort";
    DivZero = 9, "eslEDIVZERO", "attempted div by zero";
    Incompat = 10, "eslEINCOMPAT", "incompatible parameters";
    Inval = 11, "eslEINVAL", "invalid argument/parameter";
    Sys = 12, "eslESYS", "generic system call failure";
    Corrupt = 13, "eslECORRUPT", "unexpected data corruption";
    Inconceivable = 14, "eslEINCONCEIVABLE", "\"can't happen\" error";
    Syntax = 15, "eslESYNTAX", "invalid user input syntax";
    Range = 16, "eslERANGE", "value out of allowed range";
    Dup = 17, "eslEDUP", "saw a duplicate of something";
    NoHalt = 18, "eslENOHALT", "a failure to converge";
    NoResult = 19, "eslENORESULT", "no result was obtained";
    NoData = 20, "eslENODATA", "no data provided, file empty";
    Type = 21, "eslETYPE", "invalid type of argument";
    Overwrite = 22, "eslEOVERWRITE", "attempted to overwrite data";
    NoSpace = 23, "eslENOSPACE", "ran out of some resource";
    Unimplemented = 24, "eslEUNIMPLEMENTED", "feature is unimplemented";
    NoFormat = 25, "eslENOFORMAT", "couldn't guess file format";
    NoAlphabet = 26, "eslENOALPHABET", "couldn't guess seq alphabet";
    Write = 27, "eslEWRITE", "write failed (fprintf, etc)";
    Inaccurate = 28, "eslEINACCURATE", "return val may be inaccurate";
}

impl Status {
    /// Raw integer value of this status.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Whether this status signals success.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Describe a raw status code.
///
/// Never fails: codes absent from [`STATUS_TABLE`] yield [`UNKNOWN_STATUS`].
pub fn lookup(code: i32) -> &'static str {
    entry(code).map_or(UNKNOWN_STATUS, |e| e.description)
}

/// Find the table row for a raw status code.
pub fn entry(code: i32) -> Option<&'static StatusEntry> {
    STATUS_TABLE
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &STATUS_TABLE[idx])
}

/// Read-only view of the full status table.
pub fn table() -> &'static [StatusEntry] {
    STATUS_TABLE
}
