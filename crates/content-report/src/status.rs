use std::fmt;

/// Glyph rendered for a passing row.
pub const SUCCESS: &str = "✅";
/// Glyph rendered for a failing row.
pub const FAIL_CROSS: &str = "❌";
/// Glyph rendered for an asset that exists but is not needed by the build.
pub const NOT_NECESSARY: &str = "🏳️";

/// Outcome of a single validated file or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    NotNecessary,
}

impl Status {
    /// The glyph written into the Status column of the report tables.
    pub fn symbol(self) -> &'static str {
        match self {
            Status::Pass => SUCCESS,
            Status::Fail => FAIL_CROSS,
            Status::NotNecessary => NOT_NECESSARY,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
