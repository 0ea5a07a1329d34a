//! Rendering options.
//!
//! Options are plain data so they can be embedded in a host tool's own
//! configuration file. Every field has a default; an empty JSON object
//! deserializes to `RenderOptions::default()`.

use serde::{Deserialize, Serialize};

use crate::NewLineKind;

/// Warning codes suppressed around rendered namespace blocks.
///
/// CS0105 is "using directive appeared previously in this namespace", raised
/// when the same using is repeated at several nested levels.
pub const DEFAULT_SUPPRESSED_WARNINGS: &[&str] = &["CS0105"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Line terminator for every rendered line.
    pub new_line: NewLineKind,
    /// Codes written to `#pragma warning disable` / `restore`.
    /// An empty list omits the pragma lines entirely.
    pub suppressed_warnings: Vec<String>,
    /// Emit `partial` on every type header even when the source declaration
    /// did not carry it.
    pub ensure_partial: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            new_line: NewLineKind::default(),
            suppressed_warnings: DEFAULT_SUPPRESSED_WARNINGS
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
            ensure_partial: true,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_new_line(mut self, new_line: NewLineKind) -> Self {
        self.new_line = new_line;
        self
    }

    #[must_use]
    pub fn with_suppressed_warnings<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppressed_warnings = codes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_ensure_partial(mut self, ensure_partial: bool) -> Self {
        self.ensure_partial = ensure_partial;
        self
    }

    /// Comma separated pragma argument, or `None` when nothing is suppressed.
    #[must_use]
    pub fn pragma_codes(&self) -> Option<String> {
        if self.suppressed_warnings.is_empty() {
            None
        } else {
            Some(self.suppressed_warnings.join(", "))
        }
    }
}
