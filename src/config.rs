//! Loading `RenderOptions` from JSON.
//!
//! ```json
//! {
//!   "newLine": "crlf",
//!   "suppressedWarnings": ["CS0105", "CS8019"],
//!   "ensurePartial": true
//! }
//! ```
//!
//! Missing fields take their defaults, so `{}` is a valid configuration.

use anyhow::{Context, Result, bail};
use std::path::Path;

use csgen_common::RenderOptions;

/// Parse render options from a JSON document.
pub fn parse_render_options(json: &str) -> Result<RenderOptions> {
    if json.trim().is_empty() {
        return Ok(RenderOptions::default());
    }

    let options: RenderOptions =
        serde_json::from_str(json).context("failed to parse render options JSON")?;
    validate(&options)?;
    Ok(options)
}

/// Read and parse a render options file.
pub fn load_render_options(path: &Path) -> Result<RenderOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read render options: {}", path.display()))?;
    let options = parse_render_options(&source)
        .with_context(|| format!("failed to load render options: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?options, "loaded render options");
    Ok(options)
}

fn validate(options: &RenderOptions) -> Result<()> {
    for code in &options.suppressed_warnings {
        let code = code.trim();
        if code.is_empty() || code.contains(|c: char| c.is_whitespace() || c == ',') {
            bail!("invalid warning code in suppressedWarnings: {code:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
