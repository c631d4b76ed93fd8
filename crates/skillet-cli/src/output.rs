//! Shared output layer for human/JSON parity.
//!
//! Every command handler receives an [`OutputMode`] and formats its payload
//! accordingly: sectioned text for humans, stable pretty-printed JSON for
//! machines. Commands serialize one payload struct either way, so the two
//! modes can never drift apart on content.

use serde::Serialize;
use std::io::{self, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<34} {}", format!("{key}:"), value.as_ref())
}

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized output (sections, aligned key/value lines).
    Human,
    /// Machine-readable pretty-printed JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render `payload` on stdout in the requested mode.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render<T: Serialize>(
    mode: OutputMode,
    payload: &T,
    human: impl Fn(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();

    if mode.is_json() {
        let json = serde_json::to_string_pretty(payload)?;
        writeln!(w, "{json}")?;
    } else {
        human(payload, &mut w)?;
    }
    Ok(())
}
