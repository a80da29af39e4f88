pub mod check;
pub mod free;
pub mod list;

pub use check::CheckCommand;
pub use free::{FreeCommand, KillOutcome};
pub use list::ListCommand;

use std::io::Write;

use anyhow::Context;

use crate::Result;

/// Pretty-print `value` to stdout.
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to render JSON output")?;
    writeln!(out, "{rendered}").context("failed to write JSON output")?;
    Ok(())
}
