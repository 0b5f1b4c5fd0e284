//! Configuration and input checks.
//!
//! Layout parameters are checked before any planning starts: errors stop
//! the run, warnings ride along with the plan. Colours that cannot be
//! displayed are reported per entry as warnings.

mod checks;
mod warning;

pub use checks::{check_card_config, check_grid_config, unsupported_colours};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::error::{Result, SwatchError};
use crate::output::Printer;

/// Turn error diagnostics into a single `InvalidConfiguration`.
pub fn ensure_valid(result: &ValidationResult) -> Result<()> {
    if !result.has_errors() {
        return Ok(());
    }

    let message = result
        .errors()
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    let help = result.errors().find_map(|d| d.help.clone());

    Err(SwatchError::InvalidConfiguration { message, help })
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}
