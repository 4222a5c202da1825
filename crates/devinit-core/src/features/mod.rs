//! Feature installers
//!
//! Each feature composes the tool installer, the template materializer
//! and manifest patches into one idempotent setup routine. Step
//! failures are reported and downgraded at the step boundary: the
//! design favors forward progress over atomicity, because re-running a
//! feature overwrites templates and re-applies the same patch values.

pub mod git_hooks;
pub mod lint;

use crate::error::Error;
use colored::Colorize;

/// Report a non-fatal step failure to the operator.
pub(crate) fn report_step_error(context: &str, error: &Error) {
    eprintln!("{} {context}: {error}", "warning:".yellow());
}
