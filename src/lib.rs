//! Diagnostic probe for the legacy URI-compatibility switch.
//!
//! Dumps the process environment to stderr and verifies that
//! `MONO_URI_DOTNETRELATIVEORABSOLUTE` is set to `"true"`. Usable as a
//! library from test harnesses (`probe::run_probe` over an explicit snapshot
//! and sink) or through the `uri-env-probe` binary.

pub mod color;
pub mod envvar;
pub mod errors;
pub mod probe;

pub use color::{color_enabled_stderr, log_error_stderr, log_info_stderr, paint, set_color_mode, ColorMode};
pub use envvar::{lookup, snapshot};
pub use errors::{display_for_probe_error, exit_code_for_probe_error, ProbeError};
pub use probe::{run, run_probe, EXPECTED_VALUE, MARKER_LINE, URI_COMPAT_VAR};
