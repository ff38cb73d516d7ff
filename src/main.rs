use clap::Parser;
use std::process::ExitCode;

use uri_env_probe::{
    color_enabled_stderr, display_for_probe_error, exit_code_for_probe_error, log_error_stderr,
    log_info_stderr, run_probe, set_color_mode, snapshot, ColorMode, EXPECTED_VALUE,
    URI_COMPAT_VAR,
};

#[derive(Parser, Debug)]
#[command(
    name = "uri-env-probe",
    version,
    about = "Dump the process environment and verify the legacy URI-compatibility switch."
)]
struct Cli {
    /// Colorize the verdict line: auto|always|never
    #[arg(long = "color", value_enum)]
    color: Option<ColorMode>,

    /// Append a summary line with the snapshot entry count
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        set_color_mode(mode);
    }

    let snap = snapshot();
    let res = {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        run_probe(&snap, &mut out)
    };

    if cli.verbose {
        eprintln!("  entries: {}", snap.len());
    }

    let use_err = color_enabled_stderr();
    match res {
        Ok(()) => {
            log_info_stderr(
                use_err,
                &format!("uri-env-probe: {URI_COMPAT_VAR} = \"{EXPECTED_VALUE}\" (ok)"),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error_stderr(
                use_err,
                &format!("uri-env-probe: {}", display_for_probe_error(&e)),
            );
            ExitCode::from(exit_code_for_probe_error(&e))
        }
    }
}
