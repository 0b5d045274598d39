use std::process::ExitCode;

use mw_cli::{build_cli, execute, init_logging};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("log-json"));

    let mut stdout = std::io::stdout().lock();
    match execute(&matches, &mut stdout) {
        Ok(exit) => exit.into(),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
