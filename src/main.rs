use std::process::ExitCode;

use addrx::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = match Arguments::from_env() {
        Ok(args) => args,
        Err(status) => return status.into(),
    };

    match addrx::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
