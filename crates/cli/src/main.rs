use std::process::ExitCode;

fn main() -> ExitCode {
    handoff_cli::run()
}
