use std::io::{self, ErrorKind};
use std::process::ExitCode;

use grid_pathfinder::prompt::{run_session, Prompter};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match run_session(&mut prompter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            println!("\nSession ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Unexpected error: {e}");
            ExitCode::FAILURE
        }
    }
}
