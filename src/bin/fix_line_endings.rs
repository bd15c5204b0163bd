extern crate repo_hygiene;

use repo_hygiene::cli::{audit_app, exit_code, run_audit};
use repo_hygiene::logging::configure_logging;

use std::io;

fn main() {
    let argument_matches = audit_app().get_matches();

    if let Err(ref error) = configure_logging(argument_matches.occurrences_of("v")) {
        eprintln!("Error: {}", error);
        ::std::process::exit(1);
    }

    let stderr = io::stderr();
    let result = run_audit(&argument_matches, &mut stderr.lock());

    let stdout = io::stdout();
    ::std::process::exit(exit_code(&result, &mut stdout.lock()));
}
