extern crate repo_hygiene;

use repo_hygiene::cli::{copy_app, exit_code, run_copy};
use repo_hygiene::logging::configure_logging;

use std::io;

fn main() {
    let argument_matches = copy_app().get_matches();

    if let Err(ref error) = configure_logging(argument_matches.occurrences_of("v")) {
        eprintln!("Error: {}", error);
        ::std::process::exit(1);
    }

    let stdout = io::stdout();
    let result = run_copy(&argument_matches, &mut stdout.lock());
    ::std::process::exit(exit_code(&result, &mut stdout.lock()));
}
