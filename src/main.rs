use std::process::ExitCode;

use renamer::output as out;
use renamer::{RenameError, cli};

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // RenameError messages already carry their cause
            let msg = if e.downcast_ref::<RenameError>().is_some() {
                e.to_string()
            } else {
                format!("{e:#}")
            };
            out::print_error(&msg);
            ExitCode::FAILURE
        }
    }
}
