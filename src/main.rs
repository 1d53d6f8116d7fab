//! piyostats main entrypoint.

use piyostats::run;
use piyostats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
