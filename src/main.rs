//! timereport main entrypoint.

use timereport::run;
use timereport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
