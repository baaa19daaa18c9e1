//! rServiceLog main entrypoint.

use rservicelog::run;
use rservicelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
