//! rBabyLog main entrypoint.

use rbabylog::run;
use rbabylog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
