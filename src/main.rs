//! attendo main entrypoint.

use attendo::run;

fn main() {
    if let Err(e) = run() {
        attendo::ui::messages::error(e);
        std::process::exit(1);
    }
}
