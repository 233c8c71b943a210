//! weeklog main entrypoint.

use weeklog::run;
use weeklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
