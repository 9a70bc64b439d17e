//! TimeFlow main entrypoint.

use timeflow::run;
use timeflow::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
