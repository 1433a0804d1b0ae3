//! rWaterlogger main entrypoint.

use rwaterlogger::run;
use rwaterlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
