//! rAttendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages::warning;

fn main() {
    println!();
    if let Err(e) = run() {
        if e.is_empty_result() {
            warning(e);
            return;
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
