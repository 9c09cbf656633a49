//! main.rs
//! Entry point for sls

use sls::app;
use sls::ui::theme::paint;
use sls::utils::{handle_args, init_logging};

fn main() {
    let options = handle_args();
    init_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = app::run(&options, &mut out) {
        eprintln!("{}", paint(&format!("sls: {e}"), "red"));
        std::process::exit(1);
    }
}
