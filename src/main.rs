use std::process::ExitCode;

use hello_triangle::{app, logging::init_logging, AppConfig};

fn main() -> ExitCode {
    let config = AppConfig::default();
    init_logging(&config.logging);

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
