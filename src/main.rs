use log::LevelFilter;
use simple_logger::SimpleLogger;

use quicktasks::AppConfig;

fn log_level() -> LevelFilter {
    std::env::var("QUICKTASKS_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn main() -> eframe::Result {
    if let Err(err) = SimpleLogger::new().with_level(log_level()).init() {
        eprintln!("logging disabled: {err}");
    }

    quicktasks::run(AppConfig::from_env())
}
