use log::LevelFilter;
use tui_logger::{init_logger, set_default_level};

pub fn setup_logger() {
    init_logger(LevelFilter::Trace).unwrap();
    set_default_level(LevelFilter::Debug);

    const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");
    let _ = tui_logger::set_log_file(tui_logger::TuiLoggerFile::new(LOG_FILE));
}
