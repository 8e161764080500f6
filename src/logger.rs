use log::{LevelFilter, Metadata, Record};
use std::io::Write;

/// Trace logging is gated on this variable being set, since the probe
/// takes no command line arguments.
static DEBUG_VAR: &str = "TERMPROBE_DEBUG";

pub struct Logger(pub bool);

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        self.0
    }

    fn log(&self, record: &Record) {
        eprintln!("{}", record.args());
    }

    fn flush(&self) {
        if let Err(e) = std::io::stderr().flush() {
            log::trace!("Failed to flush stderr: {}", e);
        }
    }
}

impl Logger {
    pub fn from_env() -> Logger {
        Logger(std::env::var_os(DEBUG_VAR).is_some())
    }

    pub fn init(self) {
        log::set_max_level(if self.0 {
            LevelFilter::Trace
        } else {
            LevelFilter::Off
        });
        let _ = log::set_logger(Box::leak(Box::new(self)));
    }
}
