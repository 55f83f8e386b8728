use {
    log::{Level, Log, Metadata, Record},
    std::{
        io::{Write, stderr},
        time::SystemTime,
    },
};

/// Writes log records to stderr.
///
/// Each line has the form `[<time> <level> <module>] <message>`.
pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn install(level: Level) {
        let res = log::set_boxed_logger(Box::new(Self { level }));
        if res.is_err() {
            return;
        }
        log::set_max_level(level.to_level_filter());
        std::panic::set_hook(Box::new(|p| {
            if let Some(loc) = p.location() {
                log::error!(
                    "Panic at {} line {} column {}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                );
            } else {
                log::error!("Panic at unknown location");
            }
            if let Some(msg) = p.payload().downcast_ref::<&str>() {
                log::error!("Message: {}", msg);
            }
            if let Some(msg) = p.payload().downcast_ref::<String>() {
                log::error!("Message: {}", msg);
            }
        }));
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = humantime::format_rfc3339_millis(SystemTime::now());
        let mut buffer = vec![];
        let _ = match record.module_path() {
            Some(mp) => writeln!(
                buffer,
                "[{} {:5} {}] {}",
                now,
                record.level(),
                mp,
                record.args(),
            ),
            _ => writeln!(buffer, "[{} {:5}] {}", now, record.level(), record.args()),
        };
        let _ = stderr().lock().write_all(&buffer);
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}
