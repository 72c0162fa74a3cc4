//! Logger setup. On wasm32 `log` records go to the browser console; native
//! hosts get `env_logger`, where `RUST_LOG` overrides the given level.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the global `log` sink at `level`.
///
/// Returns `false` when another logger was already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logger(level: LevelFilter) -> bool {
    let installed = log::set_logger(&console::LOGGER).is_ok();
    log::set_max_level(level);
    installed
}

/// Install the global `log` sink at `level`.
///
/// Returns `false` when another logger was already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(level: LevelFilter) -> bool {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .is_ok()
}
