/// Console logging facade with a component tag, so panel and form logs are
/// distinguishable. On non-wasm targets (native test runs) lines go to
/// stderr instead of the browser console.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        let line = format!("[{component}] {message}");
        emit(level, line);
    }
}

#[derive(Clone, Copy)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: String) {
    match level {
        Level::Debug => gloo::console::debug!(line),
        Level::Info => gloo::console::info!(line),
        Level::Warn => gloo::console::warn!(line),
        Level::Error => gloo::console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: String) {
    let label = match level {
        Level::Debug => "DEBUG",
        Level::Info => "INFO",
        Level::Warn => "WARN",
        Level::Error => "ERROR",
    };
    eprintln!("{label} {line}");
}
