//! Routes `tracing` events to the browser console.
//!
//! The `fmt` layer formats each event into a [ConsoleWriter], which hands the
//! finished line to the console method matching the event level when dropped.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|error| {
        web_sys::console::warn_1(
            &format!("invalid log filter {:?}: {error}", config.log_filter)
                .as_str()
                .into(),
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        // No system clock on wasm32-unknown-unknown.
        .without_time()
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end()
            .to_string();
        self.buffer.clear();

        (!line.is_empty()).then_some(line)
    }

    fn emit(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let line = line.as_str().into();

        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}
