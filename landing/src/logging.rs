//! `tracing` output for the browser console.
//!
//! The page library only emits `tracing` events. This installs a `fmt`
//! subscriber whose writer forwards each formatted line to the console
//! method matching the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

fn console_method(level: &Level) -> ConsoleMethod {
    match *level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Log,
        _ => ConsoleMethod::Debug,
    }
}

/// One formatted event, written out when the formatter drops it.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    line: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.line);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        let message = JsValue::from_str(text);
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&message),
            ConsoleMethod::Warn => web_sys::console::warn_1(&message),
            ConsoleMethod::Log => web_sys::console::log_1(&message),
            ConsoleMethod::Debug => web_sys::console::debug_1(&message),
        }
    }
}

pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Log,
            line: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: console_method(meta.level()),
            line: Vec::new(),
        }
    }
}

/// Install the console subscriber. A second call is a no-op.
pub fn init() {
    // No clock on wasm32-unknown-unknown, no ANSI in devtools.
    let _ = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(console_method(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(&Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(console_method(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn writer_accumulates_the_whole_line() {
        use std::io::Write;

        let mut writer = ConsoleWriter {
            method: ConsoleMethod::Log,
            line: Vec::new(),
        };
        write!(writer, "compass_page::state: ").unwrap();
        write!(writer, "tab selected").unwrap();
        assert_eq!(writer.line, b"compass_page::state: tab selected");
        // Dropping would call into the browser console.
        writer.line.clear();
    }
}
