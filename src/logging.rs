//! Log sink lifecycle.
//!
//! Wraps flexi_logger's async writer in a scoped session value, so the
//! background thread that drains the record queue is flushed and joined
//! before the process exits. Records appear on stdout in the order the
//! `log` calls were issued.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Owns the running logger. Dropping the session flushes the async
/// writer; no record issued before the drop is lost.
pub struct LogSession {
    handle: Option<LoggerHandle>,
}

/// Starts the logger: stdout sink, async write mode, `info` level
/// unless `RUST_LOG` says otherwise.
pub fn init() -> Result<LogSession, FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_stdout()
        .write_mode(WriteMode::Async)
        .start()?;
    Ok(LogSession {
        handle: Some(handle),
    })
}

impl LogSession {
    /// Flushes and shuts the writer down early. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.flush();
            // Dropping the handle here joins the writer thread.
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for LogSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
