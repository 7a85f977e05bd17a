//! Common test utilities and fixtures

use std::io::Write;
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.cfg` file that is removed on drop
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".cfg")
        .tempfile()
        .expect("Failed to create temporary config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary config file");
    file
}

/// In-memory sink for formatted log output
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result with the log text
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// Sample client configuration used by several scenarios
pub const CLIENT_CONFIG: &str = "\
; RealSense OPC client
[server]
host = localhost
port = 8080

[camera]
serial = 012345678901
width: 640

[nodes]
depth = ns=2;s=Depth
";
