use std::io::Read;

use opsengine_core::error::{ErrorReport, codes};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Exit codes: 0=success, 1=catalog error, 4=usage error
pub const EXIT_OK: i32 = 0;
pub const EXIT_CATALOG: i32 = 1;
pub const EXIT_USAGE: i32 = 4;

/// Logs go to stderr so stdout stays machine-readable.
pub fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "opsengine=info,opsengine_core=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

pub fn report_error(report: &ErrorReport, exit_code: i32) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(body) => eprintln!("{body}"),
        Err(_) => eprintln!("{}: {}", report.error, report.message),
    }
    exit_code
}

pub fn usage_error(message: &str, docs_hint: Option<&str>) -> i32 {
    let mut report = ErrorReport::new(codes::USAGE_ERROR, message);
    if let Some(hint) = docs_hint {
        report = report.with_docs_hint(hint);
    }
    report_error(&report, EXIT_USAGE)
}

pub fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(body) => {
            println!("{body}");
            EXIT_OK
        }
        Err(e) => usage_error(&format!("Failed to serialize output: {e}"), None),
    }
}

/// Read text from a file path or stdin (when path is "-").
pub fn read_text_from_file(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read file '{path}': {e}"))
}
