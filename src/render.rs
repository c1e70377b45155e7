//! Response Rendering
//!
//! Turns a completed HTTP response into console text, a pretty-printed JSON file,
//! or a CSV file. The status line is always printed; non-2xx responses stop here
//! and yield a failing outcome without touching the output target.

use crate::error::RenderError;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// A completed HTTP response: status code plus decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub body: Value,
}

impl Response {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }
}

/// Where a successful response body goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    JsonFile(PathBuf),
    CsvFile(PathBuf),
}

impl OutputTarget {
    /// Pick a target from the `-o/--output` argument by its suffix.
    ///
    /// `.json` and `.csv` (case-sensitive) select file output; anything else,
    /// including no argument at all, prints to stdout.
    pub fn from_output_arg(output: Option<&Path>) -> Self {
        let Some(path) = output else {
            return OutputTarget::Stdout;
        };
        let text = path.to_string_lossy();
        if text.ends_with(".json") {
            OutputTarget::JsonFile(path.to_path_buf())
        } else if text.ends_with(".csv") {
            OutputTarget::CsvFile(path.to_path_buf())
        } else {
            OutputTarget::Stdout
        }
    }
}

/// Result of a render that did not hit a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HttpFailure,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::HttpFailure => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

pub fn is_success(status_code: u16) -> bool {
    (200..=299).contains(&status_code)
}

/// Render `response` to `target`, writing console lines to `out`.
pub fn render<W: Write>(
    response: &Response,
    target: &OutputTarget,
    out: &mut W,
) -> Result<Outcome, RenderError> {
    writeln!(out, "HTTP Status Code: {}", response.status_code)?;

    if !is_success(response.status_code) {
        warn!(status = response.status_code, "Non-2XX response");
        writeln!(out, "Error: Non-2XX response received. Exiting.")?;
        return Ok(Outcome::HttpFailure);
    }

    match target {
        OutputTarget::Stdout => {
            writeln!(out, "{}", serde_json::to_string_pretty(&response.body)?)?;
        }
        OutputTarget::JsonFile(path) => {
            write_json(&response.body, path)?;
            writeln!(out, "Response written to {}", path.display())?;
        }
        OutputTarget::CsvFile(path) => {
            write_csv(&response.body, path)?;
            writeln!(out, "Response written to {}", path.display())?;
        }
    }

    Ok(Outcome::Success)
}

/// Write `body` as 2-space indented JSON, replacing any existing file.
pub fn write_json(body: &Value, path: &Path) -> Result<(), RenderError> {
    let content = serde_json::to_string_pretty(body)?;
    std::fs::write(path, content).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Wrote JSON output");
    Ok(())
}

/// Write `body` as CSV: one row per object, columns taken from the first object.
///
/// The body is checked before the file is opened, so a shape error never leaves
/// a file behind.
pub fn write_csv(body: &Value, path: &Path) -> Result<(), RenderError> {
    let records = as_records(body)?;
    let header = csv_header(&records);

    let file = std::fs::File::create(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = csv::Writer::from_writer(file);

    // No columns means no header and no rows.
    if header.is_empty() {
        if records.len() > 1 {
            debug!("First record has no keys; writing an empty CSV file");
        }
        wtr.flush().map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(());
    }

    wtr.write_record(&header)?;
    for record in &records {
        if record.keys().any(|k| !header.contains(k)) {
            debug!("Dropping fields not present in the CSV header");
        }
        wtr.write_record(csv_row(&header, record))?;
    }

    wtr.flush().map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = records.len(), "Wrote CSV output");
    Ok(())
}

fn as_records(body: &Value) -> Result<Vec<&Map<String, Value>>, RenderError> {
    let items = body
        .as_array()
        .ok_or_else(|| RenderError::NotARecordList(kind_of(body).to_string()))?;
    items
        .iter()
        .map(|item| {
            item.as_object().ok_or_else(|| {
                RenderError::NotARecordList(format!("a list containing {}", kind_of(item)))
            })
        })
        .collect()
}

/// Column names: keys of the first record, in its order.
pub fn csv_header(records: &[&Map<String, Value>]) -> Vec<String> {
    records
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

/// Cells for `record` under `header`. Missing keys become empty cells; keys
/// outside the header are ignored.
pub fn csv_row(header: &[String], record: &Map<String, Value>) -> Vec<String> {
    header
        .iter()
        .map(|key| record.get(key).map(cell_text).unwrap_or_default())
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
