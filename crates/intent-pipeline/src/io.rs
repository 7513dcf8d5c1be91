//! JSON file I/O for every pipeline stage.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use intent_core::errors::{IntentError, IntentResult, PipelineError};
use intent_core::models::EmbeddedMessage;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn io_error(path: &Path, source: std::io::Error) -> IntentError {
    IntentError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a JSON document. Malformed input reports its line and column.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> IntentResult<T> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            IntentError::SerializationError(e)
        } else {
            PipelineError::InvalidInput {
                line: e.line(),
                column: e.column(),
                reason: e.to_string(),
            }
            .into()
        }
    })
}

/// Write pretty-printed JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> IntentResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| io_error(path, e))
}

/// Load the orchestrator's input: an array of embedded messages.
pub fn load_messages(path: &Path) -> IntentResult<Vec<EmbeddedMessage>> {
    read_json(path)
}
