// src/payload.rs
//
// Loading vendor payloads from disk. `.jsonl` files hold one record per line;
// anything else is a single JSON document, where a top-level array is a list
// of records.

use crate::error::{Error, Result};
use log::info;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A record read from a payload file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line number for `.jsonl` files, 1-based array position otherwise.
    pub position: usize,
    pub value: Value,
}

/// Reads every record from `path`.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let records = if is_jsonl(path) {
        read_lines(path)?
    } else {
        read_document(path)?
    };
    info!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jsonl"))
        .unwrap_or(false)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_lines(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(io_error(path))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error(path))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = serde_json::from_str(line).map_err(|source| Error::MalformedRecord {
            path: path.to_path_buf(),
            record: i + 1,
            source,
        })?;
        records.push(Record {
            position: i + 1,
            value,
        });
    }
    Ok(records)
}

fn read_document(path: &Path) -> Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path).map_err(io_error(path))?;
    let document: Value =
        serde_json::from_str(&contents).map_err(|source| Error::MalformedRecord {
            path: path.to_path_buf(),
            record: 1,
            source,
        })?;

    let records = match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, value)| Record {
                position: i + 1,
                value,
            })
            .collect(),
        value => vec![Record { position: 1, value }],
    };
    Ok(records)
}
