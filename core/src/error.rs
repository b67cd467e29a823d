// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors surfaced by the calendar engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted JSON file could not be parsed or written.
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No day entry exists under the given day counter.
    #[error("no entry for day {0}")]
    UnknownDay(i64),

    /// An event index does not exist within its day entry.
    #[error("event index {index} out of range for day {day} ({len} events)")]
    IndexOutOfRange { day: i64, index: usize, len: usize },

    /// Events must carry a non-empty name.
    #[error("event name must not be empty")]
    EmptyEventName,

    /// A configured path could not be resolved.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
