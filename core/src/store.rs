// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::event::{Event, EventPatch};

/// The stored record for one calendar day: a free-text party log plus an
/// ordered list of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default)]
    pub party: String,

    #[serde(default)]
    pub events: Vec<Event>,
}

impl DayEntry {
    /// Entries with no party text and no events are pruned from the store.
    pub fn is_empty(&self) -> bool {
        self.party.is_empty() && self.events.is_empty()
    }
}

/// Day-keyed store of party logs and events, backed by a single JSON file.
///
/// The store owns every [`DayEntry`] and [`Event`]; callers mutate through
/// this API only, and every mutation rewrites the whole file before
/// returning. Keys are absolute day-counter values, serialized as decimal
/// strings.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    entries: BTreeMap<i64, DayEntry>,
}

impl NoteStore {
    /// Opens the store at `path`. A missing file is an empty store; the file
    /// is not created until the first mutation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no day-notes file yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(NoteStore { path, entries })
    }

    /// The entry for `day`, lazily created in memory. Creation alone is not
    /// persisted; only a subsequent mutation writes the file.
    pub fn entry(&mut self, day: i64) -> &mut DayEntry {
        self.entries.entry(day).or_default()
    }

    pub fn get(&self, day: i64) -> Option<&DayEntry> {
        self.entries.get(&day)
    }

    /// Party log text for `day`, empty if no entry exists.
    pub fn party(&self, day: i64) -> &str {
        self.get(day).map(|e| e.party.as_str()).unwrap_or("")
    }

    /// Replaces the party log for `day`, pruning the entry if it becomes
    /// fully empty. Persists.
    pub fn set_party(&mut self, day: i64, text: impl Into<String>) -> Result<(), Error> {
        let entry = self.entries.entry(day).or_default();
        entry.party = text.into();
        let prune = entry.is_empty();
        if prune {
            self.entries.remove(&day);
        }
        self.save()
    }

    /// Appends an already-validated event to `day`. Persists.
    pub fn add_event(&mut self, day: i64, event: Event) -> Result<(), Error> {
        self.entries.entry(day).or_default().events.push(event);
        self.save()
    }

    /// Merges `patch` into the event at `index` under `day`. Persists.
    pub fn edit_event(&mut self, day: i64, index: usize, patch: &EventPatch) -> Result<(), Error> {
        let entry = self.entries.get_mut(&day).ok_or(Error::UnknownDay(day))?;
        let len = entry.events.len();
        let event = entry
            .events
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { day, index, len })?;
        patch.apply_to(event)?;
        self.save()
    }

    /// Removes and returns the event at `index` under `day`, pruning the
    /// entry if it becomes fully empty. Persists.
    pub fn delete_event(&mut self, day: i64, index: usize) -> Result<Event, Error> {
        let entry = self.entries.get_mut(&day).ok_or(Error::UnknownDay(day))?;
        let len = entry.events.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { day, index, len });
        }

        let event = entry.events.remove(index);
        if entry.is_empty() {
            self.entries.remove(&day);
        }
        self.save()?;
        Ok(event)
    }

    /// Borrows the event at `index` under `day`.
    pub fn event_at(&self, day: i64, index: usize) -> Result<&Event, Error> {
        let entry = self.entries.get(&day).ok_or(Error::UnknownDay(day))?;
        entry.events.get(index).ok_or(Error::IndexOutOfRange {
            day,
            index,
            len: entry.events.len(),
        })
    }

    /// Iterates every stored event in store order: ascending day key,
    /// insertion order within a day.
    pub fn all_events(&self) -> impl Iterator<Item = (i64, usize, &Event)> {
        self.entries.iter().flat_map(|(day, entry)| {
            entry
                .events
                .iter()
                .enumerate()
                .map(move |(index, event)| (*day, index, event))
        })
    }

    fn save(&self) -> Result<(), Error> {
        // Full pretty-printed rewrite on every mutation; serde_json leaves
        // non-ASCII characters unescaped.
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
