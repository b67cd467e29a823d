// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::error::Error;

/// The name of the Strand Calendar application.
pub const APP_NAME: &str = "strandcal";

const STRANDS_FILE: &str = "strands.json";
const NOTES_FILE: &str = "day_notes.json";
const DAY_FILE: &str = "current_date.txt";
const HOUR_FILE: &str = "current_hour.txt";

/// Configuration for the calendar engine.
///
/// All persisted state lives under `data_dir` unless an individual file path
/// is overridden. The surrounding shell constructs and injects this; the
/// engine never reads ad-hoc global paths.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted calendar state.
    pub data_dir: PathBuf,

    /// Override for the strand catalog file.
    #[serde(default)]
    pub strands_file: Option<PathBuf>,

    /// Override for the day-notes file.
    #[serde(default)]
    pub notes_file: Option<PathBuf>,

    /// Override for the day-counter file.
    #[serde(default)]
    pub day_file: Option<PathBuf>,

    /// Override for the hour-counter file.
    #[serde(default)]
    pub hour_file: Option<PathBuf>,
}

impl Config {
    /// A configuration with every file in its default place under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            strands_file: None,
            notes_file: None,
            day_file: None,
            hour_file: None,
        }
    }

    /// Normalize the configuration, expanding home-relative paths.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.data_dir = expand_path(&self.data_dir)?;
        for file in [
            &mut self.strands_file,
            &mut self.notes_file,
            &mut self.day_file,
            &mut self.hour_file,
        ] {
            if let Some(path) = file {
                *path = expand_path(path)?;
            }
        }
        Ok(())
    }

    pub fn strands_path(&self) -> PathBuf {
        self.resolve(&self.strands_file, STRANDS_FILE)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.resolve(&self.notes_file, NOTES_FILE)
    }

    pub fn day_path(&self) -> PathBuf {
        self.resolve(&self.day_file, DAY_FILE)
    }

    pub fn hour_path(&self) -> PathBuf {
        self.resolve(&self.hour_file, HOUR_FILE)
    }

    fn resolve(&self, overridden: &Option<PathBuf>, default_name: &str) -> PathBuf {
        match overridden {
            Some(path) => path.clone(),
            None => self.data_dir.join(default_name),
        }
    }
}

/// Handle tilde and home-directory prefixes in the path.
fn expand_path(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::InvalidPath("path is not valid UTF-8".to_string()))?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn home_dir() -> Result<PathBuf, Error> {
    dirs::home_dir().ok_or_else(|| Error::InvalidPath("user home directory not found".to_string()))
}
