// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;

const HOURS_IN_DAY: i64 = 24;

/// Owner of the current day and hour counters.
///
/// Both counters live in plain-text files holding a single decimal integer.
/// Every shift persists synchronously before returning.
#[derive(Debug)]
pub struct Clock {
    day_file: PathBuf,
    hour_file: PathBuf,
    total_days: i64,
    hour: i64,
}

impl Clock {
    /// Loads both counters, self-healing missing or unparseable files to 0.
    pub fn load(day_file: impl Into<PathBuf>, hour_file: impl Into<PathBuf>) -> Result<Self, Error> {
        let day_file = day_file.into();
        let hour_file = hour_file.into();
        let total_days = load_counter(&day_file, |_| true)?;
        let hour = load_counter(&hour_file, |h| (0..HOURS_IN_DAY).contains(&h))?;
        Ok(Clock {
            day_file,
            hour_file,
            total_days,
            hour,
        })
    }

    /// The absolute day counter; day 0 is the epoch.
    pub fn total_days(&self) -> i64 {
        self.total_days
    }

    /// Hour of day, always in `0..24`.
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// Shifts the day counter by `delta`, unbounded in either direction.
    /// Persists.
    pub fn shift_days(&mut self, delta: i64) -> Result<(), Error> {
        self.total_days += delta;
        write_counter(&self.day_file, self.total_days)
    }

    /// Shifts the hour counter by `delta`, wrapping modulo 24 and adjusting
    /// the day counter on a midnight crossing. Persists both counters.
    ///
    /// Known limitation: only single-step wraps (23 to 0, or 0 to 23) are
    /// detected, so a shift crossing midnight more than once in one call
    /// under-counts day rollovers.
    pub fn shift_hours(&mut self, delta: i64) -> Result<(), Error> {
        let old = self.hour;
        let new = (old + delta).rem_euclid(HOURS_IN_DAY);

        if old == 23 && new == 0 {
            self.shift_days(1)?;
        }
        if old == 0 && new == 23 {
            self.shift_days(-1)?;
        }

        self.hour = new;
        write_counter(&self.hour_file, self.hour)
    }
}

fn load_counter(path: &Path, valid: impl Fn(i64) -> bool) -> Result<i64, Error> {
    match fs::read_to_string(path) {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(value) if valid(value) => return Ok(value),
            Ok(value) => {
                tracing::warn!(path = %path.display(), value, "counter out of range, resetting to 0");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "counter unparseable, resetting to 0");
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no counter file yet, starting at 0");
        }
        Err(e) => return Err(e.into()),
    }

    // Self-heal the file for the next run.
    write_counter(path, 0)?;
    Ok(0)
}

fn write_counter(path: &Path, value: i64) -> Result<(), Error> {
    fs::write(path, value.to_string())?;
    Ok(())
}
