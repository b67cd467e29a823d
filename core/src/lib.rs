// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

mod almanac;
mod calendar;
mod clock;
mod config;
mod error;
mod event;
mod recurrence;
mod store;
mod strand;

pub use crate::almanac::Almanac;
pub use crate::calendar::{
    CompositeDate, DAYS_IN_MAGIC_SEASON, DAYS_IN_WEEK, MAGIC_SEASONS, MONTHS, SEASONS,
    STRAND_COUNT, banner, hour_banner, is_leap, month_lengths, ordinal_suffix, year_length,
};
pub use crate::clock::Clock;
pub use crate::config::{APP_NAME, Config};
pub use crate::error::Error;
pub use crate::event::{Event, EventDraft, EventPatch, RecurrenceRule};
pub use crate::recurrence::{SEARCH_HORIZON_YEARS, matches, next_occurrences, next_same_combo};
pub use crate::store::{DayEntry, NoteStore};
pub use crate::strand::{StrandCatalog, StrandEntry};
