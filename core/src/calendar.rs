// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure date arithmetic for the fantasy calendar.
//!
//! Everything here is a function of a single integer day counter; there is no
//! hidden state and no caching.

/// The strand cycle advances once per week.
pub const DAYS_IN_WEEK: i64 = 7;

/// Length of one magic season, independent of month and year boundaries.
pub const DAYS_IN_MAGIC_SEASON: i64 = 59;

/// Number of strands in the rotating cycle.
pub const STRAND_COUNT: usize = 96;

/// Month names, in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar-year quarters, derived from the month.
pub const SEASONS: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];

/// Magic season labels, one per 59-day cycle slot.
pub const MAGIC_SEASONS: [&str; 3] = ["Low", "Mid", "High"];

const BASE_MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Every fourth year is a leap year. No century exceptions.
pub fn is_leap(year: i64) -> bool {
    year % 4 == 0
}

/// Number of days in the given year.
pub fn year_length(year: i64) -> i64 {
    if is_leap(year) { 366 } else { 365 }
}

/// Month lengths for the given year, with February extended in leap years.
pub fn month_lengths(year: i64) -> [i64; 12] {
    let mut lengths = BASE_MONTH_LENGTHS;
    if is_leap(year) {
        lengths[1] = 29;
    }
    lengths
}

/// The full derived description of a single day-counter value across all
/// cycles. Computing it is deterministic: the same day counter always yields
/// the same composite date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeDate {
    /// Year since the epoch, starting at 0.
    pub year: i64,

    /// Month within the year, 0-based.
    pub month: usize,

    /// Day within the month, 1-based.
    pub day: i64,

    /// Season index into [`SEASONS`].
    pub season: usize,

    /// Magic season index into [`MAGIC_SEASONS`].
    pub magic: usize,

    /// Strand cycle slot, 0-based. Displayed ids are `strand + 1`.
    pub strand: usize,
}

impl CompositeDate {
    /// Derives the composite date for an absolute day counter.
    ///
    /// The calendar does not extend before the epoch: negative counters are
    /// clamped to day 0.
    pub fn from_days(total_days: i64) -> Self {
        let total = total_days.max(0);

        let mut d = total;
        let mut year = 0;
        while d >= year_length(year) {
            d -= year_length(year);
            year += 1;
        }

        let lengths = month_lengths(year);
        let mut month = 0;
        while d >= lengths[month] {
            d -= lengths[month];
            month += 1;
        }

        CompositeDate {
            year,
            month,
            day: d + 1,
            season: month / 3 % 4,
            magic: (total / DAYS_IN_MAGIC_SEASON % 3) as usize,
            strand: (total / DAYS_IN_WEEK % STRAND_COUNT as i64) as usize,
        }
    }

    /// The displayed strand id, 1..=96.
    pub fn strand_id(&self) -> usize {
        self.strand + 1
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month]
    }

    pub fn season_name(&self) -> &'static str {
        SEASONS[self.season]
    }

    pub fn magic_name(&self) -> &'static str {
        MAGIC_SEASONS[self.magic]
    }
}

/// English ordinal suffix for a day-of-month.
pub fn ordinal_suffix(day: i64) -> &'static str {
    match day % 100 {
        10..=20 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Renders the canonical date banner.
///
/// `strand_name` is the already-resolved visible name; when it is empty the
/// banner reads "No Strand" while still appending the strand id.
pub fn banner(c: &CompositeDate, strand_name: &str) -> String {
    let strand = if strand_name.is_empty() {
        "No Strand".to_string()
    } else {
        format!("Strand of {strand_name}")
    };
    format!(
        "{} {}{} {} {}, {}({}) Of the year {}.",
        c.month_name(),
        c.day,
        ordinal_suffix(c.day),
        c.magic_name(),
        c.season_name(),
        strand,
        c.strand_id(),
        c.year
    )
}

/// Prefixes a banner with the zero-padded hour of day.
pub fn hour_banner(hour: i64, banner: &str) -> String {
    format!("{hour:02}:00 — {banner}")
}
