// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Decides whether an event rule fires on a given composite date, and
//! enumerates future firing dates by forward day-stepping.

use crate::calendar::{CompositeDate, DAYS_IN_WEEK, year_length};
use crate::event::{Event, RecurrenceRule};

/// Forward searches give up after this many simulated years, so a rule that
/// can never match again (for example a stale one-shot) terminates with a
/// short result instead of hanging.
pub const SEARCH_HORIZON_YEARS: i64 = 400;

fn search_horizon() -> i64 {
    year_length(0) * SEARCH_HORIZON_YEARS
}

/// Does `event` fire on the composite date `c`?
///
/// Total over all inputs: an [`RecurrenceRule::Unknown`] rule fails closed
/// rather than erroring.
pub fn matches(event: &Event, c: &CompositeDate) -> bool {
    match event.rule {
        RecurrenceRule::One => {
            event.year == c.year && event.month == c.month && event.day == c.day
        }
        RecurrenceRule::Yearly => event.month == c.month && event.day == c.day,
        RecurrenceRule::Strand
        | RecurrenceRule::StrandSeason
        | RecurrenceRule::StrandMagic
        | RecurrenceRule::StrandBoth => {
            if event.strand_id != c.strand_id() {
                return false;
            }
            match event.rule {
                RecurrenceRule::Strand => true,
                RecurrenceRule::StrandSeason => event.season == c.season_name(),
                RecurrenceRule::StrandMagic => event.magic_season == c.magic_name(),
                RecurrenceRule::StrandBoth => {
                    event.season == c.season_name() && event.magic_season == c.magic_name()
                }
                _ => unreachable!(),
            }
        }
        RecurrenceRule::Unknown => false,
    }
}

/// The next `count` dates on which `event` fires, walking forward from the
/// day after `from_days`.
///
/// Strand-family rules jump 7 days after each match, since they only ever
/// match on week-aligned offsets; all other rules advance one day at a time.
/// Returns fewer than `count` dates when the search horizon is exhausted.
pub fn next_occurrences(event: &Event, from_days: i64, count: usize) -> Vec<CompositeDate> {
    let horizon = search_horizon();
    let step_after_match = if event.rule.is_strand_family() {
        DAYS_IN_WEEK
    } else {
        1
    };

    let mut found = Vec::new();
    let mut off = 1;
    while found.len() < count && off < horizon {
        let c = CompositeDate::from_days(from_days + off);
        if matches(event, &c) {
            found.push(c);
            off += step_after_match;
        } else {
            off += 1;
        }
    }
    found
}

/// The next `count` future dates sharing the current (strand, magic season)
/// pair of `from_days`.
///
/// The strand only advances every 7 days, so a fixed 7-day step is the
/// smallest that can possibly repeat the pair.
pub fn next_same_combo(from_days: i64, count: usize) -> Vec<CompositeDate> {
    let current = CompositeDate::from_days(from_days);
    let horizon = search_horizon();

    let mut found = Vec::new();
    let mut off = DAYS_IN_WEEK;
    while found.len() < count && off < horizon {
        let c = CompositeDate::from_days(from_days + off);
        if c.strand == current.strand && c.magic == current.magic {
            found.push(c);
        }
        off += DAYS_IN_WEEK;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;

    fn anchored(rule: RecurrenceRule, at_days: i64) -> Event {
        EventDraft {
            name: "test".to_string(),
            description: String::new(),
            rule,
        }
        .anchored(&CompositeDate::from_days(at_days))
        .unwrap()
    }

    #[test]
    fn one_shot_matches_only_its_exact_date() {
        let event = anchored(RecurrenceRule::One, 74); // March 15th, year 0
        assert!(matches(&event, &CompositeDate::from_days(74)));
        assert!(!matches(&event, &CompositeDate::from_days(75)));
        // March 15th again, but in year 1.
        assert!(!matches(&event, &CompositeDate::from_days(74 + 365)));
    }

    #[test]
    fn yearly_ignores_the_year() {
        let event = Event {
            month: 2,
            day: 15,
            ..anchored(RecurrenceRule::Yearly, 0)
        };
        for year in [0, 3, 7] {
            let c = CompositeDate {
                year,
                month: 2,
                day: 15,
                season: 0,
                magic: 0,
                strand: 0,
            };
            assert!(matches(&event, &c));
        }
        let other_day = CompositeDate {
            year: 0,
            month: 2,
            day: 16,
            season: 0,
            magic: 0,
            strand: 0,
        };
        assert!(!matches(&event, &other_day));
    }

    #[test]
    fn strand_rules_require_the_anchored_strand() {
        let event = anchored(RecurrenceRule::Strand, 0); // sid 1
        assert!(matches(&event, &CompositeDate::from_days(3)));
        assert!(!matches(&event, &CompositeDate::from_days(7)));
        // Strand cycles back after 96 weeks.
        assert!(matches(&event, &CompositeDate::from_days(7 * 96)));
    }

    #[test]
    fn strand_season_rules_also_compare_labels() {
        let event = anchored(RecurrenceRule::StrandSeason, 0); // Winter, sid 1
        let revisit = CompositeDate::from_days(7 * 96); // strand 0 again
        assert_eq!(revisit.season_name(), "Fall");
        assert!(!matches(&event, &revisit));

        let both = anchored(RecurrenceRule::StrandBoth, 0);
        assert!(matches(&both, &CompositeDate::from_days(1)));
    }

    #[test]
    fn unknown_rules_never_match() {
        let event = Event {
            rule: RecurrenceRule::Unknown,
            ..anchored(RecurrenceRule::One, 0)
        };
        for d in 0..500 {
            assert!(!matches(&event, &CompositeDate::from_days(d)));
        }
    }

    #[test]
    fn next_occurrences_of_a_yearly_event() {
        let event = Event {
            month: 2,
            day: 15,
            ..anchored(RecurrenceRule::Yearly, 0)
        };
        let dates = next_occurrences(&event, 0, 2);
        assert_eq!(dates.len(), 2);
        assert_eq!((dates[0].year, dates[0].month, dates[0].day), (0, 2, 15));
        assert_eq!((dates[1].year, dates[1].month, dates[1].day), (1, 2, 15));
    }

    #[test]
    fn strand_walk_jumps_a_week_after_each_match() {
        let event = anchored(RecurrenceRule::Strand, 0);
        let dates = next_occurrences(&event, 0, 2);
        assert_eq!(dates.len(), 2);
        // Day 1 still sits in strand 1's week; the next window opens after
        // the full 96-strand cycle.
        assert_eq!(dates[0], CompositeDate::from_days(1));
        assert_eq!(dates[1], CompositeDate::from_days(7 * 96));
    }

    #[test]
    fn stale_one_shot_terminates_with_a_short_result() {
        let event = anchored(RecurrenceRule::One, 0); // January 1st, year 0
        let dates = next_occurrences(&event, 10, 3);
        assert!(dates.is_empty());
    }

    #[test]
    fn same_combo_results_share_strand_and_magic() {
        let current = CompositeDate::from_days(0);
        let dates = next_same_combo(0, 2);
        assert!(!dates.is_empty());
        for c in &dates {
            assert_eq!(c.strand, current.strand);
            assert_eq!(c.magic, current.magic);
        }
        // First recurrence of (strand 0, Low) after the epoch.
        assert_eq!(dates[0], CompositeDate::from_days(2688));
    }
}
