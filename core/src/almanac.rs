// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use crate::calendar::{self, CompositeDate};
use crate::clock::Clock;
use crate::config::Config;
use crate::error::Error;
use crate::event::{Event, EventDraft, EventPatch};
use crate::recurrence;
use crate::store::NoteStore;
use crate::strand::StrandCatalog;

/// Strand Calendar engine facade.
///
/// Owns the clock, the strand catalog and the note store, and exposes the
/// queries and mutations the surrounding shell renders. Everything is
/// synchronous; every mutation persists before returning.
#[derive(Debug)]
pub struct Almanac {
    config: Config,
    clock: Clock,
    catalog: StrandCatalog,
    store: NoteStore,
}

impl Almanac {
    /// Creates a new engine instance with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;

        tracing::debug!(path = %config.data_dir.display(), "ensuring data directory exists");
        fs::create_dir_all(&config.data_dir)?;

        let clock = Clock::load(config.day_path(), config.hour_path())?;
        let catalog = StrandCatalog::load(&config.strands_path());
        let store = NoteStore::load(config.notes_path())?;

        Ok(Almanac {
            config,
            clock,
            catalog,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn catalog(&self) -> &StrandCatalog {
        &self.catalog
    }

    /// The composite date for the current day counter.
    pub fn today(&self) -> CompositeDate {
        CompositeDate::from_days(self.clock.total_days())
    }

    /// The date banner for an arbitrary composite date, resolving the strand
    /// name through the catalog (hidden strands show as "No Strand").
    pub fn banner(&self, c: &CompositeDate) -> String {
        calendar::banner(c, self.catalog.visible_name(c.strand_id()))
    }

    /// The hour-prefixed banner for right now.
    pub fn format_date(&self) -> String {
        calendar::hour_banner(self.clock.hour(), &self.banner(&self.today()))
    }

    /// The effect block for today's strand.
    pub fn current_strand_effect(&self) -> String {
        self.catalog.effect_summary(self.today().strand_id())
    }

    /// Today's party log text.
    pub fn party(&self) -> &str {
        self.store.party(self.clock.total_days())
    }

    /// Replaces today's party log.
    pub fn set_party(&mut self, text: impl Into<String>) -> Result<(), Error> {
        self.store.set_party(self.clock.total_days(), text)
    }

    /// Validates a draft, anchors it to today and stores it under today's
    /// day key.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event, Error> {
        let event = draft.anchored(&self.today())?;
        self.store.add_event(self.clock.total_days(), event.clone())?;
        Ok(event)
    }

    pub fn edit_event(&mut self, day: i64, index: usize, patch: &EventPatch) -> Result<(), Error> {
        self.store.edit_event(day, index, patch)
    }

    pub fn delete_event(&mut self, day: i64, index: usize) -> Result<Event, Error> {
        self.store.delete_event(day, index)
    }

    pub fn event_at(&self, day: i64, index: usize) -> Result<&Event, Error> {
        self.store.event_at(day, index)
    }

    /// Every stored event, in store order.
    pub fn all_events(&self) -> impl Iterator<Item = (i64, usize, &Event)> {
        self.store.all_events()
    }

    /// Events whose rule fires today, in store order.
    pub fn active_events(&self) -> Vec<(i64, usize, &Event)> {
        let today = self.today();
        self.store
            .all_events()
            .filter(|(_, _, event)| recurrence::matches(event, &today))
            .collect()
    }

    /// Banners for the next `count` days on which `event` fires.
    pub fn next_dates(&self, event: &Event, count: usize) -> Vec<String> {
        recurrence::next_occurrences(event, self.clock.total_days(), count)
            .iter()
            .map(|c| self.banner(c))
            .collect()
    }

    /// Banners for the next `count` days sharing today's strand and magic
    /// season.
    pub fn next_same_combo(&self, count: usize) -> Vec<String> {
        recurrence::next_same_combo(self.clock.total_days(), count)
            .iter()
            .map(|c| self.banner(c))
            .collect()
    }

    pub fn shift_days(&mut self, delta: i64) -> Result<(), Error> {
        self.clock.shift_days(delta)
    }

    pub fn shift_hours(&mut self, delta: i64) -> Result<(), Error> {
        self.clock.shift_hours(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecurrenceRule;

    fn almanac(dir: &tempfile::TempDir) -> Almanac {
        Almanac::new(Config::new(dir.path())).unwrap()
    }

    fn draft(name: &str, rule: RecurrenceRule) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            description: String::new(),
            rule,
        }
    }

    #[test]
    fn fresh_state_formats_the_epoch_banner() {
        let dir = tempfile::tempdir().unwrap();
        let almanac = almanac(&dir);
        assert_eq!(
            almanac.format_date(),
            "00:00 — January 1st Low Winter, No Strand(1) Of the year 0."
        );
        assert_eq!(almanac.current_strand_effect(), "No Effects.");
    }

    #[test]
    fn catalog_names_appear_in_the_banner() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("strands.json"),
            r#"{"1": {"Name": "Vex", "Hidden": "No"}}"#,
        )
        .unwrap();

        let almanac = almanac(&dir);
        assert_eq!(
            almanac.format_date(),
            "00:00 — January 1st Low Winter, Strand of Vex(1) Of the year 0."
        );
    }

    #[test]
    fn hidden_catalog_names_stay_out_of_the_banner() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("strands.json"),
            r#"{"1": {"Name": "Vex", "Hidden": "Yes"}}"#,
        )
        .unwrap();

        let almanac = almanac(&dir);
        assert!(almanac.format_date().contains("No Strand(1)"));
    }

    #[test]
    fn added_events_are_active_today_and_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut almanac = almanac(&dir);
            almanac
                .add_event(draft("Omen", RecurrenceRule::One))
                .unwrap();
            assert_eq!(almanac.active_events().len(), 1);
        }

        let almanac = almanac(&dir);
        assert_eq!(almanac.active_events().len(), 1);
        assert_eq!(almanac.event_at(0, 0).unwrap().name, "Omen");
    }

    #[test]
    fn one_shot_events_stop_firing_after_a_day_shift() {
        let dir = tempfile::tempdir().unwrap();
        let mut almanac = almanac(&dir);
        almanac
            .add_event(draft("Omen", RecurrenceRule::One))
            .unwrap();

        almanac.shift_days(1).unwrap();
        assert!(almanac.active_events().is_empty());
    }

    #[test]
    fn empty_event_names_are_rejected_before_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut almanac = almanac(&dir);
        let err = almanac.add_event(draft("", RecurrenceRule::One));
        assert!(matches!(err, Err(Error::EmptyEventName)));
        assert_eq!(almanac.all_events().count(), 0);
    }

    #[test]
    fn party_log_round_trips_for_today() {
        let dir = tempfile::tempdir().unwrap();
        let mut almanac = almanac(&dir);
        almanac.set_party("Fought the wyrm").unwrap();
        assert_eq!(almanac.party(), "Fought the wyrm");

        almanac.shift_days(1).unwrap();
        assert_eq!(almanac.party(), "");
    }

    #[test]
    fn next_dates_formats_banners() {
        let dir = tempfile::tempdir().unwrap();
        let mut almanac = almanac(&dir);
        let event = almanac
            .add_event(draft("Omen", RecurrenceRule::Yearly))
            .unwrap();

        let dates = almanac.next_dates(&event, 1);
        assert_eq!(
            dates,
            vec!["January 1st Low Winter, No Strand(53) Of the year 1.".to_string()]
        );
    }

    #[test]
    fn next_same_combo_returns_future_banners() {
        let dir = tempfile::tempdir().unwrap();
        let almanac = almanac(&dir);
        let combos = almanac.next_same_combo(1);
        assert_eq!(combos.len(), 1);
        assert!(combos[0].ends_with("."));
    }
}
