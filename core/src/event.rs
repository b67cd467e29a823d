// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::CompositeDate;
use crate::error::Error;

/// Policy governing which future days an event re-matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRule {
    /// Fires on exactly one calendar date (year, month, day).
    #[serde(rename = "one")]
    One,

    /// Fires on the same month and day every year.
    #[serde(rename = "yearly")]
    Yearly,

    /// Fires whenever the anchored strand comes back around.
    #[serde(rename = "strand")]
    Strand,

    /// Strand match, restricted to the anchored season.
    #[serde(rename = "strand+season")]
    StrandSeason,

    /// Strand match, restricted to the anchored magic season.
    #[serde(rename = "strand+mag")]
    StrandMagic,

    /// Strand match, restricted to both anchored labels.
    #[serde(rename = "strand+both")]
    StrandBoth,

    /// Unrecognized rule values are kept but never match.
    #[serde(other, rename = "unknown")]
    Unknown,
}

const RULE_ONE: &str = "one";
const RULE_YEARLY: &str = "yearly";
const RULE_STRAND: &str = "strand";
const RULE_STRAND_SEASON: &str = "strand+season";
const RULE_STRAND_MAGIC: &str = "strand+mag";
const RULE_STRAND_BOTH: &str = "strand+both";

impl RecurrenceRule {
    /// Strand-family rules only ever match on 7-day-aligned offsets.
    pub fn is_strand_family(&self) -> bool {
        matches!(
            self,
            RecurrenceRule::Strand
                | RecurrenceRule::StrandSeason
                | RecurrenceRule::StrandMagic
                | RecurrenceRule::StrandBoth
        )
    }
}

impl AsRef<str> for RecurrenceRule {
    fn as_ref(&self) -> &str {
        match self {
            RecurrenceRule::One => RULE_ONE,
            RecurrenceRule::Yearly => RULE_YEARLY,
            RecurrenceRule::Strand => RULE_STRAND,
            RecurrenceRule::StrandSeason => RULE_STRAND_SEASON,
            RecurrenceRule::StrandMagic => RULE_STRAND_MAGIC,
            RecurrenceRule::StrandBoth => RULE_STRAND_BOTH,
            RecurrenceRule::Unknown => "unknown",
        }
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RecurrenceRule {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            RULE_ONE => Ok(RecurrenceRule::One),
            RULE_YEARLY => Ok(RecurrenceRule::Yearly),
            RULE_STRAND => Ok(RecurrenceRule::Strand),
            RULE_STRAND_SEASON => Ok(RecurrenceRule::StrandSeason),
            RULE_STRAND_MAGIC => Ok(RecurrenceRule::StrandMagic),
            RULE_STRAND_BOTH => Ok(RecurrenceRule::StrandBoth),
            _ => Err(format!(
                "unknown recurrence rule '{value}', expected one of: {RULE_ONE}, {RULE_YEARLY}, \
                 {RULE_STRAND}, {RULE_STRAND_SEASON}, {RULE_STRAND_MAGIC}, {RULE_STRAND_BOTH}"
            )),
        }
    }
}

/// A stored event, anchored to the composite date it was created on.
///
/// The anchor fields are immutable snapshots; matching compares them against
/// a freshly derived [`CompositeDate`]. Serialized field names follow the
/// day-notes wire format. Deserialization goes through [`EventRecord`] so
/// that legacy entries are normalized before any consumer reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EventRecord")]
pub struct Event {
    pub name: String,

    #[serde(rename = "desc")]
    pub description: String,

    pub rule: RecurrenceRule,

    /// Anchor year.
    #[serde(rename = "y")]
    pub year: i64,

    /// Anchor month, 0-based.
    #[serde(rename = "m")]
    pub month: usize,

    /// Anchor day of month, 1-based.
    #[serde(rename = "d")]
    pub day: i64,

    /// Anchor strand id, 1..=96.
    #[serde(rename = "sid")]
    pub strand_id: usize,

    /// Anchor season label.
    pub season: String,

    /// Anchor magic season label.
    #[serde(rename = "mseason")]
    pub magic_season: String,
}

/// Raw wire shape of a stored event, including the legacy variant that kept
/// the display text under `text` and had no description.
#[derive(Debug, Clone, Deserialize)]
struct EventRecord {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    text: Option<String>,

    #[serde(default)]
    desc: String,

    #[serde(default = "unknown_rule")]
    rule: RecurrenceRule,

    #[serde(default)]
    y: i64,

    #[serde(default)]
    m: usize,

    #[serde(default)]
    d: i64,

    #[serde(default)]
    sid: usize,

    #[serde(default)]
    season: String,

    #[serde(default)]
    mseason: String,
}

fn unknown_rule() -> RecurrenceRule {
    RecurrenceRule::Unknown
}

impl From<EventRecord> for Event {
    /// The legacy-to-current normalization. Idempotent: records already in
    /// the current shape pass through unchanged.
    fn from(record: EventRecord) -> Self {
        Event {
            name: record.name.or(record.text).unwrap_or_default(),
            description: record.desc,
            rule: record.rule,
            year: record.y,
            month: record.m,
            day: record.d,
            strand_id: record.sid,
            season: record.season,
            magic_season: record.mseason,
        }
    }
}

/// Draft for a new event, anchored when it is accepted into the store.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub rule: RecurrenceRule,
}

impl EventDraft {
    /// Validates the draft and anchors it to the given composite date.
    ///
    /// Rejects empty (or whitespace-only) names before an [`Event`] is ever
    /// constructed, so an unnamed event cannot reach persisted storage.
    pub fn anchored(self, c: &CompositeDate) -> Result<Event, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyEventName);
        }

        Ok(Event {
            name: self.name,
            description: self.description,
            rule: self.rule,
            year: c.year,
            month: c.month,
            day: c.day,
            strand_id: c.strand_id(),
            season: c.season_name().to_string(),
            magic_season: c.magic_name().to_string(),
        })
    }
}

/// Patch for an event, allowing partial updates of the mutable fields.
/// Anchor fields are immutable and cannot be patched.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rule: Option<RecurrenceRule>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.rule.is_none()
    }

    /// Applies the patch to an event in place.
    pub(crate) fn apply_to(&self, event: &mut Event) -> Result<(), Error> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::EmptyEventName);
            }
            event.name = name.clone();
        }

        if let Some(description) = &self.description {
            event.description = description.clone();
        }

        if let Some(rule) = self.rule {
            event.rule = rule;
        }

        Ok(())
    }
}
