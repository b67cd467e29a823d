// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use strandcal_core::{Almanac, EventDraft, EventPatch, RecurrenceRule};

use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub name: String,
    pub description: String,
    pub rule: RecurrenceRule,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event anchored to the current day")
            .arg(arg!(name: <NAME> "The event name"))
            .arg(arg!(--description [DESCRIPTION] "A longer description of the event"))
            .arg(
                arg!(-r --rule [RULE] "The recurrence rule")
                    .long_help(
                        "\
The recurrence rule: one (fires on this date only), yearly (same month and day every year), \
strand (every return of today's strand), strand+season, strand+mag or strand+both (strand \
returns restricted to today's season, magic season or both).",
                    )
                    .default_value("one"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = match matches.get_one::<String>("name") {
            Some(name) => name.clone(),
            _ => unreachable!(),
        };
        let description = matches
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default();
        let rule = match matches.get_one::<String>("rule") {
            Some(rule) => rule.parse()?,
            _ => unreachable!(),
        };
        Ok(Self {
            name,
            description,
            rule,
        })
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let event = almanac.add_event(EventDraft {
            name: self.name,
            description: self.description,
            rule: self.rule,
        })?;

        let day = almanac.clock().total_days();
        let index = almanac
            .all_events()
            .filter(|(d, _, _)| *d == day)
            .count()
            .saturating_sub(1);
        println!("{}", "Added".green());
        print!("{}", EventFormatter::new().format(&[(day, index, &event)]));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList;

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List every stored event")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events: Vec<_> = almanac.all_events().collect();
        if events.is_empty() {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        print!("{}", EventFormatter::new().format(&events));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    /// The day key of the event to edit
    pub day: i64,

    /// The position of the event within its day
    pub index: usize,

    pub patch: EventPatch,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event by its day key and position")
            .arg(day_arg())
            .arg(index_arg())
            .arg(arg!(-n --name [NAME] "A new name for the event"))
            .arg(arg!(--description [DESCRIPTION] "A new description, an empty string clears it"))
            .arg(arg!(-r --rule [RULE] "A new recurrence rule"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let rule = match matches.get_one::<String>("rule") {
            Some(rule) => Some(rule.parse::<RecurrenceRule>()?),
            None => None,
        };
        let patch = EventPatch {
            name: matches.get_one("name").cloned(),
            description: matches.get_one("description").cloned(),
            rule,
        };
        if patch.is_empty() {
            return Err("At least one of --name, --description or --rule is required".into());
        }

        Ok(Self {
            day: get_day(matches),
            index: get_index(matches),
            patch,
        })
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        almanac.edit_event(self.day, self.index, &self.patch)?;

        let event = almanac.event_at(self.day, self.index)?.clone();
        println!("{}", "Updated".green());
        print!(
            "{}",
            EventFormatter::new().format(&[(self.day, self.index, &event)])
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    pub day: i64,
    pub index: usize,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event by its day key and position")
            .arg(day_arg())
            .arg(index_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            index: get_index(matches),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let event = almanac.delete_event(self.day, self.index)?;
        println!("{} {}", "Deleted".green(), event.name);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventNext {
    pub day: i64,
    pub index: usize,

    /// How many occurrences to show
    pub count: usize,
}

impl CmdEventNext {
    pub const NAME: &str = "next";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the next days on which an event fires")
            .arg(day_arg())
            .arg(index_arg())
            .arg(
                arg!(-n --count [COUNT] "How many occurrences to show")
                    .value_parser(value_parser!(usize))
                    .default_value("5"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            index: get_index(matches),
            count: matches.get_one("count").copied().unwrap_or(5),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching for the next occurrences...");
        let event = almanac.event_at(self.day, self.index)?.clone();
        let dates = almanac.next_dates(&event, self.count);
        if dates.is_empty() {
            println!("{}", "No upcoming occurrences found".italic());
            return Ok(());
        }

        println!("{} {}", "Next occurrences of".green(), event.name.bold());
        for date in dates {
            println!("  {date}");
        }
        Ok(())
    }
}

fn day_arg() -> clap::Arg {
    arg!(day: <DAY> "The day key the event is stored under")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
}

fn index_arg() -> clap::Arg {
    arg!(index: <INDEX> "The position of the event within its day, starting at 0")
        .value_parser(value_parser!(usize))
}

fn get_day(matches: &ArgMatches) -> i64 {
    match matches.get_one("day") {
        Some(day) => *day,
        _ => unreachable!(),
    }
}

fn get_index(matches: &ArgMatches) -> usize {
    match matches.get_one("index") {
        Some(index) => *index,
        _ => unreachable!(),
    }
}
