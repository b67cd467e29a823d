// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use strandcal_core::Almanac;

use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdToday {
    /// Also print the effect block for today's strand
    pub effect: bool,
}

impl CmdToday {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("now")
            .about("Show the current date, strand and day notes")
            .arg(arg!(-e --effect "Also show the effect block for today's strand"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            effect: matches.get_flag("effect"),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing today...");
        println!("{}", almanac.format_date().bold());

        if self.effect {
            println!();
            println!("{}", almanac.current_strand_effect());
        }

        let party = almanac.party();
        if !party.is_empty() {
            println!();
            println!("{} {}", "Party:".green().bold(), party);
        }

        let active = almanac.active_events();
        if !active.is_empty() {
            println!();
            println!("{}", "Today's events".green().bold());
            print!("{}", EventFormatter::new().format(&active));
        }

        Ok(())
    }
}
