// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgGroup, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use strandcal_core::Almanac;

#[derive(Debug, Clone, Copy)]
pub struct CmdShift {
    /// Days to advance, may be negative
    pub days: i64,

    /// Hours to advance, may be negative
    pub hours: i64,
}

impl CmdShift {
    pub const NAME: &str = "shift";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Advance or rewind the clock by days or hours")
            .group(ArgGroup::new("delta").multiple(true).required(true))
            .arg(
                arg!(-d --days [DAYS] "Days to advance, may be negative")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .group("delta"),
            )
            .arg(
                arg!(-H --hours [HOURS] "Hours to advance, may be negative")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .group("delta"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            days: matches.get_one("days").copied().unwrap_or(0),
            hours: matches.get_one("hours").copied().unwrap_or(0),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "shifting the clock...");
        if self.days != 0 {
            almanac.shift_days(self.days)?;
        }
        if self.hours != 0 {
            almanac.shift_hours(self.hours)?;
        }

        println!("{}", almanac.format_date().bold());
        Ok(())
    }
}
