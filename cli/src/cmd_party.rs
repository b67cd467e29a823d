// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use strandcal_core::Almanac;

#[derive(Debug, Clone, Copy)]
pub struct CmdPartyShow;

impl CmdPartyShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the party log for the current day")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing the party log...");
        let party = almanac.party();
        if party.is_empty() {
            println!("{}", "No party log for today".italic());
        } else {
            println!("{party}");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPartySet {
    /// The new party log text, empty clears the log
    pub text: String,
}

impl CmdPartySet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set the party log for the current day")
            .arg(arg!(text: <TEXT> "The new party log text, an empty string clears it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("text") {
            Some(text) => Self { text: text.clone() },
            _ => unreachable!(),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting the party log...");
        almanac.set_party(self.text)?;
        println!("{}", "Party log updated".green());
        Ok(())
    }
}
