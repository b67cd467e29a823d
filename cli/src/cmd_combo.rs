// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use strandcal_core::Almanac;

#[derive(Debug, Clone, Copy)]
pub struct CmdCombo {
    /// How many matching days to show
    pub count: usize,
}

impl CmdCombo {
    pub const NAME: &str = "combo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show upcoming days sharing today's strand and magic season")
            .arg(
                arg!(-n --count [COUNT] "How many matching days to show")
                    .value_parser(value_parser!(usize))
                    .default_value("3"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            count: matches.get_one("count").copied().unwrap_or(3),
        }
    }

    pub fn run(self, almanac: &mut Almanac) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching for matching strand and magic days...");
        let combos = almanac.next_same_combo(self.count);
        if combos.is_empty() {
            println!("{}", "No matching days found".italic());
            return Ok(());
        }

        println!("{}", "Days sharing today's strand and magic season".green());
        for combo in combos {
            println!("  {combo}");
        }
        Ok(())
    }
}
