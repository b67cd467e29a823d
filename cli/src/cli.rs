// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use strandcal_core::{APP_NAME, Almanac};
use tracing_subscriber::EnvFilter;

use crate::cmd_combo::CmdCombo;
use crate::cmd_event::{CmdEventAdd, CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventNext};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_party::{CmdPartySet, CmdPartyShow};
use crate::cmd_shift::CmdShift;
use crate::cmd_today::CmdToday;
use crate::config::parse_config;

/// Run the Strand Calendar command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Track a fantasy calendar, its strand cycle and your party's events.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/strandcal/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/strandcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdToday::command())
            .subcommand(CmdShift::command())
            .subcommand(CmdCombo::command())
            .subcommand(
                Command::new("party")
                    .alias("p")
                    .about("Show or set the party log for the current day")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPartyShow::command())
                    .subcommand(CmdPartySet::command()),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your event list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventAdd::command())
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventNext::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdToday::NAME, matches)) => Today(CmdToday::from(matches)),
            Some((CmdShift::NAME, matches)) => Shift(CmdShift::from(matches)),
            Some((CmdCombo::NAME, matches)) => Combo(CmdCombo::from(matches)),
            Some(("party", matches)) => match matches.subcommand() {
                Some((CmdPartyShow::NAME, matches)) => PartyShow(CmdPartyShow::from(matches)),
                Some((CmdPartySet::NAME, matches)) => PartySet(CmdPartySet::from(matches)),
                _ => unreachable!(),
            },
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventAdd::NAME, matches)) => EventAdd(CmdEventAdd::from(matches)?),
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)?),
                Some((CmdEventDelete::NAME, matches)) => EventDelete(CmdEventDelete::from(matches)),
                Some((CmdEventNext::NAME, matches)) => EventNext(CmdEventNext::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Today(CmdToday::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the current date, strand and day notes
    Today(CmdToday),

    /// Advance or rewind the clock
    Shift(CmdShift),

    /// Show upcoming days sharing today's strand and magic season
    Combo(CmdCombo),

    /// Show the party log
    PartyShow(CmdPartyShow),

    /// Set the party log
    PartySet(CmdPartySet),

    /// Add a new event
    EventAdd(CmdEventAdd),

    /// List events
    EventList(CmdEventList),

    /// Edit an event
    EventEdit(CmdEventEdit),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// Show the next occurrences of an event
    EventNext(CmdEventNext),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Today(a)       => Self::run_with(config, |x| a.run(x)),
            Shift(a)       => Self::run_with(config, |x| a.run(x)),
            Combo(a)       => Self::run_with(config, |x| a.run(x)),
            PartyShow(a)   => Self::run_with(config, |x| a.run(x)),
            PartySet(a)    => Self::run_with(config, |x| a.run(x)),
            EventAdd(a)    => Self::run_with(config, |x| a.run(x)),
            EventList(a)   => Self::run_with(config, |x| a.run(x)),
            EventEdit(a)   => Self::run_with(config, |x| a.run(x)),
            EventDelete(a) => Self::run_with(config, |x| a.run(x)),
            EventNext(a)   => Self::run_with(config, |x| a.run(x)),
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Almanac) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, _config) = parse_config(config)?;
        let mut almanac = Almanac::new(core_config)?;
        f(&mut almanac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use strandcal_core::RecurrenceRule;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Today(_)));
    }

    #[test]
    fn test_parse_default_today() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Today(_)));
    }

    #[test]
    fn test_parse_today() {
        let cli = Cli::try_parse_from(vec!["test", "today", "--effect"]).unwrap();
        match cli.command {
            Commands::Today(cmd) => assert!(cmd.effect),
            _ => panic!("Expected Today command"),
        }
    }

    #[test]
    fn test_parse_shift_days() {
        let cli = Cli::try_parse_from(vec!["test", "shift", "--days", "3"]).unwrap();
        match cli.command {
            Commands::Shift(cmd) => {
                assert_eq!(cmd.days, 3);
                assert_eq!(cmd.hours, 0);
            }
            _ => panic!("Expected Shift command"),
        }
    }

    #[test]
    fn test_parse_shift_negative_hours() {
        let cli = Cli::try_parse_from(vec!["test", "shift", "-H", "-2"]).unwrap();
        match cli.command {
            Commands::Shift(cmd) => {
                assert_eq!(cmd.days, 0);
                assert_eq!(cmd.hours, -2);
            }
            _ => panic!("Expected Shift command"),
        }
    }

    #[test]
    fn test_parse_shift_requires_a_delta() {
        assert!(Cli::try_parse_from(vec!["test", "shift"]).is_err());
    }

    #[test]
    fn test_parse_combo() {
        let cli = Cli::try_parse_from(vec!["test", "combo", "--count", "5"]).unwrap();
        match cli.command {
            Commands::Combo(cmd) => assert_eq!(cmd.count, 5),
            _ => panic!("Expected Combo command"),
        }
    }

    #[test]
    fn test_parse_party_show() {
        let cli = Cli::try_parse_from(vec!["test", "party", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::PartyShow(_)));
    }

    #[test]
    fn test_parse_party_set() {
        let cli = Cli::try_parse_from(vec!["test", "party", "set", "Fought the wyrm"]).unwrap();
        match cli.command {
            Commands::PartySet(cmd) => assert_eq!(cmd.text, "Fought the wyrm"),
            _ => panic!("Expected PartySet command"),
        }
    }

    #[test]
    fn test_parse_event_add() {
        let args = vec!["test", "event", "add", "Festival", "--rule", "yearly"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventAdd(cmd) => {
                assert_eq!(cmd.name, "Festival");
                assert_eq!(cmd.rule, RecurrenceRule::Yearly);
            }
            _ => panic!("Expected EventAdd command"),
        }
    }

    #[test]
    fn test_parse_event_add_rejects_bad_rule() {
        let args = vec!["test", "event", "add", "Festival", "--rule", "weekly"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_event_list() {
        let cli = Cli::try_parse_from(vec!["test", "event", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::EventList(_)));
    }

    #[test]
    fn test_parse_event_edit() {
        let args = vec!["test", "event", "edit", "12", "0", "--name", "Renamed"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventEdit(cmd) => {
                assert_eq!(cmd.day, 12);
                assert_eq!(cmd.index, 0);
                assert_eq!(cmd.patch.name, Some("Renamed".to_string()));
            }
            _ => panic!("Expected EventEdit command"),
        }
    }

    #[test]
    fn test_parse_event_delete() {
        let cli = Cli::try_parse_from(vec!["test", "event", "delete", "12", "0"]).unwrap();
        match cli.command {
            Commands::EventDelete(cmd) => {
                assert_eq!(cmd.day, 12);
                assert_eq!(cmd.index, 0);
            }
            _ => panic!("Expected EventDelete command"),
        }
    }

    #[test]
    fn test_parse_event_next() {
        let args = vec!["test", "event", "next", "12", "0", "--count", "3"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventNext(cmd) => {
                assert_eq!(cmd.day, 12);
                assert_eq!(cmd.index, 0);
                assert_eq!(cmd.count, 3);
            }
            _ => panic!("Expected EventNext command"),
        }
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
