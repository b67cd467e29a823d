// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_combo;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_party;
mod cmd_shift;
mod cmd_today;
mod config;
mod event_formatter;

pub use crate::cli::{Cli, Commands, run};
