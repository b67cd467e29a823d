// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use colored::Colorize;
use strandcal_core::{Event, MONTHS, ordinal_suffix};

/// Renders event rows for terminal output.
///
/// Each row carries the day key and position the event is stored under, which
/// together form the reference the edit and delete commands take.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFormatter;

impl EventFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, rows: &[(i64, usize, &Event)]) -> String {
        let mut out = String::new();
        for (day, index, event) in rows {
            let reference = format!("{day}.{index}");
            let _ = writeln!(
                out,
                "  {:<10} {:<13} {:<24} {}",
                reference.cyan(),
                event.rule.as_ref(),
                anchor(event),
                event.name.bold(),
            );
            if !event.description.is_empty() {
                let _ = writeln!(out, "  {:<10} {}", "", event.description.dimmed());
            }
        }
        out
    }
}

/// The anchor date of an event, rendered like "March 15th, year 0".
fn anchor(event: &Event) -> String {
    let month = MONTHS.get(event.month).copied().unwrap_or("?");
    format!(
        "{month} {}{}, year {}",
        event.day,
        ordinal_suffix(event.day),
        event.year
    )
}
