// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strand Calendar - track a fantasy calendar, its strand cycle and your
//! party's events from the command line.

use std::error::Error;

use strandcal_cli::run;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
