// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Potluck - sign up for what you bring, from the terminal

use std::process::ExitCode;

use potluck_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    // `run` has already printed the error.
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
