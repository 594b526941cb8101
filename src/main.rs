// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Byte distribution analysis of SHA-256 and HMAC-SHA256 digests.

pub mod analysis;
pub mod config;
pub mod digest;
pub mod error;
pub mod frequency;
pub mod report;
pub mod samplers;
pub mod stats;
mod strings;
pub mod utils;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use config::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let start = std::time::Instant::now();
    let config = Cli::parse().into_config();
    let mut source = config.strategy.build(config.independent_timestamps);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match analysis::run(&mut *source, &config, &mut out) {
        Ok(_) => {
            log::info!("Full program runtime: {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(out, "{}", err);
            let _ = out.flush();
            ExitCode::FAILURE
        }
    }
}
