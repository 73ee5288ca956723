// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Voice setup — desktop harness.
//
// Plays the UI layer: reads one encoded method call per line from stdin and
// writes one reply envelope per line to stdout. Two control lines drive the
// surface lifecycle: `:detach` and `:attach`.
//
//   voice-setup [--dry-run] [CONFIG.json]

mod dry_run;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use voice_setup_bridge::stub::StubSurface;
use voice_setup_bridge::{ChannelEndpoint, PlatformSurface};
use voice_setup_core::BridgeConfig;
use voice_setup_core::error::Result;

use dry_run::DryRunSurface;

struct Args {
    dry_run: bool,
    config: Option<PathBuf>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Args {
    let mut parsed = Args {
        dry_run: false,
        config: None,
    };
    for arg in args {
        match arg.as_str() {
            "--dry-run" => parsed.dry_run = true,
            _ => parsed.config = Some(PathBuf::from(arg)),
        }
    }
    parsed
}

fn main() -> ExitCode {
    let args = parse_args(std::env::args().skip(1));
    let config = match &args.config {
        Some(path) => BridgeConfig::load(path),
        None => Ok(BridgeConfig::default()),
    };
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };

    let surface: Rc<dyn PlatformSurface> = if args.dry_run {
        Rc::new(DryRunSurface)
    } else {
        Rc::new(StubSurface)
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&config, surface, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "voice setup harness failed");
            ExitCode::FAILURE
        }
    }
}

/// Feed every line of `input` through the channel and write the replies.
fn run(
    config: &BridgeConfig,
    surface: Rc<dyn PlatformSurface>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut endpoint = ChannelEndpoint::new(config)?;
    endpoint.attach(&surface);
    tracing::info!(channel = endpoint.name(), "voice setup channel ready");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            ":detach" => endpoint.detach(),
            ":attach" => endpoint.attach(&surface),
            call => match endpoint.handle_message(call.as_bytes()) {
                Ok(reply) => {
                    output.write_all(&reply)?;
                    writeln!(output)?;
                }
                Err(e) => tracing::warn!(error = %e, "dropping malformed call"),
            },
        }
    }

    // Unbind before the surface goes away.
    endpoint.detach();
    drop(surface);
    output.flush()?;
    Ok(())
}
