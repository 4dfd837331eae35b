//! # execinfo - Demo Entry Point
//!
//! Two subcommands:
//! - **demo**: recurse a few levels, capture, and print the backtrace as
//!   numbered lines, through the descriptor emitter (`--fd`) or as JSON
//! - **bench**: time capture and symbolization

// Time conversions lose precision for display
#![allow(clippy::cast_precision_loss)]

use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info};
use std::hint::black_box;
use std::io::stdout;
use std::time::{Duration, Instant};

use execinfo::cli::{Args, Command};
use execinfo::preflight::run_preflight_checks;
use execinfo::report::BacktraceReport;
use execinfo::{
    capture, symbols, symbols_fd, symbols_with, Address, DynamicLoader, SymbolStyle, MAX_FRAMES,
};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.to_string().to_lowercase().contains("invalid argument") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let quiet = args.quiet;

    if !quiet {
        println!("execinfo v{}", execinfo::VERSION);
    }

    match args.command {
        Command::Demo { depth, frames, fd, demangle, json } => {
            if frames == 0 {
                bail!("Invalid argument: --frames must be at least 1");
            }
            run_preflight_checks(quiet)?;
            let output = if json {
                Output::Json
            } else if fd {
                Output::Descriptor
            } else {
                Output::Lines
            };
            let style = if demangle { SymbolStyle::Demangled } else { SymbolStyle::Raw };
            run_demo(depth, frames, output, style)
        }
        Command::Bench { iterations } => {
            if iterations == 0 {
                bail!("Invalid argument: --iterations must be at least 1");
            }
            run_bench(iterations)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Output {
    Lines,
    Descriptor,
    Json,
}

fn run_demo(depth: usize, frames: usize, output: Output, style: SymbolStyle) -> Result<()> {
    let mut buffer = vec![Address::NULL; frames.min(MAX_FRAMES)];
    if frames > MAX_FRAMES {
        info!("Capture buffer clamped to {MAX_FRAMES} frames");
    }

    let captured = nest(depth, &mut || capture(&mut buffer));
    let addresses = &buffer[..captured];
    debug!("Captured {captured} frames through {depth} nested calls");

    match output {
        Output::Lines => {
            println!("=== Backtrace ({captured} frames) ===");
            if addresses.is_empty() {
                return Ok(());
            }
            let lines = symbols_with(&DynamicLoader, addresses, style)?;
            for (i, line) in lines.iter().enumerate() {
                println!("[{i:2}] {line}");
            }
        }
        Output::Descriptor => {
            println!("=== Backtrace ({captured} frames) ===");
            symbols_fd(addresses, libc::STDERR_FILENO);
        }
        Output::Json => {
            BacktraceReport::from_addresses(addresses, style).write_json(stdout().lock())?;
        }
    }

    Ok(())
}

/// Call `f` from `levels` nested, non-inlined frames.
#[inline(never)]
fn nest(levels: usize, f: &mut dyn FnMut() -> usize) -> usize {
    let result = if levels == 0 { f() } else { nest(levels - 1, f) };
    // Keeps the recursive call out of tail position so every level keeps a frame.
    black_box(result)
}

fn run_bench(iterations: u32) -> Result<()> {
    let mut buffer = [Address::NULL; MAX_FRAMES];

    let start = Instant::now();
    let mut captured = 0;
    for _ in 0..iterations {
        captured = black_box(capture(black_box(&mut buffer)));
    }
    let capture_time = start.elapsed();

    let addresses = &buffer[..captured];
    let mut symbolize_time = Duration::ZERO;
    if !addresses.is_empty() {
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(symbols(black_box(addresses))?);
        }
        symbolize_time = start.elapsed();
    }

    let per_call = |total: Duration| total.as_nanos() as f64 / f64::from(iterations);
    println!("iterations: {iterations}");
    println!("depth:      {captured} frames");
    println!("capture:    {:>10.1} ns/call", per_call(capture_time));
    println!("symbols:    {:>10.1} ns/call", per_call(symbolize_time));
    if captured > 0 {
        println!(
            "            {:>10.1} ns/frame",
            per_call(symbolize_time) / captured as f64
        );
    }

    Ok(())
}
