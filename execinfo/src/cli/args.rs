//! CLI argument definitions

use clap::{Parser, Subcommand};

use crate::capture::MAX_FRAMES;

#[derive(Parser, Debug)]
#[command(
    name = "execinfo",
    version,
    about = "Capture and print frame-pointer backtraces",
    after_help = "\
EXAMPLES:
    execinfo demo                            Backtrace through 5 nested calls
    execinfo demo --depth 20 --demangle      Deeper stack, Rust names demangled
    execinfo demo --fd                       Write straight to stderr, no allocation
    execinfo demo --json                     One JSON object per frame
    execinfo bench --iterations 10000        Time capture and symbolization"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Recurse through nested calls and print the resulting backtrace
    Demo {
        /// Number of nested calls before capturing
        #[arg(short, long, default_value_t = 5)]
        depth: usize,

        /// Capture buffer size
        #[arg(short, long, default_value_t = MAX_FRAMES)]
        frames: usize,

        /// Write lines to stderr with the descriptor emitter
        #[arg(long, conflicts_with = "json")]
        fd: bool,

        /// Demangle Rust symbol names
        #[arg(long)]
        demangle: bool,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },

    /// Measure capture and symbolization cost
    Bench {
        /// Number of timed iterations
        #[arg(short, long, default_value_t = 1000)]
        iterations: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_defaults() {
        let args = Args::try_parse_from(["execinfo", "demo"]).unwrap();
        assert!(!args.quiet);
        assert_eq!(
            args.command,
            Command::Demo { depth: 5, frames: MAX_FRAMES, fd: false, demangle: false, json: false }
        );
    }

    #[test]
    fn test_fd_conflicts_with_json() {
        assert!(Args::try_parse_from(["execinfo", "demo", "--fd", "--json"]).is_err());
    }

    #[test]
    fn test_bench_iterations() {
        let args = Args::try_parse_from(["execinfo", "--quiet", "bench", "-i", "42"]).unwrap();
        assert!(args.quiet);
        assert_eq!(args.command, Command::Bench { iterations: 42 });
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["execinfo"]).is_err());
    }
}
