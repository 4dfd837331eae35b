// Generated source is assembled with format! for readability
#![allow(clippy::format_push_string)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Default walker depth, mirrored by `execinfo::MAX_DEPTH`.
const DEFAULT_MAX_DEPTH: usize = 128;

/// Depths above this still work but make the generated chain slow to compile.
const LARGE_DEPTH: usize = 1024;

const DEFAULT_OUTPUT: &str = "execinfo/src/walker/generated.rs";

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Parser)]
enum Cmd {
    /// Generate the fixed-depth frame walker accessors
    GenWalker {
        #[arg(long, short = 'd', default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Destination file, relative to the workspace root
        #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Fail if the destination differs from the generated text instead of writing it
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Cmd::GenWalker { max_depth, output, check } => gen_walker(max_depth, &output, check)?,
    }

    Ok(())
}

fn gen_walker(max_depth: usize, output: &Path, check: bool) -> Result<()> {
    if max_depth == 0 {
        bail!("max-depth must be positive");
    }
    if max_depth > LARGE_DEPTH {
        eprintln!("warning: max-depth {max_depth} makes the walker slow to compile");
    }

    let output = workspace_root().join(output);
    let source = render_walker(max_depth);

    if check {
        let current = fs::read_to_string(&output)
            .with_context(|| format!("Failed to read {}", output.display()))?;
        if current != source {
            bail!(
                "{} is stale.\n\n\
                 Regenerate with: cargo xtask gen-walker --max-depth {max_depth}",
                output.display()
            );
        }
        println!("✓ {} is up to date", output.display());
        return Ok(());
    }

    fs::write(&output, source).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Frame walker generated");
    println!("  Depth: {max_depth}");
    println!("  Output: {}", output.display());

    Ok(())
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().map_or_else(PathBuf::new, Path::to_path_buf)
}

/// Render the walker module for `max_depth` ordinals.
///
/// Every ordinal `k` gets a frame-base accessor and a resume-address accessor,
/// both written in terms of ordinal `k - 1`'s frame base, plus one entry in
/// each lookup table.
fn render_walker(max_depth: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "// @generated by `cargo xtask gen-walker --max-depth {max_depth}`. Do not edit.\n"
    ));
    out.push_str("//\n");
    out.push_str("// Ordinal k + 1 is defined from ordinal k's frame base only, so every walk is\n");
    out.push_str("// an unrolled chain with a fixed ceiling.\n");
    out.push('\n');
    out.push_str("#![allow(clippy::pedantic)]\n");
    out.push('\n');
    out.push_str("use super::FrameBase;\n");
    out.push_str("use crate::domain::Address;\n");
    out.push('\n');
    out.push_str("/// Deepest ordinal the walker can reach.\n");
    out.push_str(&format!("pub const MAX_DEPTH: usize = {max_depth};\n"));
    out.push('\n');

    out.push_str("/// Frame-base accessors; index `n - 1` serves ordinal `n`.\n");
    out.push_str("pub(super) static FRAME_BASES: [unsafe fn(FrameBase) -> FrameBase; MAX_DEPTH] = [\n");
    for ordinal in 1..=max_depth {
        out.push_str(&format!("    frame_base_{ordinal},\n"));
    }
    out.push_str("];\n");
    out.push('\n');

    out.push_str("/// Resume-address accessors; index `n - 1` serves ordinal `n`.\n");
    out.push_str("pub(super) static RETURN_ADDRESSES: [unsafe fn(FrameBase) -> Address; MAX_DEPTH] = [\n");
    for ordinal in 1..=max_depth {
        out.push_str(&format!("    return_address_{ordinal},\n"));
    }
    out.push_str("];\n");
    out.push('\n');

    out.push_str("#[inline(always)]\n");
    out.push_str("unsafe fn frame_base_0(origin: FrameBase) -> FrameBase { origin }\n");
    for ordinal in 1..=max_depth {
        let prev = ordinal - 1;
        out.push('\n');
        out.push_str(&format!(
            "unsafe fn frame_base_{ordinal}(origin: FrameBase) -> FrameBase {{ frame_base_{prev}(origin).link() }}\n"
        ));
        out.push_str(&format!(
            "unsafe fn return_address_{ordinal}(origin: FrameBase) -> Address {{ frame_base_{prev}(origin).resume_address() }}\n"
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_accessor_pair_per_ordinal() {
        let source = render_walker(4);

        for ordinal in 1..=4 {
            assert!(source.contains(&format!("unsafe fn frame_base_{ordinal}(")));
            assert!(source.contains(&format!("unsafe fn return_address_{ordinal}(")));
        }
        assert!(!source.contains("frame_base_5"));
        assert!(source.contains("pub const MAX_DEPTH: usize = 4;"));
    }

    #[test]
    fn test_each_ordinal_chains_from_previous() {
        let source = render_walker(8);

        for ordinal in 1..=8 {
            let prev = ordinal - 1;
            assert!(source.contains(&format!(
                "frame_base_{ordinal}(origin: FrameBase) -> FrameBase {{ frame_base_{prev}(origin).link() }}"
            )));
            assert!(source.contains(&format!(
                "return_address_{ordinal}(origin: FrameBase) -> Address {{ frame_base_{prev}(origin).resume_address() }}"
            )));
        }
    }

    #[test]
    fn test_tables_list_every_ordinal_in_order() {
        let source = render_walker(3);
        let table_start = source.find("FRAME_BASES").unwrap();
        let table = &source[table_start..source[table_start..].find("];").unwrap() + table_start];

        let entries: Vec<&str> =
            table.lines().skip(1).map(|line| line.trim().trim_end_matches(',')).collect();
        assert_eq!(entries, ["frame_base_1", "frame_base_2", "frame_base_3"]);
    }

    #[test]
    fn test_checked_in_walker_is_current() {
        let checked_in = include_str!("../../execinfo/src/walker/generated.rs");
        assert_eq!(checked_in, render_walker(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = gen_walker(0, Path::new("unused.rs"), true).unwrap_err();
        assert!(err.to_string().contains("max-depth must be positive"));
    }
}
