//! # execinfo - Frame-Pointer Backtraces for Rust and C
//!
//! A self-contained replacement for libc's `backtrace(3)` family: capture the
//! return addresses of the calling thread's stack, then turn them into
//! readable lines either as owned buffers or straight onto a file descriptor.
//! No unwind tables, no DWARF, no unwinding library.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Caller                                 │
//! │            (Rust code, or C through the `c-abi` feature)        │
//! └───────────────────────┬─────────────────────────────────────────┘
//!                         │ capture(&mut [Address])
//!                         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  walker          saved frame-pointer chain, depth-bounded        │
//! │  capture         return addresses into a caller-owned buffer    │
//! └───────────────────────┬─────────────────────────────────────────┘
//!                         │ &[Address]
//!                         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  symbolization                                                  │
//! │                                                                 │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐         │
//! │  │    loader    │──▶│    record    │──▶│   resolver   │ Vec     │
//! │  │   (dladdr)   │   │ (line format)│   └──────────────┘         │
//! │  └──────────────┘   └──────────────┘   ┌──────────────┐         │
//! │                            └──────────▶│      fd      │ write(2)│
//! │                                        └──────────────┘         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! ### Core
//!
//! - [`walker`]: frame-pointer chaining with generated, unrolled accessors
//!   for ordinals `1..=MAX_DEPTH`
//! - [`capture`]: fills a caller buffer with return addresses
//! - [`symbolization`]: dynamic-loader lookup and the `%p <%s+%td> at %s`
//!   line format
//!   - `resolver`: owned lines, fallible allocation
//!   - `fd`: descriptor output for crash handlers
//! - `ffi` (feature `c-abi`): `backtrace`, `backtrace_symbols` and
//!   `backtrace_symbols_fd` with the `<execinfo.h>` signatures
//!
//! ### Supporting Modules
//!
//! - [`domain`]: [`Address`] and [`SymbolsError`]
//! - [`report`]: serializable per-frame view used by the demo's `--json`
//! - [`cli`], [`preflight`]: the `execinfo` demo binary
//!
//! ## Requirements
//!
//! Frames are only found through code compiled with frame pointers. This
//! workspace forces them for its own crates (`.cargo/config.toml`); the
//! standard library is usually built without them, so walks often end at
//! the first std frame. That is a short backtrace, never a crash.
//!
//! Names come from each module's dynamic symbol table. Executables must be
//! linked with `-rdynamic` (`-C link-arg=-rdynamic`) for their own functions
//! to be named; otherwise lines show the module with `???`.
//!
//! ## Typical Usage
//!
//! ```rust
//! use execinfo::{capture, symbols, Address};
//!
//! let mut frames = [Address::NULL; 64];
//! let depth = capture(&mut frames);
//!
//! if depth > 0 {
//!     let lines = symbols(&frames[..depth]).expect("out of memory");
//!     assert_eq!(lines.len(), depth);
//! }
//! ```
//!
//! From a signal handler, skip allocation entirely:
//!
//! ```rust,no_run
//! execinfo::print_backtrace();
//! ```

pub mod capture;
pub mod cli;
pub mod domain;
#[cfg(feature = "c-abi")]
pub mod ffi;
pub mod preflight;
pub mod report;
pub mod symbolization;
pub mod walker;

pub use capture::{capture, MAX_FRAMES};
pub use domain::{Address, SymbolsError};
pub use symbolization::{
    print_backtrace, resolve, resolve_with, symbols, symbols_fd, symbols_fd_with, symbols_with,
    DynamicLoader, LoaderMatch, SymbolLine, SymbolLines, SymbolRecord, SymbolSource, SymbolStyle,
    STACK_LINE_CAPACITY, UNKNOWN_SYMBOL,
};
pub use walker::{FrameBase, FrameWalker, MAX_DEPTH};

/// Crate version, reported by the demo binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
