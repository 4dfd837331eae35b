//! # Symbol Resolution and Formatting
//!
//! Converts captured return addresses into one line of text each:
//!
//! ```text
//! 0x55f3a2b4c780 <trace_blocking_start+32> at /usr/bin/my-app
//! 0x7f8b3c1a0010                                  (no module contains it)
//! ```
//!
//! ## Where names come from
//!
//! The only source is the dynamic loader (`dladdr`): it knows which module
//! maps an address and the nearest preceding entry of that module's dynamic
//! symbol table. No DWARF, no line numbers, no inlined frames. Executables
//! export few symbols unless linked with `-rdynamic`; an address inside an
//! unexported function still names its module, with `???` for the symbol.
//!
//! ## Two consumers
//!
//! - **`resolver`** ([`symbols`]): builds an owned [`SymbolLines`]. Allocates,
//!   but every allocation is fallible and a failure releases everything.
//! - **`fd`** ([`symbols_fd`]): writes `line\n` per address to a descriptor
//!   from a stack buffer. Safe to call from a signal handler on the common
//!   path.
//!
//! Both go through [`SymbolRecord`], which computes the exact line length
//! before rendering, and through the [`SymbolSource`] seam so tests can
//! substitute a synthetic loader.
//!
//! ## Example
//!
//! ```rust,no_run
//! use execinfo::{capture, symbols, symbols_fd, Address};
//!
//! let mut frames = [Address::NULL; 32];
//! let depth = capture(&mut frames);
//!
//! // Retained, owned lines
//! if let Ok(lines) = symbols(&frames[..depth]) {
//!     for (i, line) in lines.iter().enumerate() {
//!         println!("[{i:2}] {line}");
//!     }
//! }
//!
//! // Immediate output to stderr, no allocation
//! symbols_fd(&frames[..depth], 2);
//! ```

pub mod fd;
pub mod loader;
pub mod record;
pub mod resolver;

pub use fd::{print_backtrace, symbols_fd, symbols_fd_with, STACK_LINE_CAPACITY};
pub use loader::{DynamicLoader, LoaderMatch, SymbolSource};
pub use record::{resolve, resolve_with, SymbolLine, SymbolRecord, UNKNOWN_SYMBOL};
pub use resolver::{symbols, symbols_with, SymbolLines, SymbolStyle};

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;

    use super::{LoaderMatch, SymbolSource};
    use crate::domain::Address;

    struct Region {
        start: usize,
        end: usize,
        name: Option<&'static [u8]>,
        module: String,
    }

    thread_local! {
        static RESERVATIONS_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    }

    /// Whether the next fallible reservation on this thread may succeed.
    pub(crate) fn take_reservation() -> bool {
        RESERVATIONS_LEFT.with(|left| match left.get() {
            None => true,
            Some(0) => false,
            Some(n) => {
                left.set(Some(n - 1));
                true
            }
        })
    }

    /// Run `f` with only `budget` fallible reservations succeeding on this thread.
    pub(crate) fn with_reservations<R>(budget: usize, f: impl FnOnce() -> R) -> R {
        RESERVATIONS_LEFT.with(|left| left.set(Some(budget)));
        let result = f();
        RESERVATIONS_LEFT.with(|left| left.set(None));
        result
    }

    /// Synthetic loader: fixed address ranges with optional symbol names.
    pub(crate) struct FakeLoader {
        regions: Vec<Region>,
    }

    impl FakeLoader {
        /// `alpha` at 0x1000, a mangled Rust symbol at 0x2000, an unnamed
        /// region at 0x3000 in another module, and a name that is not UTF-8
        /// at 0x6000.
        pub(crate) fn demo() -> Self {
            let lib = "/opt/demo/libdemo.so".to_string();
            Self {
                regions: vec![
                    Region { start: 0x1000, end: 0x1100, name: Some(b"alpha"), module: lib.clone() },
                    Region {
                        start: 0x2000,
                        end: 0x2100,
                        name: Some(b"_ZN4demo4beta17h0123456789abcdefE"),
                        module: lib.clone(),
                    },
                    Region {
                        start: 0x3000,
                        end: 0x4000,
                        name: None,
                        module: "/opt/demo/stripped.so".to_string(),
                    },
                    Region { start: 0x6000, end: 0x6100, name: Some(b"f\xffo"), module: lib },
                ],
            }
        }

        /// [`FakeLoader::demo`] plus `long` at 0x5000 in a module whose path
        /// is `path_len` bytes.
        pub(crate) fn with_long_module(path_len: usize) -> Self {
            let mut loader = Self::demo();
            let module = format!("/{}", "x".repeat(path_len.saturating_sub(1)));
            loader.regions.push(Region { start: 0x5000, end: 0x5100, name: Some(b"long"), module });
            loader
        }
    }

    impl SymbolSource for FakeLoader {
        fn lookup(&self, addr: Address) -> Option<LoaderMatch<'_>> {
            let region =
                self.regions.iter().find(|region| (region.start..region.end).contains(&addr.0))?;
            Some(LoaderMatch {
                symbol_name: region.name,
                symbol_base: region.name.map(|_| Address(region.start)),
                module_path: Some(region.module.as_bytes()),
            })
        }
    }
}
