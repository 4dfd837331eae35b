//! Per-address symbol records and their line format
//!
//! A [`SymbolRecord`] is built from one loader lookup and lives only for the
//! duration of a [`resolve_with`] callback. Its line is
//!
//! ```text
//! 0x55d0c1a2b3c4 <name+offset> at /path/to/module      (resolved)
//! 0x55d0c1a2b3c4                                       (not in any module)
//! ```
//!
//! which is `printf("%p <%s+%td> at %s")` / `printf("%p")`. The exact byte
//! length is known up front ([`SymbolRecord::line_len`]) so the descriptor
//! emitter can pick a buffer before rendering.
//!
//! Names and paths are whatever bytes the loader hands out. Rendered lines
//! keep them verbatim ([`SymbolLine`]); only [`fmt::Display`] is lossy.

use std::collections::TryReserveError;
use std::fmt::{self, Write as _};

use super::loader::{DynamicLoader, LoaderMatch, SymbolSource};
use crate::domain::{decimal_digits, Address};

/// Placeholder for a symbol (or module) the loader could not name.
pub const UNKNOWN_SYMBOL: &str = "???";

const UNKNOWN: &[u8] = UNKNOWN_SYMBOL.as_bytes();

/// Everything known about one address.
///
/// `byte_offset` is always defined: relative to the symbol base when the
/// loader reported one, otherwise relative to the address itself (zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRecord<'a> {
    pub address: Address,
    pub resolved: bool,
    pub symbol_name: &'a [u8],
    pub symbol_base: Address,
    pub module_path: &'a [u8],
    pub byte_offset: isize,
}

impl<'a> SymbolRecord<'a> {
    #[must_use]
    pub fn new(address: Address, found: Option<LoaderMatch<'a>>) -> Self {
        let Some(found) = found else {
            return Self {
                address,
                resolved: false,
                symbol_name: UNKNOWN,
                symbol_base: address,
                module_path: &[],
                byte_offset: 0,
            };
        };

        let symbol_base = found.symbol_base.unwrap_or(address);
        Self {
            address,
            resolved: true,
            symbol_name: found.symbol_name.unwrap_or(UNKNOWN),
            symbol_base,
            module_path: found.module_path.unwrap_or(UNKNOWN),
            byte_offset: address.offset_from(symbol_base),
        }
    }

    /// Whether the loader knew the symbol's name, not just its module.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.resolved && self.symbol_name != UNKNOWN
    }

    /// The same record with the symbol name replaced, e.g. by its demangled form.
    #[must_use]
    pub fn with_symbol_name<'b>(&self, symbol_name: &'b [u8]) -> SymbolRecord<'b>
    where
        'a: 'b,
    {
        SymbolRecord {
            address: self.address,
            resolved: self.resolved,
            symbol_name,
            symbol_base: self.symbol_base,
            module_path: self.module_path,
            byte_offset: self.byte_offset,
        }
    }

    /// Exact number of bytes [`SymbolRecord::render`] writes.
    #[must_use]
    pub fn line_len(&self) -> usize {
        let address = self.address.display_len();
        if !self.resolved {
            return address;
        }
        address
            + " <".len()
            + self.symbol_name.len()
            + "+".len()
            + decimal_digits(self.byte_offset)
            + "> at ".len()
            + self.module_path.len()
    }

    /// Render the line into `out`, returning the number of bytes written, or
    /// `None` if `out` is shorter than [`SymbolRecord::line_len`].
    ///
    /// Allocation-free; safe to call from a signal handler.
    pub fn render(&self, out: &mut [u8]) -> Option<usize> {
        let mut writer = SliceWriter { buf: out, len: 0 };
        self.write_line(&mut writer).ok()?;
        Some(writer.len)
    }

    /// Render the line into a freshly allocated buffer, reporting exhaustion
    /// instead of aborting.
    ///
    /// # Errors
    /// Returns the reservation error if the line's buffer cannot be allocated.
    pub fn to_line(&self) -> Result<SymbolLine, TryReserveError> {
        let len = self.line_len();
        let mut bytes = Vec::new();
        try_reserve_exact(&mut bytes, len)?;
        bytes.resize(len, 0);

        let written = self.render(&mut bytes);
        debug_assert_eq!(written, Some(len));
        bytes.truncate(written.unwrap_or(0));
        Ok(SymbolLine(bytes))
    }

    fn write_line(&self, out: &mut SliceWriter<'_>) -> fmt::Result {
        write!(out, "{}", self.address)?;
        if self.resolved {
            out.put(b" <")?;
            out.put(self.symbol_name)?;
            write!(out, "+{}", self.byte_offset)?;
            out.put(b"> at ")?;
            out.put(self.module_path)?;
        }
        Ok(())
    }
}

impl fmt::Display for SymbolRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)?;
        if self.resolved {
            write!(
                f,
                " <{}+{}> at {}",
                String::from_utf8_lossy(self.symbol_name),
                self.byte_offset,
                String::from_utf8_lossy(self.module_path)
            )?;
        }
        Ok(())
    }
}

/// One rendered line, byte for byte what the descriptor emitter writes
/// (without the newline).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SymbolLine(Vec<u8>);

impl SymbolLine {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The line as text, if the loader's names and paths were UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl AsRef<[u8]> for SymbolLine {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lossy: invalid UTF-8 shows as U+FFFD.
impl fmt::Display for SymbolLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for SymbolLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

impl PartialEq<str> for SymbolLine {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for SymbolLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

/// `Vec::try_reserve_exact`, with an injectable failure under test.
pub(crate) fn try_reserve_exact<T>(
    buf: &mut Vec<T>,
    additional: usize,
) -> Result<(), TryReserveError> {
    #[cfg(test)]
    if !super::testing::take_reservation() {
        return Vec::<u8>::new().try_reserve_exact(usize::MAX);
    }
    buf.try_reserve_exact(additional)
}

/// Look up `addr` in the process's dynamic loader and hand the record to `f`.
pub fn resolve<R>(addr: Address, f: impl FnOnce(SymbolRecord<'_>) -> R) -> R {
    resolve_with(&DynamicLoader, addr, f)
}

/// Look up `addr` in `source` and hand the record to `f`.
pub fn resolve_with<S, R>(source: &S, addr: Address, f: impl FnOnce(SymbolRecord<'_>) -> R) -> R
where
    S: SymbolSource + ?Sized,
{
    f(SymbolRecord::new(addr, source.lookup(addr)))
}

/// `fmt::Write` over a fixed byte slice; overflowing is an error, not a panic.
struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl SliceWriter<'_> {
    fn put(&mut self, bytes: &[u8]) -> fmt::Result {
        let end = self.len.checked_add(bytes.len()).ok_or(fmt::Error)?;
        self.buf.get_mut(self.len..end).ok_or(fmt::Error)?.copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s.as_bytes())
    }
}
