//! Owned symbolization (`backtrace_symbols`)
//!
//! Formats one line per address into a caller-owned [`SymbolLines`]. Every
//! allocation is fallible: on exhaustion the lines produced so far are dropped
//! and [`SymbolsError::AllocationFailed`] is returned, never a partial result.
//!
//! Lines hold the loader's bytes unchanged, so each one equals what the
//! descriptor emitter writes for the same address, minus the newline.

use std::fmt::{self, Write as _};
use std::ops::Deref;

use log::{debug, trace};
use rustc_demangle::try_demangle;

use super::loader::{DynamicLoader, SymbolSource};
use super::record::{resolve_with, try_reserve_exact, SymbolLine, SymbolRecord};
use crate::domain::{Address, SymbolsError};

/// How symbol names appear in resolved lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolStyle {
    /// Names exactly as the loader reports them (libc-compatible output)
    #[default]
    Raw,
    /// Rust symbols demangled without their hash suffix; other names untouched
    Demangled,
}

/// Symbolized lines, index-aligned with the addresses they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLines(Vec<SymbolLine>);

impl SymbolLines {
    #[must_use]
    pub fn into_vec(self) -> Vec<SymbolLine> {
        self.0
    }
}

impl Deref for SymbolLines {
    type Target = [SymbolLine];

    fn deref(&self) -> &[SymbolLine] {
        &self.0
    }
}

impl IntoIterator for SymbolLines {
    type Item = SymbolLine;
    type IntoIter = std::vec::IntoIter<SymbolLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolLines {
    type Item = &'a SymbolLine;
    type IntoIter = std::slice::Iter<'a, SymbolLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Describe each address using the process's dynamic loader.
///
/// # Errors
/// [`SymbolsError::EmptyInput`] for an empty slice,
/// [`SymbolsError::AllocationFailed`] if memory runs out.
pub fn symbols(addresses: &[Address]) -> Result<SymbolLines, SymbolsError> {
    symbols_with(&DynamicLoader, addresses, SymbolStyle::Raw)
}

/// Describe each address using `source`, naming symbols in `style`.
///
/// Unresolved addresses are not an error; they produce address-only lines.
///
/// # Errors
/// Same as [`symbols`].
pub fn symbols_with<S>(
    source: &S,
    addresses: &[Address],
    style: SymbolStyle,
) -> Result<SymbolLines, SymbolsError>
where
    S: SymbolSource + ?Sized,
{
    if addresses.is_empty() {
        return Err(SymbolsError::EmptyInput);
    }

    let mut lines = Vec::new();
    try_reserve_exact(&mut lines, addresses.len())?;

    for &addr in addresses {
        let line = resolve_with(source, addr, |record| format_line(&record, style))?;
        trace!("{line}");
        lines.push(line);
    }

    debug!("Symbolized {} addresses", lines.len());
    Ok(SymbolLines(lines))
}

fn format_line(
    record: &SymbolRecord<'_>,
    style: SymbolStyle,
) -> Result<SymbolLine, std::collections::TryReserveError> {
    if style == SymbolStyle::Demangled && record.has_name() {
        if let Some(name) = demangle(record.symbol_name)? {
            return record.with_symbol_name(name.as_bytes()).to_line();
        }
    }
    record.to_line()
}

/// Demangled form of a Rust symbol, `None` for names that are not Rust symbols.
pub(crate) fn demangle(name: &[u8]) -> Result<Option<String>, std::collections::TryReserveError> {
    let Some(demangled) = std::str::from_utf8(name).ok().and_then(|s| try_demangle(s).ok())
    else {
        return Ok(None);
    };

    let mut counter = ByteCounter(0);
    if write!(counter, "{demangled:#}").is_err() {
        return Ok(None);
    }

    let mut out = String::new();
    out.try_reserve_exact(counter.0)?;
    if write!(out, "{demangled:#}").is_err() {
        return Ok(None);
    }
    Ok(Some(out))
}

/// Measures formatted output without storing it.
struct ByteCounter(usize);

impl fmt::Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolization::testing::{with_reservations, FakeLoader};

    #[test]
    fn test_empty_input_is_absent() {
        let result = symbols_with(&FakeLoader::demo(), &[], SymbolStyle::Raw);
        assert!(matches!(result, Err(SymbolsError::EmptyInput)));
        assert!(matches!(symbols(&[]), Err(SymbolsError::EmptyInput)));
    }

    #[test]
    fn test_lines_are_index_aligned() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x1010), Address(0x9999), Address(0x2004), Address(0x3100)];

        let lines = symbols_with(&loader, &addresses, SymbolStyle::Raw).unwrap();

        assert_eq!(lines.len(), addresses.len());
        assert_eq!(lines[0], "0x1010 <alpha+16> at /opt/demo/libdemo.so");
        assert_eq!(lines[1], "0x9999");
        assert_eq!(lines[2], "0x2004 <_ZN4demo4beta17h0123456789abcdefE+4> at /opt/demo/libdemo.so");
        assert_eq!(lines[3], "0x3100 <???+0> at /opt/demo/stripped.so");
    }

    #[test]
    fn test_lines_carry_no_newline() {
        let lines = symbols_with(&FakeLoader::demo(), &[Address(0x1010)], SymbolStyle::Raw).unwrap();
        assert!(lines.iter().all(|line| !line.as_bytes().ends_with(b"\n")));
    }

    #[test]
    fn test_demangled_style() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x2004), Address(0x1010)];

        let lines = symbols_with(&loader, &addresses, SymbolStyle::Demangled).unwrap();

        assert_eq!(lines[0], "0x2004 <demo::beta+4> at /opt/demo/libdemo.so");
        assert_eq!(lines[1], "0x1010 <alpha+16> at /opt/demo/libdemo.so", "C names untouched");
    }

    #[test]
    fn test_non_utf8_name_is_kept_verbatim() {
        let lines = symbols_with(&FakeLoader::demo(), &[Address(0x6004)], SymbolStyle::Raw).unwrap();
        assert_eq!(lines[0].as_bytes(), b"0x6004 <f\xffo+4> at /opt/demo/libdemo.so");

        // Not a Rust symbol either: demangling leaves it alone
        let lines =
            symbols_with(&FakeLoader::demo(), &[Address(0x6004)], SymbolStyle::Demangled).unwrap();
        assert_eq!(lines[0].as_bytes(), b"0x6004 <f\xffo+4> at /opt/demo/libdemo.so");
    }

    #[test]
    fn test_exhaustion_releases_everything() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x1010), Address(0x2004), Address(0x3100)];

        // Collection plus two lines succeed, the third line does not
        for budget in 0..=addresses.len() {
            let result = with_reservations(budget, || {
                symbols_with(&loader, &addresses, SymbolStyle::Raw)
            });
            assert!(
                matches!(result, Err(SymbolsError::AllocationFailed(_))),
                "budget {budget}: {result:?}"
            );
        }

        let lines = with_reservations(addresses.len() + 1, || {
            symbols_with(&loader, &addresses, SymbolStyle::Raw)
        });
        assert_eq!(lines.unwrap().len(), addresses.len());
    }

    #[test]
    fn test_collection_iterates_in_order() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x1000), Address(0x1001)];
        let lines = symbols_with(&loader, &addresses, SymbolStyle::Raw).unwrap();

        let collected: Vec<SymbolLine> = lines.into_iter().collect();
        assert_eq!(collected[0], "0x1000 <alpha+0> at /opt/demo/libdemo.so");
        assert_eq!(collected[1], "0x1001 <alpha+1> at /opt/demo/libdemo.so");
    }
}
