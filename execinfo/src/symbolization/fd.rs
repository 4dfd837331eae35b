//! Descriptor emitter (`backtrace_symbols_fd`)
//!
//! Writes the same lines as [`symbols`](crate::symbols), each followed by a
//! newline, straight to a file descriptor. Meant for crash handlers, so:
//!
//! - each line is measured first and rendered into a reusable stack buffer;
//!   only a line longer than [`STACK_LINE_CAPACITY`] touches the heap, once
//! - no logging, no static buffers, nothing shared between calls
//! - one `write(2)` per line; short writes and errors are not retried
//! - if the rare heap fallback fails, the remaining lines are abandoned

#![allow(unsafe_code)] // raw write(2)

use std::os::fd::RawFd;

use super::loader::{DynamicLoader, SymbolSource};
use super::record::{resolve_with, try_reserve_exact, SymbolRecord};
use crate::capture::{fill, MAX_FRAMES};
use crate::domain::Address;
use crate::walker::FrameWalker;

/// Size of the on-stack line buffer; longer lines fall back to one heap allocation.
pub const STACK_LINE_CAPACITY: usize = 4096;

/// Write one line per address to `fd`, resolved through the dynamic loader.
///
/// Does nothing for an empty slice or a negative descriptor.
pub fn symbols_fd(addresses: &[Address], fd: RawFd) {
    symbols_fd_with(&DynamicLoader, addresses, fd);
}

/// Write one line per address to `fd`, resolved through `source`.
pub fn symbols_fd_with<S>(source: &S, addresses: &[Address], fd: RawFd)
where
    S: SymbolSource + ?Sized,
{
    if addresses.is_empty() || fd < 0 {
        return;
    }

    let mut stack_line = [0u8; STACK_LINE_CAPACITY];
    for &addr in addresses {
        let emitted = resolve_with(source, addr, |record| emit_line(&record, &mut stack_line, fd));
        if emitted.is_none() {
            return;
        }
    }
}

/// Capture the caller's stack and write it to standard error.
///
/// The first line is the call site of `print_backtrace` itself.
#[inline(never)]
pub fn print_backtrace() {
    let mut frames = [Address::NULL; MAX_FRAMES];
    let depth = fill(FrameWalker::here(), &mut frames);
    symbols_fd(&frames[..depth], libc::STDERR_FILENO);
}

/// Render `record` plus a newline and write it; `None` if no buffer could be had.
fn emit_line(
    record: &SymbolRecord<'_>,
    stack_line: &mut [u8; STACK_LINE_CAPACITY],
    fd: RawFd,
) -> Option<()> {
    let len = record.line_len() + 1;

    let mut heap_line = Vec::new();
    let line: &mut [u8] = if len <= STACK_LINE_CAPACITY {
        &mut stack_line[..len]
    } else {
        try_reserve_exact(&mut heap_line, len).ok()?;
        heap_line.resize(len, 0);
        &mut heap_line
    };

    let written = record.render(line)?;
    line[written] = b'\n';
    write_once(fd, &line[..=written]);
    Some(())
}

fn write_once(fd: RawFd, bytes: &[u8]) {
    // SAFETY: `bytes` is valid for reads of `bytes.len()` bytes; an invalid
    // descriptor only makes write fail.
    let _ = unsafe { libc::write(fd, bytes.as_ptr().cast(), bytes.len()) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolization::testing::{with_reservations, FakeLoader};
    use crate::symbolization::{symbols_with, SymbolStyle};
    use std::io::{Read, Seek, SeekFrom};
    use std::os::fd::AsRawFd;

    fn emitted_by(f: impl FnOnce(RawFd)) -> Vec<u8> {
        let mut file = tempfile::tempfile().expect("Failed to create temp file");
        f(file.as_raw_fd());
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut out = Vec::new();
        file.read_to_end(&mut out).unwrap();
        out
    }

    fn expected_from_resolver(loader: &FakeLoader, addresses: &[Address]) -> Vec<u8> {
        let lines = symbols_with(loader, addresses, SymbolStyle::Raw).unwrap();
        lines.iter().flat_map(|line| line.as_bytes().iter().copied().chain([b'\n'])).collect()
    }

    #[test]
    fn test_matches_resolver_plus_newline() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x1010), Address(0x9999), Address(0x3100), Address(0x2004)];

        let out = emitted_by(|fd| symbols_fd_with(&loader, &addresses, fd));
        assert_eq!(out, expected_from_resolver(&loader, &addresses));
    }

    #[test]
    fn test_non_utf8_line_matches_resolver() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x6004), Address(0x1010)];

        let out = emitted_by(|fd| symbols_fd_with(&loader, &addresses, fd));

        assert!(out.starts_with(b"0x6004 <f\xffo+4> at /opt/demo/libdemo.so\n"));
        assert_eq!(out, expected_from_resolver(&loader, &addresses));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let out = emitted_by(|fd| symbols_fd_with(&FakeLoader::demo(), &[], fd));
        assert!(out.is_empty());
    }

    #[test]
    fn test_negative_descriptor_is_ignored() {
        symbols_fd_with(&FakeLoader::demo(), &[Address(0x1010)], -1);
        symbols_fd(&[Address(0x1010)], -1);
    }

    #[test]
    fn test_long_line_falls_back_to_heap() {
        let loader = FakeLoader::with_long_module(STACK_LINE_CAPACITY * 2);
        let addresses = [Address(0x5008), Address(0x1010)];

        let out = String::from_utf8(emitted_by(|fd| symbols_fd_with(&loader, &addresses, fd)))
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].len() > STACK_LINE_CAPACITY);
        assert!(lines[0].starts_with("0x5008 <long+8> at /"));
        assert_eq!(lines[1], "0x1010 <alpha+16> at /opt/demo/libdemo.so");
    }

    #[test]
    fn test_heap_exhaustion_abandons_remaining_lines() {
        let loader = FakeLoader::with_long_module(STACK_LINE_CAPACITY * 2);
        let addresses = [Address(0x1010), Address(0x5008), Address(0x1010)];

        // Stack-buffered lines never reserve; only the long line does
        let out = with_reservations(0, || emitted_by(|fd| symbols_fd_with(&loader, &addresses, fd)));

        assert_eq!(out, b"0x1010 <alpha+16> at /opt/demo/libdemo.so\n");
    }

    #[test]
    fn test_emit_line_appends_newline() {
        let record = SymbolRecord::new(Address(0x1), None);
        let mut stack_line = [0u8; STACK_LINE_CAPACITY];
        let out = emitted_by(|fd| {
            assert_eq!(emit_line(&record, &mut stack_line, fd), Some(()));
        });
        assert_eq!(out, b"0x1\n");
    }
}
