//! C drop-in for `<execinfo.h>`
//!
//! Enabled with the `c-abi` feature. The three functions keep the libc
//! signatures and contracts, so a C program links against this crate instead
//! of libc's implementation:
//!
//! ```c
//! void *frames[64];
//! int depth = backtrace(frames, 64);
//! char **lines = backtrace_symbols(frames, depth);
//! /* ... */
//! free(lines);                       /* one free releases every string */
//! backtrace_symbols_fd(frames, depth, STDERR_FILENO);
//! ```

#![allow(unsafe_code)] // C entry points
#![allow(clippy::missing_safety_doc)] // contracts are those of execinfo.h

use std::ffi::{c_char, c_int, c_void};
use std::{mem, ptr, slice};

use log::{debug, trace};

use crate::capture::fill;
use crate::domain::Address;
use crate::symbolization::{symbols_fd, symbols_with, DynamicLoader, SymbolSource, SymbolStyle};
use crate::walker::FrameWalker;

/// `int backtrace(void **buffer, int size)`
///
/// Returns 0 for a null buffer or a non-positive size.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn backtrace(buffer: *mut *mut c_void, size: c_int) -> c_int {
    let Ok(len) = usize::try_from(size) else {
        return 0;
    };
    if buffer.is_null() || len == 0 {
        return 0;
    }

    // SAFETY: the caller provides `size` writable slots; `Address` is a
    // transparent `usize`, laid out like a pointer.
    let frames = slice::from_raw_parts_mut(buffer.cast::<Address>(), len);
    let depth = fill(FrameWalker::here(), frames);
    c_int::try_from(depth).unwrap_or(size)
}

/// `char **backtrace_symbols(void *const *buffer, int size)`
///
/// The result is one `malloc` block: the pointer table followed by the
/// NUL-terminated lines it points into. NULL for a null buffer, a
/// non-positive size, or when memory runs out.
#[no_mangle]
pub unsafe extern "C" fn backtrace_symbols(
    buffer: *const *mut c_void,
    size: c_int,
) -> *mut *mut c_char {
    match address_slice(buffer, size) {
        Some(addresses) => symbols_block(&DynamicLoader, addresses),
        None => ptr::null_mut(),
    }
}

/// Symbolize through `source` and pack the lines, NULL on any failure.
fn symbols_block<S>(source: &S, addresses: &[Address]) -> *mut *mut c_char
where
    S: SymbolSource + ?Sized,
{
    match symbols_with(source, addresses, SymbolStyle::Raw) {
        Ok(lines) => pack(&lines).unwrap_or(ptr::null_mut()),
        Err(e) => {
            debug!("backtrace_symbols: {e}");
            ptr::null_mut()
        }
    }
}

/// `void backtrace_symbols_fd(void *const *buffer, int size, int fd)`
#[no_mangle]
pub unsafe extern "C" fn backtrace_symbols_fd(buffer: *const *mut c_void, size: c_int, fd: c_int) {
    if let Some(addresses) = address_slice(buffer, size) {
        symbols_fd(addresses, fd);
    }
}

unsafe fn address_slice<'a>(buffer: *const *mut c_void, size: c_int) -> Option<&'a [Address]> {
    let len = usize::try_from(size).ok().filter(|&len| len > 0)?;
    if buffer.is_null() {
        return None;
    }
    // SAFETY: the caller provides `size` readable pointers.
    Some(slice::from_raw_parts(buffer.cast::<Address>(), len))
}

/// Copy `lines` byte for byte into a single `malloc` block the caller frees
/// with `free()`.
fn pack<L: AsRef<[u8]>>(lines: &[L]) -> Option<*mut *mut c_char> {
    let table = lines.len().checked_mul(mem::size_of::<*mut c_char>())?;
    let text = lines
        .iter()
        .try_fold(0usize, |acc, line| acc.checked_add(line.as_ref().len().checked_add(1)?))?;
    let total = table.checked_add(text)?;

    // SAFETY: plain allocation; checked for null below.
    let block = unsafe { libc::malloc(total) }.cast::<u8>();
    if block.is_null() {
        debug!("backtrace_symbols: malloc({total}) failed");
        return None;
    }

    let slots = block.cast::<*mut c_char>();
    // SAFETY: `block` holds `table` bytes of slots followed by `text` bytes of
    // string storage, and the loop writes exactly that much.
    unsafe {
        let mut cursor = block.add(table);
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            ptr::copy_nonoverlapping(line.as_ptr(), cursor, line.len());
            cursor.add(line.len()).write(0);
            slots.add(index).write(cursor.cast::<c_char>());
            cursor = cursor.add(line.len() + 1);
        }
    }

    trace!("Packed {} lines into {total} bytes", lines.len());
    Some(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolization::testing::FakeLoader;
    use std::ffi::CStr;

    #[inline(never)]
    fn capture_through_c(frames: &mut [*mut c_void]) -> c_int {
        let size = c_int::try_from(frames.len()).unwrap();
        unsafe { backtrace(frames.as_mut_ptr(), size) }
    }

    #[test]
    fn test_backtrace_rejects_bad_arguments() {
        let mut frames = [ptr::null_mut::<c_void>(); 4];
        unsafe {
            assert_eq!(backtrace(ptr::null_mut(), 10), 0);
            assert_eq!(backtrace(frames.as_mut_ptr(), 0), 0);
            assert_eq!(backtrace(frames.as_mut_ptr(), -3), 0);
        }
        assert!(frames.iter().all(|frame| frame.is_null()));
    }

    #[test]
    fn test_backtrace_fills_non_null_prefix() {
        let mut frames = [ptr::null_mut::<c_void>(); 16];
        let depth = usize::try_from(capture_through_c(&mut frames)).unwrap();

        assert!(depth <= frames.len());
        assert!(frames[..depth].iter().all(|frame| !frame.is_null()));
    }

    #[test]
    fn test_symbols_rejects_bad_arguments() {
        let frames = [ptr::null_mut::<c_void>(); 2];
        unsafe {
            assert!(backtrace_symbols(ptr::null(), 5).is_null());
            assert!(backtrace_symbols(frames.as_ptr(), 0).is_null());
            assert!(backtrace_symbols(frames.as_ptr(), -1).is_null());
        }
    }

    #[test]
    fn test_symbols_block_is_freed_once() {
        let frames = [test_symbols_block_is_freed_once as *mut c_void, ptr::null_mut()];
        unsafe {
            let lines = backtrace_symbols(frames.as_ptr(), 2);
            assert!(!lines.is_null());

            let first = CStr::from_ptr(*lines).to_str().unwrap();
            assert!(first.starts_with("0x"), "{first}");
            assert_eq!(CStr::from_ptr(*lines.add(1)).to_str().unwrap(), "(nil)");

            libc::free(lines.cast());
        }
    }

    #[test]
    fn test_pack_layout() {
        let lines = vec!["one".to_string(), String::new(), "three".to_string()];
        let block = pack(&lines).unwrap();
        unsafe {
            for (index, line) in lines.iter().enumerate() {
                assert_eq!(CStr::from_ptr(*block.add(index)).to_str().unwrap(), line);
            }
            libc::free(block.cast());
        }
    }

    #[test]
    fn test_block_keeps_raw_bytes() {
        let loader = FakeLoader::demo();
        let addresses = [Address(0x6004), Address(0x9999)];
        let block = symbols_block(&loader, &addresses);
        assert!(!block.is_null());

        let lines = symbols_with(&loader, &addresses, SymbolStyle::Raw).unwrap();
        unsafe {
            for (index, line) in lines.iter().enumerate() {
                assert_eq!(CStr::from_ptr(*block.add(index)).to_bytes(), line.as_bytes());
            }
            assert_eq!(
                CStr::from_ptr(*block).to_bytes(),
                b"0x6004 <f\xffo+4> at /opt/demo/libdemo.so"
            );
            libc::free(block.cast());
        }
    }

    #[test]
    fn test_symbols_fd_ignores_bad_arguments() {
        let frames = [ptr::null_mut::<c_void>(); 1];
        unsafe {
            backtrace_symbols_fd(ptr::null(), 1, 2);
            backtrace_symbols_fd(frames.as_ptr(), 0, 2);
            backtrace_symbols_fd(frames.as_ptr(), 1, -1);
        }
    }
}
