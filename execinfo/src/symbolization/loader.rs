//! Dynamic-loader reverse lookup
//!
//! The resolver and the descriptor emitter only need one capability from the
//! platform: given an address, name the nearest preceding symbol and the
//! module containing it. [`SymbolSource`] is that seam; [`DynamicLoader`]
//! answers it with `dladdr(3)`.

#![allow(unsafe_code)] // dladdr and the C strings it hands back

use std::ffi::{c_char, CStr};
use std::mem::MaybeUninit;

use crate::domain::Address;

/// What a loader knows about one address.
///
/// Every field is optional: `dladdr` may find the containing module but no
/// symbol, or a symbol without a usable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoaderMatch<'a> {
    pub symbol_name: Option<&'a [u8]>,
    pub symbol_base: Option<Address>,
    pub module_path: Option<&'a [u8]>,
}

/// Address → symbol reverse lookup.
///
/// Implementations must not allocate or lock if they are to be used from
/// [`symbols_fd_with`](crate::symbols_fd_with) inside a signal handler.
pub trait SymbolSource {
    /// Return `None` when `addr` lies in no known module.
    fn lookup(&self, addr: Address) -> Option<LoaderMatch<'_>>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn lookup(&self, addr: Address) -> Option<LoaderMatch<'_>> {
        (**self).lookup(addr)
    }
}

/// The process's dynamic loader, queried through `dladdr`.
///
/// Only symbols present in a module's dynamic symbol table are visible; for
/// executables that usually means linking with `-rdynamic`. The returned
/// strings live in loader memory and stay valid while the module is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicLoader;

impl SymbolSource for DynamicLoader {
    fn lookup(&self, addr: Address) -> Option<LoaderMatch<'_>> {
        let mut info = MaybeUninit::<libc::Dl_info>::zeroed();
        // SAFETY: dladdr accepts any address and only writes through `info`.
        let found = unsafe { libc::dladdr(addr.as_ptr(), info.as_mut_ptr()) };
        if found == 0 {
            return None;
        }

        // SAFETY: zero-initialised and filled in by a successful dladdr.
        let info = unsafe { info.assume_init() };
        Some(LoaderMatch {
            symbol_name: c_bytes(info.dli_sname),
            symbol_base: (!info.dli_saddr.is_null()).then(|| Address::from_ptr(info.dli_saddr)),
            module_path: c_bytes(info.dli_fname),
        })
    }
}

fn c_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: dladdr hands out NUL-terminated strings owned by the loader.
    Some(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_address_has_no_module() {
        assert_eq!(DynamicLoader.lookup(Address::NULL), None);
    }

    #[test]
    fn test_libc_function_resolves_to_its_module() {
        let addr = Address::from_ptr(libc::getpid as *const ());
        let found = DynamicLoader.lookup(addr).expect("getpid lives in a loaded module");

        let module = String::from_utf8_lossy(found.module_path.unwrap_or_default()).into_owned();
        assert!(!module.is_empty());
        if let Some(name) = found.symbol_name {
            assert!(String::from_utf8_lossy(name).contains("getpid"), "{module}");
        }
    }

    #[test]
    fn test_own_code_is_inside_a_module() {
        let addr = Address::from_ptr(test_own_code_is_inside_a_module as *const ());
        assert!(DynamicLoader.lookup(addr).is_some());
    }
}
