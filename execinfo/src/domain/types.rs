//! Domain types providing compile-time safety and self-documentation
//!
//! Raw code pointers travel through the crate as [`Address`] so they cannot be
//! mixed up with lengths, offsets or frame bases.

use std::ffi::c_void;
use std::fmt;

/// A code address captured from the stack or handed in by a caller.
///
/// `#[repr(transparent)]` over `usize`: a `[Address]` has the layout of a
/// C `void *[]`, which the C entry points rely on.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub usize);

impl Address {
    /// The null address, used to pre-fill buffers.
    pub const NULL: Self = Self(0);

    #[must_use]
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }

    #[must_use]
    pub fn as_ptr(self) -> *const c_void {
        self.0 as *const c_void
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Signed distance from `base` to this address (`%td` of `self - base`).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn offset_from(self, base: Address) -> isize {
        self.0.wrapping_sub(base.0) as isize
    }

    /// Number of bytes [`fmt::Display`] produces for this address.
    #[must_use]
    pub const fn display_len(self) -> usize {
        if self.is_null() {
            NIL.len()
        } else {
            2 + hex_digits(self.0)
        }
    }
}

/// `%p` rendering of a null pointer.
const NIL: &str = "(nil)";

/// Matches `printf("%p")`: `0x` followed by lowercase hex, `(nil)` for null.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str(NIL)
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

impl From<usize> for Address {
    fn from(addr: usize) -> Self {
        Address(addr)
    }
}

/// Count of lowercase hex digits needed for `value` (at least one).
#[must_use]
pub const fn hex_digits(value: usize) -> usize {
    let bits = (usize::BITS - value.leading_zeros()) as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(4)
    }
}

/// Count of bytes needed to print `value` in decimal, sign included.
#[must_use]
pub const fn decimal_digits(value: isize) -> usize {
    let sign = (value < 0) as usize;
    let magnitude = value.unsigned_abs();
    let digits = match magnitude.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    };
    sign + digits
}
