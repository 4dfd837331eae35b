//! # Frame-Pointer Stack Walker
//!
//! Reconstructs the calling thread's stack by following saved frame pointers,
//! without unwind tables or an unwinding library.
//!
//! ## Frame records
//!
//! With frame pointers enabled (`-C force-frame-pointers=yes`, set in
//! `.cargo/config.toml`), every function prologue stores a two-word record:
//! the caller's frame pointer and the return address into the caller.
//!
//! ```text
//!   x86_64 / aarch64                    riscv64
//!   fp + 8 : return address             fp - 8  : return address
//!   fp + 0 : caller's fp  <── fp        fp - 16 : caller's fp
//! ```
//!
//! Following the saved-fp links yields one frame base per ancestor, and the
//! record of frame `n - 1` holds the address where execution resumes in
//! ancestor `n`.
//!
//! ## Bounded depth
//!
//! The accessors for each ordinal live in [`generated`], produced by
//! `cargo xtask gen-walker`. Ordinal `k + 1` is defined from ordinal `k`'s
//! frame base, so a walk is an unrolled chain of at most [`MAX_DEPTH`] links
//! rather than a loop over a chain that may never terminate.
//!
//! Every link is validated before it is followed (see [`FrameBase::link`]):
//! code built without frame pointers leaves arbitrary values in the frame
//! register, and the checks end the walk instead of chasing them.
//!
//! Nothing in this module allocates or logs; it runs inside signal handlers.

#![allow(unsafe_code)] // frame records are read through raw pointers

#[rustfmt::skip]
mod generated;

pub use generated::MAX_DEPTH;

use generated::{FRAME_BASES, RETURN_ADDRESSES};

use crate::domain::Address;

/// Largest distance between a frame base and its caller's frame base that is
/// accepted as a genuine link. Frames larger than this end the walk.
pub const MAX_FRAME_SPAN: usize = 1 << 20;

/// Frame bases are 16-byte aligned on every supported ABI.
const FRAME_ALIGN: usize = 16;

const WORD: isize = core::mem::size_of::<usize>() as isize;

#[cfg(not(target_arch = "riscv64"))]
mod layout {
    pub const LINK: isize = 0;
    pub const RETURN: isize = super::WORD;
}

#[cfg(target_arch = "riscv64")]
mod layout {
    pub const LINK: isize = -2 * super::WORD;
    pub const RETURN: isize = -super::WORD;
}

/// Anchor of one activation record on the calling thread's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameBase(usize);

impl FrameBase {
    pub const NULL: Self = Self(0);

    /// Frame base of the function this call is inlined into.
    #[inline(always)]
    pub(crate) fn current() -> Self {
        Self::checked(read_frame_register())
    }

    /// Wrap a raw frame base; misaligned values become [`FrameBase::NULL`].
    #[must_use]
    pub const fn checked(addr: usize) -> Self {
        if addr % FRAME_ALIGN == 0 {
            Self(addr)
        } else {
            Self::NULL
        }
    }

    #[must_use]
    pub const fn addr(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Follow the saved link to the caller's frame base.
    ///
    /// Returns [`FrameBase::NULL`] when `self` is null or the saved value is
    /// not a plausible caller frame: null, misaligned, not above `self`, or
    /// more than [`MAX_FRAME_SPAN`] above it.
    ///
    /// The span check is a known limit: a caller whose frame holds more than
    /// 1 MiB of locals (large on-stack arrays) is indistinguishable from a
    /// garbage link, so the walk ends below it and the backtrace is short.
    ///
    /// # Safety
    /// `self` must be null or the base of a live frame record on this thread.
    #[inline]
    pub(crate) unsafe fn link(self) -> Self {
        if self.is_null() {
            return Self::NULL;
        }
        let next = read_word(self.0, layout::LINK);
        if next <= self.0 || next - self.0 > MAX_FRAME_SPAN {
            return Self::NULL;
        }
        Self::checked(next)
    }

    /// Address at which execution resumes in the caller of this frame, or
    /// null when the caller has no valid frame.
    ///
    /// # Safety
    /// Same as [`FrameBase::link`].
    #[inline]
    pub(crate) unsafe fn resume_address(self) -> Address {
        if self.link().is_null() {
            return Address::NULL;
        }
        Address(read_word(self.0, layout::RETURN))
    }
}

/// Depth-bounded view of the stack above one anchor frame.
///
/// Ordinal 1 is the caller of the anchor frame, ordinal 2 its caller, and so
/// on up to [`MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct FrameWalker {
    origin: FrameBase,
}

impl FrameWalker {
    /// Walker anchored at the frame of the function this call is inlined into.
    #[inline(always)]
    pub(crate) fn here() -> Self {
        Self { origin: FrameBase::current() }
    }

    /// Walker anchored at an arbitrary frame base.
    ///
    /// # Safety
    /// `origin` must be null or the base of a frame record whose chain of
    /// saved links stays readable for as long as the walker is used.
    #[must_use]
    pub const unsafe fn from_frame_base(origin: FrameBase) -> Self {
        Self { origin }
    }

    /// Frame base of the `ordinal`-th ancestor, `None` past the end of the
    /// stack or outside `1..=MAX_DEPTH`.
    #[must_use]
    pub fn frame_base(&self, ordinal: usize) -> Option<FrameBase> {
        let accessor = FRAME_BASES.get(ordinal.checked_sub(1)?)?;
        // SAFETY: the origin was vetted by the constructor and every link is
        // validated by `FrameBase::link`.
        let base = unsafe { accessor(self.origin) };
        (!base.is_null()).then_some(base)
    }

    /// Address at which execution resumes in the `ordinal`-th ancestor, `None`
    /// under the same conditions as [`FrameWalker::frame_base`].
    #[must_use]
    pub fn return_address(&self, ordinal: usize) -> Option<Address> {
        let accessor = RETURN_ADDRESSES.get(ordinal.checked_sub(1)?)?;
        // SAFETY: see `frame_base`.
        let addr = unsafe { accessor(self.origin) };
        (!addr.is_null()).then_some(addr)
    }
}

#[inline(always)]
fn read_frame_register() -> usize {
    let fp: usize;
    #[cfg(target_arch = "x86_64")]
    // SAFETY: copies a register, touches no memory.
    unsafe {
        core::arch::asm!("mov {}, rbp", out(reg) fp, options(nomem, nostack, preserves_flags));
    }
    #[cfg(target_arch = "aarch64")]
    // SAFETY: copies a register, touches no memory.
    unsafe {
        core::arch::asm!("mov {}, x29", out(reg) fp, options(nomem, nostack, preserves_flags));
    }
    #[cfg(target_arch = "riscv64")]
    // SAFETY: copies a register, touches no memory.
    unsafe {
        core::arch::asm!("mv {}, s0", out(reg) fp, options(nomem, nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64")))]
    {
        fp = 0;
    }
    fp
}

#[inline(always)]
unsafe fn read_word(base: usize, offset: isize) -> usize {
    (base.wrapping_add_signed(offset) as *const usize).read_volatile()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{layout, FrameBase, FrameWalker, WORD};

    const WORDS: usize = 64;

    /// Word-addressed scratch memory holding hand-built frame records.
    #[repr(C, align(16))]
    pub(crate) struct FakeStack([usize; WORDS]);

    impl FakeStack {
        pub(crate) fn new() -> Box<Self> {
            Box::new(FakeStack([0; WORDS]))
        }

        pub(crate) fn base(&self, index: usize) -> usize {
            std::ptr::addr_of!(self.0[index]) as usize
        }

        /// Write a frame record whose base is word `index`.
        pub(crate) fn plant(&mut self, index: usize, link: usize, ret: usize) {
            let link_slot = index as isize + layout::LINK / WORD;
            let ret_slot = index as isize + layout::RETURN / WORD;
            self.0[link_slot as usize] = link;
            self.0[ret_slot as usize] = ret;
        }

        pub(crate) fn walker(&self, index: usize) -> FrameWalker {
            unsafe { FrameWalker::from_frame_base(FrameBase::checked(self.base(index))) }
        }
    }
}
