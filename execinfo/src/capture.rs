//! Stack capture
//!
//! Turns the walker's frame chain into a caller-owned list of return
//! addresses. No allocation, no logging, no failure mode: a shallow or
//! unreadable stack is reported through a smaller count.

use crate::domain::Address;
use crate::walker::{FrameWalker, MAX_DEPTH};

/// Practical upper bound for a capture buffer; deeper requests are clamped to
/// the walker depth anyway.
pub const MAX_FRAMES: usize = MAX_DEPTH;

/// Store the return addresses of the current call stack in `buffer`.
///
/// Entry 0 is the address in the function that called `capture`, entry 1 the
/// address in its caller, and so on. Returns how many entries were written,
/// never more than `buffer.len()` or [`MAX_DEPTH`]; entries past that count
/// are left untouched.
///
/// ```
/// use execinfo::{capture, Address};
///
/// let mut frames = [Address::NULL; 16];
/// let depth = capture(&mut frames);
/// assert!(depth <= frames.len());
/// ```
#[inline(never)]
pub fn capture(buffer: &mut [Address]) -> usize {
    fill(FrameWalker::here(), buffer)
}

/// Copy return addresses out of `walker`, starting at ordinal 1.
pub(crate) fn fill(walker: FrameWalker, buffer: &mut [Address]) -> usize {
    let limit = buffer.len().min(MAX_DEPTH);
    let mut written = 0;

    for ordinal in 1..=limit {
        if walker.frame_base(ordinal).is_none() {
            break;
        }
        // A null return address ends the meaningful stack as well.
        let Some(addr) = walker.return_address(ordinal) else {
            break;
        };
        buffer[written] = addr;
        written += 1;
    }

    written
}
