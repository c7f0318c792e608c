//! Access to the stack and the debug info of the running process.
//!
//! The resolver only needs two things from the host: a list of return addresses and a way
//! to name an address. [`StackWalker`] is that seam; [`Host`] implements it for the current
//! process.

mod host;

pub use host::Host;

use crate::Addr;

/// The function an address belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Fully qualified, demangled name without the trailing hash.
    pub name: String,
    /// Entry point of the function, [`Addr::NULL`] if unknown.
    pub entry: Addr,
}

/// Where in the source an address comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

/// The host capabilities a [`StackResolver`](crate::StackResolver) is built on.
pub trait StackWalker {
    /// Whether [`capture`](Self::capture) yields the address of the call instruction
    /// itself. Walkers that yield return addresses (the instruction after the call) leave
    /// this `false`, and lookups are done one byte earlier so they land on the call.
    const RETURNS_CALL_SITES: bool = false;

    /// Fills `buf` with up to `buf.len()` addresses, starting `skip` frames up from this
    /// function's own frame, and returns how many were written.
    fn capture(&self, skip: usize, buf: &mut [usize]) -> usize;

    /// Names the function containing `pc`.
    fn symbol(&self, pc: Addr) -> Option<Symbol>;

    /// Source position of `pc`.
    fn location(&self, pc: Addr) -> Option<Location>;
}
