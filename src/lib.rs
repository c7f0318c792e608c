//! Find out who called you.
//!
//! `callerinfo` walks the current stack, resolves the frames it finds against the debug
//! info of the running binary and hands back [`CallerInfo`] records: function, module
//! path, source file, line and entry address. It is meant for loggers and error
//! reporters that want to attribute a message to its call site without annotating it.
//!
//! ```no_run
//! use callerinfo::StackResolver;
//!
//! fn do_work() {
//!     let resolver = StackResolver::host();
//!     // 0 is the capture primitive, 1 is `resolve_single_frame`, 2 is `do_work`.
//!     let me = resolver.resolve_single_frame(2).unwrap();
//!     println!("{}", me.debug_label());
//!
//!     // the function calling `current_caller_name`, here `do_work`
//!     assert_eq!(resolver.current_caller_name(), "do_work");
//!
//!     // whoever called `do_work`
//!     let caller = resolver.resolve_single_frame(3).unwrap();
//!     println!("called from {}", caller.short_label());
//! }
//! ```

#[macro_use]
extern crate tracing;

use core::{ffi, fmt};

mod caller;
mod error;
mod identify;
mod resolve;
#[cfg(unix)]
mod uw;

pub mod walk;

pub use caller::{split_qualified_name, CallerInfo, SEPARATOR};
pub use error::{Error, Result};
pub use resolve::{StackResolver, CALLER_SKIP};
pub use walk::{Host, Location, StackWalker, Symbol};

/// A code address in the current process. Never dereferenced.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Addr(pub usize);

impl Addr {
    pub const NULL: Addr = Addr(0);

    pub(crate) fn voidptr(self) -> *mut ffi::c_void {
        self.0 as *mut ffi::c_void
    }

    pub fn addr(&self) -> usize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The address one byte before this one, used to look up the call instruction
    /// that a return address follows.
    pub fn call_site(self) -> Addr {
        Addr(self.0.saturating_sub(1))
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<usize> for Addr {
    fn from(value: usize) -> Self {
        Addr(value)
    }
}
