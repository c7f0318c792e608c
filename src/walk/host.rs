//! The stack of the current process, walked and symbolized with `backtrace`.


use core::ffi;

use backtrace::SymbolName;
use tracing::instrument;

use super::{Location, StackWalker, Symbol};
use crate::{identify, Addr};

/// Walks the stack of the current thread and looks addresses up in the debug info of
/// the loaded objects.
///
/// Only frames that can be named are captured: the walk stops at the first frame without
/// a symbol, so a capture deeper than the stack comes back short instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Host;

impl StackWalker for Host {
    #[inline(never)]
    fn capture(&self, skip: usize, buf: &mut [usize]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        // The walk starts somewhere inside the unwinder. Depth 0 is the frame of this
        // function, found by comparing frame start addresses against our own.
        let anchor = <Host as StackWalker>::capture as usize;
        let mut depth: Option<usize> = None;
        let mut filled = 0;

        backtrace::trace(|frame| {
            let current = match depth {
                Some(depth) => depth + 1,
                None if frame.symbol_address() as usize == anchor => 0,
                None => return true,
            };
            depth = Some(current);

            // the unwinder ends the walk with a null frame
            let ip = frame.ip() as usize;
            if ip == 0 || frame.symbol_address().is_null() {
                return false;
            }

            if current >= skip {
                // foreign frames below the Rust ones (thread entry, libc start) are not
                // handed out, the walk ends at the first one that has no name
                if self.symbol(Addr(ip).call_site()).is_none() {
                    trace!(depth = current, "stopping at unnamed frame {ip:#x}");
                    return false;
                }
                buf[filled] = ip;
                filled += 1;
            }
            filled < buf.len()
        });

        match depth {
            None => trace!("capture frame never showed up in the stack walk"),
            Some(depth) => trace!(skip, depth, filled, "captured stack"),
        }

        filled
    }

    #[instrument(level = "trace", skip(self))]
    fn symbol(&self, pc: Addr) -> Option<Symbol> {
        let mut name = None;
        backtrace::resolve(resolve_target(pc), |symbol| {
            // inlined frames are reported innermost first
            if name.is_none() {
                name = symbol.name().map(|name| format!("{name:#}"));
            }
        });

        let (name, entry) = match name {
            Some(name) => (name, identify::enclosing_function(pc)),
            None => {
                let identified = identify::identify(pc)?;
                let raw = identified.name?;
                let name = format!("{:#}", SymbolName::new(raw.to_bytes()));
                let entry = identify::enclosing_function(pc)
                    .or_else(|| (!identified.entry.is_null()).then_some(identified.entry));
                (name, entry)
            }
        };

        if name.is_empty() {
            trace!("symbol without a name");
            return None;
        }

        Some(Symbol {
            name,
            entry: entry.unwrap_or(Addr::NULL),
        })
    }

    #[instrument(level = "trace", skip(self))]
    fn location(&self, pc: Addr) -> Option<Location> {
        let mut location = None;
        backtrace::resolve(resolve_target(pc), |symbol| {
            if location.is_some() {
                return;
            }
            if let Some(file) = symbol.filename() {
                location = Some(Location {
                    file: file.display().to_string(),
                    line: symbol.lineno().unwrap_or(0),
                });
            }
        });
        location
    }
}

/// `backtrace::resolve` treats its argument as a return address and looks up the byte
/// before it, so hand it the byte after the address we actually want.
fn resolve_target(pc: Addr) -> *mut ffi::c_void {
    Addr(pc.addr().saturating_add(1)).voidptr()
}
