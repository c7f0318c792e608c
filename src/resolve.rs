//! Turning stack addresses into [`CallerInfo`] records.
//!
//! Skip depths are counted from the walker's capture primitive: `0` is the capture
//! primitive itself, `1` is the resolver method that was called, `2` is whoever called
//! that method, and so on up the stack.


use crate::{
    walk::{Host, StackWalker},
    Addr, CallerInfo, Error, Result,
};

/// Skip depth used by [`StackResolver::current_caller_name`]: the capture primitive,
/// `resolve_single_frame`, `current_caller_name` itself, then its caller.
pub const CALLER_SKIP: usize = 3;

/// Where unknown files are reported to be.
const UNKNOWN_FILE: &str = "?";

/// Resolves frames of the stack that `W` walks into [`CallerInfo`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackResolver<W = Host> {
    walker: W,
}

impl StackResolver<Host> {
    /// A resolver for the stack of the current process.
    pub const fn host() -> Self {
        Self { walker: Host }
    }
}

impl<W: StackWalker> StackResolver<W> {
    pub const fn new(walker: W) -> Self {
        Self { walker }
    }

    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// Resolves the frame `skip_frames` up the stack.
    #[inline(never)]
    pub fn resolve_single_frame(&self, skip_frames: usize) -> Result<CallerInfo> {
        let mut buf = [0usize; 1];
        let n = self.walker.capture(skip_frames, &mut buf);
        if n == 0 {
            return Err(Error::NoFramesFound { skip: skip_frames });
        }

        self.resolve_address(Addr(buf[0]))
    }

    /// Resolves up to `max_frames` frames starting `skip_frames` up the stack, innermost
    /// first. A stack shorter than `max_frames` is fine, an address that cannot be resolved
    /// is not: the whole call fails with [`Error::NoCallerInfoFound`].
    #[inline(never)]
    pub fn resolve_frame_sequence(
        &self,
        skip_frames: usize,
        max_frames: usize,
    ) -> Result<Vec<CallerInfo>> {
        if max_frames == 0 {
            return Err(Error::InvalidMaxFrames);
        }

        let mut buf = vec![0usize; max_frames];
        let n = self.walker.capture(skip_frames, &mut buf);
        if n == 0 {
            return Err(Error::NoFramesFound { skip: skip_frames });
        }
        trace!(skip_frames, max_frames, captured = n, "resolving frame sequence");

        buf[..n]
            .iter()
            .map(|&addr| self.resolve_address(Addr(addr)))
            .collect()
    }

    /// The bare name of the function that called this one, or an empty string if it cannot
    /// be found out.
    #[inline(never)]
    pub fn current_caller_name(&self) -> String {
        match self.resolve_single_frame(CALLER_SKIP) {
            Ok(info) => info.function().to_owned(),
            Err(err) => {
                debug!(%err, "failed to resolve the current caller");
                String::new()
            }
        }
    }

    fn resolve_address(&self, addr: Addr) -> Result<CallerInfo> {
        let pc = if W::RETURNS_CALL_SITES {
            addr
        } else {
            addr.call_site()
        };

        let symbol = self
            .walker
            .symbol(pc)
            .filter(|symbol| !symbol.name.is_empty())
            .ok_or_else(|| Error::no_caller_info(addr))?;

        let (file, line) = match self.walker.location(pc) {
            Some(location) => (location.file, location.line),
            None => (UNKNOWN_FILE.to_owned(), 0),
        };

        let info = CallerInfo::new(&symbol.name, file, line, symbol.entry);
        trace!(%addr, %pc, info = %info.debug_label(), "resolved frame");
        Ok(info)
    }
}
