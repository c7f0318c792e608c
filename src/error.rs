use crate::Addr;

/// Why a frame could not be turned into a [`CallerInfo`](crate::CallerInfo).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The stack walk produced no addresses. Either `skip` is deeper than the stack or the
    /// platform cannot walk the stack at all.
    #[error("no frames were found {skip} frames up the stack")]
    NoFramesFound { skip: usize },

    /// An address was captured but no function is known to contain it, which usually
    /// means stripped symbols or foreign code.
    #[error("no caller information was found for address {addr}")]
    NoCallerInfoFound { addr: Addr },

    #[error("max_frames must be at least 1")]
    InvalidMaxFrames,
}

impl Error {
    pub(crate) fn no_caller_info(addr: Addr) -> Self {
        Error::NoCallerInfoFound { addr }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
