//! Ask the dynamic linker about an address.

use std::ffi::CStr;

use crate::Addr;

pub(crate) struct Identified<'a> {
    /// Raw (possibly mangled) name of the closest preceding dynamic symbol.
    pub(crate) name: Option<&'a CStr>,
    /// Address of that symbol.
    pub(crate) entry: Addr,
}

#[cfg(unix)]
pub(crate) fn identify(addr: Addr) -> Option<Identified<'static>> {
    unsafe {
        let mut info: libc::Dl_info = std::mem::zeroed();

        if libc::dladdr(addr.voidptr(), &mut info) == 0 {
            trace!("dladdr knows nothing about {addr:?}");
            return None;
        }

        // SAFETY: dladdr returned success, so a non-null dli_sname points to a string
        // owned by the loaded object, which we never unload.
        let name = (!info.dli_sname.is_null()).then(|| CStr::from_ptr(info.dli_sname));
        let entry = Addr(info.dli_saddr as usize);
        trace!(?name, ?entry, "dladdr identified {addr:?}");

        Some(Identified { name, entry })
    }
}

#[cfg(not(unix))]
pub(crate) fn identify(_addr: Addr) -> Option<Identified<'static>> {
    None
}

/// Start of the function containing `pc` according to the unwind tables.
#[cfg(unix)]
pub(crate) fn enclosing_function(pc: Addr) -> Option<Addr> {
    // SAFETY: the unwinder only looks the address up in its FDE tables.
    let start = unsafe { crate::uw::_Unwind_FindEnclosingFunction(pc.voidptr()) };
    (!start.is_null()).then(|| Addr(start as usize))
}

#[cfg(not(unix))]
pub(crate) fn enclosing_function(_pc: Addr) -> Option<Addr> {
    None
}
