//! The bits of the unwinder ABI we call directly.
#![allow(nonstandard_style)] // Closely follow the ABI names here

use core::ffi;

extern "C" {
    /// Returns the start of the function containing `pc`, as recorded in the unwind
    /// tables, or null if there is no FDE covering it.
    pub fn _Unwind_FindEnclosingFunction(pc: *mut ffi::c_void) -> *mut ffi::c_void;
}
