//! Resolved Addresses & Typed Function Pointers
//!
//! [`Address`] is a pointer-sized native call target that can never be the
//! not-found sentinel. [`FnPtr`] converts one into a typed
//! `unsafe extern "system" fn` exactly once, when a table is pinned.

use std::ffi::c_void;
use std::fmt;
use std::num::NonZeroUsize;

use serde::{Serialize, Serializer};

/// A resolved native entry point. Zero (null) is never representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Address(NonZeroUsize);

impl Address {
    /// Returns `None` for the not-found sentinel.
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline]
    pub fn from_ptr(ptr: *const c_void) -> Option<Self> {
        Self::new(ptr as usize)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    #[inline]
    pub fn as_ptr(self) -> *const c_void {
        self.0.get() as *const c_void
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self.get())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.get())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A typed native function pointer.
///
/// # Safety
///
/// Implementors must be plain function pointer types (pointer-sized, never
/// null). Callers of [`FnPtr::from_address`] guarantee the address points at
/// a function with exactly this signature and calling convention.
pub unsafe trait FnPtr: Copy + Send + Sync + 'static {
    /// Reinterprets a resolved address as this signature.
    ///
    /// # Safety
    ///
    /// See the trait-level contract.
    unsafe fn from_address(address: Address) -> Self;

    /// The address this pointer dispatches through.
    fn address(self) -> Address;
}

macro_rules! impl_fn_ptr {
    ($($arg:ident),*) => {
        unsafe impl<Ret: 'static, $($arg: 'static),*> FnPtr for unsafe extern "system" fn($($arg),*) -> Ret {
            #[inline]
            unsafe fn from_address(address: Address) -> Self {
                debug_assert_eq!(size_of::<Self>(), size_of::<usize>());
                // SAFETY: function pointers are pointer-sized; the signature is
                // the caller's contract.
                unsafe { std::mem::transmute_copy::<usize, Self>(&address.get()) }
            }

            #[inline]
            fn address(self) -> Address {
                // SAFETY: function pointers are never null.
                Address(unsafe { NonZeroUsize::new_unchecked(self as usize) })
            }
        }
    };
}

impl_fn_ptr!();
impl_fn_ptr!(A);
impl_fn_ptr!(A, B);
impl_fn_ptr!(A, B, C);
impl_fn_ptr!(A, B, C, D);
impl_fn_ptr!(A, B, C, D, E);
impl_fn_ptr!(A, B, C, D, E, F);
impl_fn_ptr!(A, B, C, D, E, F, G);
impl_fn_ptr!(A, B, C, D, E, F, G, H);
impl_fn_ptr!(A, B, C, D, E, F, G, H, I);
impl_fn_ptr!(A, B, C, D, E, F, G, H, I, J);
impl_fn_ptr!(A, B, C, D, E, F, G, H, I, J, K);
impl_fn_ptr!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "system" fn add_one(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_sentinel_is_not_an_address() {
        assert!(Address::new(0).is_none());
        assert!(Address::from_ptr(std::ptr::null()).is_none());
        assert_eq!(Address::new(0x1000).map(Address::get), Some(0x1000));
    }

    #[test]
    fn test_fn_ptr_round_trip_dispatches() {
        let f: unsafe extern "system" fn(i32) -> i32 = add_one;
        let address = f.address();

        let pinned = unsafe { <unsafe extern "system" fn(i32) -> i32 as FnPtr>::from_address(address) };
        assert_eq!(pinned.address(), address);
        assert_eq!(unsafe { pinned(41) }, 42);
    }

    #[test]
    fn test_display_is_hex() {
        let address = Address::new(0x2000).unwrap();
        assert_eq!(address.to_string(), "0x2000");
        assert_eq!(format!("{address:?}"), "Address(0x2000)");
    }
}
