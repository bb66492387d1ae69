//! Interlocked compare-and-exchange and exchange.
//!
//! Every operation is a single hardware atomic with `SeqCst` ordering. The
//! ordering must not be weakened: generated code relies on these calls as
//! full fences.

use std::sync::atomic::{
    AtomicI32, AtomicI64, AtomicIsize, AtomicPtr, AtomicU32, AtomicU64, AtomicUsize, Ordering,
};

/// A word type with a matching `std::sync::atomic` cell.
pub trait Interlocked: Copy + Eq {
    type Atomic;

    /// Stores `value` into `loc` iff it currently holds `comparand`.
    /// Returns the value held before the operation either way.
    fn compare_exchange(loc: &Self::Atomic, value: Self, comparand: Self) -> Self;

    /// Stores `value` into `loc` and returns the previous contents.
    fn exchange(loc: &Self::Atomic, value: Self) -> Self;

    /// Views a raw location as its atomic cell.
    ///
    /// # Safety
    /// `ptr` must be non-null, aligned for `Self::Atomic`, valid for the
    /// returned lifetime, and only accessed atomically while the view lives.
    unsafe fn atomic_at<'a>(ptr: *mut Self) -> &'a Self::Atomic;
}

macro_rules! impl_interlocked {
    ($($t:ty => $atomic:ty),* $(,)?) => {
        $(
            impl Interlocked for $t {
                type Atomic = $atomic;

                #[inline]
                fn compare_exchange(loc: &$atomic, value: $t, comparand: $t) -> $t {
                    match loc.compare_exchange(comparand, value, Ordering::SeqCst, Ordering::SeqCst) {
                        Ok(previous) | Err(previous) => previous,
                    }
                }

                #[inline]
                fn exchange(loc: &$atomic, value: $t) -> $t {
                    loc.swap(value, Ordering::SeqCst)
                }

                #[inline]
                unsafe fn atomic_at<'a>(ptr: *mut $t) -> &'a $atomic {
                    <$atomic>::from_ptr(ptr)
                }
            }
        )*
    };
}

impl_interlocked!(
    i32 => AtomicI32,
    i64 => AtomicI64,
    u32 => AtomicU32,
    u64 => AtomicU64,
    isize => AtomicIsize,
    usize => AtomicUsize,
    *mut u8 => AtomicPtr<u8>,
);

/// Compare-and-exchange on an atomic cell. See [`Interlocked::compare_exchange`].
#[inline]
pub fn compare_exchange<T: Interlocked>(loc: &T::Atomic, value: T, comparand: T) -> T {
    T::compare_exchange(loc, value, comparand)
}

/// Exchange on an atomic cell. See [`Interlocked::exchange`].
#[inline]
pub fn exchange<T: Interlocked>(loc: &T::Atomic, value: T) -> T {
    T::exchange(loc, value)
}

/// Compare-and-exchange on a plain memory location.
///
/// # Safety
/// See [`Interlocked::atomic_at`].
#[inline]
pub unsafe fn compare_exchange_raw<T: Interlocked>(loc: *mut T, value: T, comparand: T) -> T {
    T::compare_exchange(T::atomic_at(loc), value, comparand)
}

/// Exchange on a plain memory location.
///
/// # Safety
/// See [`Interlocked::atomic_at`].
#[inline]
pub unsafe fn exchange_raw<T: Interlocked>(loc: *mut T, value: T) -> T {
    T::exchange(T::atomic_at(loc), value)
}
