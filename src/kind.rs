//! The [`Kind`] capability: how a value type is held by a cell
//!
//! Every value type a cell can hold names a native [`AtomicStorage`] and
//! knows how to convert itself to and from that storage's raw
//! representation. Both [`PlainCell`] and [`AtomicCell`] are written once
//! against this trait; the implementations for the built-in kinds are
//! generated below.
//!
//! [`PlainCell`]: crate::PlainCell
//! [`AtomicCell`]: crate::AtomicCell
use core::ptr;

#[cfg(target_has_atomic = "64")]
use crate::atomic::{AtomicI64, AtomicU64};
use crate::atomic::{
    AtomicArithmetic, AtomicBool, AtomicI16, AtomicI32, AtomicI8, AtomicIsize, AtomicPtr,
    AtomicStorage, AtomicU16, AtomicU32, AtomicU8, AtomicUsize, Ordering,
};

/// The raw representation of a [`Kind`], as held by its storage.
pub type Raw<T> = <<T as Kind>::Storage as AtomicStorage>::Underlying;

/// A value type which can be held in a cell.
///
/// Built-in kinds are `bool`, `char`, the fixed-width and pointer-sized
/// integers, `f32`, `f64` and shared references `Option<&T>`.
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - `Self` has the same size as [`Raw<Self>`], and every value of `Self` is a
///   valid bit pattern of [`Raw<Self>`];
/// - [`AtomicStorage::ZERO`] is a valid raw value for `Self`;
/// - `from_raw(into_raw(v))` yields `v` back;
/// - two values with equal raw representations are [`Kind::same`].
///
/// # Examples
///
/// A `#[repr(u8)]` enum can be stored in an `AtomicU8`:
///
/// ```
/// use value_cell::{atomic::AtomicU8, AtomicCell, Kind};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// #[repr(u8)]
/// enum Light {
///     Off = 0,
///     On = 1,
/// }
///
/// unsafe impl Kind for Light {
///     type Storage = AtomicU8;
///
///     fn into_raw(self) -> u8 {
///         self as u8
///     }
///
///     unsafe fn from_raw(raw: u8) -> Self {
///         match raw {
///             0 => Light::Off,
///             _ => Light::On,
///         }
///     }
///
///     fn same(&self, other: &Self) -> bool {
///         self == other
///     }
/// }
///
/// let light = AtomicCell::<Light>::default();
/// assert!(light.compare_and_swap(Light::Off, Light::On));
/// assert_eq!(light.get(), Light::On);
/// ```
pub unsafe trait Kind: Copy {
    /// The native atomic that backs an [`AtomicCell`] of this kind.
    ///
    /// [`AtomicCell`]: crate::AtomicCell
    type Storage: AtomicStorage;

    /// Converts the value into its raw representation.
    fn into_raw(self) -> Raw<Self>;

    /// Rebuilds a value from its raw representation.
    ///
    /// # Safety
    ///
    /// `raw` must have been produced by [`Kind::into_raw`] (or be
    /// [`AtomicStorage::ZERO`]).
    unsafe fn from_raw(raw: Raw<Self>) -> Self;

    /// The equality used by compare-and-swap.
    fn same(&self, other: &Self) -> bool;

    /// The kind's zero value: `0`, `false`, `'\0'`, `0.0` or `None`.
    fn zero() -> Self {
        // SAFETY: `ZERO` is a valid raw value for every kind.
        unsafe { Self::from_raw(Self::Storage::ZERO) }
    }
}

/// An integer [`Kind`], which can be incremented and decremented.
///
/// All arithmetic wraps around using two's-complement rules.
pub trait Integral: Kind {
    /// Returns `self + 1`, wrapping at the maximum value.
    fn wrapping_increment(self) -> Self;

    /// Returns `self - 1`, wrapping at the minimum value.
    fn wrapping_decrement(self) -> Self;

    /// Atomically adds one to `atomic`, returning the previous value.
    fn fetch_increment(atomic: &Self::Storage) -> Self;

    /// Atomically subtracts one from `atomic`, returning the previous value.
    fn fetch_decrement(atomic: &Self::Storage) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty => $a:ty),* $(,)?) => {$(
        unsafe impl Kind for $t {
            type Storage = $a;

            #[inline]
            fn into_raw(self) -> $t {
                self
            }

            #[inline]
            unsafe fn from_raw(raw: $t) -> Self {
                raw
            }

            #[inline]
            fn same(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl Integral for $t {
            #[inline]
            fn wrapping_increment(self) -> Self {
                self.wrapping_add(1)
            }

            #[inline]
            fn wrapping_decrement(self) -> Self {
                self.wrapping_sub(1)
            }

            #[inline]
            fn fetch_increment(atomic: &$a) -> Self {
                AtomicArithmetic::fetch_add(atomic, 1, Ordering::SeqCst)
            }

            #[inline]
            fn fetch_decrement(atomic: &$a) -> Self {
                AtomicArithmetic::fetch_sub(atomic, 1, Ordering::SeqCst)
            }
        }
    )*};
}

impl_integral! {
    i8 => AtomicI8,
    i16 => AtomicI16,
    i32 => AtomicI32,
    isize => AtomicIsize,
    u8 => AtomicU8,
    u16 => AtomicU16,
    u32 => AtomicU32,
    usize => AtomicUsize,
}

#[cfg(target_has_atomic = "64")]
impl_integral! {
    i64 => AtomicI64,
    u64 => AtomicU64,
}

// Floats compare by bit pattern: a stored NaN matches the same NaN, and
// `0.0` does not match `-0.0`.
macro_rules! impl_float {
    ($t:ty => $a:ty, $bits:ty) => {
        unsafe impl Kind for $t {
            type Storage = $a;

            #[inline]
            fn into_raw(self) -> $bits {
                self.to_bits()
            }

            #[inline]
            unsafe fn from_raw(raw: $bits) -> Self {
                <$t>::from_bits(raw)
            }

            #[inline]
            fn same(&self, other: &Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }
    };
}

impl_float! {f32 => AtomicU32, u32}
#[cfg(target_has_atomic = "64")]
impl_float! {f64 => AtomicU64, u64}

unsafe impl Kind for bool {
    type Storage = AtomicBool;

    #[inline]
    fn into_raw(self) -> bool {
        self
    }

    #[inline]
    unsafe fn from_raw(raw: bool) -> Self {
        raw
    }

    #[inline]
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

unsafe impl Kind for char {
    type Storage = AtomicU32;

    #[inline]
    fn into_raw(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    unsafe fn from_raw(raw: u32) -> Self {
        // SAFETY: `raw` came from `into_raw` or is `'\0'`, both valid scalar values.
        unsafe { char::from_u32_unchecked(raw) }
    }

    #[inline]
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

/// Reference cells hold a borrow, never the referent itself.
///
/// Two absent references are the same, an absent and a present reference are
/// not, and two present references are the same when they point at the same
/// referent or their referents are equal.
unsafe impl<'a, T: PartialEq> Kind for Option<&'a T> {
    type Storage = AtomicPtr<T>;

    #[inline]
    fn into_raw(self) -> *mut T {
        match self {
            Some(r) => r as *const T as *mut T,
            None => ptr::null_mut(),
        }
    }

    #[inline]
    unsafe fn from_raw(raw: *mut T) -> Self {
        // SAFETY: `raw` is null or came from a `&'a T`, which is still borrowed.
        unsafe { raw.as_ref() }
    }

    #[inline]
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(*a, *b) || a == b,
            _ => false,
        }
    }
}
