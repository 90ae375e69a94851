//! The [`AtomicStorage`] trait and the native atomics that implement it
#[cfg(target_has_atomic = "64")]
pub use core::sync::atomic::{AtomicI64, AtomicU64};
pub use core::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI8, AtomicIsize, AtomicPtr, AtomicU16, AtomicU32,
    AtomicU8, AtomicUsize, Ordering,
};

/// A native atomic type which can back an [`AtomicCell`].
///
/// This is a thin trait over the inherent methods of the `core::sync::atomic`
/// types, so that the cell can be written once for every width.
///
/// [`AtomicCell`]: crate::AtomicCell
pub trait AtomicStorage: Sized + Send + Sync {
    /// The underlying non-atomic type. This has the same in-memory
    /// representation as `Self`.
    type Underlying: Copy + PartialEq;

    /// An underlying value initialized to zero (`0`, `false` or null).
    const ZERO: Self::Underlying;

    /// Creates a new atomic holding `v`.
    fn new(v: Self::Underlying) -> Self;

    /// Consumes the atomic and returns the contained value.
    ///
    /// This is safe because passing `self` by value guarantees that no other threads are
    /// concurrently accessing the atomic data.
    fn into_inner(self) -> Self::Underlying;

    /// Returns a mutable reference to the underlying value.
    ///
    /// This is safe because the mutable reference guarantees that no other
    /// threads are concurrently accessing the atomic data.
    fn get_mut(&mut self) -> &mut Self::Underlying;

    /// Loads a value from the atomic.
    ///
    /// # Panics
    ///
    /// Panics if `order` is [`Ordering::Release`] or [`Ordering::AcqRel`].
    fn load(&self, order: Ordering) -> Self::Underlying;

    /// Stores a value into the atomic.
    ///
    /// # Panics
    ///
    /// Panics if `order` is [`Ordering::Acquire`] or [`Ordering::AcqRel`].
    fn store(&self, val: Self::Underlying, order: Ordering);

    /// Stores a value into the atomic, returning the previous value.
    fn swap(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying;

    /// Stores `new` if the current value is the same as `current`.
    ///
    /// The return value is a result indicating whether the new value was written and containing
    /// the previous value. On success this value is guaranteed to be equal to `current`.
    fn compare_exchange(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying>;

    /// Stores `new` if the current value is the same as `current`.
    ///
    /// Unlike [`AtomicStorage::compare_exchange`], this function is allowed to spuriously fail
    /// even when the comparison succeeds, which can result in more efficient code on some
    /// platforms.
    fn compare_exchange_weak(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying>;
}

/// An integer [`AtomicStorage`] with native fetch-and-add.
pub trait AtomicArithmetic: AtomicStorage {
    /// Adds to the current value, returning the previous value. Wraps around on overflow.
    fn fetch_add(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying;

    /// Subtracts from the current value, returning the previous value. Wraps around on
    /// overflow.
    fn fetch_sub(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying;
}

macro_rules! impl_storage {
    (<$($g:ident)?> $t1:ty, $t2:ty, $z:expr) => {
impl $(<$g>)? AtomicStorage for $t1 {
    type Underlying = $t2;

    const ZERO: Self::Underlying = $z;

    fn new(val: Self::Underlying) -> Self {
        <$t1>::new(val)
    }

    fn into_inner(self) -> Self::Underlying {
        <$t1>::into_inner(self)
    }

    fn get_mut(&mut self) -> &mut Self::Underlying {
        <$t1>::get_mut(self)
    }

    fn load(&self, order: Ordering) -> Self::Underlying {
        <$t1>::load(self, order)
    }

    fn store(&self, val: Self::Underlying, order: Ordering) {
        <$t1>::store(self, val, order)
    }

    fn swap(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying {
        <$t1>::swap(self, val, order)
    }

    fn compare_exchange(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying> {
        <$t1>::compare_exchange(self, current, new, success, failure)
    }

    fn compare_exchange_weak(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Underlying, Self::Underlying> {
        <$t1>::compare_exchange_weak(self, current, new, success, failure)
    }
}
    };
    ($t1:ty, $t2:ty, $z:expr) => { impl_storage!{<> $t1, $t2, $z} };
    ($t1:ty, $t2:ty) => {
        impl_storage!{<> $t1, $t2, 0}

        impl AtomicArithmetic for $t1 {
            fn fetch_add(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying {
                <$t1>::fetch_add(self, val, order)
            }

            fn fetch_sub(&self, val: Self::Underlying, order: Ordering) -> Self::Underlying {
                <$t1>::fetch_sub(self, val, order)
            }
        }
    };
}

impl_storage! {<T> AtomicPtr<T>, *mut T, core::ptr::null_mut::<T>()}
impl_storage! {AtomicUsize, usize}
impl_storage! {AtomicIsize, isize}
#[cfg(target_has_atomic = "64")]
impl_storage! {AtomicU64, u64}
#[cfg(target_has_atomic = "64")]
impl_storage! {AtomicI64, i64}
impl_storage! {AtomicU32, u32}
impl_storage! {AtomicI32, i32}
impl_storage! {AtomicU16, u16}
impl_storage! {AtomicI16, i16}
impl_storage! {AtomicU8, u8}
impl_storage! {AtomicI8, i8}
impl_storage! {AtomicBool, bool, false}
