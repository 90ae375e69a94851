use core::{
    fmt,
    marker::PhantomData,
    mem::{align_of, size_of},
};

use const_panic::concat_assert;

use super::{Countable, Valuable};
use crate::{
    atomic::{AtomicStorage, Ordering},
    kind::{Integral, Kind, Raw},
    utils::trace,
};

/// Every operation on an [`AtomicCell`] is sequentially consistent.
const ORDER: Ordering = Ordering::SeqCst;

/// A thread-safe mutable memory location.
///
/// This type is equivalent to [`PlainCell`], except it can also be shared
/// among multiple threads. The value lives in the native atomic selected by
/// [`Kind::Storage`], and every operation is a single atomic instruction with
/// [`SeqCst`] ordering, so all operations on one cell are linearizable.
///
/// No operation blocks. [`AtomicCell::compare_and_swap`] reports contention by
/// returning `false`; retrying is up to the caller.
///
/// [`PlainCell`]: crate::PlainCell
/// [`SeqCst`]: core::sync::atomic::Ordering::SeqCst
///
/// # Examples
///
/// ```
/// use std::thread;
/// use value_cell::AtomicCell;
///
/// let hits = AtomicCell::<u32>::default();
///
/// thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| {
///             for _ in 0..100 {
///                 hits.increment();
///             }
///         });
///     }
/// });
///
/// assert_eq!(hits.get(), 400);
/// ```
#[repr(transparent)]
pub struct AtomicCell<T: Kind> {
    /// Always holds the raw representation of a proper `T` value
    atomic: T::Storage,
    _marker: PhantomData<T>,
}

impl<T: Kind> AtomicCell<T> {
    /// `true` if a reference to the raw value can be reborrowed as a reference
    /// to `T` (see [`AtomicCell::get_mut`]).
    pub const REF_SUPPORTED: bool = size_of::<T>() == size_of::<Raw<T>>()
        && align_of::<Raw<T>>() % align_of::<T>() == 0;

    /// Panics at compile-time if `!REF_SUPPORTED`
    pub const ASSERT_REF_SUPPORTED: () = Self::assert_ref_supported();

    const fn assert_ref_supported() {
        concat_assert!(
            Self::REF_SUPPORTED,
            "kind (size=",
            size_of::<T>(),
            ", align=",
            align_of::<T>(),
            ") does not fit its raw representation (size=",
            size_of::<Raw<T>>(),
            ", align=",
            align_of::<Raw<T>>(),
            ")",
        );
    }

    fn from_storage(atomic: T::Storage) -> Self {
        Self {
            atomic,
            _marker: PhantomData,
        }
    }

    /// Creates a new atomic cell initialized with `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(7);
    /// assert_eq!(a.get(), 7);
    /// ```
    pub fn new(val: T) -> Self {
        Self::from_storage(T::Storage::new(val.into_raw()))
    }

    /// Consumes the atomic and returns the contained value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new('x');
    /// assert_eq!(a.into_inner(), 'x');
    /// ```
    pub fn into_inner(self) -> T {
        // This is safe because the storage always holds a proper `T` value
        unsafe { T::from_raw(self.atomic.into_inner()) }
    }

    /// Returns a mutable reference to contained data.
    ///
    /// This is safe because the mutable reference guarantees that no other
    /// threads are concurrently accessing the atomic data.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let mut a = AtomicCell::new(1.5f32);
    /// *a.get_mut() *= 2.0;
    /// assert_eq!(a.get(), 3.0);
    /// ```
    pub fn get_mut(&mut self) -> &mut T {
        #[allow(clippy::let_unit_value)]
        let () = Self::ASSERT_REF_SUPPORTED;
        let raw: *mut Raw<T> = self.atomic.get_mut();

        // This is safe because size and alignment were checked above, the raw value holds a
        // proper `T`, and every `T` written through the reference is a valid raw value.
        unsafe { &mut *raw.cast::<T>() }
    }

    /// Loads the current value.
    ///
    /// The load is a single native atomic read, so it never observes a mix of
    /// two writes.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(-3i64);
    /// assert_eq!(a.get(), -3);
    /// ```
    pub fn get(&self) -> T {
        let raw = self.atomic.load(ORDER);

        // This is safe because the storage always holds a proper `T` value
        unsafe { T::from_raw(raw) }
    }

    /// Stores `val` into the atomic cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(7u8);
    ///
    /// assert_eq!(a.get(), 7);
    /// a.put(8);
    /// assert_eq!(a.get(), 8);
    /// ```
    pub fn put(&self, val: T) {
        self.atomic.store(val.into_raw(), ORDER);
    }

    /// Stores `val` into the atomic cell and returns the previous value, as
    /// one indivisible step.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(true);
    ///
    /// assert_eq!(a.swap(false), true);
    /// assert_eq!(a.get(), false);
    /// ```
    pub fn swap(&self, val: T) -> T {
        let raw = self.atomic.swap(val.into_raw(), ORDER);

        // This is safe because `raw` was swapped out of the storage, which only holds proper
        // `T` values.
        unsafe { T::from_raw(raw) }
    }

    /// Stores `val` if the current value is [`Kind::same`] as `expected`.
    ///
    /// Returns `true` if the value was written. A `false` result is the normal
    /// signal of contention, not an error: lock-free algorithms re-read and
    /// retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(1i16);
    ///
    /// assert!(!a.compare_and_swap(2, 3));
    /// assert_eq!(a.get(), 1);
    ///
    /// assert!(a.compare_and_swap(1, 2));
    /// assert_eq!(a.get(), 2);
    /// ```
    ///
    /// Floats compare by bit pattern, so a stored NaN can be replaced:
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(f64::NAN);
    /// assert!(a.compare_and_swap(f64::NAN, 1.0));
    /// assert!(!a.compare_and_swap(-0.0, 2.0));
    /// ```
    pub fn compare_and_swap(&self, expected: T, val: T) -> bool {
        self.compare_exchange(expected, val).is_ok()
    }

    /// If the current value is [`Kind::same`] as `current`, stores `new` into
    /// the atomic cell.
    ///
    /// The return value is a result indicating whether the new value was
    /// written and containing the previous value. On failure it contains the
    /// value that was observed instead.
    ///
    /// For every built-in scalar kind this is exactly one hardware
    /// compare-exchange. Reference kinds can hold distinct referents that
    /// compare equal; an exchange that meets one retries against it, and
    /// returns as soon as it meets a value that differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(1u64);
    ///
    /// assert_eq!(a.compare_exchange(2, 3), Err(1));
    /// assert_eq!(a.compare_exchange(1, 2), Ok(1));
    /// assert_eq!(a.get(), 2);
    /// ```
    pub fn compare_exchange(&self, current: T, new: T) -> Result<T, T> {
        let new = new.into_raw();
        let mut expected = current.into_raw();
        loop {
            match self.atomic.compare_exchange(expected, new, ORDER, ORDER) {
                // This is safe because `prev` was swapped out of the storage
                Ok(prev) => return Ok(unsafe { T::from_raw(prev) }),
                Err(raw) => {
                    // This is safe because `raw` is a copy of the storage
                    let actual = unsafe { T::from_raw(raw) };
                    if !actual.same(&current) {
                        return Err(actual);
                    }
                    trace!("compare_exchange met an equal value with a different representation");
                    expected = raw;
                }
            }
        }
    }

    /// Fetches the value, and applies a function to it that returns an optional
    /// new value. Returns a `Result` of `Ok(previous_value)` if the function
    /// returned `Some(_)`, else `Err(previous_value)`.
    ///
    /// This is the "read, compute, compare-and-swap, retry" loop packaged up:
    /// the function may be called multiple times if the value has been
    /// changed from other threads in the meantime, but it will have been
    /// applied only once to the stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(7u32);
    ///
    /// assert_eq!(a.fetch_update(|_| None), Err(7));
    /// assert_eq!(a.fetch_update(|a| Some(a + 1)), Ok(7));
    /// assert_eq!(a.fetch_update(|a| Some(a * 2)), Ok(8));
    /// assert_eq!(a.get(), 16);
    /// ```
    pub fn fetch_update<F>(&self, mut f: F) -> Result<T, T>
    where
        F: FnMut(T) -> Option<T>,
    {
        let mut raw = self.atomic.load(ORDER);
        loop {
            // This is safe because `raw` is a copy of the storage
            let prev = unsafe { T::from_raw(raw) };
            let next = match f(prev) {
                Some(next) => next,
                None => return Err(prev),
            };
            match self
                .atomic
                .compare_exchange_weak(raw, next.into_raw(), ORDER, ORDER)
            {
                Ok(_) => return Ok(prev),
                Err(actual) => {
                    trace!("fetch_update lost a race, retrying");
                    raw = actual;
                }
            }
        }
    }
}

impl<T: Kind + Default> AtomicCell<T> {
    /// Takes the value of the atomic cell, leaving `Default::default()` in its
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(5);
    ///
    /// assert_eq!(a.take(), 5);
    /// assert_eq!(a.into_inner(), 0);
    /// ```
    pub fn take(&self) -> T {
        self.swap(T::default())
    }
}

impl<T: Integral> AtomicCell<T> {
    /// Atomically adds one and returns the new value, wrapping around at the
    /// maximum value.
    ///
    /// This is a single native fetch-and-add; it never retries.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(i8::MAX);
    /// assert_eq!(a.increment(), i8::MIN);
    /// ```
    pub fn increment(&self) -> T {
        T::fetch_increment(&self.atomic).wrapping_increment()
    }

    /// Atomically subtracts one and returns the new value, wrapping around at
    /// the minimum value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::AtomicCell;
    ///
    /// let a = AtomicCell::new(0u16);
    /// assert_eq!(a.decrement(), u16::MAX);
    /// ```
    pub fn decrement(&self) -> T {
        T::fetch_decrement(&self.atomic).wrapping_decrement()
    }
}

impl<T: Kind> Default for AtomicCell<T> {
    /// Creates a cell holding the kind's zero value.
    fn default() -> Self {
        Self::from_storage(T::Storage::new(T::Storage::ZERO))
    }
}

impl<T: Kind> From<T> for AtomicCell<T> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

impl<T: Kind + fmt::Debug> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: Kind> Valuable for AtomicCell<T> {
    type Value = T;

    fn get(&self) -> T {
        AtomicCell::get(self)
    }

    fn put(&self, val: T) {
        AtomicCell::put(self, val)
    }

    fn swap(&self, val: T) -> T {
        AtomicCell::swap(self, val)
    }

    fn compare_and_swap(&self, expected: T, val: T) -> bool {
        AtomicCell::compare_and_swap(self, expected, val)
    }
}

impl<T: Integral> Countable for AtomicCell<T> {
    fn increment(&self) -> T {
        AtomicCell::increment(self)
    }

    fn decrement(&self) -> T {
        AtomicCell::decrement(self)
    }
}
