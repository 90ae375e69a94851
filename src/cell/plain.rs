use core::{cell::Cell, fmt};

use super::{Countable, Valuable};
use crate::kind::{Integral, Kind};

/// A mutable memory location without synchronization.
///
/// `PlainCell` is [`Send`] but never [`Sync`]: it may be moved to another
/// thread, but sharing it requires an external lock. Its operations have the
/// same meaning as those of [`AtomicCell`], without the atomicity.
///
/// [`AtomicCell`]: crate::AtomicCell
///
/// # Examples
///
/// ```
/// use value_cell::PlainCell;
///
/// let total = PlainCell::new(0i32);
/// [3, 4, 5].iter().for_each(|n| total.put(total.get() + n));
/// assert_eq!(total.get(), 12);
/// ```
pub struct PlainCell<T: Kind> {
    value: Cell<T>,
}

impl<T: Kind> PlainCell<T> {
    /// Creates a new cell initialized with `val`.
    pub const fn new(val: T) -> Self {
        Self {
            value: Cell::new(val),
        }
    }

    /// Consumes the cell and returns the contained value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Returns a mutable reference to the contained value.
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Returns the current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Replaces the current value.
    pub fn put(&self, val: T) {
        self.value.set(val)
    }

    /// Replaces the current value and returns the previous one.
    pub fn swap(&self, val: T) -> T {
        self.value.replace(val)
    }

    /// Stores `val` if the current value is [`Kind::same`] as `expected`,
    /// returning whether it was written.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::PlainCell;
    ///
    /// let c = PlainCell::new(Some(&"a"));
    /// assert!(!c.compare_and_swap(None, Some(&"b")));
    /// assert!(c.compare_and_swap(Some(&"a"), None));
    /// assert_eq!(c.get(), None);
    /// ```
    pub fn compare_and_swap(&self, expected: T, val: T) -> bool {
        self.compare_exchange(expected, val).is_ok()
    }

    /// Stores `new` if the current value is [`Kind::same`] as `current`.
    ///
    /// Returns `Ok(previous)` if the value was written and `Err(actual)`
    /// otherwise.
    pub fn compare_exchange(&self, current: T, new: T) -> Result<T, T> {
        let prev = self.value.get();
        if prev.same(&current) {
            self.value.set(new);
            Ok(prev)
        } else {
            Err(prev)
        }
    }

    /// Applies `f` to the current value, stores the result and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_cell::PlainCell;
    ///
    /// let c = PlainCell::new(2.0f64);
    /// assert_eq!(c.update(|v| v * 1.5), 3.0);
    /// ```
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        let new = f(self.value.get());
        self.value.set(new);
        new
    }
}

impl<T: Kind + Default> PlainCell<T> {
    /// Takes the value of the cell, leaving `Default::default()` in its place.
    pub fn take(&self) -> T {
        self.value.take()
    }
}

impl<T: Integral> PlainCell<T> {
    /// Adds one and returns the new value, wrapping around at the maximum
    /// value.
    pub fn increment(&self) -> T {
        self.update(T::wrapping_increment)
    }

    /// Subtracts one and returns the new value, wrapping around at the
    /// minimum value.
    pub fn decrement(&self) -> T {
        self.update(T::wrapping_decrement)
    }
}

impl<T: Kind> Default for PlainCell<T> {
    /// Creates a cell holding the kind's zero value.
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Kind> Clone for PlainCell<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Kind> From<T> for PlainCell<T> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

impl<T: Kind + fmt::Debug> fmt::Debug for PlainCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: Kind> Valuable for PlainCell<T> {
    type Value = T;

    fn get(&self) -> T {
        PlainCell::get(self)
    }

    fn put(&self, val: T) {
        PlainCell::put(self, val)
    }

    fn swap(&self, val: T) -> T {
        PlainCell::swap(self, val)
    }

    fn compare_and_swap(&self, expected: T, val: T) -> bool {
        PlainCell::compare_and_swap(self, expected, val)
    }
}

impl<T: Integral> Countable for PlainCell<T> {
    fn increment(&self) -> T {
        PlainCell::increment(self)
    }

    fn decrement(&self) -> T {
        PlainCell::decrement(self)
    }
}
