//! The two cell variants and the contract they share
use crate::kind::Kind;

mod atomic;
mod plain;
#[cfg(feature = "serde")]
mod serialize;

pub use atomic::AtomicCell;
pub use plain::PlainCell;

/// A single-slot mutable value holder.
///
/// Implemented by both [`PlainCell`] and [`AtomicCell`], so code can be
/// written once against "a cell" and handed either variant.
///
/// # Examples
///
/// ```
/// use value_cell::{AtomicCell, PlainCell, Valuable};
///
/// fn toggle<C: Valuable<Value = bool>>(cell: &C) -> bool {
///     !cell.swap(!cell.get())
/// }
///
/// assert!(toggle(&PlainCell::new(false)));
/// assert!(toggle(&AtomicCell::new(false)));
/// ```
pub trait Valuable {
    /// The kind of value held.
    type Value: Kind;

    /// Returns the current value.
    fn get(&self) -> Self::Value;

    /// Replaces the current value.
    fn put(&self, val: Self::Value);

    /// Replaces the current value and returns the previous one.
    fn swap(&self, val: Self::Value) -> Self::Value;

    /// Replaces the current value with `val` only if it is [`Kind::same`] as
    /// `expected`, returning whether it was replaced.
    fn compare_and_swap(&self, expected: Self::Value, val: Self::Value) -> bool;
}

/// A [`Valuable`] holding an integer, which can count up and down.
pub trait Countable: Valuable {
    /// Adds one, returning the new value.
    fn increment(&self) -> Self::Value;

    /// Subtracts one, returning the new value.
    fn decrement(&self) -> Self::Value;
}
