//! This crate provides single-slot mutable memory locations, in two
//! variants: [`PlainCell`] and [`AtomicCell`].
//!
//! Both hold exactly one value and expose the same operations: `get`, `put`,
//! `swap` and `compare_and_swap`, plus `increment` and `decrement` for integer
//! values. `PlainCell` is a thin layer over [`Cell`] for single-threaded use,
//! while `AtomicCell` can be shared among threads and performs every operation
//! as one sequentially consistent atomic instruction.
//!
//! # How it Works
//!
//! Every value type a cell can hold implements [`Kind`], which names the
//! native atomic that backs it (e.g. `f32` is held in an `AtomicU32`, a
//! `char` in an `AtomicU32`, an `Option<&T>` in an `AtomicPtr<T>`) and how
//! the value converts to and from that atomic's raw representation.
//!
//! The cells are written once against `Kind`, and the storage is chosen at
//! compile time. The result is that the user should be able to seamlessly
//! interact with an `AtomicCell<f64>` or an `AtomicCell<Option<&Node>>`
//! almost as if it were a native atomic.
//!
//! ```
//! use value_cell::AtomicCell;
//!
//! let best = AtomicCell::new(f64::INFINITY);
//!
//! // A lock-free "keep the minimum" update built on compare-and-swap
//! let mut seen = best.get();
//! while 2.5 < seen && !best.compare_and_swap(seen, 2.5) {
//!     seen = best.get();
//! }
//! assert_eq!(best.get(), 2.5);
//! ```
//!
//! # Features
//!
//! - `serde`: cells serialize as their current value.
//! - `tracing`: emit `TRACE` events on contended compare-and-swap paths.
//!
//! [`Cell`]: core::cell::Cell
#![no_std]

pub mod atomic;
mod cell;
mod kind;
mod utils;

pub use cell::{AtomicCell, Countable, PlainCell, Valuable};
pub use kind::{Integral, Kind, Raw};
