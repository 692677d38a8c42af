//! Core systems for Mapforge.
//!
//! This crate provides the foundational pieces shared by the Mapforge tools:
//!
//! - **Signal/Slot System**: Type-safe change notification between a model
//!   and whatever presents it
//!
//! Everything here is synchronous and single-threaded by design. Models built
//! on top of this crate are driven from a UI event loop that serializes all
//! access; there is no queued or cross-thread signal delivery.
//!
//! # Signal/Slot Example
//!
//! ```
//! use mapforge_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
