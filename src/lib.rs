//! # dynarray
//!
//! A growable sequence container with:
//! - Explicit capacity management (buffer replaced wholesale on growth)
//! - Positional insertion and removal with stable element order
//! - Equality-based linear search
//! - Bulk append and bulk removal
//! - Independent snapshot export
//!
//! ## Storage Model
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                SeqArray<T>                   │
//! │                                              │
//! │  storage: ┌────┬────┬────┬────┬────┬────┐   │
//! │           │ T₀ │ T₁ │ T₂ │ T₃ │ -- │ -- │   │
//! │           └────┴────┴────┴────┴────┴────┘   │
//! │            ◄── live range ──►  ◄─ spare ─►  │
//! │                                              │
//! │  count: 4            capacity: 6             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The live range `[0, count)` holds the elements of the sequence; slots in
//! `[count, capacity)` are spare. Capacity starts at 3 and only ever grows:
//! a single `append` on a full container grows by exactly one slot, while
//! `append_range` grows to the exact required size in a single reallocation.
//!
//! ## Concurrency
//!
//! `SeqArray<T>` has no internal synchronization and is not safe for
//! concurrent mutation from multiple threads. Callers that need shared
//! mutable access must wrap the container in their own lock.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod seq;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SeqError};
pub use seq::SeqArray;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dynarray
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
