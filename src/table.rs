//! Table-level operations.
//!
//! This module provides operations that act on a table rather than its items:
//! - Updating provisioned throughput and billing mode
//! - Tagging and untagging a table resource
//! - Enabling or disabling the time-to-live attribute

/// Tag and untag resource operations.
pub mod tags;

/// Update time to live operation.
pub mod time_to_live;

/// Update table operation.
pub mod update_table;
