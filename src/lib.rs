#![deny(missing_docs)]

//! # DynamoDB Futures
//!
//! A future-based asynchronous interface over the Amazon DynamoDB item, batch,
//! scan and table operations.
//!
//! ## Overview
//!
//! The crate re-shapes the DynamoDB calling convention, nothing more. Each
//! operation is a plain request struct that converts into the corresponding
//! [`aws_sdk_dynamodb`] input type and is sent through the SDK client. The
//! [`client::DynamoDbAsync`] trait collects the operations into a single
//! interface: one required method per operation taking the full request
//! struct, plus provided convenience methods that build the request from loose
//! parameters (table name, key, a flag or two) and delegate to the canonical
//! form.
//!
//! Transport, signing, retries and throttling handling all belong to the
//! underlying SDK. Nothing here retries, paginates or splits a request.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_futures::client::{AsyncClient, DynamoDbAsync};
//! use dynamodb_futures::common::key;
//!
//! # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
//! let client = AsyncClient::new(client);
//! let output = client
//!     .get_item_by_key("users", key::PrimaryKey::new("id", "1"), Some(true))
//!     .await?;
//! println!("{:?}", output.item);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@client`] - The `DynamoDbAsync` interface and the SDK client wrapper
//! - [`mod@common`] - Keys, projections and filters shared across operations
//! - [`mod@read`] - Read operations (GetItem, BatchGetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem, BatchWriteItem)
//! - [`mod@table`] - Table operations (UpdateTable, tagging, time to live)

/// The asynchronous DynamoDB interface and its client implementation.
pub mod client;

/// Common utilities for keys, projections and filters.
pub mod common;

/// Read operations for retrieving data from DynamoDB tables.
///
/// This module provides operations for:
/// - Getting individual items by primary key
/// - Batch retrieving items from multiple tables
/// - Scanning a table, optionally filtered
pub mod read;

/// Table-level operations.
///
/// This module provides operations for:
/// - Updating table throughput and billing mode
/// - Tagging and untagging a table resource
/// - Configuring the time-to-live attribute
pub mod table;

/// Write operations for modifying data in DynamoDB tables.
///
/// This module provides operations for:
/// - Putting new items or replacing existing ones
/// - Updating item attributes with set, add and remove actions
/// - Deleting items by primary key
/// - Batch writing items to multiple tables
pub mod write;
