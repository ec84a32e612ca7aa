//! The asynchronous DynamoDB interface.
//!
//! [`DynamoDbAsync`] declares one required method per operation, taking the
//! full request struct, plus provided convenience methods that build the
//! request from loose parameters and delegate to the canonical form. The
//! convenience methods never add behavior of their own.
//!
//! [`AsyncClient`] wraps an [`aws_sdk_dynamodb::Client`] and implements the
//! interface by sending each request through the SDK. A wrapper type is used
//! instead of implementing the trait on the SDK client directly because the
//! SDK's inherent fluent methods share the operation names and would shadow
//! the trait methods.

use crate::{common, read, table, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use serde::Serialize;

/// The asynchronous, future-returning DynamoDB interface.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::client::{AsyncClient, DynamoDbAsync};
/// use dynamodb_futures::common::key;
///
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let client = AsyncClient::new(client);
/// client
///     .delete_item_by_key("users", key::PrimaryKey::new("id", "1"), None)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[allow(async_fn_in_trait)]
pub trait DynamoDbAsync {
    /// Retrieve a single item by primary key.
    async fn get_item<T: Serialize>(
        &self,
        request: read::get_item::GetItem<T>,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    >;

    /// Retrieve a single item by table name and primary key.
    ///
    /// Builds a [`read::get_item::GetItem`] and delegates to
    /// [`DynamoDbAsync::get_item`].
    async fn get_item_by_key<T: Serialize>(
        &self,
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        consistent_read: Option<bool>,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        self.get_item(read::get_item::GetItem::new(table_name, key, consistent_read))
            .await
    }

    /// Create or replace an item.
    async fn put_item<T: Serialize>(
        &self,
        request: write::put_item::PutItem<T>,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    >;

    /// Create or replace an item in the named table.
    ///
    /// Builds a [`write::put_item::PutItem`] and delegates to
    /// [`DynamoDbAsync::put_item`].
    async fn put_item_into<T: Serialize>(
        &self,
        table_name: impl Into<String>,
        item: T,
        return_values: Option<types::ReturnValue>,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        self.put_item(write::put_item::PutItem::new(table_name, item, return_values))
            .await
    }

    /// Delete a single item by primary key.
    async fn delete_item<T: Serialize>(
        &self,
        request: write::delete_item::DeleteItem<T>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    >;

    /// Delete a single item by table name and primary key.
    ///
    /// Builds a [`write::delete_item::DeleteItem`] and delegates to
    /// [`DynamoDbAsync::delete_item`].
    async fn delete_item_by_key<T: Serialize>(
        &self,
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        return_values: Option<types::ReturnValue>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        self.delete_item(write::delete_item::DeleteItem::new(
            table_name,
            key,
            return_values,
        ))
        .await
    }

    /// Update attributes of a single item.
    async fn update_item<T: Serialize>(
        &self,
        request: write::update_item::UpdateItem<T>,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    >;

    /// Update attributes of the item with the given key.
    ///
    /// Builds a [`write::update_item::UpdateItem`] and delegates to
    /// [`DynamoDbAsync::update_item`].
    async fn update_item_by_key<T: Serialize>(
        &self,
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        updates: IndexMap<String, write::update_item::UpdateAction<T>>,
        return_values: Option<types::ReturnValue>,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        self.update_item(write::update_item::UpdateItem::new(
            table_name,
            key,
            updates,
            return_values,
        ))
        .await
    }

    /// Retrieve items from one or more tables in a single call.
    async fn batch_get_item<T: Serialize>(
        &self,
        request: read::batch_get_item::BatchGetItem<T>,
    ) -> Result<
        operation::batch_get_item::BatchGetItemOutput,
        error::SdkError<operation::batch_get_item::BatchGetItemError>,
    >;

    /// Retrieve the given keys, grouped by per-table read arguments.
    ///
    /// Builds a [`read::batch_get_item::BatchGetItem`] and delegates to
    /// [`DynamoDbAsync::batch_get_item`].
    async fn batch_get_item_from<T: Serialize>(
        &self,
        request_items: IndexMap<read::common::ReadArgs, Vec<common::key::PrimaryKey<T>>>,
        return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    ) -> Result<
        operation::batch_get_item::BatchGetItemOutput,
        error::SdkError<operation::batch_get_item::BatchGetItemError>,
    > {
        self.batch_get_item(read::batch_get_item::BatchGetItem::new(
            request_items,
            return_consumed_capacity,
        ))
        .await
    }

    /// Put and delete items across one or more tables in a single call.
    async fn batch_write_item<T: Serialize>(
        &self,
        request: write::batch_write_item::BatchWriteItem<T>,
    ) -> Result<
        operation::batch_write_item::BatchWriteItemOutput,
        error::SdkError<operation::batch_write_item::BatchWriteItemError>,
    >;

    /// Apply the given write requests, grouped by table name.
    ///
    /// Builds a [`write::batch_write_item::BatchWriteItem`] and delegates to
    /// [`DynamoDbAsync::batch_write_item`].
    async fn batch_write_item_to<T: Serialize>(
        &self,
        request_items: IndexMap<String, Vec<write::batch_write_item::BatchWriteRequest<T>>>,
    ) -> Result<
        operation::batch_write_item::BatchWriteItemOutput,
        error::SdkError<operation::batch_write_item::BatchWriteItemError>,
    > {
        self.batch_write_item(write::batch_write_item::BatchWriteItem::new(request_items))
            .await
    }

    /// Read a page of items from a table.
    async fn scan<T: Serialize>(
        &self,
        request: read::scan::Scan<T>,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>>;

    /// Read a page of items from the named table, optionally projected and
    /// filtered.
    ///
    /// Builds a [`read::scan::Scan`] and delegates to
    /// [`DynamoDbAsync::scan`].
    async fn scan_table<T: Serialize>(
        &self,
        table_name: impl Into<String>,
        projection: Option<common::projection::Projection>,
        filter: Option<common::filter::Filter<T>>,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        self.scan(read::scan::Scan::new(table_name, projection, filter))
            .await
    }

    /// Update a table's provisioned throughput or billing mode.
    async fn update_table(
        &self,
        request: table::update_table::UpdateTable,
    ) -> Result<
        operation::update_table::UpdateTableOutput,
        error::SdkError<operation::update_table::UpdateTableError>,
    >;

    /// Update the named table's provisioned throughput.
    ///
    /// Builds a [`table::update_table::UpdateTable`] and delegates to
    /// [`DynamoDbAsync::update_table`].
    async fn update_table_throughput(
        &self,
        table_name: impl Into<String>,
        read_capacity_units: i64,
        write_capacity_units: i64,
    ) -> Result<
        operation::update_table::UpdateTableOutput,
        error::SdkError<operation::update_table::UpdateTableError>,
    > {
        self.update_table(table::update_table::UpdateTable::new(
            table_name,
            table::update_table::Throughput {
                read_capacity_units,
                write_capacity_units,
            },
        ))
        .await
    }

    /// Associate tags with a table resource.
    async fn tag_resource(
        &self,
        request: table::tags::TagResource,
    ) -> Result<
        operation::tag_resource::TagResourceOutput,
        error::SdkError<operation::tag_resource::TagResourceError>,
    >;

    /// Remove tags from a table resource.
    async fn untag_resource(
        &self,
        request: table::tags::UntagResource,
    ) -> Result<
        operation::untag_resource::UntagResourceOutput,
        error::SdkError<operation::untag_resource::UntagResourceError>,
    >;

    /// Enable or disable a table's time-to-live attribute.
    async fn update_time_to_live(
        &self,
        request: table::time_to_live::UpdateTimeToLive,
    ) -> Result<
        operation::update_time_to_live::UpdateTimeToLiveOutput,
        error::SdkError<operation::update_time_to_live::UpdateTimeToLiveError>,
    >;
}

/// An [`aws_sdk_dynamodb::Client`] wrapper implementing [`DynamoDbAsync`].
#[derive(Clone, Debug)]
pub struct AsyncClient {
    inner: Client,
}

impl AsyncClient {
    /// Wrap an SDK client.
    pub fn new(inner: Client) -> Self {
        Self { inner }
    }

    /// The wrapped SDK client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }
}

impl From<Client> for AsyncClient {
    fn from(inner: Client) -> Self {
        Self::new(inner)
    }
}

impl DynamoDbAsync for AsyncClient {
    async fn get_item<T: Serialize>(
        &self,
        request: read::get_item::GetItem<T>,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn put_item<T: Serialize>(
        &self,
        request: write::put_item::PutItem<T>,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn delete_item<T: Serialize>(
        &self,
        request: write::delete_item::DeleteItem<T>,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn update_item<T: Serialize>(
        &self,
        request: write::update_item::UpdateItem<T>,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn batch_get_item<T: Serialize>(
        &self,
        request: read::batch_get_item::BatchGetItem<T>,
    ) -> Result<
        operation::batch_get_item::BatchGetItemOutput,
        error::SdkError<operation::batch_get_item::BatchGetItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn batch_write_item<T: Serialize>(
        &self,
        request: write::batch_write_item::BatchWriteItem<T>,
    ) -> Result<
        operation::batch_write_item::BatchWriteItemOutput,
        error::SdkError<operation::batch_write_item::BatchWriteItemError>,
    > {
        request.send(&self.inner).await
    }

    async fn scan<T: Serialize>(
        &self,
        request: read::scan::Scan<T>,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        request.send(&self.inner).await
    }

    async fn update_table(
        &self,
        request: table::update_table::UpdateTable,
    ) -> Result<
        operation::update_table::UpdateTableOutput,
        error::SdkError<operation::update_table::UpdateTableError>,
    > {
        request.send(&self.inner).await
    }

    async fn tag_resource(
        &self,
        request: table::tags::TagResource,
    ) -> Result<
        operation::tag_resource::TagResourceOutput,
        error::SdkError<operation::tag_resource::TagResourceError>,
    > {
        request.send(&self.inner).await
    }

    async fn untag_resource(
        &self,
        request: table::tags::UntagResource,
    ) -> Result<
        operation::untag_resource::UntagResourceOutput,
        error::SdkError<operation::untag_resource::UntagResourceError>,
    > {
        request.send(&self.inner).await
    }

    async fn update_time_to_live(
        &self,
        request: table::time_to_live::UpdateTimeToLive,
    ) -> Result<
        operation::update_time_to_live::UpdateTimeToLiveOutput,
        error::SdkError<operation::update_time_to_live::UpdateTimeToLiveError>,
    > {
        request.send(&self.inner).await
    }
}
