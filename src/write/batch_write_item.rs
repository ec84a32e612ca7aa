use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};
use std::collections;

/// A single request within a batch write operation.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchWriteRequest<T> {
    /// Delete the item with the given primary key.
    Delete(common::key::PrimaryKey<T>),
    /// Put the item, replacing any existing item with the same key.
    Put(T),
}

impl<T: Serialize> TryFrom<BatchWriteRequest<T>> for types::WriteRequest {
    type Error = Error;

    fn try_from(request: BatchWriteRequest<T>) -> Result<Self> {
        let builder = match request {
            BatchWriteRequest::Delete(key) => {
                let key = key.try_into()?;
                let delete_request = types::DeleteRequest::builder()
                    .set_key(Some(key))
                    .build()
                    .unwrap();
                Self::builder().set_delete_request(Some(delete_request))
            }
            BatchWriteRequest::Put(item) => {
                let item = to_item(item)?;
                let put_request = types::PutRequest::builder()
                    .set_item(Some(item))
                    .build()
                    .unwrap();
                Self::builder().set_put_request(Some(put_request))
            }
        };
        Ok(builder.build())
    }
}

/// Batch write item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, write};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let batch_write = write::batch_write_item::BatchWriteItem {
///     request_items: IndexMap::from([(
///         "users".to_string(),
///         vec![
///             write::batch_write_item::BatchWriteRequest::Put(
///                 json!({"id": "1", "name": "John"}),
///             ),
///             write::batch_write_item::BatchWriteRequest::Delete(
///                 common::key::PrimaryKey::new("id", json!("2")),
///             ),
///         ],
///     )]),
///     ..Default::default()
/// };
/// batch_write.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchWriteItem<T> {
    /// A map of table names to lists of write requests.
    pub request_items: IndexMap<String, Vec<BatchWriteRequest<T>>>,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Whether to return item collection metrics.
    pub return_item_collection_metrics: Option<types::ReturnItemCollectionMetrics>,
}

impl<T> BatchWriteItem<T> {
    /// Build a batch write request from its loose parameters.
    pub fn new(request_items: IndexMap<String, Vec<BatchWriteRequest<T>>>) -> Self {
        Self {
            request_items,
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

impl<T: Serialize> TryFrom<BatchWriteItem<T>> for operation::batch_write_item::BatchWriteItemInput {
    type Error = Error;

    fn try_from(batch_write_item: BatchWriteItem<T>) -> Result<Self> {
        let mut request_items =
            collections::HashMap::with_capacity(batch_write_item.request_items.len());
        for (table_name, table_requests) in batch_write_item.request_items {
            let mut serialized_requests = Vec::with_capacity(table_requests.len());
            for request in table_requests {
                let request = request.try_into()?;
                serialized_requests.push(request);
            }
            request_items.insert(table_name, serialized_requests);
        }
        let input = Self::builder()
            .set_request_items(Some(request_items))
            .set_return_consumed_capacity(batch_write_item.return_consumed_capacity)
            .set_return_item_collection_metrics(batch_write_item.return_item_collection_metrics)
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> BatchWriteItem<T> {
    /// Execute the batch write item operation.
    ///
    /// Unprocessed items are returned as-is in the output; the request is
    /// never split or retried here.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_futures.batch_write_item", skip_all, err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::batch_write_item::BatchWriteItemOutput,
        error::SdkError<operation::batch_write_item::BatchWriteItemError>,
    > {
        let input: operation::batch_write_item::BatchWriteItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .batch_write_item()
            .set_request_items(input.request_items)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .send()
            .await
    }
}
