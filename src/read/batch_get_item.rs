use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// Batch get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, read};
/// use indexmap::IndexMap;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let batch_get = read::batch_get_item::BatchGetItem {
///     request_items: IndexMap::from([(
///         read::common::ReadArgs::new("users", None),
///         vec![
///             common::key::PrimaryKey::new("id", "1"),
///             common::key::PrimaryKey::new("id", "2"),
///         ],
///     )]),
///     ..Default::default()
/// };
/// batch_get.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct BatchGetItem<T> {
    /// A map of per-table read arguments to the keys to retrieve from that
    /// table.
    pub request_items: IndexMap<read::common::ReadArgs, Vec<common::key::PrimaryKey<T>>>,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
}

impl<T> BatchGetItem<T> {
    /// Build a batch get request from its loose parameters.
    pub fn new(
        request_items: IndexMap<read::common::ReadArgs, Vec<common::key::PrimaryKey<T>>>,
        return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    ) -> Self {
        Self {
            request_items,
            return_consumed_capacity,
        }
    }
}

impl<T: Serialize> TryFrom<BatchGetItem<T>> for operation::batch_get_item::BatchGetItemInput {
    type Error = Error;

    fn try_from(batch_get_item: BatchGetItem<T>) -> Result<Self> {
        let mut request_items =
            collections::HashMap::with_capacity(batch_get_item.request_items.len());
        for (read_args, keys) in batch_get_item.request_items {
            let read: read::common::ReadInput = read_args.into();
            let mut serialized_keys = Vec::with_capacity(keys.len());
            for key in keys {
                let key = key.try_into()?;
                serialized_keys.push(key);
            }
            let keys_and_attributes = types::KeysAndAttributes::builder()
                .set_consistent_read(read.consistent_read)
                .set_expression_attribute_names(read.expression_attribute_names)
                .set_keys(Some(serialized_keys))
                .set_projection_expression(read.projection_expression)
                .build()
                .unwrap();
            request_items.insert(read.table_name, keys_and_attributes);
        }
        let input = Self::builder()
            .set_request_items(Some(request_items))
            .set_return_consumed_capacity(batch_get_item.return_consumed_capacity)
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> BatchGetItem<T> {
    /// Execute the batch get item operation.
    ///
    /// Unprocessed keys are returned as-is in the output; the request is never
    /// split or retried here.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::batch_get_item::BatchGetItemOutput,
        error::SdkError<operation::batch_get_item::BatchGetItemError>,
    > {
        let input: operation::batch_get_item::BatchGetItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .batch_get_item()
            .set_request_items(input.request_items)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .send()
            .await
    }
}
