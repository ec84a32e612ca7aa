use crate::write;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};

/// Put item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem::new(
///     "users",
///     json!({"id": "1", "name": "John"}),
///     None,
/// );
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Write arguments (table name, return values, metrics flags).
    pub write_args: write::common::WriteArgs,
}

impl<T> PutItem<T> {
    /// Build a put item request from its loose parameters.
    pub fn new(
        table_name: impl Into<String>,
        item: T,
        return_values: Option<types::ReturnValue>,
    ) -> Self {
        Self {
            item,
            write_args: write::common::WriteArgs::new(table_name, return_values),
        }
    }
}

impl<T: Serialize> TryFrom<PutItem<T>> for operation::put_item::PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let input = Self::builder()
            .set_item(Some(item))
            .set_return_consumed_capacity(put_item.write_args.return_consumed_capacity)
            .set_return_item_collection_metrics(
                put_item.write_args.return_item_collection_metrics,
            )
            .set_return_values(put_item.write_args.return_values)
            .set_table_name(Some(put_item.write_args.table_name))
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Execute the put item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let input: operation::put_item::PutItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .put_item()
            .set_item(input.item)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_return_values(input.return_values)
            .set_table_name(input.table_name)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections;

    #[rstest]
    #[case::loose_form(
        PutItem::new("a", json!({"b": "c"}), None),
        operation::put_item::PutItemInput::builder()
            .set_item(
                Some(
                    collections::HashMap::from(
                        [(
                            "b".to_string(),
                            types::AttributeValue::S("c".to_string()),
                        )]
                    )
                )
            )
            .table_name("a")
            .build()
            .unwrap()
    )]
    #[case::full(
        PutItem {
            item: json!({"a": 1}),
            write_args: write::common::WriteArgs {
                return_consumed_capacity: Some(
                    types::ReturnConsumedCapacity::Total
                ),
                return_item_collection_metrics: Some(
                    types::ReturnItemCollectionMetrics::Size
                ),
                return_values: Some(types::ReturnValue::AllOld),
                table_name: "b".to_string(),
            },
        },
        operation::put_item::PutItemInput::builder()
            .set_item(
                Some(
                    collections::HashMap::from(
                        [(
                            "a".to_string(),
                            types::AttributeValue::N("1".to_string()),
                        )]
                    )
                )
            )
            .return_consumed_capacity(types::ReturnConsumedCapacity::Total)
            .return_item_collection_metrics(types::ReturnItemCollectionMetrics::Size)
            .return_values(types::ReturnValue::AllOld)
            .table_name("b")
            .build()
            .unwrap()
    )]
    fn test_put_item(
        #[case] put_item: PutItem<Value>,
        #[case] expected: operation::put_item::PutItemInput,
    ) {
        let actual: operation::put_item::PutItemInput = put_item.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
