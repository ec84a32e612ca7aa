use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};

/// Delete item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_item = write::delete_item::DeleteItem::new(
///     "users",
///     common::key::PrimaryKey::new("id", "1"),
///     None,
/// );
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItem<T> {
    /// The primary key of the item to delete.
    pub key: common::key::PrimaryKey<T>,
    /// Write arguments (table name, return values, metrics flags).
    pub write_args: write::common::WriteArgs,
}

impl<T> DeleteItem<T> {
    /// Build a delete item request from its loose parameters.
    pub fn new(
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        return_values: Option<types::ReturnValue>,
    ) -> Self {
        Self {
            key,
            write_args: write::common::WriteArgs::new(table_name, return_values),
        }
    }
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for operation::delete_item::DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> Result<Self> {
        let key = delete_item.key.try_into()?;
        let input = Self::builder()
            .set_key(Some(key))
            .set_return_consumed_capacity(delete_item.write_args.return_consumed_capacity)
            .set_return_item_collection_metrics(
                delete_item.write_args.return_item_collection_metrics,
            )
            .set_return_values(delete_item.write_args.return_values)
            .set_table_name(Some(delete_item.write_args.table_name))
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Execute the delete item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        let input: operation::delete_item::DeleteItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .delete_item()
            .set_key(input.key)
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
    use serde_json::Value;
    use std::collections;

    #[rstest]
    #[case::loose_form(
        DeleteItem::new(
            "a",
            common::key::PrimaryKey::new("b", Value::String("c".to_string())),
            Some(types::ReturnValue::AllOld),
        ),
        operation::delete_item::DeleteItemInput::builder()
            .set_key(
                Some(
                    collections::HashMap::from(
                        [(
                            "b".to_string(),
                            types::AttributeValue::S("c".to_string()),
                        )]
                    )
                )
            )
            .return_values(types::ReturnValue::AllOld)
            .table_name("a")
            .build()
            .unwrap()
    )]
    #[case::composite_key(
        DeleteItem {
            key: common::key::PrimaryKey::new("a", Value::String("b".to_string()))
                .with_range_key("c", Value::Number(7.into())),
            write_args: write::common::WriteArgs {
                return_consumed_capacity: Some(
                    types::ReturnConsumedCapacity::Total
                ),
                table_name: "d".to_string(),
                ..Default::default()
            },
        },
        operation::delete_item::DeleteItemInput::builder()
            .set_key(
                Some(
                    collections::HashMap::from(
                        [
                            (
                                "a".to_string(),
                                types::AttributeValue::S("b".to_string()),
                            ),
                            (
                                "c".to_string(),
                                types::AttributeValue::N("7".to_string()),
                            ),
                        ]
                    )
                )
            )
            .return_consumed_capacity(types::ReturnConsumedCapacity::Total)
            .table_name("d")
            .build()
            .unwrap()
    )]
    fn test_delete_item(
        #[case] delete_item: DeleteItem<Value>,
        #[case] expected: operation::delete_item::DeleteItemInput,
    ) {
        let actual: operation::delete_item::DeleteItemInput = delete_item.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
