use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};

/// Get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_item = read::get_item::GetItem {
///     key: common::key::PrimaryKey::new("id", "1"),
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// get_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem<T> {
    /// The primary key of the item to retrieve.
    pub key: common::key::PrimaryKey<T>,
    /// Read arguments (table name, consistent read, projection).
    pub read_args: read::common::ReadArgs,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
}

impl<T> GetItem<T> {
    /// Build a get item request from its loose parameters.
    pub fn new(
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        consistent_read: Option<bool>,
    ) -> Self {
        Self {
            key,
            read_args: read::common::ReadArgs::new(table_name, consistent_read),
            return_consumed_capacity: None,
        }
    }
}

impl<T: Serialize> TryFrom<GetItem<T>> for operation::get_item::GetItemInput {
    type Error = Error;

    fn try_from(get_item: GetItem<T>) -> Result<Self> {
        let read: read::common::ReadInput = get_item.read_args.into();
        let key = get_item.key.try_into()?;
        let input = Self::builder()
            .set_key(Some(key))
            .set_consistent_read(read.consistent_read)
            .set_expression_attribute_names(read.expression_attribute_names)
            .set_projection_expression(read.projection_expression)
            .set_return_consumed_capacity(get_item.return_consumed_capacity)
            .set_table_name(Some(read.table_name))
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> GetItem<T> {
    /// Execute the get item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        let input: operation::get_item::GetItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .get_item()
            .set_key(input.key)
            .set_consistent_read(input.consistent_read)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_projection_expression(input.projection_expression)
            .set_return_consumed_capacity(input.return_consumed_capacity)
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
        GetItem::new(
            "a",
            common::key::PrimaryKey::new("b", Value::String("c".to_string())),
            None,
        ),
        operation::get_item::GetItemInput::builder()
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
            .table_name("a")
            .build()
            .unwrap()
    )]
    #[case::full(
        GetItem {
            key: common::key::PrimaryKey::new("a", Value::String("b".to_string()))
                .with_range_key("c", Value::String("d".to_string())),
            read_args: read::common::ReadArgs {
                consistent_read: Some(false),
                projection: Some(
                    common::projection::Projection::new(["e", "f"])
                ),
                table_name: "g".to_string(),
            },
            return_consumed_capacity: Some(
                types::ReturnConsumedCapacity::Indexes
            ),
        },
        operation::get_item::GetItemInput::builder()
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
                                types::AttributeValue::S("d".to_string()),
                            ),
                        ]
                    )
                )
            )
            .consistent_read(false)
            .set_expression_attribute_names(
                Some(
                    collections::HashMap::from(
                        [
                            ("#e".to_string(), "e".to_string()),
                            ("#f".to_string(), "f".to_string()),
                        ]
                    )
                )
            )
            .projection_expression("#e, #f")
            .return_consumed_capacity(types::ReturnConsumedCapacity::Indexes)
            .table_name("g")
            .build()
            .unwrap()
    )]
    fn test_get_item(
        #[case] get_item: GetItem<Value>,
        #[case] expected: operation::get_item::GetItemInput,
    ) {
        let actual: operation::get_item::GetItemInput = get_item.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
