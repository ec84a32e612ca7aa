use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// A single per-attribute update action.
///
/// The flat action model mirrors the classic attribute-update calling
/// convention; actions are rendered into one update expression with `SET`,
/// `ADD` and `REMOVE` clauses.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateAction<T> {
    /// Add the value to a number attribute, or the elements to a set
    /// attribute. Creates the attribute if absent.
    Add(T),
    /// Remove the attribute from the item.
    Remove,
    /// Assign the value to the attribute, replacing any existing value.
    Set(T),
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, write};
/// use indexmap::IndexMap;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem::new(
///     "users",
///     common::key::PrimaryKey::new("id", json!("1")),
///     IndexMap::from([
///         ("name".to_string(), write::update_item::UpdateAction::Set(json!("Jane"))),
///         ("visits".to_string(), write::update_item::UpdateAction::Add(json!(1))),
///         ("legacy".to_string(), write::update_item::UpdateAction::Remove),
///     ]),
///     None,
/// );
/// // Renders "SET #name = :name_set0 ADD #visits :visits_add1 REMOVE #legacy"
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItem<T> {
    /// The primary key of the item to update.
    pub key: common::key::PrimaryKey<T>,
    /// Per-attribute update actions, applied in insertion order.
    pub updates: IndexMap<String, UpdateAction<T>>,
    /// Write arguments (table name, return values, metrics flags).
    pub write_args: write::common::WriteArgs,
}

impl<T> UpdateItem<T> {
    /// Build an update item request from its loose parameters.
    pub fn new(
        table_name: impl Into<String>,
        key: common::key::PrimaryKey<T>,
        updates: IndexMap<String, UpdateAction<T>>,
        return_values: Option<types::ReturnValue>,
    ) -> Self {
        Self {
            key,
            updates,
            write_args: write::common::WriteArgs::new(table_name, return_values),
        }
    }
}

fn render_updates<T: Serialize>(
    updates: IndexMap<String, UpdateAction<T>>,
) -> Result<common::ExpressionParts> {
    let mut names = collections::HashMap::new();
    let mut values = collections::HashMap::new();
    let mut sets = Vec::new();
    let mut adds = Vec::new();
    let mut removes = Vec::new();
    let mut index = 0;
    for (name, action) in updates {
        let placeholder = common::name_placeholder(&name);
        match action {
            UpdateAction::Add(value) => {
                let value_placeholder = format!(":{name}_add{index}");
                index += 1;
                values.insert(value_placeholder.clone(), to_attribute_value(value)?);
                adds.push(format!("{placeholder} {value_placeholder}"));
            }
            UpdateAction::Remove => removes.push(placeholder.clone()),
            UpdateAction::Set(value) => {
                let value_placeholder = format!(":{name}_set{index}");
                index += 1;
                values.insert(value_placeholder.clone(), to_attribute_value(value)?);
                sets.push(format!("{placeholder} = {value_placeholder}"));
            }
        }
        names.insert(placeholder, name);
    }
    let mut clauses = Vec::new();
    if !sets.is_empty() {
        clauses.push(format!("SET {}", sets.join(", ")));
    }
    if !adds.is_empty() {
        clauses.push(format!("ADD {}", adds.join(", ")));
    }
    if !removes.is_empty() {
        clauses.push(format!("REMOVE {}", removes.join(", ")));
    }
    Ok(common::ExpressionParts {
        expression: clauses.join(" "),
        names,
        values,
    })
}

impl<T: Serialize> TryFrom<UpdateItem<T>> for operation::update_item::UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem<T>) -> Result<Self> {
        let key = update_item.key.try_into()?;
        let common::ExpressionParts {
            expression,
            names,
            values,
        } = render_updates(update_item.updates)?;
        let input = Self::builder()
            .set_key(Some(key))
            .set_expression_attribute_names(common::into_option(names))
            .set_expression_attribute_values(common::into_option(values))
            .set_update_expression((!expression.is_empty()).then_some(expression))
            .set_return_consumed_capacity(update_item.write_args.return_consumed_capacity)
            .set_return_item_collection_metrics(
                update_item.write_args.return_item_collection_metrics,
            )
            .set_return_values(update_item.write_args.return_values)
            .set_table_name(Some(update_item.write_args.table_name))
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> UpdateItem<T> {
    /// Execute the update item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_futures.update_item",
            skip_all,
            fields(table = %self.write_args.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let input: operation::update_item::UpdateItemInput =
            self.try_into().map_err(error::BuildError::other)?;
        client
            .update_item()
            .set_key(input.key)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_update_expression(input.update_expression)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_return_values(input.return_values)
            .set_table_name(input.table_name)
            .send()
            .await
    }
}
