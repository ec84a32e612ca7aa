use aws_sdk_dynamodb::types;

/// Arguments common to all single-item write operations (Put, Update, Delete).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Whether to return item collection metrics.
    pub return_item_collection_metrics: Option<types::ReturnItemCollectionMetrics>,
    /// Which item attributes to return in the response.
    ///
    /// Options: `AllOld`, `AllNew`, `UpdatedOld`, `UpdatedNew`, or `None`.
    pub return_values: Option<types::ReturnValue>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl WriteArgs {
    /// Build write arguments for a table.
    pub fn new(table_name: impl Into<String>, return_values: Option<types::ReturnValue>) -> Self {
        Self {
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
            return_values,
            table_name: table_name.into(),
        }
    }
}
