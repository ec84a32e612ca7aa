use crate::common;

use std::collections;

/// Resolved read parameters, ready for a DynamoDB builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments shared by single-item reads (GetItem, BatchGetItem per table).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a strongly consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually
    /// consistent reads.
    pub consistent_read: Option<bool>,
    /// Which attributes to retrieve. If `None`, all attributes are returned.
    pub projection: Option<common::projection::Projection>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl ReadArgs {
    /// Build read arguments for a table, without projection.
    pub fn new(table_name: impl Into<String>, consistent_read: Option<bool>) -> Self {
        Self {
            consistent_read,
            projection: None,
            table_name: table_name.into(),
        }
    }
}

impl From<ReadArgs> for ReadInput {
    fn from(read_args: ReadArgs) -> Self {
        let (expression_attribute_names, projection_expression) = match read_args.projection {
            Some(projection) => {
                let parts: common::ExpressionParts = projection.into();
                (common::into_option(parts.names), Some(parts.expression))
            }
            None => (None, None),
        };
        Self {
            consistent_read: read_args.consistent_read,
            expression_attribute_names,
            projection_expression,
            table_name: read_args.table_name,
        }
    }
}
