use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// Scan operation.
///
/// Reads a single page of results. If the table holds more items than the page
/// limit, the output carries a `last_evaluated_key`; pass it back through
/// [`Scan::exclusive_start_key`] to continue. Cursor management is left to the
/// caller.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::{common, read};
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan: read::scan::Scan<Value> = read::scan::Scan {
///     table_name: "users".to_string(),
///     projection: Some(common::projection::Projection::new(["id", "name"])),
///     ..Default::default()
/// };
/// scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan<T> {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// The key to resume from, taken from a previous page's
    /// `last_evaluated_key`.
    pub exclusive_start_key: Option<common::key::PrimaryKey<T>>,
    /// Filter applied server-side to the scanned items.
    pub filter: Option<common::filter::Filter<T>>,
    /// The name of a secondary index to scan instead of the base table.
    pub index_name: Option<String>,
    /// The maximum number of items to evaluate for this page.
    pub limit: Option<i32>,
    /// Which attributes to retrieve. If `None`, all attributes are returned.
    pub projection: Option<common::projection::Projection>,
    /// Whether to return the consumed capacity information.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// The segment number for parallel scans (0-indexed).
    pub segment: Option<i32>,
    /// The name of the table to scan.
    pub table_name: String,
    /// The total number of segments for parallel scans.
    pub total_segments: Option<i32>,
}

impl<T> Scan<T> {
    /// Build a scan request from its loose parameters.
    pub fn new(
        table_name: impl Into<String>,
        projection: Option<common::projection::Projection>,
        filter: Option<common::filter::Filter<T>>,
    ) -> Self {
        Self {
            consistent_read: None,
            exclusive_start_key: None,
            filter,
            index_name: None,
            limit: None,
            projection,
            return_consumed_capacity: None,
            segment: None,
            table_name: table_name.into(),
            total_segments: None,
        }
    }
}

impl<T: Serialize> TryFrom<Scan<T>> for operation::scan::ScanInput {
    type Error = Error;

    fn try_from(scan: Scan<T>) -> Result<Self> {
        let exclusive_start_key = scan
            .exclusive_start_key
            .map(TryInto::try_into)
            .transpose()?;
        let filter_parts: Option<common::ExpressionParts> =
            scan.filter.map(TryInto::try_into).transpose()?;
        let projection_parts: Option<common::ExpressionParts> = scan.projection.map(Into::into);
        let mut names = collections::HashMap::new();
        let mut values = collections::HashMap::new();
        let filter_expression = filter_parts.and_then(|parts| {
            names.extend(parts.names);
            values.extend(parts.values);
            (!parts.expression.is_empty()).then_some(parts.expression)
        });
        let projection_expression = projection_parts.and_then(|parts| {
            names.extend(parts.names);
            (!parts.expression.is_empty()).then_some(parts.expression)
        });
        let input = Self::builder()
            .set_consistent_read(scan.consistent_read)
            .set_exclusive_start_key(exclusive_start_key)
            .set_expression_attribute_names(common::into_option(names))
            .set_expression_attribute_values(common::into_option(values))
            .set_filter_expression(filter_expression)
            .set_index_name(scan.index_name)
            .set_limit(scan.limit)
            .set_projection_expression(projection_expression)
            .set_return_consumed_capacity(scan.return_consumed_capacity)
            .set_segment(scan.segment)
            .set_table_name(Some(scan.table_name))
            .set_total_segments(scan.total_segments)
            .build()
            .unwrap();
        Ok(input)
    }
}

impl<T: Serialize> Scan<T> {
    /// Execute the scan operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_futures.scan",
            skip_all,
            fields(table = %self.table_name),
            err
        )
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        let input: operation::scan::ScanInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .scan()
            .set_consistent_read(input.consistent_read)
            .set_exclusive_start_key(input.exclusive_start_key)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_filter_expression(input.filter_expression)
            .set_index_name(input.index_name)
            .set_limit(input.limit)
            .set_projection_expression(input.projection_expression)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_segment(input.segment)
            .set_table_name(input.table_name)
            .set_total_segments(input.total_segments)
            .send()
            .await
    }
}
