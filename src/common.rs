//! Common utilities shared across operations.
//!
//! This module provides the types used to describe item keys, attribute
//! projections and scan filters, plus the internal accumulator that turns them
//! into DynamoDB expression strings and placeholder maps.

/// Comparison filters for scan filter expressions.
pub mod filter;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

/// Attribute selection for projection expressions.
pub mod projection;

use aws_sdk_dynamodb::types;
use std::collections;

/// A rendered expression fragment together with its placeholder maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionParts {
    pub(crate) expression: String,
    pub(crate) names: collections::HashMap<String, String>,
    pub(crate) values: collections::HashMap<String, types::AttributeValue>,
}

pub(crate) fn name_placeholder(name: &str) -> String {
    format!("#{name}")
}

pub(crate) fn into_option<K, V>(
    map: collections::HashMap<K, V>,
) -> Option<collections::HashMap<K, V>> {
    (!map.is_empty()).then_some(map)
}
