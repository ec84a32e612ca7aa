use crate::common;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::{collections, ops};

/// Logical operator joining the entries of a [`Filter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FilterOperator {
    /// All entries must hold.
    #[default]
    And,
    /// At least one entry must hold.
    Or,
}

impl ops::Deref for FilterOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// A comparison applied to a single attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison<T> {
    /// The attribute begins with the given prefix (string attributes only).
    BeginsWith(String),
    /// The attribute value is between the two values, inclusive.
    Between(T, T),
    /// The attribute contains the given value.
    Contains(T),
    /// The attribute value equals the given value.
    Equals(T),
    /// The attribute exists on the item.
    Exists,
    /// The attribute value is strictly greater than the given value.
    GreaterThan(T),
    /// The attribute value is greater than or equal to the given value.
    GreaterThanOrEqual(T),
    /// The attribute value is strictly less than the given value.
    LessThan(T),
    /// The attribute value is less than or equal to the given value.
    LessThanOrEqual(T),
    /// The attribute value does not equal the given value.
    NotEquals(T),
    /// The attribute does not exist on the item.
    NotExists,
}

fn comparator<T: Serialize>(
    value: T,
    name: &str,
    placeholder: &str,
    operation: &str,
    operator: &str,
    index: &mut usize,
    values: &mut collections::HashMap<String, types::AttributeValue>,
) -> Result<String> {
    let value_placeholder = format!(":{name}_{operation}{index}");
    *index += 1;
    values.insert(value_placeholder.clone(), to_attribute_value(value)?);
    Ok(format!("{placeholder} {operator} {value_placeholder}"))
}

impl<T: Serialize> Comparison<T> {
    fn render(
        self,
        name: &str,
        placeholder: &str,
        index: &mut usize,
        values: &mut collections::HashMap<String, types::AttributeValue>,
    ) -> Result<String> {
        let expression = match self {
            Self::BeginsWith(prefix) => {
                let value_placeholder = format!(":{name}_begins_with{index}");
                *index += 1;
                values.insert(value_placeholder.clone(), types::AttributeValue::S(prefix));
                format!("begins_with({placeholder}, {value_placeholder})")
            }
            Self::Between(lower, upper) => {
                let lower_placeholder = format!(":{name}_between{index}");
                *index += 1;
                let upper_placeholder = format!(":{name}_between{index}");
                *index += 1;
                values.insert(lower_placeholder.clone(), to_attribute_value(lower)?);
                values.insert(upper_placeholder.clone(), to_attribute_value(upper)?);
                format!("{placeholder} BETWEEN {lower_placeholder} AND {upper_placeholder}")
            }
            Self::Contains(value) => {
                let value_placeholder = format!(":{name}_contains{index}");
                *index += 1;
                values.insert(value_placeholder.clone(), to_attribute_value(value)?);
                format!("contains({placeholder}, {value_placeholder})")
            }
            Self::Equals(value) => comparator(value, name, placeholder, "eq", "=", index, values)?,
            Self::Exists => format!("attribute_exists({placeholder})"),
            Self::GreaterThan(value) => {
                comparator(value, name, placeholder, "gt", ">", index, values)?
            }
            Self::GreaterThanOrEqual(value) => {
                comparator(value, name, placeholder, "gte", ">=", index, values)?
            }
            Self::LessThan(value) => {
                comparator(value, name, placeholder, "lt", "<", index, values)?
            }
            Self::LessThanOrEqual(value) => {
                comparator(value, name, placeholder, "lte", "<=", index, values)?
            }
            Self::NotEquals(value) => {
                comparator(value, name, placeholder, "ne", "<>", index, values)?
            }
            Self::NotExists => format!("attribute_not_exists({placeholder})"),
        };
        Ok(expression)
    }
}

/// A flat filter: attribute comparisons joined by a single operator.
///
/// ```rust
/// use dynamodb_futures::common::filter;
///
/// let filter = filter::Filter {
///     operator: filter::FilterOperator::And,
///     entries: vec![
///         ("age".to_string(), filter::Comparison::GreaterThan(21)),
///         ("age".to_string(), filter::Comparison::LessThan(65)),
///     ],
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter<T> {
    /// The operator joining the entries.
    pub operator: FilterOperator,
    /// Pairs of attribute name and comparison. The same attribute may appear
    /// more than once.
    pub entries: Vec<(String, Comparison<T>)>,
}

impl<T: Serialize> TryFrom<Filter<T>> for common::ExpressionParts {
    type Error = Error;

    fn try_from(filter: Filter<T>) -> Result<Self> {
        let mut names = collections::HashMap::new();
        let mut values = collections::HashMap::new();
        let mut expressions = Vec::with_capacity(filter.entries.len());
        let mut index = 0;
        for (name, comparison) in filter.entries {
            let placeholder = common::name_placeholder(&name);
            let expression = comparison.render(&name, &placeholder, &mut index, &mut values)?;
            names.insert(placeholder, name);
            expressions.push(expression);
        }
        let parts = Self {
            expression: expressions.join(&filter.operator),
            names,
            values,
        };
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::empty(
        Filter::default(),
        common::ExpressionParts::default()
    )]
    #[case::equals(
        Filter {
            operator: FilterOperator::And,
            entries: vec![
                (
                    "a".to_string(),
                    Comparison::Equals(Value::String("b".to_string())),
                ),
            ],
        },
        common::ExpressionParts {
            expression: "#a = :a_eq0".to_string(),
            names: collections::HashMap::from(
                [("#a".to_string(), "a".to_string())]
            ),
            values: collections::HashMap::from(
                [(
                    ":a_eq0".to_string(),
                    types::AttributeValue::S("b".to_string()),
                )]
            ),
        }
    )]
    #[case::and_pair(
        Filter {
            operator: FilterOperator::And,
            entries: vec![
                (
                    "a".to_string(),
                    Comparison::GreaterThan(Value::Number(21.into())),
                ),
                (
                    "a".to_string(),
                    Comparison::LessThanOrEqual(Value::Number(65.into())),
                ),
            ],
        },
        common::ExpressionParts {
            expression: "#a > :a_gt0 AND #a <= :a_lte1".to_string(),
            names: collections::HashMap::from(
                [("#a".to_string(), "a".to_string())]
            ),
            values: collections::HashMap::from(
                [
                    (
                        ":a_gt0".to_string(),
                        types::AttributeValue::N("21".to_string()),
                    ),
                    (
                        ":a_lte1".to_string(),
                        types::AttributeValue::N("65".to_string()),
                    ),
                ]
            ),
        }
    )]
    #[case::or_functions(
        Filter {
            operator: FilterOperator::Or,
            entries: vec![
                (
                    "a".to_string(),
                    Comparison::BeginsWith("b".to_string()),
                ),
                ("c".to_string(), Comparison::NotExists),
            ],
        },
        common::ExpressionParts {
            expression: "begins_with(#a, :a_begins_with0) OR attribute_not_exists(#c)"
                .to_string(),
            names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#c".to_string(), "c".to_string()),
                ]
            ),
            values: collections::HashMap::from(
                [(
                    ":a_begins_with0".to_string(),
                    types::AttributeValue::S("b".to_string()),
                )]
            ),
        }
    )]
    #[case::between(
        Filter {
            operator: FilterOperator::And,
            entries: vec![
                (
                    "a".to_string(),
                    Comparison::Between(
                        Value::Number(1.into()),
                        Value::Number(9.into()),
                    ),
                ),
            ],
        },
        common::ExpressionParts {
            expression: "#a BETWEEN :a_between0 AND :a_between1".to_string(),
            names: collections::HashMap::from(
                [("#a".to_string(), "a".to_string())]
            ),
            values: collections::HashMap::from(
                [
                    (
                        ":a_between0".to_string(),
                        types::AttributeValue::N("1".to_string()),
                    ),
                    (
                        ":a_between1".to_string(),
                        types::AttributeValue::N("9".to_string()),
                    ),
                ]
            ),
        }
    )]
    fn test_filter(#[case] filter: Filter<Value>, #[case] expected: common::ExpressionParts) {
        let actual: common::ExpressionParts = filter.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
