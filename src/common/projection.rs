use crate::common;

use std::collections;

/// A flat list of attributes to retrieve.
///
/// Rendered as a projection expression with `#name` placeholders, so reserved
/// words are safe to select.
///
/// ```rust
/// use dynamodb_futures::common::projection;
///
/// let projection = projection::Projection::new(["id", "name"]);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Projection {
    /// The attribute names to retrieve.
    pub attributes: Vec<String>,
}

impl Projection {
    /// Build a projection from attribute names.
    pub fn new<I>(attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Projection> for common::ExpressionParts {
    fn from(projection: Projection) -> Self {
        let mut names = collections::HashMap::with_capacity(projection.attributes.len());
        let mut placeholders = Vec::with_capacity(projection.attributes.len());
        for attribute in projection.attributes {
            let placeholder = common::name_placeholder(&attribute);
            placeholders.push(placeholder.clone());
            names.insert(placeholder, attribute);
        }
        Self {
            expression: placeholders.join(", "),
            names,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(
        Projection::default(),
        common::ExpressionParts::default()
    )]
    #[case::single(
        Projection::new(["a"]),
        common::ExpressionParts {
            expression: "#a".to_string(),
            names: collections::HashMap::from(
                [("#a".to_string(), "a".to_string())]
            ),
            ..Default::default()
        }
    )]
    #[case::multiple(
        Projection::new(["a", "b", "c"]),
        common::ExpressionParts {
            expression: "#a, #b, #c".to_string(),
            names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#b".to_string(), "b".to_string()),
                    ("#c".to_string(), "c".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    fn test_projection(#[case] projection: Projection, #[case] expected: common::ExpressionParts) {
        let actual: common::ExpressionParts = projection.into();
        assert_eq!(actual, expected);
    }
}
