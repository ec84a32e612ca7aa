use aws_sdk_dynamodb::{Client, error, operation, types};

/// Tag resource operation.
///
/// Associates a set of key-value tags with a table (identified by its Amazon
/// resource name).
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::table::tags;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let tag_resource = tags::TagResource::new(
///     "arn:aws:dynamodb:us-east-1:123456789012:table/users",
///     [("team".to_string(), "identity".to_string())],
/// );
/// tag_resource.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagResource {
    /// The Amazon resource name of the table to tag.
    pub resource_arn: String,
    /// The tags to associate, as key-value pairs.
    pub tags: Vec<(String, String)>,
}

impl TagResource {
    /// Build a tag resource request.
    pub fn new(
        resource_arn: impl Into<String>,
        tags: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tags: tags.into_iter().collect(),
        }
    }
}

impl TryFrom<TagResource> for operation::tag_resource::TagResourceInput {
    type Error = error::BuildError;

    fn try_from(tag_resource: TagResource) -> Result<Self, Self::Error> {
        let tags = tag_resource
            .tags
            .into_iter()
            .map(|(key, value)| types::Tag::builder().key(key).value(value).build())
            .collect::<Result<Vec<_>, _>>()?;
        Self::builder()
            .set_resource_arn(Some(tag_resource.resource_arn))
            .set_tags(Some(tags))
            .build()
    }
}

impl TagResource {
    /// Execute the tag resource operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::tag_resource::TagResourceOutput,
        error::SdkError<operation::tag_resource::TagResourceError>,
    > {
        let input: operation::tag_resource::TagResourceInput = self.try_into()?;
        client
            .tag_resource()
            .set_resource_arn(input.resource_arn)
            .set_tags(input.tags)
            .send()
            .await
    }
}

/// Untag resource operation.
///
/// Removes tags by key from a table resource.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UntagResource {
    /// The Amazon resource name of the table to untag.
    pub resource_arn: String,
    /// The keys of the tags to remove.
    pub tag_keys: Vec<String>,
}

impl UntagResource {
    /// Build an untag resource request.
    pub fn new(
        resource_arn: impl Into<String>,
        tag_keys: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tag_keys: tag_keys.into_iter().collect(),
        }
    }
}

impl TryFrom<UntagResource> for operation::untag_resource::UntagResourceInput {
    type Error = error::BuildError;

    fn try_from(untag_resource: UntagResource) -> Result<Self, Self::Error> {
        Self::builder()
            .set_resource_arn(Some(untag_resource.resource_arn))
            .set_tag_keys(Some(untag_resource.tag_keys))
            .build()
    }
}

impl UntagResource {
    /// Execute the untag resource operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::untag_resource::UntagResourceOutput,
        error::SdkError<operation::untag_resource::UntagResourceError>,
    > {
        let input: operation::untag_resource::UntagResourceInput = self.try_into()?;
        client
            .untag_resource()
            .set_resource_arn(input.resource_arn)
            .set_tag_keys(input.tag_keys)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::single_tag(
        TagResource::new("a", [("b".to_string(), "c".to_string())]),
        operation::tag_resource::TagResourceInput::builder()
            .resource_arn("a")
            .tags(
                types::Tag::builder()
                    .key("b")
                    .value("c")
                    .build()
                    .unwrap()
            )
            .build()
            .unwrap()
    )]
    #[case::multiple_tags(
        TagResource::new(
            "a",
            [
                ("b".to_string(), "c".to_string()),
                ("d".to_string(), "e".to_string()),
            ],
        ),
        operation::tag_resource::TagResourceInput::builder()
            .resource_arn("a")
            .tags(
                types::Tag::builder()
                    .key("b")
                    .value("c")
                    .build()
                    .unwrap()
            )
            .tags(
                types::Tag::builder()
                    .key("d")
                    .value("e")
                    .build()
                    .unwrap()
            )
            .build()
            .unwrap()
    )]
    fn test_tag_resource(
        #[case] tag_resource: TagResource,
        #[case] expected: operation::tag_resource::TagResourceInput,
    ) {
        let actual: operation::tag_resource::TagResourceInput = tag_resource.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::two_keys(
        UntagResource::new("a", ["b".to_string(), "c".to_string()]),
        operation::untag_resource::UntagResourceInput::builder()
            .resource_arn("a")
            .tag_keys("b")
            .tag_keys("c")
            .build()
            .unwrap()
    )]
    fn test_untag_resource(
        #[case] untag_resource: UntagResource,
        #[case] expected: operation::untag_resource::UntagResourceInput,
    ) {
        let actual: operation::untag_resource::UntagResourceInput =
            untag_resource.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
