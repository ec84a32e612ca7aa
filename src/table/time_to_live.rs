use aws_sdk_dynamodb::{Client, error, operation, types};

/// Update time to live operation.
///
/// Enables or disables expiration on a table by naming the attribute that
/// holds each item's expiry timestamp (seconds since the epoch).
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::table::time_to_live;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_ttl = time_to_live::UpdateTimeToLive::new("users", "expires_at", true);
/// update_ttl.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateTimeToLive {
    /// The attribute holding the expiration timestamp.
    pub attribute_name: String,
    /// Whether time to live is enabled.
    pub enabled: bool,
    /// The name of the table to configure.
    pub table_name: String,
}

impl UpdateTimeToLive {
    /// Build an update time to live request.
    pub fn new(
        table_name: impl Into<String>,
        attribute_name: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            enabled,
            table_name: table_name.into(),
        }
    }
}

impl TryFrom<UpdateTimeToLive> for operation::update_time_to_live::UpdateTimeToLiveInput {
    type Error = error::BuildError;

    fn try_from(update_time_to_live: UpdateTimeToLive) -> Result<Self, Self::Error> {
        let specification = types::TimeToLiveSpecification::builder()
            .attribute_name(update_time_to_live.attribute_name)
            .enabled(update_time_to_live.enabled)
            .build()?;
        Self::builder()
            .set_table_name(Some(update_time_to_live.table_name))
            .set_time_to_live_specification(Some(specification))
            .build()
    }
}

impl UpdateTimeToLive {
    /// Execute the update time to live operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_time_to_live::UpdateTimeToLiveOutput,
        error::SdkError<operation::update_time_to_live::UpdateTimeToLiveError>,
    > {
        let input: operation::update_time_to_live::UpdateTimeToLiveInput = self.try_into()?;
        client
            .update_time_to_live()
            .set_table_name(input.table_name)
            .set_time_to_live_specification(input.time_to_live_specification)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::enabled(
        UpdateTimeToLive::new("a", "b", true),
        operation::update_time_to_live::UpdateTimeToLiveInput::builder()
            .table_name("a")
            .time_to_live_specification(
                types::TimeToLiveSpecification::builder()
                    .attribute_name("b")
                    .enabled(true)
                    .build()
                    .unwrap()
            )
            .build()
            .unwrap()
    )]
    #[case::disabled(
        UpdateTimeToLive::new("a", "b", false),
        operation::update_time_to_live::UpdateTimeToLiveInput::builder()
            .table_name("a")
            .time_to_live_specification(
                types::TimeToLiveSpecification::builder()
                    .attribute_name("b")
                    .enabled(false)
                    .build()
                    .unwrap()
            )
            .build()
            .unwrap()
    )]
    fn test_update_time_to_live(
        #[case] update_time_to_live: UpdateTimeToLive,
        #[case] expected: operation::update_time_to_live::UpdateTimeToLiveInput,
    ) {
        let actual: operation::update_time_to_live::UpdateTimeToLiveInput =
            update_time_to_live.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
