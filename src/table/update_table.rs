use aws_sdk_dynamodb::{Client, error, operation, types};

/// Provisioned read and write capacity for a table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// The maximum number of strongly consistent reads per second.
    pub read_capacity_units: i64,
    /// The maximum number of writes per second.
    pub write_capacity_units: i64,
}

/// Update table operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_futures::table::update_table;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_table = update_table::UpdateTable::new(
///     "users",
///     update_table::Throughput {
///         read_capacity_units: 10,
///         write_capacity_units: 5,
///     },
/// );
/// update_table.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateTable {
    /// The billing mode to switch the table to.
    pub billing_mode: Option<types::BillingMode>,
    /// The new provisioned throughput.
    pub provisioned_throughput: Option<Throughput>,
    /// The name of the table to update.
    pub table_name: String,
}

impl UpdateTable {
    /// Build an update table request from its loose parameters.
    pub fn new(table_name: impl Into<String>, provisioned_throughput: Throughput) -> Self {
        Self {
            billing_mode: None,
            provisioned_throughput: Some(provisioned_throughput),
            table_name: table_name.into(),
        }
    }
}

impl TryFrom<UpdateTable> for operation::update_table::UpdateTableInput {
    type Error = error::BuildError;

    fn try_from(update_table: UpdateTable) -> Result<Self, Self::Error> {
        let provisioned_throughput = update_table
            .provisioned_throughput
            .map(|throughput| {
                types::ProvisionedThroughput::builder()
                    .read_capacity_units(throughput.read_capacity_units)
                    .write_capacity_units(throughput.write_capacity_units)
                    .build()
            })
            .transpose()?;
        Self::builder()
            .set_billing_mode(update_table.billing_mode)
            .set_provisioned_throughput(provisioned_throughput)
            .set_table_name(Some(update_table.table_name))
            .build()
    }
}

impl UpdateTable {
    /// Execute the update table operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_table::UpdateTableOutput,
        error::SdkError<operation::update_table::UpdateTableError>,
    > {
        let input: operation::update_table::UpdateTableInput = self.try_into()?;
        client
            .update_table()
            .set_billing_mode(input.billing_mode)
            .set_provisioned_throughput(input.provisioned_throughput)
            .set_table_name(input.table_name)
            .send()
            .await
    }
}
