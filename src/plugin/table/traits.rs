/// Table trait definition: the contract a pluggable table satisfies
use crate::cancellation::CancellationToken;
use crate::plugin::table::column_def::ColumnDef;
use crate::plugin::table::error::TableError;
use serde_json::Value;
use std::collections::BTreeMap;

/// One generated row: column name to value. Values always cross the wire
/// as strings, whatever the declared column type.
pub type Row = BTreeMap<String, String>;

/// A named, columnar data source the host can query.
///
/// Implement this and hand the value to
/// [`Plugin::table`](crate::plugin::Plugin::table); the adapter takes care
/// of the wire protocol.
#[cfg_attr(test, mockall::automock)]
pub trait Table: Send + Sync + 'static {
    /// Stable table name. Must be non-empty and unique within the host's
    /// registry (uniqueness is enforced by the host).
    fn name(&self) -> String;

    /// The column schema. Queried once per schema request and expected to
    /// stay stable for the lifetime of the process.
    fn columns(&self) -> Vec<ColumnDef>;

    /// Produce the table's rows.
    ///
    /// `context` is the host's query context, decoded from JSON and passed
    /// through opaquely (`None` when the request carried none); its shape
    /// is the host's to define and the implementation's to interpret.
    /// Long-running generation should check `token` periodically and stop
    /// early once it reports cancelled.
    fn generate(
        &self,
        token: &CancellationToken,
        context: Option<Value>,
    ) -> Result<Vec<Row>, TableError>;
}
