/// TablePlugin: adapts a Table to the host-facing plugin capability set
use crate::cancellation::CancellationToken;
use crate::plugin::table::traits::Table;
use crate::plugin::{OsqueryPlugin, Registry};
use crate::{ExtensionPluginRequest, ExtensionPluginResponse, ExtensionResponse, ExtensionStatus};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Stateless wrapper turning any [`Table`] into an osquery plugin. Every
/// call is self-contained; the wrapper holds no state beyond the table
/// itself.
#[derive(Clone)]
pub struct TablePlugin {
    inner: Arc<dyn Table>,
}

impl TablePlugin {
    pub fn new<T: Table>(table: T) -> Self {
        TablePlugin {
            inner: Arc::new(table),
        }
    }

    pub(crate) fn table(&self) -> &dyn Table {
        self.inner.as_ref()
    }
}

impl OsqueryPlugin for TablePlugin {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn registry(&self) -> Registry {
        Registry::Table
    }

    fn routes(&self) -> ExtensionPluginResponse {
        let mut resp = ExtensionPluginResponse::new();

        for column in &self.inner.columns() {
            let mut r: BTreeMap<String, String> = BTreeMap::new();

            r.insert("id".to_string(), "column".to_string());
            r.insert("name".to_string(), column.name());
            r.insert("type".to_string(), column.t());
            r.insert("op".to_string(), column.o());

            resp.push(r);
        }

        resp
    }

    fn ping(&self) -> ExtensionStatus {
        ExtensionStatus::new(0, None, None)
    }

    fn handle_call(
        &self,
        token: &CancellationToken,
        request: ExtensionPluginRequest,
    ) -> ExtensionResponse {
        self.parse_request(token, request)
    }

    // The wrapper owns no resources; tables that do are free to drop them
    // through their own Drop impls.
    fn shutdown(&self) {
        log::trace!("Shutting down plugin: {}", self.name());
    }
}
