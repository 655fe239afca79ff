/// Request handling logic for table operations
use crate::cancellation::CancellationToken;
use crate::plugin::table::table_plugin::TablePlugin;
use crate::plugin::OsqueryPlugin;
use crate::{ExtensionPluginRequest, ExtensionPluginResponse, ExtensionResponse, ExtensionStatus};
use serde_json::Value;

fn failure(message: String) -> ExtensionResponse {
    ExtensionResponse::new(
        ExtensionStatus::new(1, message, None),
        None::<ExtensionPluginResponse>,
    )
}

impl TablePlugin {
    /// Parse and handle incoming requests
    pub(crate) fn parse_request(
        &self,
        token: &CancellationToken,
        req: ExtensionPluginRequest,
    ) -> ExtensionResponse {
        let action = req.get("action").map(|s| s.as_str()).unwrap_or("");

        match action {
            "columns" => ExtensionResponse::new(ExtensionStatus::new(0, None, None), self.routes()),
            "generate" => self.generate(token, &req),
            _ => {
                log::warn!("Table {} received unknown action: {action}", self.name());
                failure(format!("unknown action: {action}"))
            }
        }
    }

    fn generate(&self, token: &CancellationToken, req: &ExtensionPluginRequest) -> ExtensionResponse {
        // The context, when present, is a JSON-encoded string. It is decoded
        // here and handed to the table as-is; its shape is not this layer's
        // concern.
        let context = match req.get("context") {
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Table {} received a malformed query context", self.name());
                    return failure(format!("error parsing context JSON: {e}"));
                }
            },
            None => None,
        };

        match self.table().generate(token, context) {
            Ok(rows) => ExtensionResponse::new(ExtensionStatus::new(0, None, None), rows),
            Err(e) => failure(format!("error generating table: {e}")),
        }
    }
}
