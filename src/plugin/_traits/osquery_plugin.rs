use crate::cancellation::CancellationToken;
use crate::plugin::Registry;
use enum_dispatch::enum_dispatch;

// The dispatch impl enum_dispatch generates for `Plugin` lands in this
// module, so the linked types must be in scope here.
use crate::plugin::_enums::plugin::Plugin;
use crate::plugin::table::table_plugin::TablePlugin;

/// The capability set osquery expects from every registered plugin.
///
/// The host invokes these through its extension channel: `routes` during
/// registration, `ping` for liveness, `handle_call` for every query, and
/// `shutdown` when the extension is being unloaded.
#[enum_dispatch]
pub trait OsqueryPlugin: Send + Sync {
    fn name(&self) -> String;
    fn registry(&self) -> Registry;
    fn routes(&self) -> crate::ExtensionPluginResponse;
    fn ping(&self) -> crate::ExtensionStatus;
    fn handle_call(
        &self,
        token: &CancellationToken,
        request: crate::ExtensionPluginRequest,
    ) -> crate::ExtensionResponse;
    fn shutdown(&self);
}
