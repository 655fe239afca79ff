#![forbid(unsafe_code)]

// Restrict access to the wire-level structures to this crate.
// Plugin authors work against the re-exported type aliases below.
pub(crate) mod wire;

pub mod cancellation;
pub mod plugin;

pub use crate::cancellation::CancellationToken;

// Re-exports
pub type ExtensionResponse = wire::ExtensionResponse;
pub type ExtensionPluginRequest = wire::ExtensionPluginRequest;
pub type ExtensionPluginResponse = wire::ExtensionPluginResponse;
pub type ExtensionStatus = wire::ExtensionStatus;

///
/// Expose all structures required in virtually any table extension
///
/// ```
/// use osquery_table::prelude::*;
/// ```
pub mod prelude {
    pub use crate::CancellationToken;
    pub use crate::{
        ExtensionPluginRequest, ExtensionPluginResponse, ExtensionResponse, ExtensionStatus,
    };
}
