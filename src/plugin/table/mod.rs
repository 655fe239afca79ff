pub(crate) mod column_def;
pub(crate) mod error;
pub(crate) mod request_handler;
pub(crate) mod table_plugin;
pub(crate) mod traits;
