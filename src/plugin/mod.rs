mod _enums;
mod _traits;
mod table;

// Re-exporting all public structures
pub use _enums::plugin::Plugin;
pub use _enums::registry::Registry;

pub use _traits::osquery_plugin::OsqueryPlugin;

pub use table::column_def::ColumnDef;
pub use table::column_def::ColumnOptions;
pub use table::column_def::ColumnType;
pub use table::error::TableError;
pub use table::table_plugin::TablePlugin;
pub use table::traits::{Row, Table};
