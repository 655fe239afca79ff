use crate::plugin::table::table_plugin::TablePlugin;
use crate::plugin::{OsqueryPlugin, Table};
use enum_dispatch::enum_dispatch;

/// The set of plugins this crate can register with the host. Only the
/// table registry is implemented; the variant carries the ready-to-serve
/// protocol adapter.
#[derive(Clone)]
#[enum_dispatch(OsqueryPlugin)]
pub enum Plugin {
    Table(TablePlugin),
}

impl Plugin {
    pub fn table<T: Table>(table: T) -> Self {
        Plugin::Table(TablePlugin::new(table))
    }
}
