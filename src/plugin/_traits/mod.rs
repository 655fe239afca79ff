pub mod osquery_plugin;
