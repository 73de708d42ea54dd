//! Application constants and configuration

pub const APP_NAME: &str = "Pizza Menu";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the host element the root view is mounted into
pub const MOUNT_ID: &str = "root";

/// Directory static assets are resolved against when settings name none
pub const DEFAULT_ASSETS_DIR: &str = "public";
