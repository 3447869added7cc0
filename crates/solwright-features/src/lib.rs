pub mod access;
pub mod amount;
pub mod catalog;
pub mod erc20;
pub mod error;
pub mod info;
pub mod options;

// Re-exports
pub use access::{require_access_control, set_access_control, Access};
pub use amount::Amount;
pub use catalog::{Catalog, Module, Network, DEFAULT_IMPORT_PREFIX};
pub use erc20::{build_erc20, is_access_control_required, print_erc20};
pub use error::{BuildError, OptionsError};
pub use info::{set_info, Info};
pub use options::{Cap, Erc20Config, Erc20Options, Features, Supply};
