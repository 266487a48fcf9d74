//! Permission planner for wiring a governance plugin into a DAO's
//! permission manager: predicts the plugin address and emits the ordered
//! grant/revoke set for installation and uninstallation.

mod catalog;
mod codec;
mod error;
mod manager;
mod planner;
mod predict;

pub use catalog::*;
pub use codec::*;
pub use error::*;
pub use manager::*;
pub use planner::*;
pub use predict::*;

pub use dao_setup_types as types;
