mod address;
mod params;
mod permission;
mod plan;
mod voting;

pub use address::*;
pub use params::*;
pub use permission::*;
pub use plan::*;
pub use voting::*;
