//! Request and response models of the VPC API.

mod peering;
mod port;
mod route;
mod security_group;
mod subnet;
mod vpc;

pub use peering::*;
pub use port::*;
pub use route::*;
pub use security_group::*;
pub use subnet::*;
pub use vpc::*;
