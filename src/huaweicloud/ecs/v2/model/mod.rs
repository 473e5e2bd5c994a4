//! Request and response models of the ECS API.

mod batch;
mod flavor;
mod job;
mod resize;
mod server;

pub use batch::*;
pub use flavor::*;
pub use job::*;
pub use resize::*;
pub use server::*;
