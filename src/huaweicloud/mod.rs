//! HuaweiCloud service bindings.

pub mod core;
pub mod ecs;
pub mod vpc;
