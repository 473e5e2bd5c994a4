//! Buildah-style local image management (`tag`, `images`, `load`) and
//! HuaweiCloud ECS/VPC API bindings.

pub mod archive;
pub mod huaweicloud;
pub mod reference;
pub mod runtime;
pub mod store;
pub mod system_context;
pub mod tag;
