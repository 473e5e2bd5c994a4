//! Elastic Cloud Server.

pub mod v2;
