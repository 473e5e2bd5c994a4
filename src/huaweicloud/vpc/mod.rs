//! Virtual Private Cloud.

pub mod v2;
