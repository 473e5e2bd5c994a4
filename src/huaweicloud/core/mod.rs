//! Pieces shared by every service: open enums, model display, request
//! definitions and the HTTP client.

pub mod client;
pub mod display;
pub mod enums;
pub mod error;
pub mod request;
pub mod serde_lossy;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{regional_endpoint, Credentials, HcClient, HttpConfig};
pub use error::SdkError;
pub use request::{HttpRequest, RequestDef, SdkResponse};

/// Implements [`SdkResponse`] for response models carrying a
/// `http_status_code` field.
macro_rules! sdk_response {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::huaweicloud::core::SdkResponse for $ty {
                fn set_http_status_code(&mut self, code: u16) {
                    self.http_status_code = code;
                }
            }
        )+
    };
}

pub(crate) use sdk_response;
pub(crate) use display::json_display;
pub(crate) use enums::sdk_enum;
