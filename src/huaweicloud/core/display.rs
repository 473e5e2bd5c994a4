//! `Display` for API models: `TypeName {json}`.

/// Implements `Display` for each listed model as its type name followed by
/// its compact JSON encoding. A value that fails to encode renders as
/// `TypeName struct{}`.
macro_rules! json_display {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    match ::serde_json::to_string(self) {
                        Ok(data) => write!(f, "{} {}", stringify!($ty), data),
                        Err(_) => write!(f, "{} struct{{}}", stringify!($ty)),
                    }
                }
            }
        )+
    };
}

pub(crate) use json_display;
