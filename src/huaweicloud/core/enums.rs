//! Open string enums.
//!
//! API enums are kept as strings on the wire and in memory. The named
//! constants document the values the service is known to send, but any other
//! value is accepted when reading, so new server-side values never break
//! decoding.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};

pub const ENUM_CONVERT_ERROR: &str = "convert enum data to string error";

struct EnumValueVisitor;

impl<'de> Visitor<'de> for EnumValueVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v.to_string())
    }

    // null decodes to the zero value
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(ENUM_CONVERT_ERROR))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(ENUM_CONVERT_ERROR))
    }
}

/// Reads the raw value of an enum field without checking it against the
/// known constants.
pub fn deserialize_enum_value<'de, D>(d: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    d.deserialize_any(EnumValueVisitor)
}

/// Declares an open string enum with a set of named constants.
///
/// ```ignore
/// sdk_enum! {
///     pub struct BatchStopServersOptionType {
///         SOFT = "SOFT",
///         HARD = "HARD",
///     }
/// }
/// ```
macro_rules! sdk_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$const_meta:meta])* $constant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        $vis struct $name(::std::borrow::Cow<'static, str>);

        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$const_meta])*
                pub const $constant: $name = $name(::std::borrow::Cow::Borrowed($value));
            )+

            /// Every value the API documents for this field.
            pub fn values() -> Vec<$name> {
                vec![$(Self::$constant),+]
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn is_known(&self) -> bool {
                Self::values().contains(self)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(::std::borrow::Cow::Owned(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(::std::borrow::Cow::Owned(value.to_owned()))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(&self.0)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                $crate::huaweicloud::core::enums::deserialize_enum_value(d).map(Self::from)
            }
        }
    };
}

pub(crate) use sdk_enum;

#[cfg(test)]
mod tests {
    sdk_enum! {
        pub struct PowerType {
            SOFT = "SOFT",
            HARD = "HARD",
        }
    }

    #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq)]
    struct Holder {
        #[serde(rename = "type")]
        kind: PowerType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        other: Option<PowerType>,
    }

    #[test]
    fn test_constants_marshal_to_wire_value() {
        assert_eq!(serde_json::to_string(&PowerType::SOFT).unwrap(), r#""SOFT""#);
        assert_eq!(serde_json::to_string(&PowerType::HARD).unwrap(), r#""HARD""#);
        assert_eq!(PowerType::values(), vec![PowerType::SOFT, PowerType::HARD]);
    }

    #[test]
    fn test_unknown_values_are_kept() {
        let holder: Holder = serde_json::from_str(r#"{"type": "GRACEFUL"}"#).unwrap();
        assert_eq!(holder.kind.value(), "GRACEFUL");
        assert!(!holder.kind.is_known());
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"type":"GRACEFUL"}"#);

        let holder: Holder = serde_json::from_str(r#"{"type": "HARD"}"#).unwrap();
        assert_eq!(holder.kind, PowerType::HARD);
        assert!(holder.kind.is_known());
    }

    #[test]
    fn test_scalars_use_their_text() {
        let test_vectors = [
            (r#"{"type": 5}"#, "5"),
            (r#"{"type": -1}"#, "-1"),
            (r#"{"type": true}"#, "true"),
            (r#"{"type": null}"#, ""),
        ];
        for (src, value) in test_vectors {
            let holder: Holder = serde_json::from_str(src).unwrap();
            assert_eq!(holder.kind.value(), value, "{src}");
        }
    }

    #[test]
    fn test_composites_are_rejected() {
        for src in [r#"{"type": {}}"#, r#"{"type": ["SOFT"]}"#] {
            let err = serde_json::from_str::<Holder>(src).unwrap_err();
            assert!(err.to_string().contains(super::ENUM_CONVERT_ERROR), "{err}");
        }
    }
}
