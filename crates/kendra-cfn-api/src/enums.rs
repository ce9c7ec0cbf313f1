//! Remote enumerations.
//!
//! The service transmits enumerations as strings. Each one becomes a Rust
//! enum whose serde form and `FromStr` accept exactly the documented
//! values, so a malformed value in a resource model is rejected before
//! any request leaves the process.

use thiserror::Error;

/// A string that names no variant of a remote enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {type_name}; expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

macro_rules! kendra_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::enums::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::enums::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                        expected: Self::VALUES,
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::types::{DataSourceType, WebCrawlerMode};

    #[test]
    fn test_parse_known_value() {
        let mode: WebCrawlerMode = "SUBDOMAINS".parse().unwrap();
        assert_eq!(mode, WebCrawlerMode::Subdomains);
        assert_eq!(mode.to_string(), "SUBDOMAINS");
    }

    #[test]
    fn test_reject_unknown_value() {
        let err = "subdomains".parse::<WebCrawlerMode>().unwrap_err();
        assert_eq!(err.type_name, "WebCrawlerMode");
        assert!(err.to_string().contains("HOST_ONLY"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&DataSourceType::GoogleDrive).unwrap();
        assert_eq!(json, "\"GOOGLEDRIVE\"");
        let back: DataSourceType = serde_json::from_str("\"WEBCRAWLER\"").unwrap();
        assert_eq!(back, DataSourceType::WebCrawler);
        assert!(serde_json::from_str::<DataSourceType>("\"NOPE\"").is_err());
    }
}
