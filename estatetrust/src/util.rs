use crate::{response, transport::HttpResponse, RequestResponseError};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Builds a list of path segments from anything that can be displayed.
macro_rules! path {
    ($($segment:expr),+ $(,)?) => {
        vec![$($segment.to_string()),+]
    };
}

/// Declares an enum that travels over the wire as a lowercase string.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::ParseChoiceError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(crate::ParseChoiceError {
                        value: s.to_owned(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub trait ResponseExt {
    fn parse<T: DeserializeOwned>(self) -> Result<T, RequestResponseError>;
    fn parse_empty(self) -> Result<(), RequestResponseError>;
}

impl ResponseExt for HttpResponse {
    fn parse<T: DeserializeOwned>(self) -> Result<T, RequestResponseError> {
        if self.status.is_success() {
            Ok(serde_json::from_slice(&self.body)?)
        } else {
            Err(response::Error::from_body(self.status.as_u16(), &self.body).into())
        }
    }

    fn parse_empty(self) -> Result<(), RequestResponseError> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(response::Error::from_body(self.status.as_u16(), &self.body).into())
        }
    }
}

/// Extracts the `access_token` field of a JSON response body.
pub fn access_token(body: &[u8]) -> Option<String> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    value
        .get("access_token")
        .and_then(|v| v.as_str())
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

/// Joins the non-empty parts of a name with single spaces.
pub fn display_name(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalizes the first letter of every word.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
