//! Open enums: string (or other primitive) enums that tolerate values the
//! client does not know about yet.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InvalidDataError, ModelResult};
use crate::validate::Validate;

/// A closed set of known symbols with a wire representation.
pub trait WireEnum: Copy + Eq + fmt::Debug + 'static {
    type Raw: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    const TYPE_NAME: &'static str;

    fn from_raw(raw: &Self::Raw) -> Option<Self>;

    fn to_raw(self) -> Self::Raw;
}

/// Raw wire value plus the recognized symbol, if any.
///
/// Deserialization accepts any raw value of the right primitive type; only
/// [`Validate::validate`] rejects unrecognized ones. Equality and
/// serialization use the raw value.
#[derive(Clone)]
pub struct ApiEnum<E: WireEnum> {
    raw: E::Raw,
    known: Option<E>,
}

impl<E: WireEnum> ApiEnum<E> {
    pub fn from_raw(raw: E::Raw) -> Self {
        let known = E::from_raw(&raw);
        Self { raw, known }
    }

    pub fn known(&self) -> Option<E> {
        self.known
    }

    pub fn is_known(&self) -> bool {
        self.known.is_some()
    }

    pub fn raw(&self) -> &E::Raw {
        &self.raw
    }

    pub fn into_raw(self) -> E::Raw {
        self.raw
    }

    /// The known symbol, or an invalid-data error for unrecognized values.
    pub fn value(&self) -> ModelResult<E> {
        self.known
            .ok_or_else(|| InvalidDataError::unknown_enum(E::TYPE_NAME, &self.raw))
    }
}

impl<E: WireEnum> From<E> for ApiEnum<E> {
    fn from(value: E) -> Self {
        Self {
            raw: value.to_raw(),
            known: Some(value),
        }
    }
}

impl<E: WireEnum> PartialEq for ApiEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: WireEnum> PartialEq<E> for ApiEnum<E> {
    fn eq(&self, other: &E) -> bool {
        self.raw == other.to_raw()
    }
}

impl<E: WireEnum> fmt::Debug for ApiEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known {
            Some(known) => write!(f, "{}::{known:?}", E::TYPE_NAME),
            None => write!(f, "{}::Unrecognized({:?})", E::TYPE_NAME, self.raw),
        }
    }
}

impl<E: WireEnum> Validate for ApiEnum<E> {
    fn validate(&self) -> ModelResult<()> {
        self.value().map(|_| ())
    }
}

impl<E: WireEnum> Serialize for ApiEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, E: WireEnum> Deserialize<'de> for ApiEnum<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        E::Raw::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Declares a string-backed [`WireEnum`].
///
/// ```ignore
/// wire_enum! {
///     pub enum AudioFormat {
///         Mp3 => "mp3",
///         Wav => "wav",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl $crate::WireEnum for $name {
            type Raw = ::std::string::String;

            const TYPE_NAME: &'static str = stringify!($name);

            fn from_raw(raw: &::std::string::String) -> ::core::option::Option<Self> {
                match raw.as_str() {
                    $( $wire => ::core::option::Option::Some($name::$variant), )+
                    _ => ::core::option::Option::None,
                }
            }

            fn to_raw(self) -> ::std::string::String {
                self.as_str().to_string()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
