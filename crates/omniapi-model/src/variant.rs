//! Undiscriminated unions resolved by ordered trial parsing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{InvalidDataError, ModelResult};
use crate::validate::Validate;

/// The closed set of alternatives of one union-shaped field.
///
/// `try_match` must try the alternatives in their declared priority order and
/// return the first one that both deserializes and validates.
pub trait VariantSet: Sized + Clone + fmt::Debug + Serialize {
    const TYPE_NAME: &'static str;

    fn try_match(raw: &Value) -> Option<Self>;

    fn validate_held(&self) -> ModelResult<()>;
}

#[derive(Clone)]
enum Repr<K> {
    Built(K),
    Parsed { raw: Value, matched: Option<K> },
}

/// One alternative of `K`, or unmatched JSON kept for round-tripping.
#[derive(Clone)]
pub struct Variant<K: VariantSet> {
    repr: Repr<K>,
}

impl<K: VariantSet> Variant<K> {
    pub fn new(value: impl Into<K>) -> Self {
        Self {
            repr: Repr::Built(value.into()),
        }
    }

    /// Resolves `raw` against the alternatives of `K`. Never fails; a value
    /// that matches nothing is kept as unmatched.
    pub fn from_json(raw: Value) -> Self {
        let matched = K::try_match(&raw);
        Self {
            repr: Repr::Parsed { raw, matched },
        }
    }

    pub fn is_matched(&self) -> bool {
        self.held().is_some()
    }

    fn held(&self) -> Option<&K> {
        match &self.repr {
            Repr::Built(value) => Some(value),
            Repr::Parsed { matched, .. } => matched.as_ref(),
        }
    }

    pub fn matched(&self) -> ModelResult<&K> {
        self.held()
            .ok_or_else(|| InvalidDataError::no_variant(K::TYPE_NAME))
    }

    pub fn into_matched(self) -> ModelResult<K> {
        match self.repr {
            Repr::Built(value) => Ok(value),
            Repr::Parsed {
                matched: Some(value),
                ..
            } => Ok(value),
            Repr::Parsed { matched: None, .. } => Err(InvalidDataError::no_variant(K::TYPE_NAME)),
        }
    }

    /// Dispatches on the held alternative; covers both switch-style handlers
    /// (returning `()`) and value-producing matches.
    pub fn visit<T>(&self, f: impl FnOnce(&K) -> T) -> ModelResult<T> {
        self.matched().map(f)
    }

    /// Narrows to one alternative without failing, e.g.
    /// `input.try_pick(AgentInput::as_text)`.
    pub fn try_pick<'a, T: ?Sized>(&'a self, pick: impl FnOnce(&'a K) -> Option<&'a T>) -> Option<&'a T> {
        self.held().and_then(pick)
    }

    /// The JSON this value serializes to.
    pub fn to_wire_value(&self) -> ModelResult<Value> {
        match &self.repr {
            Repr::Built(value) => serde_json::to_value(value)
                .map_err(|err| InvalidDataError::serialize(K::TYPE_NAME, err)),
            Repr::Parsed { raw, .. } => Ok(raw.clone()),
        }
    }
}

impl<K: VariantSet> From<K> for Variant<K> {
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

impl<K: VariantSet> Validate for Variant<K> {
    fn validate(&self) -> ModelResult<()> {
        self.matched()?.validate_held()
    }
}

impl<K: VariantSet> PartialEq for Variant<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_wire_value(), other.to_wire_value()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: VariantSet> fmt::Debug for Variant<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Built(value) => f.debug_tuple(K::TYPE_NAME).field(value).finish(),
            Repr::Parsed {
                matched: Some(value),
                ..
            } => f.debug_tuple(K::TYPE_NAME).field(value).finish(),
            Repr::Parsed { raw, matched: None } => f
                .debug_struct(K::TYPE_NAME)
                .field("unmatched", raw)
                .finish(),
        }
    }
}

impl<K: VariantSet> Serialize for Variant<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.repr {
            Repr::Built(value) => value.serialize(serializer),
            Repr::Parsed { raw, .. } => raw.serialize(serializer),
        }
    }
}

impl<'de, K: VariantSet> Deserialize<'de> for Variant<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

/// Declares a [`VariantSet`]. Alternatives are tried top to bottom, so list
/// the more specific shapes first.
///
/// ```ignore
/// api_variant! {
///     pub enum AgentInput {
///         Text(String) => as_text,
///         Structured(serde_json::Value) => as_structured,
///     }
/// }
/// ```
#[macro_export]
macro_rules! api_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) => $pick:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl $name {
            $(
                pub fn $pick(&self) -> ::core::option::Option<&$ty> {
                    match self {
                        $name::$variant(value) => ::core::option::Option::Some(value),
                        #[allow(unreachable_patterns)]
                        _ => ::core::option::Option::None,
                    }
                }
            )+
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                match self {
                    $( $name::$variant(value) => $crate::__private::serde::Serialize::serialize(value, serializer), )+
                }
            }
        }

        impl $crate::VariantSet for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn try_match(raw: &$crate::__private::serde_json::Value) -> ::core::option::Option<Self> {
                $(
                    if let ::core::result::Result::Ok(value) =
                        <$ty as $crate::__private::serde::Deserialize>::deserialize(raw)
                    {
                        if $crate::Validate::validate(&value).is_ok() {
                            return ::core::option::Option::Some($name::$variant(value));
                        }
                    }
                )+
                ::core::option::Option::None
            }

            fn validate_held(&self) -> $crate::ModelResult<()> {
                match self {
                    $( $name::$variant(value) => $crate::Validate::validate(value), )+
                }
            }
        }
    };
}
