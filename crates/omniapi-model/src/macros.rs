//! Generators for endpoint tables.
//!
//! Every field is declared as `required|optional name: Type => "wire_key"`.
//! Getters read the frozen container on each call; builder setters take
//! `impl Into<Option<Type>>` and skip `None`.

#[doc(hidden)]
#[macro_export]
macro_rules! __field_getter {
    ($container:ident; required; $(#[$m:meta])* $field:ident : $ty:ty => $key:literal) => {
        $(#[$m])*
        pub fn $field(&self) -> $crate::ModelResult<$ty> {
            self.$container.get_required($key)
        }
    };
    ($container:ident; optional; $(#[$m:meta])* $field:ident : $ty:ty => $key:literal) => {
        $(#[$m])*
        pub fn $field(&self) -> $crate::ModelResult<::core::option::Option<$ty>> {
            self.$container.get($key)
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_validate {
    ($raw:expr; required; $ty:ty => $key:literal) => {
        $crate::Validate::validate(&$raw.get_required::<$ty>($key)?)?;
    };
    ($raw:expr; optional; $ty:ty => $key:literal) => {
        if let ::core::option::Option::Some(value) = $raw.get::<$ty>($key)? {
            $crate::Validate::validate(&value)?;
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_setter {
    ($container:ident; $(#[$m:meta])* $field:ident : $ty:ty => $key:literal) => {
        $(#[$m])*
        pub fn $field(mut self, value: impl ::core::convert::Into<::core::option::Option<$ty>>) -> Self {
            self.$container.set($key, value.into());
            self
        }
    };
}

/// Declares a response model and its builder.
///
/// ```ignore
/// api_model! {
///     pub struct Conversion builder ConversionBuilder {
///         required id: String => "id",
///         optional page_count: i64 => "page_count",
///     }
/// }
/// ```
#[macro_export]
macro_rules! api_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident builder $builder:ident {
            $( $(#[$fmeta:meta])* $kind:ident $field:ident : $ty:ty => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        $vis struct $name {
            raw: $crate::RawData,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            $( $crate::__field_getter!(raw; $kind; $(#[$fmeta])* $field: $ty => $key); )*

            /// Copies the data into a new, independent builder.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    raw: self.raw.to_builder(),
                }
            }
        }

        impl $crate::ApiModel for $name {
            fn from_raw_unchecked(raw: $crate::RawData) -> Self {
                $name { raw }
            }

            fn raw(&self) -> &$crate::RawData {
                &self.raw
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::ModelResult<()> {
                $( $crate::__field_validate!(self.raw; $kind; $ty => $key); )*
                ::core::result::Result::Ok(())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.raw).finish()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.raw, f)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                $crate::__private::serde::Serialize::serialize(&self.raw, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                <$crate::RawData as $crate::__private::serde::Deserialize>::deserialize(deserializer)
                    .map(|raw| $name { raw })
            }
        }

        #[derive(Debug, Clone, Default)]
        $vis struct $builder {
            raw: $crate::RawBuilder,
        }

        impl $builder {
            $( $crate::__field_setter!(raw; $(#[$fmeta])* $field: $ty => $key); )*

            /// Writes a field that is not part of the declared table.
            pub fn extra(
                mut self,
                key: impl ::core::convert::Into<::std::string::String>,
                value: $crate::__private::serde_json::Value,
            ) -> Self {
                self.raw.set_raw(key, value);
                self
            }

            pub fn build(self) -> $crate::ModelResult<$name> {
                self.raw.freeze().map(|raw| $name { raw })
            }
        }
    };
}

/// Declares a params type (headers, query and body containers plus typed
/// path parameters) and its builder.
///
/// ```ignore
/// api_params! {
///     pub struct GetPaymentParams builder GetPaymentParamsBuilder {
///         endpoint: "payments.retrieve",
///         method: Get,
///         path: "/v1/payments/{payment_id}",
///         path_params { payment_id => "payment_id" }
///         headers {}
///         query { optional expand: Vec<String> => "expand" }
///         body {}
///     }
/// }
/// ```
#[macro_export]
macro_rules! api_params {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident builder $builder:ident {
            endpoint: $endpoint:literal,
            method: $method:ident,
            path: $path:literal,
            path_params { $( $(#[$pmeta:meta])* $pfield:ident => $pkey:literal ),* $(,)? }
            headers { $( $(#[$hmeta:meta])* $hkind:ident $hfield:ident : $hty:ty => $hkey:literal ),* $(,)? }
            query { $( $(#[$qmeta:meta])* $qkind:ident $qfield:ident : $qty:ty => $qkey:literal ),* $(,)? }
            body { $( $(#[$bmeta:meta])* $bkind:ident $bfield:ident : $bty:ty => $bkey:literal ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $pfield: ::std::string::String, )*
            headers: $crate::RawData,
            query: $crate::RawData,
            body: $crate::RawData,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Wraps already-split containers without checking them.
            #[allow(clippy::too_many_arguments)]
            pub fn from_raw_unchecked(
                $( $pfield: ::std::string::String, )*
                headers: $crate::RawData,
                query: $crate::RawData,
                body: $crate::RawData,
            ) -> Self {
                $name {
                    $( $pfield, )*
                    headers,
                    query,
                    body,
                }
            }

            $(
                $(#[$pmeta])*
                pub fn $pfield(&self) -> &str {
                    &self.$pfield
                }
            )*

            $( $crate::__field_getter!(headers; $hkind; $(#[$hmeta])* $hfield: $hty => $hkey); )*
            $( $crate::__field_getter!(query; $qkind; $(#[$qmeta])* $qfield: $qty => $qkey); )*
            $( $crate::__field_getter!(body; $bkind; $(#[$bmeta])* $bfield: $bty => $bkey); )*

            /// Copies every container into a new, independent builder.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    $( $pfield: ::core::option::Option::Some(self.$pfield.clone()), )*
                    headers: self.headers.to_builder(),
                    query: self.query.to_builder(),
                    body: self.body.to_builder(),
                }
            }
        }

        impl $crate::ApiParams for $name {
            const METHOD: $crate::HttpMethod = $crate::HttpMethod::$method;
            const PATH: &'static str = $path;
            const ENDPOINT: &'static str = $endpoint;

            fn path_params(&self) -> ::std::vec::Vec<(&'static str, &str)> {
                ::std::vec![$( ($pkey, self.$pfield.as_str()), )*]
            }

            fn headers(&self) -> &$crate::RawData {
                &self.headers
            }

            fn query(&self) -> &$crate::RawData {
                &self.query
            }

            fn body(&self) -> &$crate::RawData {
                &self.body
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::ModelResult<()> {
                $( $crate::__field_validate!(self.headers; $hkind; $hty => $hkey); )*
                $( $crate::__field_validate!(self.query; $qkind; $qty => $qkey); )*
                $( $crate::__field_validate!(self.body; $bkind; $bty => $bkey); )*
                ::core::result::Result::Ok(())
            }
        }

        #[derive(Debug, Clone, Default)]
        $vis struct $builder {
            $( $pfield: ::core::option::Option<::std::string::String>, )*
            headers: $crate::RawBuilder,
            query: $crate::RawBuilder,
            body: $crate::RawBuilder,
        }

        impl $builder {
            $(
                $(#[$pmeta])*
                pub fn $pfield(mut self, value: impl ::core::convert::Into<::std::string::String>) -> Self {
                    self.$pfield = ::core::option::Option::Some(value.into());
                    self
                }
            )*

            $( $crate::__field_setter!(headers; $(#[$hmeta])* $hfield: $hty => $hkey); )*
            $( $crate::__field_setter!(query; $(#[$qmeta])* $qfield: $qty => $qkey); )*
            $( $crate::__field_setter!(body; $(#[$bmeta])* $bfield: $bty => $bkey); )*

            pub fn extra_header(
                mut self,
                key: impl ::core::convert::Into<::std::string::String>,
                value: $crate::__private::serde_json::Value,
            ) -> Self {
                self.headers.set_raw(key, value);
                self
            }

            pub fn extra_query(
                mut self,
                key: impl ::core::convert::Into<::std::string::String>,
                value: $crate::__private::serde_json::Value,
            ) -> Self {
                self.query.set_raw(key, value);
                self
            }

            pub fn extra_body(
                mut self,
                key: impl ::core::convert::Into<::std::string::String>,
                value: $crate::__private::serde_json::Value,
            ) -> Self {
                self.body.set_raw(key, value);
                self
            }

            pub fn build(self) -> $crate::ModelResult<$name> {
                ::core::result::Result::Ok($name {
                    $(
                        $pfield: self
                            .$pfield
                            .ok_or_else(|| $crate::InvalidDataError::missing_path_param($pkey))?,
                    )*
                    headers: self.headers.freeze()?,
                    query: self.query.freeze()?,
                    body: self.body.freeze()?,
                })
            }
        }
    };
}
