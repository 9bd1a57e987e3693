//! Macros for defining market data identifier types.

/// Macro to define an immutable market data identifier.
///
/// This generates:
/// - The identifier struct, with a lazily cached hash code
/// - A private `const fn from_fields` constructor
/// - A typed getter per field
/// - A builder with a typed setter per field
/// - The [`Bean`](crate::Bean) and [`BeanBuilder`](crate::BeanBuilder) impls,
///   backed by a static [`MetaBean`](crate::MetaBean) table
/// - [`MarketDataId`](crate::MarketDataId) resolving to the given type
/// - `PartialEq`, `Eq`, `Hash`, `Debug` and `Display`
/// - `Serialize` and `Deserialize` as a map of property name to text
///
/// Every declared field is required. Field types must implement
/// [`PropertyType`](crate::PropertyType), `Debug`, `Eq` and `Hash`.
///
/// # Example
///
/// ```ignore
/// define_market_data_id! {
///     /// Identifies the market data for an FX matrix.
///     pub struct FxMatrixId => FxMatrix {
///         /// The source of observable market data.
///         observable_source: ObservableSource,
///     }
///     builder FxMatrixIdBuilder;
/// }
///
/// let mut builder = FxMatrixId::builder();
/// builder.set_from_text("observable_source", "BBG")?;
/// let id = builder.build()?;
/// ```
#[macro_export]
macro_rules! define_market_data_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $data:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),+ $(,)?
        }
        builder $builder:ident;
    ) => {
        $(#[$meta])*
        pub struct $name {
            $( $field: $ty, )+
            hash_cache: $crate::CachedHash,
        }

        impl $name {
            /// Creates an instance from already validated fields.
            const fn from_fields($( $field: $ty ),+) -> Self {
                Self {
                    $( $field, )+
                    hash_cache: $crate::CachedHash::new(),
                }
            }

            $(
                $(#[$field_meta])*
                #[must_use]
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )+

            /// Returns the hash code, computing and caching it on first use.
            #[must_use]
            pub fn cached_hash(&self) -> u64 {
                self.hash_cache.get_or_compute(|| {
                    let mut hasher = ::std::collections::hash_map::DefaultHasher::new();
                    ::std::hash::Hash::hash(stringify!($name), &mut hasher);
                    $( ::std::hash::Hash::hash(&self.$field, &mut hasher); )+
                    ::std::hash::Hasher::finish(&hasher)
                })
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                Self {
                    $( $field: self.$field.clone(), )+
                    hash_cache: self.hash_cache.clone(),
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ::std::ptr::eq(self, other) || ($( self.$field == other.$field )&&+)
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.cached_hash());
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $( .field(stringify!($field), &self.$field) )+
                    .finish()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::fmt_bean(self, f)
            }
        }

        impl $crate::Bean for $name {
            type Builder = $builder;

            fn meta_bean() -> &'static $crate::MetaBean<Self> {
                static META: $crate::MetaBean<$name> = $crate::MetaBean::new(
                    stringify!($name),
                    &[$(
                        $crate::MetaProperty::<$name>::new(
                            stringify!($field),
                            <$ty as $crate::PropertyType>::TYPE_NAME,
                            |bean: &$name| {
                                $crate::PropertyType::into_value(bean.$field.clone())
                            },
                            |builder: &$builder| {
                                builder.$field.clone().map($crate::PropertyType::into_value)
                            },
                            |builder: &mut $builder, value: $crate::PropertyValue| {
                                builder.$field = Some(value.into_typed::<$ty>(stringify!($field))?);
                                Ok(())
                            },
                            $crate::__private::parse_value::<$ty>,
                        ),
                    )+],
                );
                &META
            }

            fn to_builder(&self) -> $builder {
                $builder {
                    $( $field: Some(self.$field.clone()), )+
                }
            }
        }

        impl $crate::MarketDataId for $name {
            type MarketData = $data;
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serialize_bean(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize_bean(deserializer)
            }
        }

        #[doc = concat!("The builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $( $field: Option<$ty>, )+
        }

        impl $builder {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(&mut self, value: $ty) -> &mut Self {
                    self.$field = Some(value);
                    self
                }
            )+
        }

        impl $crate::BeanBuilder for $builder {
            type Bean = $name;

            fn build(self) -> Result<$name, $crate::IdError> {
                let mut missing = Vec::new();
                $(
                    if self.$field.is_none() {
                        missing.push(stringify!($field));
                    }
                )+

                match ($( self.$field, )+) {
                    ($( Some($field), )+) => Ok($name::from_fields($( $field ),+)),
                    _ => Err($crate::__private::validation_error(stringify!($name), missing)),
                }
            }
        }

        impl ::std::fmt::Display for $builder {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::fmt_builder::<$name>(self, f)
            }
        }
    };
}
