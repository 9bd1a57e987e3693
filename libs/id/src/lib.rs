//! # mktdata-id
//!
//! Immutable, strongly typed identifiers for market data.
//!
//! ## Design Principles
//!
//! - An identifier is a lookup key; it never holds the data it names
//! - Each identifier type resolves to one fixed data type
//! - Identifiers are immutable and compare by value
//! - Hash codes are computed once and cached without locking
//! - Fields can be enumerated, read and (while building) written by name
//!
//! ## Building Identifiers
//!
//! Identifiers come from named factories or from their builder:
//!
//! ```ignore
//! let standard = FxMatrixId::standard();
//! let bbg = FxMatrixId::of(ObservableSource::named("BBG")?);
//!
//! let mut builder = FxMatrixId::builder();
//! builder.set_from_text("observable_source", "BBG")?;
//! assert_eq!(builder.build()?, bbg);
//! ```
//!
//! `build()` fails with [`IdError::Validation`] if any field is unset.
//!
//! ## Generic Access
//!
//! The [`Bean`] trait exposes a static [`MetaBean`] table, letting generic
//! code (serializers, config loaders) handle any identifier type by
//! property name without knowing the concrete type.

mod error;
mod fx;
mod hash;
mod macros;
mod market_data;
mod meta;
mod ser;
mod source;
mod types;
mod value;

pub use error::IdError;
pub use fx::FxMatrix;
pub use hash::CachedHash;
pub use market_data::{MarketDataId, TypeDescriptor};
pub use meta::{Bean, BeanBuilder, MetaBean, MetaProperty, Property};
pub use ser::{deserialize_bean, serialize_bean};
pub use source::{ObservableSource, SourceName, MAX_SOURCE_NAME_LENGTH};
pub use types::*;
pub use value::{PropertyType, PropertyValue};

/// Items used by [`define_market_data_id!`]; not a stable API.
#[doc(hidden)]
pub mod __private {
    pub use crate::meta::{fmt_bean, fmt_builder, parse_value, validation_error};
    pub use crate::ser::{deserialize_bean, serialize_bean};
    pub use serde;
}
