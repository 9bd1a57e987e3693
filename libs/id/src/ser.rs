//! Serde support for any [`Bean`].
//!
//! A bean serializes as a map from property name to the property's text
//! form, in declaration order:
//!
//! ```text
//! {"observable_source":"None"}
//! ```
//!
//! Deserialization feeds each entry through the bean's builder, so unknown
//! names, unparseable text and missing fields are all rejected.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};

use crate::{Bean, BeanBuilder};

/// Serializes a bean as a map of property name to text.
pub fn serialize_bean<B, S>(bean: &B, serializer: S) -> Result<S::Ok, S::Error>
where
    B: Bean,
    S: Serializer,
{
    let properties = B::meta_bean().properties();
    let mut map = serializer.serialize_map(Some(properties.len()))?;
    for property in properties {
        map.serialize_entry(property.name(), &property.get(bean).to_string())?;
    }
    map.end()
}

/// Deserializes a bean from a map of property name to text.
pub fn deserialize_bean<'de, B, D>(deserializer: D) -> Result<B, D::Error>
where
    B: Bean,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(BeanVisitor(PhantomData))
}

struct BeanVisitor<B>(PhantomData<fn() -> B>);

impl<'de, B: Bean> Visitor<'de> for BeanVisitor<B> {
    type Value = B;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} properties", B::meta_bean().bean_name())
    }

    fn visit_map<A>(self, mut access: A) -> Result<B, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut builder = B::builder();
        while let Some((name, text)) = access.next_entry::<String, String>()? {
            builder
                .set_from_text(&name, &text)
                .map_err(de::Error::custom)?;
        }
        builder.build().map_err(de::Error::custom)
    }
}
