//! Name-based access to identifier fields.
//!
//! Every identifier type carries a [`MetaBean`]: a static, ordered table of
//! [`MetaProperty`] rows, one per declared field. Each row holds plain `fn`
//! pointers for reading the field from a built bean, reading and writing it
//! on the bean's builder, and parsing it from text. The table is generated
//! by [`define_market_data_id!`](crate::define_market_data_id), so statically
//! known call sites use typed getters and only the by-name path can fail.
//!
//! ## Invariants
//!
//! - Property names and their order are fixed per bean type
//! - Built beans are read-only; writes go through the builder
//! - Lookups of undeclared names fail with [`IdError::UnknownProperty`]

use std::fmt;
use std::hash::Hash;

use crate::{IdError, PropertyValue};

/// An immutable bean whose fields can be enumerated and read by name.
pub trait Bean:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + Sized + 'static
{
    /// The builder that produces this bean.
    type Builder: BeanBuilder<Bean = Self>;

    /// Returns the static property table for this bean type.
    fn meta_bean() -> &'static MetaBean<Self>;

    /// Returns a builder pre-filled with this bean's values.
    fn to_builder(&self) -> Self::Builder;

    /// Returns an empty builder.
    fn builder() -> Self::Builder {
        Self::meta_bean().builder()
    }

    /// Returns the declared property names in declaration order.
    fn property_names() -> impl ExactSizeIterator<Item = &'static str> {
        Self::meta_bean().property_names()
    }

    /// Reads a property by name.
    fn property(&self, name: &str) -> Result<PropertyValue, IdError> {
        Self::meta_bean()
            .meta_property(name)
            .map(|property| property.get(self))
    }

    /// Reads a property by name, returning `None` for undeclared names.
    fn property_quiet(&self, name: &str) -> Option<PropertyValue> {
        let meta = Self::meta_bean();
        match meta.find(name) {
            Some(property) => Some(property.get(self)),
            None => {
                tracing::trace!(
                    bean = meta.bean_name(),
                    property = name,
                    quiet = true,
                    "unknown property"
                );
                None
            }
        }
    }

    /// Attempts to write a property on a built bean.
    ///
    /// Always fails: undeclared names with [`IdError::UnknownProperty`],
    /// declared names with [`IdError::ReadOnlyProperty`].
    fn set_property(&self, name: &str, value: PropertyValue) -> Result<(), IdError> {
        self.bound_property(name)?.set(value)
    }

    /// Returns a handle binding this bean to one of its properties.
    fn bound_property(&self, name: &str) -> Result<Property<'_, Self>, IdError> {
        let meta = Self::meta_bean().meta_property(name)?;
        Ok(Property { bean: self, meta })
    }
}

/// A single-use, mutable accumulator of field values for a [`Bean`].
///
/// `build` consumes the builder, so a builder can never be observed after it
/// has produced a bean.
pub trait BeanBuilder: Default + fmt::Debug + fmt::Display + Sized {
    /// The bean this builder produces.
    type Bean: Bean<Builder = Self>;

    /// Validates the collected fields and produces the bean.
    ///
    /// Fails with [`IdError::Validation`] naming every unset required field.
    fn build(self) -> Result<Self::Bean, IdError>;

    /// Sets a property by name.
    fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<&mut Self, IdError> {
        let property = <Self::Bean as Bean>::meta_bean().meta_property(name)?;
        property.set(self, value.into())?;
        Ok(self)
    }

    /// Parses `text` with the property's canonical parser, then sets it.
    fn set_from_text(&mut self, name: &str, text: &str) -> Result<&mut Self, IdError> {
        let property = <Self::Bean as Bean>::meta_bean().meta_property(name)?;
        property.set_from_text(self, text)?;
        Ok(self)
    }

    /// Sets each `(name, value)` pair in order, stopping at the first error.
    fn set_all<I, K, V>(&mut self, values: I) -> Result<&mut Self, IdError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        for (name, value) in values {
            self.set(name.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Reads a property by name; `Ok(None)` means it has not been set.
    fn get(&self, name: &str) -> Result<Option<PropertyValue>, IdError> {
        <Self::Bean as Bean>::meta_bean()
            .meta_property(name)
            .map(|property| property.get_pending(self))
    }

    /// Returns the names of required properties that are still unset.
    fn missing(&self) -> Vec<&'static str> {
        <Self::Bean as Bean>::meta_bean()
            .properties()
            .iter()
            .filter(|property| property.get_pending(self).is_none())
            .map(MetaProperty::name)
            .collect()
    }
}

/// The static property table of a bean type.
pub struct MetaBean<B: Bean> {
    bean_name: &'static str,
    properties: &'static [MetaProperty<B>],
}

impl<B: Bean> MetaBean<B> {
    #[doc(hidden)]
    pub const fn new(bean_name: &'static str, properties: &'static [MetaProperty<B>]) -> Self {
        Self {
            bean_name,
            properties,
        }
    }

    /// Returns the bean's type name.
    #[must_use]
    pub fn bean_name(&self) -> &'static str {
        self.bean_name
    }

    /// Returns the property rows in declaration order.
    #[must_use]
    pub fn properties(&self) -> &'static [MetaProperty<B>] {
        self.properties
    }

    /// Returns the declared property names in declaration order.
    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.properties.iter().map(MetaProperty::name)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static MetaProperty<B>> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Looks up a property by name, failing for undeclared names.
    pub fn meta_property(&self, name: &str) -> Result<&'static MetaProperty<B>, IdError> {
        self.find(name).ok_or_else(|| {
            tracing::trace!(bean = self.bean_name, property = name, "unknown property");
            IdError::UnknownProperty {
                bean: self.bean_name,
                name: name.to_string(),
            }
        })
    }

    /// Returns an empty builder.
    #[must_use]
    pub fn builder(&self) -> B::Builder {
        B::Builder::default()
    }
}

impl<B: Bean> fmt::Debug for MetaBean<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaBean")
            .field("bean_name", &self.bean_name)
            .field("properties", &self.property_names().collect::<Vec<_>>())
            .finish()
    }
}

/// One row of a [`MetaBean`]: a named, typed field and its accessors.
pub struct MetaProperty<B: Bean> {
    name: &'static str,
    value_type: &'static str,
    get: fn(&B) -> PropertyValue,
    get_pending: fn(&B::Builder) -> Option<PropertyValue>,
    set: fn(&mut B::Builder, PropertyValue) -> Result<(), IdError>,
    parse: fn(&str) -> Result<PropertyValue, IdError>,
}

impl<B: Bean> MetaProperty<B> {
    #[doc(hidden)]
    pub const fn new(
        name: &'static str,
        value_type: &'static str,
        get: fn(&B) -> PropertyValue,
        get_pending: fn(&B::Builder) -> Option<PropertyValue>,
        set: fn(&mut B::Builder, PropertyValue) -> Result<(), IdError>,
        parse: fn(&str) -> Result<PropertyValue, IdError>,
    ) -> Self {
        Self {
            name,
            value_type,
            get,
            get_pending,
            set,
            parse,
        }
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the property's declared type.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// Reads the property from a built bean.
    pub fn get(&self, bean: &B) -> PropertyValue {
        (self.get)(bean)
    }

    /// Reads the property from a builder; `None` if unset.
    pub fn get_pending(&self, builder: &B::Builder) -> Option<PropertyValue> {
        (self.get_pending)(builder)
    }

    /// Writes the property on a builder.
    pub fn set(&self, builder: &mut B::Builder, value: PropertyValue) -> Result<(), IdError> {
        (self.set)(builder, value)
    }

    /// Parses `text` into the property's type and writes it on a builder.
    pub fn set_from_text(&self, builder: &mut B::Builder, text: &str) -> Result<(), IdError> {
        let value = (self.parse)(text).map_err(|e| {
            tracing::trace!(property = self.name, text, error = %e, "rejected property text");
            IdError::Parse {
                property: self.name,
                text: text.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.set(builder, value)
    }
}

impl<B: Bean> fmt::Debug for MetaProperty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaProperty")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// A property bound to a specific bean.
pub struct Property<'a, B: Bean> {
    bean: &'a B,
    meta: &'static MetaProperty<B>,
}

impl<'a, B: Bean> Property<'a, B> {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.meta.name()
    }

    /// Returns the name of the property's declared type.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        self.meta.value_type()
    }

    /// Returns the property's table row.
    #[must_use]
    pub fn meta_property(&self) -> &'static MetaProperty<B> {
        self.meta
    }

    /// Returns the bean this property reads from.
    #[must_use]
    pub fn bean(&self) -> &'a B {
        self.bean
    }

    /// Reads the property value.
    pub fn get(&self) -> PropertyValue {
        self.meta.get(self.bean)
    }

    /// Fails with [`IdError::ReadOnlyProperty`]; built beans are immutable.
    pub fn set(&self, _value: PropertyValue) -> Result<(), IdError> {
        Err(IdError::ReadOnlyProperty {
            bean: B::meta_bean().bean_name(),
            name: self.meta.name().to_string(),
        })
    }
}

impl<B: Bean> fmt::Debug for Property<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name())
            .field("value", &self.get())
            .finish()
    }
}

/// Writes `Name{field=value, ...}` in declaration order.
#[doc(hidden)]
pub fn fmt_bean<B: Bean>(bean: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let meta = B::meta_bean();
    write!(f, "{}{{", meta.bean_name())?;
    for (i, property) in meta.properties().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", property.name(), property.get(bean))?;
    }
    f.write_str("}")
}

/// Writes `Name::Builder{field=value, ...}`, marking unset fields.
#[doc(hidden)]
pub fn fmt_builder<B: Bean>(builder: &B::Builder, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let meta = B::meta_bean();
    write!(f, "{}::Builder{{", meta.bean_name())?;
    for (i, property) in meta.properties().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match property.get_pending(builder) {
            Some(value) => write!(f, "{}={}", property.name(), value)?,
            None => write!(f, "{}=<unset>", property.name())?,
        }
    }
    f.write_str("}")
}

/// Builds the error returned when `build()` finds unset required fields.
#[doc(hidden)]
pub fn validation_error(bean: &'static str, missing: Vec<&'static str>) -> IdError {
    tracing::debug!(bean, missing = ?missing, "bean validation failed");
    IdError::Validation { bean, missing }
}

/// Parses text with a type's canonical parser.
#[doc(hidden)]
pub fn parse_value<T: crate::PropertyType>(text: &str) -> Result<PropertyValue, IdError> {
    T::parse_text(text).map(crate::PropertyType::into_value)
}
