//! The link between an identifier and the data it resolves to.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Bean;

/// An identifier that resolves to a value of a fixed type.
///
/// The resolved type is static per identifier type. A repository resolving
/// identifiers uses [`market_data_type`](MarketDataId::market_data_type) to
/// check that the value it found is what the caller expects.
pub trait MarketDataId: Bean {
    /// The type of market data this identifier resolves to.
    type MarketData: Any + Send + Sync;

    /// Returns the descriptor of the resolved type.
    fn market_data_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self::MarketData>()
    }
}

/// A runtime descriptor of a static type.
///
/// Two descriptors are equal if they describe the same type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Returns the descriptor of `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the full type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Returns true if this describes `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns true if `value` is of the described type.
    #[must_use]
    pub fn matches(&self, value: &dyn Any) -> bool {
        Any::type_id(value) == self.id
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}
