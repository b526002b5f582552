use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use crate::core::Value;

/// Shared handle compared by reference rather than by contents.
///
/// Two handles are equal only when they point at the same allocation, so two
/// structurally identical objects created separately stay distinct keys.
pub struct Identity<T>(Rc<T>);

impl<T> Identity<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn same(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Deref for Identity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::same(self, other)
    }
}

impl<T> Eq for Identity<T> {}

impl<T> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&*self.0).finish()
    }
}

/// Map key mixing primitives (compared by value) with objects (compared by identity).
pub enum Key<T> {
    Value(Value),
    Object(Identity<T>),
}

impl<T> Key<T> {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&Identity<T>> {
        match self {
            Self::Object(o) => Some(o),
            Self::Value(_) => None,
        }
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Object(o) => Self::Object(o.clone()),
        }
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Value(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            Self::Object(o) => {
                1u8.hash(state);
                o.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{:?}", v),
            Self::Object(o) => write!(f, "{:?}", o),
        }
    }
}

impl<T> From<Value> for Key<T> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<T> From<&str> for Key<T> {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl<T> From<Identity<T>> for Key<T> {
    fn from(object: Identity<T>) -> Self {
        Self::Object(object)
    }
}
