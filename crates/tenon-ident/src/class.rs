//! Class metadata and the object instance model
//!
//! The container registers services under classes. A class is described by a
//! [`ClassSpec`] and passed around as a shared [`ClassRef`]; every instance
//! constructed from a class carries the same `ClassRef`, so the constructor
//! of an instance can always be recovered and compared against the
//! registered class.

use std::fmt;
use std::sync::Arc;

/// Shared reference to a class definition.
///
/// Cloning is cheap and preserves identity: an instance's class compares
/// equal to the `ClassRef` it was constructed from.
pub type ClassRef = Arc<ClassSpec>;

/// Class (constructor) metadata.
///
/// The intrinsic name is the name bound at the declaration site. A class
/// declared without a name is anonymous, represented as `None` rather than
/// an empty-string sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSpec {
    name: Option<String>,
}

impl ClassSpec {
    /// Create a named class reference.
    ///
    /// An empty name is normalized to anonymous, so a present name is
    /// always non-empty.
    pub fn named(name: impl Into<String>) -> ClassRef {
        let name = name.into();
        Arc::new(ClassSpec {
            name: if name.is_empty() { None } else { Some(name) },
        })
    }

    /// Create an anonymous class reference.
    pub fn anonymous() -> ClassRef {
        Arc::new(ClassSpec { name: None })
    }

    /// Intrinsic name, if the class has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if the class was declared without a name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

impl fmt::Display for ClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "[class {}]", name),
            None => write!(f, "[class (anonymous)]"),
        }
    }
}

/// Object instance carrying its associated class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instance {
    class: ClassRef,
}

impl Instance {
    /// Create an instance of the given class.
    pub fn new(class: ClassRef) -> Self {
        Self { class }
    }

    /// The class this instance was constructed from.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Consume the instance and return its class.
    pub fn into_class(self) -> ClassRef {
        self.class
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class.name() {
            Some(name) => write!(f, "[object {}]", name),
            None => write!(f, "[object (anonymous)]"),
        }
    }
}
