//! Identifier candidate representation
//!
//! A candidate is the opaque value a caller hands to the container when
//! registering or resolving a service: a string key, a class reference, an
//! object instance, or anything else. Rust has no runtime reflection over
//! arbitrary values, so the candidate is an explicit tagged union and
//! classification is a variant check.

use std::fmt;

use crate::class::{ClassRef, Instance};

/// An identifier candidate supplied to the container.
///
/// Classification is a pure function of the variant: the same candidate
/// always classifies the same way, and no external state is consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// String key (already a name)
    Str(String),
    /// Ordered sequence of candidates
    List(Vec<Candidate>),
    /// Class or constructor reference (named or anonymous)
    Callable(ClassRef),
    /// Object instance with an associated class
    Instance(Instance),
}

impl Candidate {
    /// Shape of this candidate.
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Null => CandidateKind::Null,
            Candidate::Bool(_) => CandidateKind::Bool,
            Candidate::Int(_) => CandidateKind::Int,
            Candidate::Float(_) => CandidateKind::Float,
            Candidate::Str(_) => CandidateKind::Str,
            Candidate::List(_) => CandidateKind::List,
            Candidate::Callable(_) => CandidateKind::Callable,
            Candidate::Instance(_) => CandidateKind::Instance,
        }
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Null => write!(f, "null"),
            Candidate::Bool(b) => write!(f, "{}", b),
            Candidate::Int(i) => write!(f, "{}", i),
            Candidate::Float(x) => write!(f, "{}", x),
            Candidate::Str(s) => write!(f, "{}", s),
            Candidate::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Candidate::Callable(class) => write!(f, "{}", class),
            Candidate::Instance(instance) => write!(f, "{}", instance),
        }
    }
}

// Implement Default to return null
impl Default for Candidate {
    fn default() -> Self {
        Candidate::Null
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Candidate::Str(s.to_string())
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Candidate::Str(s)
    }
}

impl From<bool> for Candidate {
    fn from(b: bool) -> Self {
        Candidate::Bool(b)
    }
}

impl From<i64> for Candidate {
    fn from(i: i64) -> Self {
        Candidate::Int(i)
    }
}

impl From<f64> for Candidate {
    fn from(x: f64) -> Self {
        Candidate::Float(x)
    }
}

impl From<Vec<Candidate>> for Candidate {
    fn from(items: Vec<Candidate>) -> Self {
        Candidate::List(items)
    }
}

impl From<ClassRef> for Candidate {
    fn from(class: ClassRef) -> Self {
        Candidate::Callable(class)
    }
}

impl From<Instance> for Candidate {
    fn from(instance: Instance) -> Self {
        Candidate::Instance(instance)
    }
}

/// Closed set of candidate shapes, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Null value
    Null,
    /// Boolean value
    Bool,
    /// 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// String key
    Str,
    /// Ordered sequence
    List,
    /// Class or constructor reference
    Callable,
    /// Object instance
    Instance,
}

impl CandidateKind {
    /// Lowercase name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::Null => "null",
            CandidateKind::Bool => "bool",
            CandidateKind::Int => "int",
            CandidateKind::Float => "float",
            CandidateKind::Str => "string",
            CandidateKind::List => "list",
            CandidateKind::Callable => "callable",
            CandidateKind::Instance => "instance",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
