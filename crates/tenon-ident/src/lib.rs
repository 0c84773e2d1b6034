//! Tenon identifier support
//!
//! This crate classifies the "service identifiers" the Tenon container uses
//! as registry keys. A caller may register or resolve a service by string
//! key, by class reference, or by object instance; the container needs to
//! know which shape it was handed, what name indexes it, and which class
//! stands behind it. Everything here is a pure, synchronous function over
//! an explicit [`Candidate`] value:
//! - [`derive_name`] — registry name for any candidate
//! - [`is_named_callable`] / [`is_anonymous_callable`] — callable shape checks
//! - [`is_plain_object`] — instance shape check
//! - [`extract_class`] — recover the class behind an instance or callable

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod candidate;
pub mod class;
pub mod classify;

pub use candidate::{Candidate, CandidateKind};
pub use class::{ClassRef, ClassSpec, Instance};
pub use classify::{
    derive_name, extract_class, is_anonymous_callable, is_named_callable, is_plain_object,
};

/// Candidate rejected by [`extract_class`]: neither an object instance nor
/// a callable, so no class stands behind it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot derive a class from {kind} candidate `{candidate}`")]
pub struct InvalidIdentifierError {
    candidate: Candidate,
    kind: CandidateKind,
}

impl InvalidIdentifierError {
    pub(crate) fn new(candidate: Candidate) -> Self {
        let kind = candidate.kind();
        Self { candidate, kind }
    }

    /// The rejected candidate.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Shape of the rejected candidate.
    pub fn kind(&self) -> CandidateKind {
        self.kind
    }
}

/// Classification result
pub type IdentResult<T> = Result<T, InvalidIdentifierError>;
