//! Identifier classification
//!
//! The container indexes its registry by name. These functions answer, for
//! an arbitrary candidate: what name identifies it, whether it is a named
//! or anonymous callable, whether it is a plain object instance, and which
//! class stands behind it. Every function is pure and total except
//! [`extract_class`], whose only failure is a candidate that is neither an
//! instance nor a callable.

use std::borrow::Cow;

use crate::candidate::Candidate;
use crate::class::ClassRef;
use crate::{IdentResult, InvalidIdentifierError};

/// Derive the registry name for a candidate.
///
/// Checks are ordered, first match wins:
/// 1. a callable yields its intrinsic name (anonymous yields `""`);
/// 2. a plain object instance yields the intrinsic name of its class;
/// 3. anything else passes through unchanged — a string is returned as-is,
///    other primitives and lists in their display form.
///
/// Lists and null are not plain objects and take rule 3, not rule 2.
pub fn derive_name(candidate: &Candidate) -> Cow<'_, str> {
    match candidate {
        Candidate::Callable(class) => Cow::Borrowed(class.name().unwrap_or("")),
        Candidate::Instance(instance) => Cow::Borrowed(instance.class().name().unwrap_or("")),
        Candidate::Str(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Check if the candidate is a callable with an intrinsic name.
pub fn is_named_callable(candidate: &Candidate) -> bool {
    matches!(candidate, Candidate::Callable(class) if class.name().is_some())
}

/// Check if the candidate is a callable declared without a name.
///
/// Complement of [`is_named_callable`] over callables; both predicates are
/// false for every non-callable.
pub fn is_anonymous_callable(candidate: &Candidate) -> bool {
    matches!(candidate, Candidate::Callable(class) if class.name().is_none())
}

/// Check if the candidate is a plain object instance.
///
/// False for strings, numbers, booleans, null, lists, and callables.
pub fn is_plain_object(candidate: &Candidate) -> bool {
    matches!(candidate, Candidate::Instance(_))
}

/// Extract the class standing behind a candidate.
///
/// A plain object yields its associated class; a callable (named or
/// anonymous) yields itself. Any other candidate is rejected with
/// [`InvalidIdentifierError`] carrying the offending value.
pub fn extract_class(candidate: &Candidate) -> IdentResult<ClassRef> {
    match candidate {
        Candidate::Instance(instance) => Ok(instance.class().clone()),
        Candidate::Callable(class) => Ok(class.clone()),
        other => Err(InvalidIdentifierError::new(other.clone())),
    }
}
