//! CRS reference and identifier normalization
//!
//! Callers name a coordinate reference system in one of three forms: a bare
//! EPSG code, an identifier string, or a handle that has already been
//! resolved. Identifier strings are normalized into registry keys before
//! resolution; unrecognized spellings degrade to the default CRS under the
//! lenient policy rather than erroring.

use std::sync::Arc;

use log::warn;

use super::projection::Projection;
use crate::errors::{ProjError, ProjResult};

/// Identifier every unrecognized reference falls back to under the
/// lenient policy
pub const DEFAULT_CRS_ID: &str = "EPSG:4326";

/// How normalization treats identifier strings it does not recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierPolicy {
    /// Warn and fall back to [`DEFAULT_CRS_ID`]
    #[default]
    Lenient,
    /// Reject with [`ProjError::InvalidIdentifier`]
    Strict,
}

/// A reference to a coordinate reference system
#[derive(Debug, Clone)]
pub enum CrsRef {
    /// Bare numeric EPSG code
    Epsg(u32),
    /// Identifier string: an "EPSG:<code>" spelling, a raw "+proj" definition,
    /// or anything else (subject to the normalization policy)
    Named(String),
    /// An already-resolved projection handle
    Resolved(Arc<Projection>),
}

impl CrsRef {
    /// Normalize this reference to its registry identifier
    ///
    /// Resolved handles report their embedded EPSG code; other forms go
    /// through the string normalization rules.
    pub fn normalized_id(&self, policy: IdentifierPolicy) -> ProjResult<String> {
        match self {
            CrsRef::Epsg(code) => Ok(normalize_code(*code)),
            CrsRef::Named(raw) => normalize(raw, policy),
            CrsRef::Resolved(projection) => Ok(projection.code_id()),
        }
    }
}

impl From<u32> for CrsRef {
    fn from(code: u32) -> Self {
        CrsRef::Epsg(code)
    }
}

impl From<&str> for CrsRef {
    fn from(raw: &str) -> Self {
        CrsRef::Named(raw.to_string())
    }
}

impl From<String> for CrsRef {
    fn from(raw: String) -> Self {
        CrsRef::Named(raw)
    }
}

impl From<Arc<Projection>> for CrsRef {
    fn from(projection: Arc<Projection>) -> Self {
        CrsRef::Resolved(projection)
    }
}

/// Turn a numeric EPSG code into its identifier form
pub fn normalize_code(code: u32) -> String {
    format!("EPSG:{}", code)
}

/// Normalize a raw identifier string into a registry key
///
/// Rules, in order:
/// 1. Strings containing "EPSG:" pass through unchanged.
/// 2. Strings containing "+proj" are raw custom definitions; the definition
///    text itself is the key, so distinct custom definitions get distinct
///    cache entries.
/// 3. Anything else falls back to [`DEFAULT_CRS_ID`] with a warning
///    (lenient policy) or is rejected (strict policy).
pub fn normalize(raw: &str, policy: IdentifierPolicy) -> ProjResult<String> {
    if raw.contains("EPSG:") {
        return Ok(raw.to_string());
    }

    if raw.contains("+proj") {
        // custom definition, keyed by its own content
        return Ok(raw.to_string());
    }

    match policy {
        IdentifierPolicy::Lenient => {
            warn!("Invalid projection identifier {:?}, assuming {}", raw, DEFAULT_CRS_ID);
            Ok(DEFAULT_CRS_ID.to_string())
        }
        IdentifierPolicy::Strict => Err(ProjError::InvalidIdentifier(raw.to_string())),
    }
}
