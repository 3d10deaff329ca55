//! Projection registry
//!
//! Resolves CRS references to shared [`Projection`] handles, memoizing by
//! normalized identifier so each distinct CRS is constructed once per
//! registry. The cache grows monotonically for the registry's lifetime;
//! there is no eviction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use log::debug;

use super::identifier::{CrsRef, IdentifierPolicy};
use super::projection::Projection;
use crate::errors::ProjResult;

lazy_static! {
    // Default process-wide registry, constructed on first use
    static ref SHARED_REGISTRY: ProjectionRegistry = ProjectionRegistry::new();
}

/// The process-wide shared registry (lenient policy)
///
/// Callers needing an isolated cache or a strict identifier policy
/// construct their own [`ProjectionRegistry`] instead.
pub fn shared() -> &'static ProjectionRegistry {
    &SHARED_REGISTRY
}

/// Cache of resolved projection definitions, keyed by normalized identifier
pub struct ProjectionRegistry {
    policy: IdentifierPolicy,
    cache: Mutex<HashMap<String, Arc<Projection>>>,
}

impl ProjectionRegistry {
    /// Create a registry with the default lenient identifier policy
    pub fn new() -> Self {
        Self::with_policy(IdentifierPolicy::Lenient)
    }

    /// Create a registry with an explicit identifier policy
    pub fn with_policy(policy: IdentifierPolicy) -> Self {
        ProjectionRegistry {
            policy,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The identifier policy this registry normalizes with
    pub fn policy(&self) -> IdentifierPolicy {
        self.policy
    }

    /// Normalize a reference to its registry identifier
    pub fn normalized_id(&self, reference: &CrsRef) -> ProjResult<String> {
        reference.normalized_id(self.policy)
    }

    /// Resolve a reference to a shared projection definition
    ///
    /// Already-resolved handles pass through unchanged. Identifier forms
    /// are normalized, then served from the cache or constructed and
    /// cached under their normalized key.
    ///
    /// # Arguments
    /// * `reference` - The CRS reference to resolve
    ///
    /// # Returns
    /// The shared definition handle, or `ProjError::UnresolvableProjection`
    /// if the projection capability cannot construct one
    pub fn resolve(&self, reference: &CrsRef) -> ProjResult<Arc<Projection>> {
        if let CrsRef::Resolved(projection) = reference {
            return Ok(Arc::clone(projection));
        }

        let id = self.normalized_id(reference)?;

        // The lock is held across construction so racing resolvers of the
        // same key cannot both construct and one insertion get lost
        let mut cache = self.cache.lock().unwrap();
        if let Some(hit) = cache.get(&id) {
            return Ok(Arc::clone(hit));
        }

        debug!("Registry miss for {}, constructing definition", id);
        let built = Arc::new(Projection::from_id(&id)?);
        cache.insert(id, Arc::clone(&built));
        Ok(built)
    }

    /// Number of cached definitions
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
