use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::descriptor::{ConventionDescriptor, Software};
use crate::errors::{EulerError, Result};

/// Named conventions, keyed by lowercase name.
///
/// [`ConventionRegistry::builtin`] holds one entry per [`Software`]. More can
/// be added in code or loaded from a JSON array of descriptors:
///
/// ```rust
/// use eulerangles::ConventionRegistry;
///
/// let mut registry = ConventionRegistry::builtin();
/// let extra = ConventionRegistry::from_json(
///     r#"[{"name": "Chimera", "axes": "zyx", "intrinsic": false, "right_handed": true}]"#,
/// )
/// .unwrap();
/// registry.merge(extra);
///
/// assert!(registry.get("chimera").is_ok());
/// assert!(registry.get("relion").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConventionRegistry {
    conventions: BTreeMap<String, ConventionDescriptor>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ConventionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// RELION, Dynamo, Warp and M.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for software in Software::all() {
            registry.register(software.descriptor());
        }
        registry
    }

    /// Look up a convention by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Result<&ConventionDescriptor> {
        self.conventions
            .get(&key(name))
            .ok_or_else(|| EulerError::UnknownConvention(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.conventions.contains_key(&key(name))
    }

    /// Add a convention, returning the one it replaced.
    pub fn register(&mut self, descriptor: ConventionDescriptor) -> Option<ConventionDescriptor> {
        self.conventions.insert(key(&descriptor.name), descriptor)
    }

    /// Add every convention of `other`, replacing entries with the same name.
    pub fn merge(&mut self, other: ConventionRegistry) {
        for (name, descriptor) in other.conventions {
            if let Some(previous) = self.conventions.insert(name.clone(), descriptor) {
                warn!(convention = %name, replaced = %previous, "convention shadowed");
            }
        }
    }

    /// Parse a JSON array of convention descriptors.
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptors: Vec<ConventionDescriptor> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for descriptor in descriptors {
            if let Some(duplicate) = registry.register(descriptor) {
                return Err(EulerError::Config(format!(
                    "convention '{}' defined more than once",
                    duplicate.name
                )));
            }
        }
        debug!(count = registry.len(), "loaded conventions");
        Ok(registry)
    }

    /// Read a JSON convention file, see [`ConventionRegistry::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            EulerError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// All conventions as a pretty printed JSON array, readable by `from_json`.
    pub fn to_json(&self) -> Result<String> {
        let descriptors: Vec<&ConventionDescriptor> = self.conventions.values().collect();
        Ok(serde_json::to_string_pretty(&descriptors)?)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.conventions.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConventionDescriptor> {
        self.conventions.values()
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }
}
