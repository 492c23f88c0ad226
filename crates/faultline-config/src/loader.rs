use std::collections::HashSet;
use std::path::Path;

use faultline_core::{ErrorKind, FixedKind, Registry, ServerError, builtin, is_reserved};
use http::StatusCode;

use crate::{Catalog, CatalogError, KindEntry};

impl Catalog {
    /// Load a catalog from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read catalog file {}: {e}", path.display()))?;

        let catalog = Self::from_toml_str(&raw)?;

        tracing::debug!(
            catalog_path = %path.display(),
            kinds = catalog.kinds.len(),
            "loaded error kind catalog"
        );

        Ok(catalog)
    }

    /// Parse and validate catalog text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("catalog variable expansion failed: {e}"))?;

        let catalog: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse catalog: {e}"))?;

        catalog.validate()?;

        Ok(catalog)
    }

    /// Check entries against each other and the fixed hierarchy
    ///
    /// Parents must name a fixed kind or an earlier entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut known: HashSet<&str> = builtin::all().into_iter().map(ErrorKind::name).collect();
        let mut declared = HashSet::new();

        for entry in &self.kinds {
            entry.validate()?;

            if !declared.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }

            if let Some(parent) = &entry.parent
                && !known.contains(parent.as_str())
            {
                return Err(CatalogError::UnknownParent {
                    kind: entry.name.clone(),
                    parent: parent.clone(),
                });
            }

            known.insert(entry.name.as_str());
        }

        Ok(())
    }

    /// Define every entry in `registry`, in order
    ///
    /// Parents are looked up in `registry` as each entry is installed.
    pub fn install(&self, registry: &mut Registry) -> Result<Vec<ErrorKind>, CatalogError> {
        let mut installed = Vec::with_capacity(self.kinds.len());

        for entry in &self.kinds {
            let parent = match &entry.parent {
                Some(parent) => registry
                    .get(parent)
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownParent {
                        kind: entry.name.clone(),
                        parent: parent.clone(),
                    })?,
                None => ServerError::kind().clone(),
            };

            installed.push(registry.define(entry.definition(&parent)));
        }

        tracing::debug!(kinds = installed.len(), "installed error kind catalog");

        Ok(installed)
    }
}

impl KindEntry {
    /// Check the entry on its own
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if let Some(status) = self.status
            && StatusCode::from_u16(status).is_err()
        {
            return Err(CatalogError::InvalidStatus {
                kind: self.name.clone(),
                status,
            });
        }

        if self.message.is_some() && self.message_template.is_some() {
            return Err(CatalogError::ConflictingMessage {
                kind: self.name.clone(),
                field: "message",
            });
        }

        if self.user_message.is_some() && self.user_message_template.is_some() {
            return Err(CatalogError::ConflictingMessage {
                kind: self.name.clone(),
                field: "user_message",
            });
        }

        if let Some(key) = self.attributes.keys().find(|key| is_reserved(key.as_str())) {
            return Err(CatalogError::ReservedAttribute {
                kind: self.name.clone(),
                key: key.clone(),
            });
        }

        Ok(())
    }
}
