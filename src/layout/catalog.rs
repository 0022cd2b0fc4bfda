//! Ordered part names shared by slicing and rotation
//!
//! Catalog order is the vertical band order on the sheet: the first name is the
//! topmost band. Each name doubles as the directory holding that part's images, so
//! names are restricted to a single, ordinary path component.

use crate::io::configuration::DEFAULT_PARTS;
use crate::io::error::{Result, invalid_parameter};
use std::collections::HashSet;

/// Validated, non-empty, duplicate-free list of part names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCatalog {
    names: Vec<String>,
}

impl PartCatalog {
    /// Build a catalog from names in top-to-bottom order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No names are given
    /// - A name is empty, `.`, `..`, or contains a path separator
    /// - A name appears more than once
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(invalid_parameter(
                "parts",
                &"",
                &"at least one part name is required",
            ));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            validate_name(name)?;
            if !seen.insert(name.as_str()) {
                return Err(invalid_parameter(
                    "parts",
                    name,
                    &"part names must be unique",
                ));
            }
        }

        Ok(Self { names })
    }

    /// Number of parts, which is also the number of horizontal bands
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalog
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Part name at band `index`, counted from the top
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of `name` in the catalog
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate names from top band to bottom band
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_PARTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("part names must not be empty")
    } else if name == "." || name == ".." {
        Some("part names must not refer to the current or parent directory")
    } else if name.contains(['/', '\\']) {
        Some("part names must not contain path separators")
    } else {
        None
    };

    reason.map_or(Ok(()), |r| Err(invalid_parameter("parts", &name, &r)))
}
