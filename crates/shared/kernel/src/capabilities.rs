//! Browser and gateway capability definitions.
//!
//! Capability entries arrive as markup nodes from browser-definition files.
//! A [`BrowserDefinition`] owns all of the parsing; a [`GatewayDefinition`]
//! is the same entry read from a `gateway` element and adds no behavior of
//! its own.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::Deref;
use thiserror::Error;

/// One parsed markup node from a browser-definition file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CapabilityNode {
    /// Element name (`browser`, `gateway`, `capabilities`, `capability`).
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<CapabilityNode>,
}

/// Errors produced while parsing a capability entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("expected a `{expected}` element, found `{found}`")]
    UnexpectedElement { expected: &'static str, found: String },
    #[error("capability entry is missing the required `id` attribute")]
    MissingId,
    #[error("capability id `{0}` must be non-empty and alphanumeric")]
    InvalidId(String),
}

/// A device/browser capability entry parsed from one markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserDefinition {
    pub id: String,
    /// Entry this one inherits capabilities from, if any.
    pub parent_id: Option<String>,
    pub capabilities: BTreeMap<String, String>,
}

impl BrowserDefinition {
    /// Parses a `browser` element.
    ///
    /// # Errors
    /// Returns a [`CapabilityError`] if the element name is wrong, the `id`
    /// attribute is missing, or the id is not alphanumeric.
    pub fn from_node(node: &CapabilityNode) -> Result<Self, CapabilityError> {
        Self::parse(node, "browser")
    }

    fn parse(node: &CapabilityNode, expected: &'static str) -> Result<Self, CapabilityError> {
        if node.name != expected {
            return Err(CapabilityError::UnexpectedElement {
                expected,
                found: node.name.clone(),
            });
        }

        let id = node.attributes.get("id").cloned().ok_or(CapabilityError::MissingId)?;
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CapabilityError::InvalidId(id));
        }

        let parent_id = node.attributes.get("parentID").cloned();

        let mut capabilities = BTreeMap::new();
        for child in &node.children {
            if child.name != "capabilities" {
                continue;
            }
            for cap in &child.children {
                if cap.name != "capability" {
                    continue;
                }
                if let (Some(name), Some(value)) =
                    (cap.attributes.get("name"), cap.attributes.get("value"))
                {
                    capabilities.insert(name.clone(), value.clone());
                }
            }
        }

        Ok(Self { id, parent_id, capabilities })
    }
}

/// A gateway capability entry.
///
/// Construction forwards the node straight to [`BrowserDefinition`] parsing;
/// the wrapper only records that the entry came from a `gateway` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayDefinition(BrowserDefinition);

impl GatewayDefinition {
    /// Parses a `gateway` element.
    ///
    /// # Errors
    /// Propagates the underlying [`BrowserDefinition`] parse errors.
    pub fn from_node(node: &CapabilityNode) -> Result<Self, CapabilityError> {
        BrowserDefinition::parse(node, "gateway").map(Self)
    }

    /// The underlying browser definition.
    #[must_use]
    pub const fn definition(&self) -> &BrowserDefinition {
        &self.0
    }
}

impl Deref for GatewayDefinition {
    type Target = BrowserDefinition;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
