//! The catalog hierarchy: root → levels → programs → specializations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The role of a hierarchy node, fixed by its depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Root,
    Level,
    Program,
    Specialization,
}

impl EntityKind {
    /// Kind of the nodes in this kind's child collection, if any.
    pub fn child(self) -> Option<EntityKind> {
        match self {
            Self::Root => Some(Self::Level),
            Self::Level => Some(Self::Program),
            Self::Program => Some(Self::Specialization),
            Self::Specialization => None,
        }
    }

    /// Name of the child collection when a node does not set one explicitly.
    pub fn default_collection(self) -> Option<&'static str> {
        match self {
            Self::Root => Some("levels"),
            Self::Level => Some("programs"),
            Self::Program => Some("specializations"),
            Self::Specialization => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Level => "level",
            Self::Program => "program",
            Self::Specialization => "specialization",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "root" => Some(Self::Root),
            "level" => Some(Self::Level),
            "program" => Some(Self::Program),
            "specialization" => Some(Self::Specialization),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated node of the catalog hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogNode {
    pub entity: EntityKind,
    /// Slugs from the first level down to this node. Empty for the root.
    pub path: Vec<String>,
    pub slug: String,
    pub title: String,
    /// Explicitly assigned course identifiers, in the order given.
    pub courses: Option<Vec<String>>,
    /// Name of the child collection (`levels`, `programs`, `specializations`).
    pub subentity_key: Option<String>,
    pub children: Vec<CatalogNode>,
    /// Opaque reference into an externally supplied presentation tree.
    pub nav_id: Option<String>,
    /// Remaining node fields, passed through to the view record.
    pub metadata: Map<String, Value>,
}

impl CatalogNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Human-readable location used in diagnostics.
    pub fn display_path(&self) -> String {
        if self.path.is_empty() {
            self.slug.clone()
        } else {
            self.path.join("/")
        }
    }
}

/// Node fields with a fixed meaning; never treated as pass-through metadata.
pub const RESERVED_NODE_FIELDS: &[&str] = &[
    "entity",
    "subentityKey",
    "title",
    "slug",
    "navId",
    "courses",
    "graph",
    "filterOptions",
    "courseCount",
];
