//! Hierarchy parsing: processed catalog JSON into validated [`CatalogNode`]s.
//!
//! Depth fixes the entity kind (root, level, program, specialization). A
//! node's child collection is named by its `subentityKey` or, failing that,
//! by the default for its depth. An explicitly named collection must exist;
//! a missing default collection simply means the branch has no children.

use coursegraph_core::constants::{ALL_COURSES_SLUG, ALL_COURSES_TITLE};
use coursegraph_core::errors::HierarchyError;
use coursegraph_core::types::catalog::RESERVED_NODE_FIELDS;
use coursegraph_core::types::{CatalogNode, EntityKind};
use serde_json::{Map, Value};

/// Parse and validate the whole hierarchy, starting at the root object.
pub fn parse_hierarchy(value: &Value) -> Result<CatalogNode, HierarchyError> {
    let root = value.as_object().ok_or_else(|| HierarchyError::InvalidField {
        node: EntityKind::Root.to_string(),
        field: "hierarchy".to_string(),
    })?;
    parse_node(root, EntityKind::Root, &[], EntityKind::Root.as_str())
}

fn parse_node(
    obj: &Map<String, Value>,
    kind: EntityKind,
    parent_path: &[String],
    location: &str,
) -> Result<CatalogNode, HierarchyError> {
    if let Some(found) = obj.get("entity") {
        let found = found.as_str().ok_or_else(|| invalid(location, "entity"))?;
        if EntityKind::from_str_name(found) != Some(kind) {
            return Err(HierarchyError::EntityMismatch {
                node: location.to_string(),
                expected: kind.to_string(),
                found: found.to_string(),
            });
        }
    }

    let (slug, title) = match kind {
        EntityKind::Root => (
            optional_str(obj, "slug", location)?.unwrap_or(ALL_COURSES_SLUG).to_string(),
            optional_str(obj, "title", location)?.unwrap_or(ALL_COURSES_TITLE).to_string(),
        ),
        _ => (
            required_str(obj, "slug", location)?.to_string(),
            required_str(obj, "title", location)?.to_string(),
        ),
    };

    let mut path = parent_path.to_vec();
    if kind != EntityKind::Root {
        path.push(slug.clone());
    }
    let node_name = if path.is_empty() { location.to_string() } else { path.join("/") };

    let courses = match obj.get("courses") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid(&node_name, "courses"))?,
        ),
        Some(_) => return Err(invalid(&node_name, "courses")),
    };

    let nav_id = match obj.get("navId") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => return Err(invalid(&node_name, "navId")),
    };

    let (collection, explicit) = match obj.get("subentityKey") {
        // The collection is emitted beside the fixed record fields.
        Some(Value::String(key)) if !RESERVED_NODE_FIELDS.contains(&key.as_str()) => {
            (Some(key.as_str()), true)
        }
        Some(_) => return Err(invalid(&node_name, "subentityKey")),
        None => (kind.default_collection(), false),
    };

    let mut children = Vec::new();
    if let Some(key) = collection {
        match (obj.get(key), kind.child()) {
            (None, _) if explicit => {
                return Err(HierarchyError::MissingChildCollection {
                    node: node_name,
                    key: key.to_string(),
                })
            }
            (None, _) => {}
            (Some(_), None) => return Err(HierarchyError::TooDeep { node: node_name }),
            (Some(Value::Array(items)), Some(child_kind)) => {
                for (i, item) in items.iter().enumerate() {
                    let child = item.as_object().ok_or_else(|| {
                        HierarchyError::InvalidChildCollection {
                            node: node_name.clone(),
                            key: key.to_string(),
                        }
                    })?;
                    let child_location = format!("{node_name}/{key}[{i}]");
                    children.push(parse_node(child, child_kind, &path, &child_location)?);
                }
            }
            (Some(_), Some(_)) => {
                return Err(HierarchyError::InvalidChildCollection {
                    node: node_name,
                    key: key.to_string(),
                })
            }
        }
    }

    if kind != EntityKind::Root && children.is_empty() && courses.is_none() {
        return Err(HierarchyError::MissingCourseSubset { node: node_name });
    }

    let metadata = obj
        .iter()
        .filter(|(field, value)| {
            !RESERVED_NODE_FIELDS.contains(&field.as_str())
                && Some(field.as_str()) != collection
                && !value.is_array()
                && !value.is_object()
        })
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect();

    Ok(CatalogNode {
        entity: kind,
        path,
        slug,
        title,
        courses,
        subentity_key: collection
            .filter(|_| !children.is_empty())
            .map(str::to_string),
        children,
        nav_id,
        metadata,
    })
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    location: &str,
) -> Result<&'a str, HierarchyError> {
    optional_str(obj, field, location)?.ok_or_else(|| HierarchyError::MissingField {
        node: location.to_string(),
        field,
    })
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    location: &str,
) -> Result<Option<&'a str>, HierarchyError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid(location, field)),
    }
}

fn invalid(node: &str, field: &str) -> HierarchyError {
    HierarchyError::InvalidField {
        node: node.to_string(),
        field: field.to_string(),
    }
}
