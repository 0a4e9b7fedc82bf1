//! Sequential walk planning.

use coursegraph_core::errors::{HierarchyError, PipelineError};
use coursegraph_core::types::{CatalogNode, EntityKind, FxHashSet};
use coursegraph_storage::KeyScheme;

use crate::index::CourseIndex;
use crate::neighborhood::Subset;

/// A hierarchy node ready for resolution.
#[derive(Debug, Clone)]
pub struct PlannedNode<'n> {
    pub key: String,
    pub node: &'n CatalogNode,
    pub subset: Subset,
    /// Plan positions of the direct children, in hierarchy order.
    pub children: Vec<usize>,
}

/// Pre-order plan of the whole hierarchy.
///
/// Subsets: the root covers every course in index order; a node with an
/// explicit course list uses it as given (repeats dropped); any other node
/// takes the union of its children in child order.
pub fn plan<'n>(
    root: &'n CatalogNode,
    keys: &KeyScheme,
    courses: &CourseIndex,
) -> Result<Vec<PlannedNode<'n>>, PipelineError> {
    let mut planned = Vec::new();
    plan_node(root, keys, courses, &mut planned)?;

    let mut seen = FxHashSet::default();
    for node in &planned {
        if !seen.insert(node.key.as_str()) {
            return Err(HierarchyError::DuplicateKey {
                key: node.key.clone(),
            }
            .into());
        }
    }
    Ok(planned)
}

fn plan_node<'n>(
    node: &'n CatalogNode,
    keys: &KeyScheme,
    courses: &CourseIndex,
    planned: &mut Vec<PlannedNode<'n>>,
) -> Result<usize, PipelineError> {
    let slot = planned.len();
    planned.push(PlannedNode {
        key: keys.view_key(node.path.as_slice())?,
        node,
        subset: Subset::default(),
        children: Vec::with_capacity(node.children.len()),
    });

    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        children.push(plan_node(child, keys, courses, planned)?);
    }

    let subset = match (node.entity, &node.courses) {
        (EntityKind::Root, _) => Subset::all(courses),
        (_, Some(slugs)) => Subset::from_slugs(slugs.iter().map(String::as_str), courses)
            .map_err(|course| HierarchyError::UnknownCourse {
                node: node.display_path(),
                course,
            })?,
        (_, None) => Subset::union(children.iter().map(|&i| &planned[i].subset)),
    };

    planned[slot].subset = subset;
    planned[slot].children = children;
    Ok(slot)
}
