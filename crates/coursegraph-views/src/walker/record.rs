//! View record assembly for one planned node.

use coursegraph_core::errors::FacetError;
use coursegraph_core::types::{ChildSummary, ViewRecord};

use super::PlannedNode;
use crate::facets::build_facets;
use crate::index::{CourseIndex, LinkIndex};
use crate::neighborhood::resolve;

pub(crate) fn assemble(
    planned: &PlannedNode<'_>,
    plan: &[PlannedNode<'_>],
    courses: &CourseIndex,
    links: &LinkIndex,
) -> Result<ViewRecord, FacetError> {
    let node = planned.node;
    let graph = resolve(&planned.subset, links, courses);
    let filter_options = build_facets(
        planned
            .subset
            .members()
            .iter()
            .map(|&pos| courses.course_at(pos)),
    )?;

    // Children are listed without their own children or course lists.
    let children = planned
        .children
        .iter()
        .map(|&i| {
            let child = &plan[i];
            ChildSummary {
                entity: child.node.entity,
                slug: child.node.slug.clone(),
                title: child.node.title.clone(),
                course_count: child.subset.len(),
                metadata: child.node.metadata.clone(),
            }
        })
        .collect();

    Ok(ViewRecord {
        entity: node.entity,
        subentity_key: node.subentity_key.clone(),
        title: node.title.clone(),
        slug: node.slug.clone(),
        nav_id: node.nav_id.clone(),
        metadata: node.metadata.clone(),
        children,
        graph,
        filter_options,
    })
}
