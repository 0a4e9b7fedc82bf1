//! NeighborhoodResolver.

use std::collections::BTreeSet;

use coursegraph_core::types::{FxHashSet, NeighborhoodView, Relation, ViewCourse};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::{Boundary, Subset};
use crate::index::{CourseIndex, LinkIndex};

/// Resolve the neighborhood of `subset`.
///
/// Links touching the subset are split into `subgraph` (both endpoints
/// inside), `incoming` (only the target inside) and `outgoing` (only the
/// source inside), in link-index order. Boundary courses are the outside
/// endpoints of the latter two, classified by [`Boundary::classify`] and
/// listed in course-index order. Subgraph courses follow the subset's own
/// order and include members without any link.
///
/// Pure and deterministic: same inputs, same output.
pub fn resolve(subset: &Subset, links: &LinkIndex, courses: &CourseIndex) -> NeighborhoodView {
    let graph = links.graph();

    // Edge indices are insertion order, so the ordered set doubles as a
    // deduplicated, input-ordered list of touching links.
    let mut touching: BTreeSet<EdgeIndex> = BTreeSet::new();
    for &pos in subset.members() {
        let node = NodeIndex::new(pos);
        touching.extend(graph.edges_directed(node, Direction::Incoming).map(|e| e.id()));
        touching.extend(graph.edges_directed(node, Direction::Outgoing).map(|e| e.id()));
    }

    let mut view = NeighborhoodView::default();
    let mut incoming_ids = FxHashSet::default();
    let mut outgoing_ids = FxHashSet::default();

    for edge in touching {
        let (source, target) = links.endpoints(edge);
        let link = links.link(edge).clone();
        match (subset.contains(source), subset.contains(target)) {
            (true, true) => view.links.subgraph.push(link),
            (false, true) => {
                incoming_ids.insert(source);
                view.links.incoming.push(link);
            }
            (true, false) => {
                outgoing_ids.insert(target);
                view.links.outgoing.push(link);
            }
            // Every collected edge has a member endpoint.
            (false, false) => {}
        }
    }

    let boundary = Boundary::classify(&incoming_ids, &outgoing_ids);
    for (pos, relation) in boundary.tagged() {
        let entry = ViewCourse::neighbor(courses.minimal_at(pos).clone(), relation);
        match relation {
            Relation::Incoming => view.nodes.incoming.push(entry),
            Relation::Outgoing => view.nodes.outgoing.push(entry),
            Relation::IncomingOutgoing => {
                view.nodes.incoming_outgoing.push(entry)
            }
        }
    }

    view.nodes.subgraph = subset
        .members()
        .iter()
        .map(|&pos| ViewCourse::member(courses.minimal_at(pos).clone()))
        .collect();

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegraph_core::types::{Course, Link};

    fn catalog(slugs: &[&str], links: &[(&str, &str)]) -> (CourseIndex, LinkIndex) {
        let courses = CourseIndex::build(
            slugs
                .iter()
                .map(|slug| {
                    serde_json::from_value::<Course>(serde_json::json!({
                        "slug": slug, "code": slug, "name": slug
                    }))
                    .unwrap()
                })
                .collect(),
        )
        .unwrap();
        let links = LinkIndex::build(
            links.iter().map(|(s, t)| Link::new(*s, *t)).collect(),
            &courses,
        )
        .data;
        (courses, links)
    }

    fn slugs(entries: &[ViewCourse]) -> Vec<&str> {
        entries.iter().map(ViewCourse::slug).collect()
    }

    #[test]
    fn single_member_with_two_prerequisites() {
        let (courses, links) = catalog(&["a", "b", "c"], &[("a", "b"), ("c", "b")]);
        let subset = Subset::from_slugs(["b"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);

        assert_eq!(slugs(&view.nodes.incoming), vec!["a", "c"]);
        assert!(view.nodes.outgoing.is_empty());
        assert!(view.nodes.incoming_outgoing.is_empty());
        assert!(view.links.subgraph.is_empty());
        assert_eq!(view.links.incoming.len(), 2);
        assert!(view.nodes.incoming.iter().all(|c| c.incoming_neighbor && !c.outgoing_neighbor));
    }

    #[test]
    fn course_on_both_sides_is_exclusive() {
        // x -> m -> x: x is both a prerequisite and a dependent of m.
        let (courses, links) = catalog(&["m", "x", "y"], &[("x", "m"), ("m", "x"), ("m", "y")]);
        let subset = Subset::from_slugs(["m"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);

        assert!(view.nodes.incoming.is_empty());
        assert_eq!(slugs(&view.nodes.outgoing), vec!["y"]);
        assert_eq!(slugs(&view.nodes.incoming_outgoing), vec!["x"]);
        assert_eq!(view.nodes.incoming_outgoing[0].relation, Some(Relation::IncomingOutgoing));
        assert_eq!(view.links.incoming, vec![Link::new("x", "m")]);
        assert_eq!(view.links.outgoing, vec![Link::new("m", "x"), Link::new("m", "y")]);
    }

    #[test]
    fn mutual_pair_outside_unrelated_subset_is_ignored() {
        let (courses, links) = catalog(&["a", "b", "c"], &[("a", "b"), ("b", "a")]);
        let subset = Subset::from_slugs(["c"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);

        assert_eq!(slugs(&view.nodes.subgraph), vec!["c"]);
        assert!(view.nodes.incoming.is_empty());
        assert!(view.nodes.outgoing.is_empty());
        assert!(view.nodes.incoming_outgoing.is_empty());
        assert!(view.links.subgraph.is_empty());
        assert!(view.links.incoming.is_empty());
        assert!(view.links.outgoing.is_empty());
    }

    #[test]
    fn members_are_never_boundary() {
        let (courses, links) = catalog(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let subset = Subset::from_slugs(["a", "b"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);

        assert_eq!(view.links.subgraph, vec![Link::new("a", "b")]);
        assert_eq!(slugs(&view.nodes.incoming_outgoing), vec!["c"]);
        assert_eq!(slugs(&view.nodes.subgraph), vec!["a", "b"]);
    }

    #[test]
    fn subgraph_keeps_caller_order_and_isolated_members() {
        let (courses, links) = catalog(&["a", "b", "lonely"], &[("a", "b")]);
        let subset = Subset::from_slugs(["lonely", "b", "a"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);

        assert_eq!(slugs(&view.nodes.subgraph), vec!["lonely", "b", "a"]);
        assert_eq!(view.links.subgraph, vec![Link::new("a", "b")]);
        assert_eq!(view.boundary_len(), 0);
    }

    #[test]
    fn self_loop_stays_in_subgraph() {
        let (courses, links) = catalog(&["a"], &[("a", "a")]);
        let subset = Subset::from_slugs(["a"], &courses).unwrap();
        let view = resolve(&subset, &links, &courses);
        assert_eq!(view.links.subgraph, vec![Link::new("a", "a")]);
        assert_eq!(view.boundary_len(), 0);
    }
}
