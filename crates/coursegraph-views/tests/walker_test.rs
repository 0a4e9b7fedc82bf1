//! Hierarchy walk over the shared catalog fixture.

use coursegraph_core::types::{EntityKind, Link, Relation, ViewCourse, ViewRecord};
use coursegraph_storage::KeyScheme;
use coursegraph_views::{load_inputs, CatalogWalker, CourseIndex, LinkIndex};
use serde_json::json;

fn walk_fixture() -> Vec<(String, ViewRecord)> {
    let input = load_inputs(&test_fixtures::catalog_input_config(false)).unwrap();
    let courses = CourseIndex::build(input.courses).unwrap();
    let links = LinkIndex::build(input.links, &courses).data;
    let keys = KeyScheme::new("epfl", "course", "nav").unwrap();
    CatalogWalker::new(&courses, &links, &keys)
        .walk(&input.hierarchy)
        .unwrap()
}

fn view<'a>(views: &'a [(String, ViewRecord)], key: &str) -> &'a ViewRecord {
    views
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, record)| record)
        .unwrap_or_else(|| panic!("no view {key}"))
}

fn slugs(entries: &[ViewCourse]) -> Vec<&str> {
    entries.iter().map(ViewCourse::slug).collect()
}

#[test]
fn test_keys_in_pre_order() {
    let views = walk_fixture();
    let keys: Vec<&str> = views.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "epfl",
            "epfl_bachelor",
            "epfl_bachelor_computer-science",
            "epfl_bachelor_mathematics",
            "epfl_master",
            "epfl_master_computer-science",
            "epfl_master_computer-science_foundations",
            "epfl_master_computer-science_empty-track",
        ]
    );
}

#[test]
fn test_root_covers_catalog_without_boundary() {
    let views = walk_fixture();
    let root = view(&views, "epfl");
    assert_eq!(root.entity, EntityKind::Root);
    assert_eq!(root.title, "All courses");
    assert_eq!(root.slug, "all-courses");
    assert_eq!(root.graph.nodes.subgraph.len(), 9);
    assert_eq!(root.graph.links.subgraph.len(), 10);
    assert_eq!(root.graph.boundary_len(), 0);
    assert!(root.graph.links.incoming.is_empty());
    assert!(root.graph.links.outgoing.is_empty());
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].course_count, 5);
    assert_eq!(root.children[1].course_count, 3);
}

#[test]
fn test_program_with_outgoing_boundary() {
    let views = walk_fixture();
    let cs = view(&views, "epfl_bachelor_computer-science");
    assert_eq!(cs.entity, EntityKind::Program);
    assert!(cs.subentity_key.is_none());
    assert!(cs.children.is_empty());
    assert_eq!(slugs(&cs.graph.nodes.subgraph), vec!["cs-101", "cs-102", "math-101"]);
    assert!(cs.graph.nodes.incoming.is_empty());
    assert_eq!(slugs(&cs.graph.nodes.outgoing), vec!["math-201", "cs-450"]);
    assert_eq!(
        cs.graph.links.subgraph,
        vec![Link::new("cs-101", "cs-102"), Link::new("math-101", "cs-102")]
    );
}

#[test]
fn test_course_on_both_sides_lands_in_incoming_outgoing() {
    let views = walk_fixture();
    let math = view(&views, "epfl_bachelor_mathematics");
    assert!(math.graph.nodes.incoming.is_empty());
    assert_eq!(slugs(&math.graph.nodes.outgoing), vec!["cs-102", "ee-300"]);
    assert_eq!(slugs(&math.graph.nodes.incoming_outgoing), vec!["cs-460"]);

    let both = &math.graph.nodes.incoming_outgoing[0];
    assert!(both.incoming_neighbor && both.outgoing_neighbor);
    assert_eq!(both.relation, Some(Relation::IncomingOutgoing));

    assert_eq!(math.graph.links.incoming, vec![Link::new("cs-460", "phys-101")]);
    assert_eq!(
        math.graph.links.outgoing,
        vec![
            Link::new("math-101", "cs-102"),
            Link::new("math-201", "cs-460"),
            Link::new("phys-101", "ee-300"),
        ]
    );
}

#[test]
fn test_level_takes_union_of_programs() {
    let views = walk_fixture();
    let bachelor = view(&views, "epfl_bachelor");
    assert_eq!(
        slugs(&bachelor.graph.nodes.subgraph),
        vec!["cs-101", "cs-102", "math-101", "math-201", "phys-101"]
    );
    assert_eq!(bachelor.subentity_key.as_deref(), Some("programs"));
    assert_eq!(bachelor.children.len(), 2);
    assert_eq!(bachelor.children[0].course_count, 3);
}

#[test]
fn test_mutual_prerequisites_stay_inside_specialization() {
    let views = walk_fixture();
    let foundations = view(&views, "epfl_master_computer-science_foundations");
    assert_eq!(foundations.entity, EntityKind::Specialization);
    assert_eq!(
        foundations.graph.links.subgraph,
        vec![Link::new("cs-450", "cs-451"), Link::new("cs-451", "cs-450")]
    );
    assert_eq!(slugs(&foundations.graph.nodes.incoming), vec!["cs-102"]);
    assert!(foundations.graph.nodes.outgoing.is_empty());
    assert_eq!(foundations.metadata.get("value"), Some(&json!("F")));
}

#[test]
fn test_empty_specialization_yields_empty_view() {
    let views = walk_fixture();
    let empty = view(&views, "epfl_master_computer-science_empty-track");
    assert!(empty.graph.nodes.subgraph.is_empty());
    assert_eq!(empty.graph.boundary_len(), 0);
    assert!(empty.filter_options.section.is_empty());
    assert!(empty.filter_options.credits.is_empty());
}

#[test]
fn test_program_facets() {
    let views = walk_fixture();
    let cs = view(&views, "epfl_master_computer-science");
    assert_eq!(cs.filter_options.section, vec!["IN", "SC"]);
    assert_eq!(cs.filter_options.semester, vec!["Fall", "Spring"]);
    assert_eq!(cs.filter_options.credits, vec![4, 6]);
    assert_eq!(cs.filter_options.language, vec!["English"]);
    assert_eq!(cs.filter_options.exam_form, vec!["During the semester", "Oral"]);
    assert_eq!(cs.nav_id.as_deref(), Some("master-computer-science"));
    assert_eq!(slugs(&cs.graph.nodes.incoming), vec!["cs-102", "math-201"]);
    assert_eq!(slugs(&cs.graph.nodes.outgoing), vec!["phys-101", "ee-300"]);
}

#[test]
fn test_serialized_program_lists_children_under_collection() {
    let views = walk_fixture();
    let value = serde_json::to_value(view(&views, "epfl_master_computer-science")).unwrap();
    assert_eq!(value["subentityKey"], json!("specializations"));
    let children = value["specializations"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(
        children[0],
        json!({
            "entity": "specialization",
            "slug": "foundations",
            "title": "Foundations of Software",
            "courseCount": 2,
            "value": "F"
        })
    );
    assert!(value["graph"]["nodes"]["incomingOutgoing"].is_array());
    assert!(value["filterOptions"]["examForm"].is_array());
}
