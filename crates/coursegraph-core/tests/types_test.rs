//! Serialized shape of the record types.

use serde_json::{json, Map, Value};

use coursegraph_core::types::{
    ChildSummary, Course, EntityKind, FilterFacets, Link, NeighborhoodView, Relation, ViewCourse,
    ViewRecord,
};

fn course_json() -> Value {
    json!({
        "slug": "cs-101",
        "code": "CS-101",
        "name": "Introduction to programming",
        "section": "IN",
        "semester": "Fall",
        "credits": 6,
        "language": "English",
        "examForm": "Written",
        "lecturers": [{ "name": "Ada Lovelace", "sciper": "100001" }],
        "summary": "Variables, loops and functions.",
        "requiredCourses": [],
        "levels": [{ "slug": "bachelor" }]
    })
}

#[test]
fn test_course_round_trips_verbatim() {
    let original = course_json();
    let course: Course = serde_json::from_value(original.clone()).unwrap();

    assert_eq!(course.exam_form.as_deref(), Some("Written"));
    assert_eq!(course.credits, Some(6));
    assert_eq!(course.lecturers[0].name, "Ada Lovelace");
    assert!(course.extra.contains_key("summary"));

    let reserialized = serde_json::to_value(&course).unwrap();
    assert_eq!(reserialized, original);
}

#[test]
fn test_course_missing_facet_fields_still_parses() {
    let course: Course = serde_json::from_value(json!({
        "slug": "cs-999",
        "code": "CS-999",
        "name": "Seminar"
    }))
    .unwrap();
    assert!(course.section.is_none());
    assert!(course.credits.is_none());
    assert!(course.lecturers.is_empty());
}

#[test]
fn test_minimal_projection() {
    let course: Course = serde_json::from_value(course_json()).unwrap();
    let minimal = serde_json::to_value(course.minimal()).unwrap();
    assert_eq!(
        minimal,
        json!({
            "slug": "cs-101",
            "code": "CS-101",
            "name": "Introduction to programming",
            "section": "IN",
            "semester": "Fall",
            "credits": 6
        })
    );
}

#[test]
fn test_view_course_flags_follow_relation() {
    let course: Course = serde_json::from_value(course_json()).unwrap();

    let both = ViewCourse::neighbor(course.minimal(), Relation::IncomingOutgoing);
    let value = serde_json::to_value(&both).unwrap();
    assert_eq!(value["incomingNeighbor"], json!(true));
    assert_eq!(value["outgoingNeighbor"], json!(true));
    assert_eq!(value["relation"], json!("incomingOutgoing"));
    assert_eq!(value["slug"], json!("cs-101"));

    let member = ViewCourse::member(course.minimal());
    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value["incomingNeighbor"], json!(false));
    assert!(value.get("relation").is_none());
}

#[test]
fn test_neighborhood_view_shape() {
    let mut view = NeighborhoodView::default();
    view.links.incoming.push(Link::new("a", "b"));

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value,
        json!({
            "nodes": { "subgraph": [], "incoming": [], "outgoing": [], "incomingOutgoing": [] },
            "links": { "subgraph": [], "incoming": [{ "source": "a", "target": "b" }], "outgoing": [] }
        })
    );
}

fn record(subentity_key: Option<&str>, children: Vec<ChildSummary>) -> ViewRecord {
    let mut metadata = Map::new();
    metadata.insert("value".to_string(), json!("SP-1"));
    ViewRecord {
        entity: EntityKind::Program,
        subentity_key: subentity_key.map(str::to_string),
        title: "Computer Science".to_string(),
        slug: "computer-science".to_string(),
        nav_id: Some("master-computer-science".to_string()),
        metadata,
        children,
        graph: NeighborhoodView::default(),
        filter_options: FilterFacets::default(),
    }
}

#[test]
fn test_view_record_emits_child_collection_under_its_name() {
    let child = ChildSummary {
        entity: EntityKind::Specialization,
        slug: "foundations".to_string(),
        title: "Foundations".to_string(),
        course_count: 3,
        metadata: Map::new(),
    };
    let value = serde_json::to_value(record(Some("specializations"), vec![child])).unwrap();

    assert_eq!(value["entity"], json!("program"));
    assert_eq!(value["subentityKey"], json!("specializations"));
    assert_eq!(value["navId"], json!("master-computer-science"));
    assert_eq!(value["value"], json!("SP-1"));
    assert_eq!(value["specializations"][0]["slug"], json!("foundations"));
    assert_eq!(value["specializations"][0]["courseCount"], json!(3));
    assert_eq!(
        value["filterOptions"],
        json!({ "section": [], "semester": [], "credits": [], "language": [], "examForm": [] })
    );
}

#[test]
fn test_view_record_omits_subentity_key_without_children() {
    let value = serde_json::to_value(record(None, Vec::new())).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("subentityKey"));
    assert!(!object.contains_key("specializations"));
    assert!(object.contains_key("graph"));
}

#[test]
fn test_entity_kind_hierarchy() {
    assert_eq!(EntityKind::Root.child(), Some(EntityKind::Level));
    assert_eq!(EntityKind::Program.default_collection(), Some("specializations"));
    assert_eq!(EntityKind::Specialization.child(), None);
    assert_eq!(EntityKind::from_str_name("level"), Some(EntityKind::Level));
    assert_eq!(EntityKind::from_str_name("campus"), None);
    assert_eq!(EntityKind::Specialization.to_string(), "specialization");
}
