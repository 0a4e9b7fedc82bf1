//! Materialized view records: one per hierarchy node.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::catalog::EntityKind;
use super::course::MinimalCourse;
use super::link::Link;

/// How a boundary course relates to a node's subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    /// Source of a link terminating inside the subset.
    Incoming,
    /// Target of a link starting inside the subset.
    Outgoing,
    /// Both at once. Exclusive of the other two.
    IncomingOutgoing,
}

impl Relation {
    pub fn is_incoming(self) -> bool {
        matches!(self, Self::Incoming | Self::IncomingOutgoing)
    }

    pub fn is_outgoing(self) -> bool {
        matches!(self, Self::Outgoing | Self::IncomingOutgoing)
    }
}

/// A course as listed in a view, tagged with its position relative to the
/// subset. Subset members carry no relation and both flags unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewCourse {
    #[serde(flatten)]
    pub course: MinimalCourse,
    pub incoming_neighbor: bool,
    pub outgoing_neighbor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl ViewCourse {
    pub fn member(course: MinimalCourse) -> Self {
        Self {
            course,
            incoming_neighbor: false,
            outgoing_neighbor: false,
            relation: None,
        }
    }

    pub fn neighbor(course: MinimalCourse, relation: Relation) -> Self {
        Self {
            course,
            incoming_neighbor: relation.is_incoming(),
            outgoing_neighbor: relation.is_outgoing(),
            relation: Some(relation),
        }
    }

    pub fn slug(&self) -> &str {
        &self.course.slug
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodNodes {
    pub subgraph: Vec<ViewCourse>,
    pub incoming: Vec<ViewCourse>,
    pub outgoing: Vec<ViewCourse>,
    pub incoming_outgoing: Vec<ViewCourse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodLinks {
    pub subgraph: Vec<Link>,
    pub incoming: Vec<Link>,
    pub outgoing: Vec<Link>,
}

/// The induced subgraph of a subset plus its classified one-hop boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodView {
    pub nodes: NeighborhoodNodes,
    pub links: NeighborhoodLinks,
}

impl NeighborhoodView {
    /// Number of distinct boundary courses across the three buckets.
    pub fn boundary_len(&self) -> usize {
        self.nodes.incoming.len() + self.nodes.outgoing.len() + self.nodes.incoming_outgoing.len()
    }
}

/// Sorted distinct values per filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterFacets {
    pub section: Vec<String>,
    pub semester: Vec<String>,
    pub credits: Vec<u32>,
    pub language: Vec<String>,
    pub exam_form: Vec<String>,
}

/// A direct child as listed in its parent's view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildSummary {
    pub entity: EntityKind,
    pub slug: String,
    pub title: String,
    pub course_count: usize,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// The record persisted for one hierarchy node.
///
/// Serialized by hand: the child list is emitted under the node's
/// collection name, and only when `subentity_key` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRecord {
    pub entity: EntityKind,
    pub subentity_key: Option<String>,
    pub title: String,
    pub slug: String,
    pub nav_id: Option<String>,
    pub metadata: Map<String, Value>,
    pub children: Vec<ChildSummary>,
    pub graph: NeighborhoodView,
    pub filter_options: FilterFacets,
}

impl Serialize for ViewRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("entity", &self.entity)?;
        if let Some(key) = &self.subentity_key {
            map.serialize_entry("subentityKey", key)?;
        }
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("slug", &self.slug)?;
        if let Some(nav_id) = &self.nav_id {
            map.serialize_entry("navId", nav_id)?;
        }
        for (field, value) in &self.metadata {
            map.serialize_entry(field, value)?;
        }
        if let Some(key) = &self.subentity_key {
            map.serialize_entry(key, &self.children)?;
        }
        map.serialize_entry("graph", &self.graph)?;
        map.serialize_entry("filterOptions", &self.filter_options)?;
        map.end()
    }
}
