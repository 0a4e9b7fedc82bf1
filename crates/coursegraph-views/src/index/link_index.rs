//! LinkIndex: validated prerequisite edges over the course index.
//!
//! Backed by a petgraph `DiGraph` whose node `i` is the course at position
//! `i` of the [`CourseIndex`]. Edges are only ever appended, so edge indices
//! reproduce the filtered input order.

use coursegraph_core::errors::{LinkError, PipelineResult};
use coursegraph_core::types::Link;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::CourseIndex;

#[derive(Debug, Default)]
pub struct LinkIndex {
    graph: DiGraph<(), Link>,
}

impl LinkIndex {
    /// Keep the links whose endpoints both resolve in `courses`.
    ///
    /// Links with an unresolved endpoint are excluded and reported as
    /// non-fatal [`LinkError::DanglingLinkEndpoint`] entries.
    pub fn build(links: Vec<Link>, courses: &CourseIndex) -> PipelineResult<Self> {
        let mut graph = DiGraph::with_capacity(courses.len(), links.len());
        for _ in 0..courses.len() {
            graph.add_node(());
        }

        let mut result = PipelineResult::new(Self::default());
        for link in links {
            match (courses.position(&link.source), courses.position(&link.target)) {
                (Some(source), Some(target)) => {
                    graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), link);
                }
                (source, _) => {
                    let missing = if source.is_none() {
                        link.source.clone()
                    } else {
                        link.target.clone()
                    };
                    result.add_error(LinkError::DanglingLinkEndpoint {
                        source_id: link.source,
                        target_id: link.target,
                        missing,
                    });
                }
            }
        }

        if !result.is_clean() {
            tracing::debug!(dropped = result.error_count(), "excluded dangling links");
        }
        result.data = Self { graph };
        result
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Retained links in input order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.graph.edge_weights()
    }

    pub fn graph(&self) -> &DiGraph<(), Link> {
        &self.graph
    }

    pub fn link(&self, edge: EdgeIndex) -> &Link {
        &self.graph[edge]
    }

    /// Course positions of the link's (source, target).
    ///
    /// # Panics
    /// Panics if `edge` does not belong to this index.
    pub fn endpoints(&self, edge: EdgeIndex) -> (usize, usize) {
        let edge = &self.graph.raw_edges()[edge.index()];
        (edge.source().index(), edge.target().index())
    }
}
