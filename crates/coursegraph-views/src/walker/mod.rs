//! CatalogWalker: one view record per hierarchy node.
//!
//! Planning is sequential (pre-order, subset derivation, key construction,
//! duplicate detection); resolution of the planned nodes runs on the rayon
//! pool and keeps plan order in its output.

pub mod plan;
pub mod record;

use coursegraph_core::errors::{FacetError, PipelineError};
use coursegraph_core::types::{CatalogNode, ViewRecord};
use coursegraph_storage::KeyScheme;
use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::index::{CourseIndex, LinkIndex};
pub use plan::PlannedNode;

pub struct CatalogWalker<'a> {
    courses: &'a CourseIndex,
    links: &'a LinkIndex,
    keys: &'a KeyScheme,
}

impl<'a> CatalogWalker<'a> {
    pub fn new(courses: &'a CourseIndex, links: &'a LinkIndex, keys: &'a KeyScheme) -> Self {
        Self {
            courses,
            links,
            keys,
        }
    }

    /// Flatten the hierarchy into pre-order with keys and subsets resolved.
    pub fn plan<'n>(&self, root: &'n CatalogNode) -> Result<Vec<PlannedNode<'n>>, PipelineError> {
        plan::plan(root, self.keys, self.courses)
    }

    /// Produce `(key, record)` for every node, root first, in pre-order.
    ///
    /// Fails before returning anything if any node fails; the first failure
    /// in plan order is reported.
    pub fn walk(&self, root: &CatalogNode) -> Result<Vec<(String, ViewRecord)>, PipelineError> {
        let span = info_span!("coursegraph.walk", root = %root.slug);
        let _guard = span.enter();

        let plan = self.plan(root)?;
        debug!(nodes = plan.len(), "hierarchy planned");

        let results: Vec<Result<(String, ViewRecord), FacetError>> = plan
            .par_iter()
            .map(|planned| {
                let record = record::assemble(planned, &plan, self.courses, self.links)?;
                debug!(
                    key = %planned.key,
                    subset = planned.subset.len(),
                    incoming = record.graph.nodes.incoming.len(),
                    outgoing = record.graph.nodes.outgoing.len(),
                    incoming_outgoing = record.graph.nodes.incoming_outgoing.len(),
                    "node resolved"
                );
                Ok((planned.key.clone(), record))
            })
            .collect();

        results
            .into_iter()
            .map(|result| result.map_err(PipelineError::from))
            .collect()
    }
}
