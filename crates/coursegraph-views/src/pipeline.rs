//! End-to-end materialization run.

use coursegraph_core::config::CourseGraphConfig;
use coursegraph_core::errors::{LinkError, PipelineError, StorageError};
use coursegraph_core::traits::ViewStore;
use coursegraph_storage::KeyScheme;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::index::{CourseIndex, LinkIndex};
use crate::input::CatalogInput;
use crate::walker::CatalogWalker;

/// Summary of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub views_written: usize,
    pub courses_written: usize,
    pub links_kept: usize,
    pub links_dropped: usize,
    pub nav_written: bool,
    /// Links excluded for referencing unknown courses.
    pub dropped: Vec<LinkError>,
}

impl MaterializeReport {
    pub fn entries_written(&self) -> usize {
        self.views_written + self.courses_written + usize::from(self.nav_written)
    }
}

pub struct Materializer {
    keys: KeyScheme,
}

impl Materializer {
    /// `threads > 0` sizes the global rayon pool; the first caller wins.
    pub fn new(keys: KeyScheme, threads: usize) -> Self {
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }
        Self { keys }
    }

    pub fn from_config(config: &CourseGraphConfig) -> Result<Self, PipelineError> {
        let keys = KeyScheme::from_config(&config.store)?;
        Ok(Self::new(keys, config.materialize.effective_threads()))
    }

    pub fn keys(&self) -> &KeyScheme {
        &self.keys
    }

    /// Compute every serialized entry of a run without touching a store.
    ///
    /// Order: hierarchy views in pre-order, then course records in input
    /// order, then the navigation payload.
    pub fn prepare(
        &self,
        input: CatalogInput,
    ) -> Result<(Vec<(String, String)>, MaterializeReport), PipelineError> {
        let courses = CourseIndex::build(input.courses)?;
        let linked = LinkIndex::build(input.links, &courses);
        let links = linked.data;

        let mut report = MaterializeReport {
            links_kept: links.len(),
            links_dropped: linked.errors.len(),
            dropped: linked.errors,
            ..Default::default()
        };

        let views = CatalogWalker::new(&courses, &links, &self.keys).walk(&input.hierarchy)?;
        let mut entries = Vec::with_capacity(views.len() + courses.len() + 1);
        for (key, record) in &views {
            entries.push((key.clone(), encode(key, record)?));
        }
        report.views_written = views.len();

        for course in courses.courses() {
            let key = self.keys.course_key(&course.slug)?;
            let value = encode(&key, course)?;
            entries.push((key, value));
        }
        report.courses_written = courses.len();

        if let Some(nav) = &input.nav {
            let key = self.keys.nav_key().to_string();
            let value = encode(&key, nav)?;
            entries.push((key, value));
            report.nav_written = true;
        }

        Ok((entries, report))
    }

    /// Materialize every view and write the whole set in one batch.
    ///
    /// Nothing is written unless every record was computed and serialized.
    pub fn run(
        &self,
        input: CatalogInput,
        store: &dyn ViewStore,
    ) -> Result<MaterializeReport, PipelineError> {
        let span = info_span!("coursegraph.materialize", namespace = %self.keys.namespace());
        let _guard = span.enter();

        let (entries, report) = self.prepare(input)?;
        debug!(entries = entries.len(), "records prepared");
        let written = store.put_batch(&entries)?;

        info!(
            written,
            views = report.views_written,
            courses = report.courses_written,
            links_kept = report.links_kept,
            links_dropped = report.links_dropped,
            "materialization complete"
        );
        Ok(report)
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })
}
