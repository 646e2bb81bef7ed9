//! Shared query state handed to every tool handler.

use crate::config::Config;
use crate::search::{Annotator, MatchEngine, ReferenceIndex};
use std::sync::Arc;

/// Immutable state shared by all queries.
///
/// Holds the configuration and the engine over the index built at startup.
/// Cloning shares everything; nothing inside is ever mutated.
#[derive(Debug, Clone)]
pub struct ServerContext {
    config: Arc<Config>,
    engine: MatchEngine,
    annotator: Annotator,
}

impl ServerContext {
    pub fn new(config: Config, index: ReferenceIndex) -> Self {
        let engine = MatchEngine::new(Arc::new(index));
        let annotator = Annotator::new(engine.clone(), config.marker, config.thresholds.annotate);
        Self {
            config: Arc::new(config),
            engine,
            annotator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    pub fn index(&self) -> &ReferenceIndex {
        self.engine.index()
    }
}
