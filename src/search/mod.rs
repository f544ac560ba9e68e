//! Search pipeline
//!
//! The orchestrator drives one query through normalize, corpus fetch,
//! parallel alignment, scoring/filtering and ranking; `args`/`run` wrap it
//! into the CLI subcommand.

pub mod args;
pub mod engine;
pub mod run;

pub use args::SearchArgs;
pub use engine::{
    Hit, SearchError, SearchOrchestrator, SearchPhase, SearchRequest, SearchResponse,
};
pub use run::run;
