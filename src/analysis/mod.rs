//! Analysis pipeline
//!
//! Five stage analyzers that each turn subject text into one validated
//! schema instance, the composer that runs them in order, and the service
//! front door that resolves stage names.

mod analyst;
mod composer;
mod prompts;
mod service;
mod stage;

pub use analyst::ArchitectureAnalyst;
pub use composer::{ReportComposer, plan};
pub use prompts::{PromptFactory, StagePrompt};
pub use service::AnalysisService;
pub use stage::{Stage, SubjectText};
