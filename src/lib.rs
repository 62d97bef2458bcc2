//! archscope - LLM-Driven Architecture Analysis
//!
//! Turns free-text design-session transcripts into validated, structured
//! architecture reports. Each analysis stage asks a language model for JSON
//! that must satisfy a fixed schema; invalid or failed responses are retried
//! with backoff, and validated fragments are composed into one report.
//!
//! ## Stages
//!
//! - **basic**: components, data flows, decision engine
//! - **failure**: vulnerabilities, single points of failure, recovery
//! - **integration**: technology stack compatibility and compliance
//! - **performance**: throughput, latency, scalability
//! - **comparative**: two systems side by side
//! - **comprehensive**: all of the above in one report
//!
//! ## Quick Start
//!
//! ```ignore
//! use archscope::{ConfigLoader, OutputFormat, cli::build_service};
//!
//! let config = ConfigLoader::load()?;
//! let service = build_service(&config)?;
//! let document = service
//!     .run_stage("basic", &transcript, None, OutputFormat::Markdown)
//!     .await?;
//! println!("{}", document.content);
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: provider abstraction, structured client, retry and validation
//! - [`schema`]: stage output shapes and their bounds
//! - [`analysis`]: stage analyzers, composer and the service front door
//! - [`report`]: markdown and JSON rendering
//! - [`config`]: layered configuration

pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod report;
pub mod schema;
pub mod types;

// Configuration
pub use config::{Config, ConfigLoader, OutputFormat};

// Error Types
pub use types::error::{ArchError, ErrorCategory, ErrorClass, Result};

// Pipeline
pub use analysis::{AnalysisService, ArchitectureAnalyst, ReportComposer, Stage, SubjectText};
pub use report::{RenderedDocument, StageOutput, render};
pub use schema::ComprehensiveArchitectureReport;

// AI
pub use ai::{
    LlmProvider, LlmResponse, RetryPolicy, SharedProvider, StructuredClient, create_provider,
    retry_with_backoff, with_timeout,
};
