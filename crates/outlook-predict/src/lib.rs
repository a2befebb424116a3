//! # outlook-predict
//!
//! The prediction-and-aggregation pipeline.
//!
//! ## Modules
//! - `classifier`: artifact-backed or rule-based binary classifier, selected once at boot
//! - `scoring`: submission → verdict, color, chart series, record draft
//! - `history`: records → count, rounded average, verdict counts, banded chart series
//! - `report`: record → ordered labeled fields for document rendering
//! - `workflow`: the above wired to an injected `IStudentStore`
//! - `training`: offline, seeded logistic-regression fit that writes the artifact

pub mod classifier;
pub mod history;
pub mod report;
pub mod scoring;
pub mod training;
pub mod workflow;

pub use classifier::{Classification, ClassifierAdapter, Classify, Label};
pub use history::{aggregate, HistoryStats};
pub use report::{project, ReportField};
pub use scoring::{ScoreOutcome, ScoringService};
pub use workflow::{RecordWorkflow, Submitted};
