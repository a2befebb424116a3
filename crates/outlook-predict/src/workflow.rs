//! Record workflow: the pipeline wired to an injected storage collaborator.
//!
//! The id of a newly created record is returned to the caller, who passes
//! it back explicitly for report, edit, and delete. No per-user state is
//! kept here.

use serde::Serialize;
use tracing::{debug, info};

use outlook_core::config::{EditPolicy, ScoringConfig};
use outlook_core::traits::IStudentStore;
use outlook_core::{
    ChartPoint, Color, OutlookResult, RawSubmission, RecordId, StudentRecord, Submission, Verdict,
};

use crate::history::{aggregate, HistoryStats};
use crate::report::{project, ReportField};
use crate::scoring::ScoringService;

/// A submission after it has been scored and persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted {
    pub record: StudentRecord,
    pub verdict: Verdict,
    pub color: Color,
    pub chart_series: Vec<ChartPoint>,
    pub used_fallback: bool,
}

pub struct RecordWorkflow<S: IStudentStore> {
    store: S,
    scoring: ScoringService,
    edit_policy: EditPolicy,
    enforce_score_range: bool,
}

impl<S: IStudentStore> RecordWorkflow<S> {
    pub fn new(store: S, scoring: ScoringService, config: &ScoringConfig) -> Self {
        Self {
            store,
            scoring,
            edit_policy: config.edit_policy,
            enforce_score_range: config.enforce_score_range,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scoring(&self) -> &ScoringService {
        &self.scoring
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// Validate, score, and persist a raw form submission.
    pub fn submit(&self, raw: &RawSubmission) -> OutlookResult<Submitted> {
        let submission = Submission::parse(raw, self.enforce_score_range)?;
        self.submit_validated(&submission)
    }

    pub fn submit_validated(&self, submission: &Submission) -> OutlookResult<Submitted> {
        let outcome = self.scoring.score(submission);
        let record = self.store.create(&outcome.draft)?;
        info!(
            id = record.id,
            verdict = outcome.verdict.as_str(),
            used_fallback = outcome.used_fallback,
            "student record created"
        );
        Ok(Submitted {
            record,
            verdict: outcome.verdict,
            color: outcome.color,
            chart_series: outcome.chart_series,
            used_fallback: outcome.used_fallback,
        })
    }

    pub fn get(&self, id: RecordId) -> OutlookResult<StudentRecord> {
        Ok(self.store.get(id)?)
    }

    pub fn history(&self) -> OutlookResult<HistoryStats> {
        let records = self.store.list_all()?;
        debug!(count = records.len(), "aggregating history");
        Ok(aggregate(&records))
    }

    pub fn report(&self, id: RecordId) -> OutlookResult<Vec<ReportField>> {
        let record = self.store.get(id)?;
        Ok(project(&record))
    }

    /// Replace name and metrics of an existing record. The stored verdict is
    /// recomputed or kept according to the configured `EditPolicy`.
    pub fn edit(&self, id: RecordId, raw: &RawSubmission) -> OutlookResult<StudentRecord> {
        let submission = Submission::parse(raw, self.enforce_score_range)?;
        let mut record = self.store.get(id)?;
        record.apply_edit(submission.name, submission.scores);

        if self.edit_policy == EditPolicy::Recompute {
            let classification = self.scoring.classify(&record.scores());
            let verdict = Verdict::from(classification.label);
            if record.prediction_result != verdict.as_str() {
                debug!(id, from = %record.prediction_result, to = verdict.as_str(), "verdict changed on edit");
            }
            record.prediction_result = verdict.as_str().to_string();
        }

        self.store.update(&record)?;
        info!(id, policy = ?self.edit_policy, "student record updated");
        Ok(record)
    }

    pub fn delete(&self, id: RecordId) -> OutlookResult<()> {
        self.store.delete(id)?;
        info!(id, "student record deleted");
        Ok(())
    }
}
