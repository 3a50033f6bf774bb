use chrono::{DateTime, Utc};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Queued,
        JobStatus::Running,
        JobStatus::Completed,
        JobStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "QUEUED",
            JobStatus::Running => "RUNNING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// Terminal statuses carry a measured duration; live ones do not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn color(&self) -> Color {
        match self {
            JobStatus::Queued => Color::Yellow,
            JobStatus::Running => Color::Blue,
            JobStatus::Completed => Color::Green,
            JobStatus::Failed => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

/// A single quantum-computing workload record. The set is fixed at startup;
/// the only mutation is the simulated refresh flipping a running job to
/// completed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumJob {
    pub id: String,
    pub status: JobStatus,
    pub start_time: DateTime<Utc>,
    /// Seconds of execution. Present iff the job reached a terminal status.
    pub duration_secs: Option<u64>,
    pub qubits: u32,
    pub shots: u32,
    pub device: String,
    pub user_id: String,
    pub circuit_depth: u32,
    pub priority: Priority,
    /// Estimated seconds to completion. Only meaningful while queued or
    /// running.
    pub estimated_secs: Option<u64>,
    pub error_message: Option<String>,
}

impl QuantumJob {
    /// Transition a running job to completed with a measured duration,
    /// dropping the now-stale estimate.
    pub fn complete(&mut self, duration_secs: u64) {
        self.status = JobStatus::Completed;
        self.duration_secs = Some(duration_secs);
        self.estimated_secs = None;
    }
}
