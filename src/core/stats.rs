use chrono::{DateTime, Duration, Local, Timelike};
use rand::Rng;

use crate::core::job::{JobStatus, QuantumJob};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub queued: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn tally(jobs: &[QuantumJob]) -> Self {
        let mut counts = StatusCounts::default();
        for job in jobs {
            match job.status {
                JobStatus::Queued => counts.queued += 1,
                JobStatus::Running => counts.running += 1,
                JobStatus::Completed => counts.completed += 1,
                JobStatus::Failed => counts.failed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.queued + self.running + self.completed + self.failed
    }

    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Queued => self.queued,
            JobStatus::Running => self.running,
            JobStatus::Completed => self.completed,
            JobStatus::Failed => self.failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusShare {
    pub status: JobStatus,
    pub count: usize,
    /// Rounded percentage of the whole set.
    pub percentage: u32,
}

/// Per-status share of the job set, skipping statuses with no jobs.
pub fn job_distribution(jobs: &[QuantumJob]) -> Vec<StatusShare> {
    let counts = StatusCounts::tally(jobs);
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    JobStatus::ALL
        .iter()
        .filter_map(|&status| {
            let count = counts.get(status);
            if count == 0 {
                return None;
            }
            let percentage = ((count as f64 / total as f64) * 100.0).round() as u32;
            Some(StatusShare {
                status,
                count,
                percentage,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub hour: String,
    pub completed: u64,
    pub failed: u64,
    pub running: u64,
}

/// Synthetic hourly completion trend for the six hours ending at `now`.
/// There is no historical data behind the mock set, so the series is rolled
/// fresh on every refresh.
pub fn trend_data(now: DateTime<Local>, rng: &mut impl Rng) -> Vec<TrendPoint> {
    (0..6)
        .map(|offset| {
            let stamp = now - Duration::hours(5 - offset);
            TrendPoint {
                hour: format!("{}:00", stamp.hour()),
                completed: rng.random_range(2..=9),
                failed: rng.random_range(0..=2),
                running: rng.random_range(1..=5),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::MOCK_JOBS;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counts_cover_the_whole_set() {
        let counts = StatusCounts::tally(&MOCK_JOBS);
        assert_eq!(counts.total(), MOCK_JOBS.len());
        assert_eq!(counts.queued, 4);
        assert_eq!(counts.running, 4);
        assert_eq!(counts.completed, 5);
        assert_eq!(counts.failed, 2);
    }

    #[test]
    fn seed_distribution_percentages() {
        let shares = job_distribution(&MOCK_JOBS);
        assert_eq!(shares.len(), 4);
        let pct = |status: JobStatus| {
            shares
                .iter()
                .find(|share| share.status == status)
                .map(|share| share.percentage)
                .unwrap()
        };
        assert_eq!(pct(JobStatus::Queued), 27);
        assert_eq!(pct(JobStatus::Running), 27);
        assert_eq!(pct(JobStatus::Completed), 33);
        assert_eq!(pct(JobStatus::Failed), 13);
        let total: u32 = shares.iter().map(|share| share.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn distribution_skips_empty_statuses() {
        let completed: Vec<_> = MOCK_JOBS
            .iter()
            .filter(|job| job.status == JobStatus::Completed)
            .cloned()
            .collect();
        let shares = job_distribution(&completed);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].status, JobStatus::Completed);
        assert_eq!(shares[0].percentage, 100);
    }

    #[test]
    fn empty_set_has_empty_distribution() {
        assert!(job_distribution(&[]).is_empty());
    }

    #[test]
    fn trend_spans_six_hours_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Local.with_ymd_and_hms(2024, 1, 8, 15, 0, 0).unwrap();
        let trend = trend_data(now, &mut rng);
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].hour, "10:00");
        assert_eq!(trend[5].hour, "15:00");
        for point in &trend {
            assert!((2..=9).contains(&point.completed));
            assert!(point.failed <= 2);
            assert!((1..=5).contains(&point.running));
        }
    }
}
