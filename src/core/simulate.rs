use rand::Rng;

use crate::core::job::{JobStatus, QuantumJob};

/// One simulated refresh pass over the working copy. Each running job has a
/// small chance of finishing with a random duration; nothing else is touched.
/// Returns how many jobs flipped.
///
/// Probabilities and the duration range mirror the interval callback this
/// tracker simulates: 30% of running jobs are considered per tick, 20% of
/// those complete, durations land in 30..=229 seconds.
pub fn refresh(jobs: &mut [QuantumJob], rng: &mut impl Rng) -> usize {
    let mut flipped = 0;
    for job in jobs.iter_mut() {
        if job.status != JobStatus::Running {
            continue;
        }
        if rng.random::<f64>() > 0.7 && rng.random::<f64>() > 0.8 {
            job.complete(rng.random_range(30..230));
            flipped += 1;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{jobs_by_status, mock_jobs};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_invariants(job: &QuantumJob) {
        assert_eq!(
            job.duration_secs.is_some(),
            job.status.is_terminal(),
            "job {} has a duration/status mismatch",
            job.id
        );
        if job.estimated_secs.is_some() {
            assert!(!job.status.is_terminal(), "job {} kept a stale estimate", job.id);
        }
    }

    #[test]
    fn refresh_never_breaks_invariants() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut jobs = mock_jobs();
            for _ in 0..100 {
                refresh(&mut jobs, &mut rng);
                for job in &jobs {
                    assert_invariants(job);
                }
            }
        }
    }

    #[test]
    fn only_running_jobs_change() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut jobs = mock_jobs();
        let before = jobs.clone();
        for _ in 0..100 {
            refresh(&mut jobs, &mut rng);
        }
        for (old, new) in before.iter().zip(&jobs) {
            if old.status != JobStatus::Running {
                assert_eq!(old, new, "non-running job {} was mutated", old.id);
            } else {
                assert!(
                    new.status == JobStatus::Running || new.status == JobStatus::Completed,
                    "job {} reached {:?} from RUNNING",
                    old.id,
                    new.status
                );
            }
        }
    }

    #[test]
    fn flipped_jobs_get_bounded_durations() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut jobs = mock_jobs();
        let was_running: Vec<String> = jobs_by_status(&jobs, JobStatus::Running)
            .iter()
            .map(|job| job.id.clone())
            .collect();
        let mut total_flipped = 0;
        for _ in 0..500 {
            total_flipped += refresh(&mut jobs, &mut rng);
        }
        // 4 running jobs in the seed set; 500 ticks is enough to flip them all.
        assert_eq!(total_flipped, 4);
        for job in jobs.iter().filter(|job| was_running.contains(&job.id)) {
            assert_eq!(job.status, JobStatus::Completed);
            let duration = job.duration_secs.expect("completed job has a duration");
            assert!((30..230).contains(&duration), "duration {duration} out of range");
        }
    }

    #[test]
    fn refresh_reports_flip_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut jobs = mock_jobs();
        let running_before = jobs_by_status(&jobs, JobStatus::Running).len();
        let mut flips = 0;
        for _ in 0..500 {
            flips += refresh(&mut jobs, &mut rng);
        }
        let running_after = jobs_by_status(&jobs, JobStatus::Running).len();
        assert_eq!(running_before - running_after, flips);
    }
}
