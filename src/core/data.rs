use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::core::job::{JobStatus, Priority, QuantumJob};

/// The fixed set of mock jobs the tracker presents. Seeded once at first
/// access and never grown or shrunk; the dashboard clones it and mutates its
/// private copy.
pub static MOCK_JOBS: Lazy<Vec<QuantumJob>> = Lazy::new(seed_jobs);

/// Working copy for the dashboard.
pub fn mock_jobs() -> Vec<QuantumJob> {
    MOCK_JOBS.clone()
}

pub fn jobs_by_status(jobs: &[QuantumJob], status: JobStatus) -> Vec<&QuantumJob> {
    jobs.iter().filter(|job| job.status == status).collect()
}

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("seed timestamp is valid rfc3339")
        .with_timezone(&Utc)
}

struct Seed {
    id: &'static str,
    status: JobStatus,
    start_time: &'static str,
    duration_secs: Option<u64>,
    qubits: u32,
    shots: u32,
    device: &'static str,
    user_id: &'static str,
    circuit_depth: u32,
    priority: Priority,
    estimated_secs: Option<u64>,
    error_message: Option<&'static str>,
}

impl Seed {
    fn build(&self) -> QuantumJob {
        QuantumJob {
            id: self.id.to_string(),
            status: self.status,
            start_time: ts(self.start_time),
            duration_secs: self.duration_secs,
            qubits: self.qubits,
            shots: self.shots,
            device: self.device.to_string(),
            user_id: self.user_id.to_string(),
            circuit_depth: self.circuit_depth,
            priority: self.priority,
            estimated_secs: self.estimated_secs,
            error_message: self.error_message.map(|m| m.to_string()),
        }
    }
}

const SEEDS: [Seed; 15] = [
    Seed {
        id: "qjb_ibmq_001",
        status: JobStatus::Completed,
        start_time: "2024-01-08T14:30:15Z",
        duration_secs: Some(45),
        qubits: 5,
        shots: 1024,
        device: "ibmq_lima",
        user_id: "user_alice",
        circuit_depth: 12,
        priority: Priority::High,
        estimated_secs: None,
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_002",
        status: JobStatus::Running,
        start_time: "2024-01-08T14:45:22Z",
        duration_secs: None,
        qubits: 16,
        shots: 8192,
        device: "ibmq_mumbai",
        user_id: "user_bob",
        circuit_depth: 24,
        priority: Priority::High,
        estimated_secs: Some(120),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_003",
        status: JobStatus::Queued,
        start_time: "2024-01-08T14:48:30Z",
        duration_secs: None,
        qubits: 27,
        shots: 4096,
        device: "ibmq_cairo",
        user_id: "user_charlie",
        circuit_depth: 35,
        priority: Priority::Medium,
        estimated_secs: Some(180),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_004",
        status: JobStatus::Completed,
        start_time: "2024-01-08T14:15:10Z",
        duration_secs: Some(67),
        qubits: 7,
        shots: 2048,
        device: "ibmq_casablanca",
        user_id: "user_diana",
        circuit_depth: 18,
        priority: Priority::Low,
        estimated_secs: None,
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_005",
        status: JobStatus::Failed,
        start_time: "2024-01-08T14:25:45Z",
        duration_secs: Some(15),
        qubits: 65,
        shots: 1024,
        device: "ibmq_montreal",
        user_id: "user_eve",
        circuit_depth: 45,
        priority: Priority::High,
        estimated_secs: None,
        error_message: Some("Circuit compilation error: Gate sequence invalid"),
    },
    Seed {
        id: "qjb_ibmq_006",
        status: JobStatus::Queued,
        start_time: "2024-01-08T14:50:12Z",
        duration_secs: None,
        qubits: 12,
        shots: 4096,
        device: "ibmq_belem",
        user_id: "user_frank",
        circuit_depth: 22,
        priority: Priority::Low,
        estimated_secs: Some(95),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_007",
        status: JobStatus::Running,
        start_time: "2024-01-08T14:42:18Z",
        duration_secs: None,
        qubits: 20,
        shots: 16384,
        device: "ibmq_guadalupe",
        user_id: "user_grace",
        circuit_depth: 28,
        priority: Priority::Medium,
        estimated_secs: Some(150),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_008",
        status: JobStatus::Completed,
        start_time: "2024-01-08T14:10:33Z",
        duration_secs: Some(89),
        qubits: 8,
        shots: 8192,
        device: "ibmq_quito",
        user_id: "user_henry",
        circuit_depth: 15,
        priority: Priority::Medium,
        estimated_secs: None,
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_009",
        status: JobStatus::Queued,
        start_time: "2024-01-08T14:52:40Z",
        duration_secs: None,
        qubits: 33,
        shots: 2048,
        device: "ibmq_kolkata",
        user_id: "user_ivy",
        circuit_depth: 40,
        priority: Priority::High,
        estimated_secs: Some(200),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_010",
        status: JobStatus::Running,
        start_time: "2024-01-08T14:38:55Z",
        duration_secs: None,
        qubits: 14,
        shots: 4096,
        device: "ibmq_lagos",
        user_id: "user_jack",
        circuit_depth: 26,
        priority: Priority::Low,
        estimated_secs: Some(110),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_011",
        status: JobStatus::Completed,
        start_time: "2024-01-08T14:05:20Z",
        duration_secs: Some(34),
        qubits: 3,
        shots: 1024,
        device: "ibmq_manila",
        user_id: "user_karen",
        circuit_depth: 8,
        priority: Priority::Low,
        estimated_secs: None,
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_012",
        status: JobStatus::Failed,
        start_time: "2024-01-08T14:35:12Z",
        duration_secs: Some(8),
        qubits: 127,
        shots: 8192,
        device: "ibmq_washington",
        user_id: "user_liam",
        circuit_depth: 55,
        priority: Priority::High,
        estimated_secs: None,
        error_message: Some("Hardware calibration error: Qubit connectivity issues"),
    },
    Seed {
        id: "qjb_ibmq_013",
        status: JobStatus::Queued,
        start_time: "2024-01-08T14:55:08Z",
        duration_secs: None,
        qubits: 9,
        shots: 2048,
        device: "ibmq_nairobi",
        user_id: "user_mia",
        circuit_depth: 19,
        priority: Priority::Medium,
        estimated_secs: Some(75),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_014",
        status: JobStatus::Running,
        start_time: "2024-01-08T14:46:30Z",
        duration_secs: None,
        qubits: 18,
        shots: 4096,
        device: "ibmq_oslo",
        user_id: "user_noah",
        circuit_depth: 31,
        priority: Priority::High,
        estimated_secs: Some(140),
        error_message: None,
    },
    Seed {
        id: "qjb_ibmq_015",
        status: JobStatus::Completed,
        start_time: "2024-01-08T14:00:45Z",
        duration_secs: Some(123),
        qubits: 25,
        shots: 16384,
        device: "ibmq_perth",
        user_id: "user_olivia",
        circuit_depth: 42,
        priority: Priority::High,
        estimated_secs: None,
        error_message: None,
    },
];

fn seed_jobs() -> Vec<QuantumJob> {
    SEEDS.iter().map(Seed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_has_fifteen_records() {
        assert_eq!(MOCK_JOBS.len(), 15);
    }

    #[test]
    fn job_ids_are_unique() {
        let ids: HashSet<&str> = MOCK_JOBS.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids.len(), MOCK_JOBS.len());
    }

    #[test]
    fn duration_present_iff_terminal() {
        for job in MOCK_JOBS.iter() {
            assert_eq!(
                job.duration_secs.is_some(),
                job.status.is_terminal(),
                "job {} breaks the duration invariant",
                job.id
            );
        }
    }

    #[test]
    fn estimates_only_on_live_jobs() {
        for job in MOCK_JOBS.iter() {
            if job.estimated_secs.is_some() {
                assert!(
                    !job.status.is_terminal(),
                    "job {} has an estimate after finishing",
                    job.id
                );
            }
        }
    }

    #[test]
    fn error_messages_only_on_failed_jobs() {
        for job in MOCK_JOBS.iter() {
            if job.error_message.is_some() {
                assert_eq!(job.status, JobStatus::Failed, "job {}", job.id);
            }
        }
    }

    #[test]
    fn filter_by_status() {
        let running = jobs_by_status(&MOCK_JOBS, JobStatus::Running);
        assert_eq!(running.len(), 4);
        assert!(running.iter().all(|job| job.status == JobStatus::Running));
    }

    #[test]
    fn working_copy_is_detached() {
        let mut copy = mock_jobs();
        copy[1].complete(60);
        assert_eq!(MOCK_JOBS[1].status, JobStatus::Running);
    }
}
