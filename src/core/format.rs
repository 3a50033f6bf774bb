use chrono::{DateTime, Local, Utc};

/// Render an optional execution duration the way the jobs table shows it.
pub fn format_duration(duration_secs: Option<u64>) -> String {
    match duration_secs {
        Some(total) => {
            let mins = total / 60;
            let secs = total % 60;
            format!("{mins}m {secs}s")
        }
        None => "N/A".to_string(),
    }
}

/// Estimated-completion column. Live jobs show "~Ns"; everything else "-".
pub fn format_estimate(estimated_secs: Option<u64>) -> String {
    match estimated_secs {
        Some(secs) => format!("~{secs}s"),
        None => "-".to_string(),
    }
}

pub fn format_start_time(start: DateTime<Utc>) -> String {
    start.format("%H:%M:%S").to_string()
}

/// "Last updated" clock in the dashboard header.
pub fn format_clock(stamp: DateTime<Local>) -> String {
    stamp.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn duration_minutes_and_seconds() {
        assert_eq!(format_duration(Some(45)), "0m 45s");
        assert_eq!(format_duration(Some(123)), "2m 3s");
        assert_eq!(format_duration(Some(60)), "1m 0s");
    }

    #[test]
    fn missing_duration_is_not_applicable() {
        assert_eq!(format_duration(None), "N/A");
    }

    #[test]
    fn estimate_column() {
        assert_eq!(format_estimate(Some(120)), "~120s");
        assert_eq!(format_estimate(None), "-");
    }

    #[test]
    fn start_time_is_wall_clock() {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 8, 14, 30, 15).unwrap();
        assert_eq!(format_start_time(stamp), "14:30:15");
    }

    #[test]
    fn clock_is_wall_clock() {
        let stamp = Local.with_ymd_and_hms(2024, 1, 8, 9, 5, 3).unwrap();
        assert_eq!(format_clock(stamp), "09:05:03");
    }
}
