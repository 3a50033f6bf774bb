use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "qjt", version, about = "Quantum Jobs Tracker terminal dashboard")]
pub struct Cli {
    /// Route to open, e.g. "/" or "/dashboard". Unknown routes land on the
    /// 404 page.
    #[arg(value_name = "ROUTE", default_value = "/")]
    pub route: String,

    /// Simulated refresh interval in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 5, value_parser = parse_interval)]
    pub interval: u64,

    /// Start with auto-refresh enabled.
    #[arg(long)]
    pub auto_refresh: bool,
}

fn parse_interval(raw: &str) -> Result<u64, String> {
    let secs: u64 = raw.parse().map_err(|_| format!("not a number: {raw}"))?;
    if secs == 0 {
        return Err("interval must be at least 1 second".to_string());
    }
    Ok(secs)
}
