pub mod data;
pub mod error;
pub mod format;
pub mod job;
pub mod simulate;
pub mod stats;
