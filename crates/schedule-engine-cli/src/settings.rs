//! Campus-day defaults for `schedcheck free`.
//!
//! Layered lowest to highest: built-in defaults, the file named by
//! `SCHEDCHECK_CONFIG` (any format the `config` crate reads), then
//! `SCHEDCHECK_*` environment variables. Command-line flags override all of it.

use serde::Deserialize;

pub const DEFAULT_DAY_START: &str = "07:00";
pub const DEFAULT_DAY_END: &str = "21:00";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CheckerConfig {
    /// First bookable minute of the day. Read from SCHEDCHECK_DAY_START.
    pub day_start: String,
    /// End of the bookable day. Read from SCHEDCHECK_DAY_END.
    pub day_end: String,
    /// Slots shorter than this are not listed. Read from SCHEDCHECK_MIN_SLOT_MINUTES.
    pub min_slot_minutes: u32,
}

impl CheckerConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder()
            .set_default("day_start", DEFAULT_DAY_START)?
            .set_default("day_end", DEFAULT_DAY_END)?
            .set_default("min_slot_minutes", 0i64)?;
        if let Ok(path) = std::env::var("SCHEDCHECK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("SCHEDCHECK"));
        c.build()?.try_deserialize()
    }
}
