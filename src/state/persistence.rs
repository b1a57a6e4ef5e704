use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::state::TrackerState;

/// Load tracker state from a JSON file.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<TrackerState> {
    let content = fs::read_to_string(path)?;
    let state: TrackerState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save tracker state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &TrackerState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load state from `path`, or start fresh when the file does not exist yet.
pub fn load_or_init<P: AsRef<Path>>(path: P, today: NaiveDate) -> Result<TrackerState> {
    if path.as_ref().exists() {
        load_state(path)
    } else {
        Ok(TrackerState::new(today))
    }
}
