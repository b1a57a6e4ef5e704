mod manager;
mod persistence;

pub use manager::TrackerState;
pub use persistence::{load_or_init, load_state, save_state};
