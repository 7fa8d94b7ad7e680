pub mod store;

pub use store::{PollState, RetentionPolicy, Snapshot, StateStore};
