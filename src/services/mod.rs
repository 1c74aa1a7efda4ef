//! Services - schedule state management and the owning event loop
//!
//! - `store` - loads the weekday files, detects changes, answers queries
//! - `events` - typed subscriber registry with cancellation handles
//! - `runner` - single logical owner driving reloads and the display tick

pub mod events;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use events::{SubscriberSet, SubscriptionId};
pub use runner::StoreRunner;
pub use store::ScheduleStore;
