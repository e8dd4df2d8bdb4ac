//! Search engine: provider access, notification channels and the search store.
mod channel;
mod client;
mod persist;
mod provider;
mod sink;
mod store;
mod types;
mod wire;

pub use channel::{EventStream, NotificationChannel, StateStream};
pub use client::{HttpSearchProvider, ProviderSettings};
pub use persist::{ensure_dir, BookmarkFile, BookmarkKind, PersistError, SavedBookmark};
pub use provider::SearchProvider;
pub use sink::{ErrorSink, LogErrorSink};
pub use store::SearchStore;
pub use types::{FailureKind, ProviderError, ToggleEvent};
