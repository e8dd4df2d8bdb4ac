//! Search core: data model, result aggregation and the pure search state machine.
mod aggregate;
mod bookmark;
mod effect;
mod failure;
mod item;
mod msg;
mod results;
mod state;
mod update;

pub use aggregate::merge_results;
pub use bookmark::{toggle_in_place, toggle_saved};
pub use effect::Effect;
pub use failure::{Category, FetchFailure};
pub use item::{ItemKind, SearchItem};
pub use msg::Msg;
pub use results::{ImageDocument, ImageResultSet, VideoDocument, VideoResultSet};
pub use state::{SearchModel, SearchState};
pub use update::update;
