#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A search for the query was submitted; both fetches are about to start.
    SearchStarted { query: String },
    /// Both fetches completed successfully.
    SearchSucceeded {
        images: crate::ImageResultSet,
        videos: crate::VideoResultSet,
    },
    /// At least one fetch failed.
    SearchFailed(crate::FetchFailure),
    /// User toggled the saved marker of an item.
    BookmarkToggled(crate::SearchItem),
    /// Fallback for placeholder wiring.
    NoOp,
}
