#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Broadcast the list produced by a single bookmark toggle, along with
    /// the entry whose flag flipped.
    BookmarksChanged {
        items: Vec<crate::SearchItem>,
        toggled: crate::SearchItem,
    },
    /// Hand a failed search over to the error sink.
    ReportFailure(crate::FetchFailure),
}
