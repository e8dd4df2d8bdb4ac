//! Provider-shaped result sets, as handed over by a search provider.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageDocument {
    pub id: String,
    pub display_sitename: String,
    pub thumbnail_url: String,
    pub datetime: String,
    pub doc_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageResultSet {
    /// `None` when the provider omitted the collection; treated as empty.
    pub documents: Option<Vec<ImageDocument>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoDocument {
    pub id: String,
    pub author: String,
    pub thumbnail: String,
    pub datetime: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoResultSet {
    /// `None` when the provider omitted the collection; treated as empty.
    pub documents: Option<Vec<VideoDocument>>,
}

impl ImageResultSet {
    pub fn new(documents: Vec<ImageDocument>) -> Self {
        Self {
            documents: Some(documents),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VideoResultSet {
    pub fn new(documents: Vec<VideoDocument>) -> Self {
        Self {
            documents: Some(documents),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
