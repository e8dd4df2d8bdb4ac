use std::fmt;

/// Which provider call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Images,
    Videos,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Images => write!(f, "images"),
            Category::Videos => write!(f, "videos"),
        }
    }
}

/// A failed fetch, reported to the error sink. The message is an opaque diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub category: Category,
    pub message: String,
}

impl FetchFailure {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fetch failed: {}", self.category, self.message)
    }
}
