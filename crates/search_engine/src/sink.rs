use search_core::FetchFailure;
use search_logging::search_error;

/// Receives failed searches. Failures are diagnostics, never part of the state.
pub trait ErrorSink: Send + Sync {
    fn report(&self, failure: &FetchFailure);
}

/// Default sink: writes the failure to the error log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, failure: &FetchFailure) {
        search_error!("{failure}");
    }
}
