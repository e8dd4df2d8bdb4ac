use search_logging::search_debug;

use crate::{merge_results, Effect, Msg, SearchModel};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchModel, msg: Msg) -> (SearchModel, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchStarted { .. } => {
            state.begin_search();
            Vec::new()
        }
        Msg::SearchSucceeded { images, videos } => {
            // Items and loading change together in one transition.
            state.finish_search(merge_results(images, videos));
            Vec::new()
        }
        Msg::SearchFailed(failure) => {
            state.fail_search();
            vec![Effect::ReportFailure(failure)]
        }
        Msg::BookmarkToggled(target) => {
            if let Some(toggled) = state.toggle_saved(&target.id) {
                vec![Effect::BookmarksChanged {
                    items: state.items().to_vec(),
                    toggled,
                }]
            } else {
                search_debug!("bookmark toggle ignored, id={} not in list", target.id);
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
