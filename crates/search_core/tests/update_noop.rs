use search_core::{update, Msg, SearchModel, SearchState};

#[test]
fn update_is_noop() {
    let state = SearchModel::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn fresh_model_is_empty_and_idle() {
    let mut state = SearchModel::new();

    assert_eq!(state.view(), SearchState::default());
    assert!(!state.view().loading);
    assert!(!state.consume_dirty());
}
