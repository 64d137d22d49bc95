// src/application/commands/window_commands.rs

use crate::application::state::AppState;
use crate::events::WindowFocused;

/// Report that a window became active again
///
/// Every listener reacts synchronously; the collection store has reloaded from
/// storage by the time this returns.
pub fn window_focused(state: &AppState, window_label: &str) {
    state.event_bus.emit(WindowFocused::new(window_label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support;
    use crate::services::CollectionAction;

    #[test]
    fn test_focus_event_reaches_store() {
        let state = test_support::state();
        state.collection_store.dispatch(CollectionAction::Create {
            name: "Favorites".to_string(),
            animes: vec![],
        });

        window_focused(&state, "main");

        assert_eq!(state.collection_store.len(), 1);
        let log = state.event_bus.get_event_log();
        assert_eq!(log[0].event_type, "WindowFocused");
        assert_eq!(log[1].event_type, "CollectionsReloaded");
    }
}
