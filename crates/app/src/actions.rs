use dioxus::prelude::*;
use shared_types::{ActionBus, HeaderAction, ListenerId};

/// Header actions dispatched by the dashboard layout.
///
/// Provided by the layout; views that react to header buttons subscribe
/// with [`use_header_action`].
#[derive(Clone, Copy)]
pub struct LayoutActions {
    bus: Signal<ActionBus<HeaderAction>>,
}

impl LayoutActions {
    pub fn new() -> Self {
        Self {
            bus: Signal::new(ActionBus::new()),
        }
    }

    /// Fire `action` at whichever views are listening.
    pub fn dispatch(&mut self, action: HeaderAction) {
        let delivered = self.bus.write().dispatch(action);
        if delivered == 0 {
            tracing::debug!(?action, "header action dropped, no view is listening");
        }
    }

    fn subscribe(&mut self, listener: impl FnMut(HeaderAction) + 'static) -> ListenerId {
        self.bus.write().subscribe(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        // The layout may already be gone when a view unmounts with it.
        if let Ok(mut bus) = self.bus.try_write() {
            bus.unsubscribe(id);
        }
    }
}

/// Hook for the layout to provide the action bus to its children.
pub fn use_layout_actions_provider() -> LayoutActions {
    use_context_provider(LayoutActions::new)
}

/// Run `listener` for every header action while the calling component is
/// mounted.
pub fn use_header_action(listener: impl FnMut(HeaderAction) + 'static) {
    let mut actions = use_context::<LayoutActions>();
    let id = use_hook(move || actions.subscribe(listener));
    use_drop(move || actions.unsubscribe(id));
}
