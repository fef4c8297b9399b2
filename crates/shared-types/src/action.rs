use std::fmt;

/// Handle returned by [`ActionBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Fire-and-forget channel between the layout chrome and whichever views
/// are mounted.
///
/// Each dispatch reaches every current listener exactly once. With no
/// listener the action is dropped; nothing is queued for listeners that
/// subscribe later.
pub struct ActionBus<A> {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(A)>)>,
}

impl<A: Clone> ActionBus<A> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(A) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `action` to every listener; returns how many received it.
    pub fn dispatch(&mut self, action: A) -> usize {
        for (_, listener) in self.listeners.iter_mut() {
            listener(action.clone());
        }
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl<A: Clone> Default for ActionBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for ActionBus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
