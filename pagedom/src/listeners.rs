//! Document-level listener bookkeeping.
//!
//! The registry does not store callbacks. It records which listeners are
//! attached so owners can acquire and release them explicitly and so leaks
//! show up as a growing count.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Click,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    attached: Vec<(ListenerId, ListenerKind)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.attached.push((id, kind));
        log::trace!("listener {:?} attached ({:?})", id, kind);
        id
    }

    /// Returns true if the listener was attached.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.attached.len();
        self.attached.retain(|(attached, _)| *attached != id);
        let removed = self.attached.len() != before;
        if removed {
            log::trace!("listener {:?} detached", id);
        }
        removed
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.attached.iter().any(|(attached, _)| *attached == id)
    }

    /// Number of attached listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.attached.iter().filter(|(_, k)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
