use crate::document::Document;
use crate::element::ElementKey;
use std::rc::Rc;

/// Listener category. One listener list per kind per element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    Resize,
    KeyDown,
    KeyUp,
    KeyPress,
    MouseEnter,
    MouseLeave,
    MouseMove,
    MouseDown,
    MouseUp,
    Click,
    DblClick,
    ContextMenu,
    Wheel,
}

/// A notification with its payload. `kind()` gives the listener category.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Focus,
    Blur,
    Resize { width: f64, height: f64 },
    KeyDown { key: char },
    KeyUp { key: char },
    KeyPress { key: char },
    MouseEnter,
    MouseLeave,
    MouseMove { x: f64, y: f64 },
    MouseDown { x: f64, y: f64, button: u8 },
    MouseUp { x: f64, y: f64, button: u8 },
    Click { x: f64, y: f64 },
    DblClick { x: f64, y: f64 },
    ContextMenu { x: f64, y: f64 },
    Wheel { delta: f64 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Focus => EventKind::Focus,
            Event::Blur => EventKind::Blur,
            Event::Resize { .. } => EventKind::Resize,
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::KeyUp { .. } => EventKind::KeyUp,
            Event::KeyPress { .. } => EventKind::KeyPress,
            Event::MouseEnter => EventKind::MouseEnter,
            Event::MouseLeave => EventKind::MouseLeave,
            Event::MouseMove { .. } => EventKind::MouseMove,
            Event::MouseDown { .. } => EventKind::MouseDown,
            Event::MouseUp { .. } => EventKind::MouseUp,
            Event::Click { .. } => EventKind::Click,
            Event::DblClick { .. } => EventKind::DblClick,
            Event::ContextMenu { .. } => EventKind::ContextMenu,
            Event::Wheel { .. } => EventKind::Wheel,
        }
    }
}

/// Handle returned by `Document::add_listener`; the only way to remove a
/// listener again. Never reused within a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[inline]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Listener callback. Receives the document so it may mutate the tree
/// re-entrantly; dispatch snapshots the listener list first, so such
/// mutation affects later events, not the current fan-out.
pub type Listener = Rc<dyn Fn(&mut Document, ElementKey, &Event)>;

impl Document {
    /// Register a listener for one event kind on one element. The returned
    /// id is the removal handle.
    pub fn add_listener<F>(
        &mut self,
        key: ElementKey,
        kind: EventKind,
        listener: F,
    ) -> Result<ListenerId, crate::DocumentError>
    where
        F: Fn(&mut Document, ElementKey, &Event) + 'static,
    {
        let id = ListenerId::from_raw(self.next_listener);
        self.next_listener += 1;
        self.elem_mut(key)?
            .listeners
            .entry(kind)
            .or_default()
            .push((id, Rc::new(listener)));
        log::trace!(target: "dom.events", "added {kind:?} listener {id:?} on {key:?}");
        Ok(id)
    }

    pub fn remove_listener(
        &mut self,
        key: ElementKey,
        kind: EventKind,
        id: ListenerId,
    ) -> Result<(), crate::DocumentError> {
        let list = self
            .elem_mut(key)?
            .listeners
            .get_mut(&kind)
            .ok_or(crate::DocumentError::NoSuchListener { key, kind, id })?;
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        if list.len() == before {
            return Err(crate::DocumentError::NoSuchListener { key, kind, id });
        }
        log::trace!(target: "dom.events", "removed {kind:?} listener {id:?} from {key:?}");
        Ok(())
    }

    /// Queue a notification for a later [`Self::pump_events`]. The target
    /// is resolved at pump time, not now.
    pub fn enqueue_event(&mut self, key: ElementKey, event: Event) {
        self.pending.push_back((key, event));
    }

    /// Invoke the element's listeners for this event's kind, immediately.
    ///
    /// The listener list is snapshotted first: listeners added or removed
    /// by a callback affect later dispatches, not this one. A dead target
    /// dispatches to nobody. Returns the number of listeners invoked.
    pub fn dispatch(&mut self, key: ElementKey, event: &Event) -> usize {
        let kind = event.kind();
        let snapshot: Vec<Listener> = match self.elements.get(&key) {
            Some(el) => el
                .listeners
                .get(&kind)
                .map(|list| list.iter().map(|(_, f)| Rc::clone(f)).collect())
                .unwrap_or_default(),
            None => Vec::new(),
        };
        log::trace!(target: "dom.events", "dispatch {kind:?} to {key:?}, {} listener(s)", snapshot.len());
        for listener in &snapshot {
            (**listener)(self, key, event);
        }
        snapshot.len()
    }

    /// Drain the pending queue in FIFO order, dispatching each event to its
    /// target. Listeners may mutate the tree and enqueue further events;
    /// those are processed in the same pump. Events whose target died
    /// before the pump are dropped. Returns the number of events delivered
    /// to a live target.
    pub fn pump_events(&mut self) -> usize {
        let mut delivered = 0;
        while let Some((key, event)) = self.pending.pop_front() {
            if !self.elements.contains_key(&key) {
                log::trace!(target: "dom.events", "dropping {:?} for dead target {key:?}", event.kind());
                continue;
            }
            self.dispatch(key, &event);
            delivered += 1;
        }
        delivered
    }
}
