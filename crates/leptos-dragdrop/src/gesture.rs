//! Drag Gesture State
//!
//! `Idle -> Dragging -> Reordering -> Idle`, with cancel from `Dragging`
//! back to `Idle`. Moves that don't come from a drag go `Idle -> Reordering`
//! directly. While `Reordering`, new drags and moves are refused.

/// Current drag gesture over a list keyed by `K`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Gesture<K> {
    #[default]
    Idle,
    /// A row is being dragged; `over` is the row currently marked as drop target
    Dragging { dragged: K, over: Option<K> },
    /// A drop was accepted and its moves are in flight
    Reordering,
}

impl<K: Copy + PartialEq> Gesture<K> {
    /// Begin dragging `id`. Refused while a reorder is in flight.
    pub fn start(&mut self, id: K) -> bool {
        if self.is_reordering() {
            return false;
        }
        *self = Gesture::Dragging { dragged: id, over: None };
        true
    }

    /// Mark `id` as the drop target. Returns whether the marker changed.
    pub fn hover(&mut self, id: K) -> bool {
        match self {
            Gesture::Dragging { dragged, over } if *dragged != id && *over != Some(id) => {
                *over = Some(id);
                true
            }
            _ => false,
        }
    }

    /// The pointer left the marked row
    pub fn leave(&mut self) {
        if let Gesture::Dragging { over, .. } = self {
            *over = None;
        }
    }

    /// Release over the marked row.
    ///
    /// Returns `(dragged, target)` and enters `Reordering` when there is a
    /// target other than the dragged row; otherwise the gesture ends.
    pub fn release(&mut self) -> Option<(K, K)> {
        match *self {
            Gesture::Dragging { dragged, over: Some(target) } if dragged != target => {
                *self = Gesture::Reordering;
                Some((dragged, target))
            }
            Gesture::Dragging { .. } => {
                *self = Gesture::Idle;
                None
            }
            _ => None,
        }
    }

    /// Claim the list for a move that isn't a drag, e.g. an arrow button.
    ///
    /// Refused during a drag or another reorder; [`Gesture::finish`] releases it.
    pub fn begin(&mut self) -> bool {
        if !matches!(self, Gesture::Idle) {
            return false;
        }
        *self = Gesture::Reordering;
        true
    }

    /// Drag released without a target. An in-flight reorder is unaffected.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            *self = Gesture::Idle;
        }
    }

    /// The reorder started by [`Gesture::release`] or [`Gesture::begin`] finished, successfully or not
    pub fn finish(&mut self) {
        if self.is_reordering() {
            *self = Gesture::Idle;
        }
    }

    pub fn dragging_id(&self) -> Option<K> {
        match self {
            Gesture::Dragging { dragged, .. } => Some(*dragged),
            _ => None,
        }
    }

    pub fn drop_target(&self) -> Option<K> {
        match self {
            Gesture::Dragging { over, .. } => *over,
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn is_reordering(&self) -> bool {
        matches!(self, Gesture::Reordering)
    }
}
