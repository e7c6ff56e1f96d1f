//! Drag-state tracking for the file drop target.
//!
//! The tracker only cares whether a drag is inside the trigger boundary
//! (usually the whole form), not how many child regions it crossed. Moving
//! between children of the boundary therefore never flickers the state.

/// Whether a drag carrying files is over the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A state change produced by a drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    Entered,
    Left,
    Dropped,
}

/// Region used to decide whether an event target is inside the form.
///
/// Implemented for any `Fn(&T) -> bool`, so a rectangle test or a tree
/// ancestry walk can be passed as a closure.
pub trait Boundary<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

impl<T: ?Sized, F> Boundary<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

/// Idle/Dragging state machine fed by enter, leave and drop events.
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    attached: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            attached: true,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Whether the tracker still reacts to events.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// A drag entered `target`. Enters the Dragging state when the target
    /// lies inside `boundary`.
    pub fn drag_enter<T, B>(&mut self, boundary: &B, target: Option<&T>) -> Option<DragTransition>
    where
        T: ?Sized,
        B: Boundary<T> + ?Sized,
    {
        if !self.attached {
            return None;
        }
        if target.is_some_and(|t| boundary.contains(t)) {
            return self.set(DragState::Dragging, DragTransition::Entered);
        }
        None
    }

    /// A drag left an element and moved to `related`. Returns to Idle only
    /// when `related` is missing or outside `boundary`.
    pub fn drag_leave<T, B>(&mut self, boundary: &B, related: Option<&T>) -> Option<DragTransition>
    where
        T: ?Sized,
        B: Boundary<T> + ?Sized,
    {
        if !self.attached {
            return None;
        }
        if related.is_some_and(|t| boundary.contains(t)) {
            return None;
        }
        self.set(DragState::Idle, DragTransition::Left)
    }

    /// Files were dropped on the drop target.
    pub fn drop_files(&mut self) -> Option<DragTransition> {
        if !self.attached {
            return None;
        }
        self.set(DragState::Idle, DragTransition::Dropped)
    }

    /// Release the tracker. The current state is left as-is and every later
    /// event is ignored, so no trailing transition is produced.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn set(&mut self, next: DragState, transition: DragTransition) -> Option<DragTransition> {
        if self.state == next {
            return None;
        }
        self.state = next;
        tracing::debug!(?transition, state = ?next, "drag state changed");
        Some(transition)
    }
}
