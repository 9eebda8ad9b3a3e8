#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

impl GesturePhase {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    PressBody,
    PressHandle,
    PressImage,
    Move,
    Release,
    Reset,
}

/// Transition table for the gesture engine.
///
/// `None` means the event must be ignored in the current phase: presses while
/// a gesture is active, and moves or releases while idle.
pub const fn next_phase(phase: GesturePhase, event: GestureEvent) -> Option<GesturePhase> {
    use GestureEvent::*;
    match (phase, event) {
        (GesturePhase::Idle, PressBody) => Some(GesturePhase::Dragging),
        (GesturePhase::Idle, PressHandle | PressImage) => Some(GesturePhase::Resizing),
        (GesturePhase::Dragging, Move) => Some(GesturePhase::Dragging),
        (GesturePhase::Resizing, Move) => Some(GesturePhase::Resizing),
        (GesturePhase::Dragging | GesturePhase::Resizing, Release) => Some(GesturePhase::Idle),
        (_, Reset) => Some(GesturePhase::Idle),
        _ => None,
    }
}
