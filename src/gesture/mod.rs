//! Pointer gesture tracking for drag and resize of the crop selection.

mod engine;
mod handle;
mod phase;
mod snapshot;

pub use engine::GestureEngine;
pub use handle::{CropHandle, HandleAxes, HandleTraits};
pub use phase::{next_phase, GestureEvent, GesturePhase};
