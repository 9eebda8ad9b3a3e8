mod pointer;

pub use pointer::{pointer_position, PointerInput, PointerTarget};
