pub mod config;
pub mod crop;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod input;
pub mod logging;
pub mod presentation;

pub use config::{load_crop_config, CropConfig, SizeLimits};
pub use crop::{CropUnit, Rectangle};
pub use editor::CropEditor;
pub use error::{CropError, CropResult};
pub use geometry::{ContainerBounds, ElementOffset, PagePoint};
pub use gesture::{CropHandle, GestureEngine, GesturePhase};
pub use host::{CropHost, CropObserver, HostElement, LoadedImage};
pub use input::{PointerInput, PointerTarget};
