// src/lib.rs

pub mod canvas;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod intersection;
pub mod occluders;
pub mod scene;
pub mod selection;
pub mod shadow;

pub use canvas::{Canvas, Color, DrawCommand, RecordingCanvas};
pub use config::{ConfigError, SessionConfig};
pub use geometry::{GridPoint, Point2, ShadowPolygon, Viewport};
pub use occluders::{OccluderSet, Segment};
pub use scene::{FrameInput, InputEvent, Scene};
pub use selection::{Mode, SelectionEvent, StoreCommand};
