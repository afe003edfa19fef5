pub mod constants;
pub mod mesh;
pub mod progress;
pub mod sections;
pub mod state;
pub mod tween;

pub use mesh::*;
pub use progress::*;
pub use sections::*;
pub use state::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static OVERLAY_WGSL: &str = include_str!("../../shaders/overlay.wgsl");
