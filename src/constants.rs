/// Page wiring and rendering constants.
// DOM hooks, matching the page markup
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const LOADING_BAR_SELECTOR: &str = ".loading-bar";
pub const LOADING_BAR_ENDED_CLASS: &str = "ended";
pub const BODY_LOADED_CLASS: &str = "loaded";

// Showcase asset
pub const MODEL_URL: &str = "assets/donut/scene.gltf";

// Completion sequence: wait this long after the last item before fading
pub const COMPLETION_DELAY_MS: i32 = 500;

// Render resolution cap
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Lighting: white ambient plus one directional light shining from this
// direction toward the origin
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 2.0, 0.0];
