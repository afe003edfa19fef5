/// Animation timing and model-pose constants.
///
/// These constants express intended behavior (durations, amplitudes, the
/// base pose) and keep magic numbers out of the code.
// Section transition tween
pub const SECTION_TWEEN_DURATION_SEC: f32 = 1.5;

// Idle bobbing: y = sin(t * BOB_RATE) * BOB_AMPLITUDE - BOB_SINK
pub const BOB_RATE: f32 = 0.5;
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const BOB_SINK: f32 = 0.1;

// Loading-overlay fade-out after completion
pub const FADE_DURATION_SEC: f32 = 3.0;
pub const FADE_DELAY_SEC: f32 = 1.0;

// Base pose applied when the model arrives
pub const MODEL_TILT_X: f32 = std::f32::consts::PI * 0.2;
pub const MODEL_SCALE: f32 = 8.5;
