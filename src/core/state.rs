// Application state shared by the scroll handler, the loader, and the
// frame loop.
//
// Everything here is platform-free: time is an explicit `now` in seconds on
// the caller's clock, so the same code runs under the wasm frame loop and
// under native tests.

use glam::{EulerRot, Mat4, Vec3};

use crate::core::constants::{
    BOB_AMPLITUDE, BOB_RATE, BOB_SINK, FADE_DELAY_SEC, FADE_DURATION_SEC, MODEL_SCALE,
    MODEL_TILT_X, SECTION_TWEEN_DURATION_SEC,
};
use crate::core::sections::{transform_for, SectionTracker};
use crate::core::tween::{Channel, Easing};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pose of the loaded model. Mutated in place by the animator and the
/// per-frame bobbing; read by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct ModelInstance {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl ModelInstance {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Two-state model lifecycle: every consumer branches on this instead of
/// null-checking a shared reference.
#[derive(Clone, Copy, Debug)]
pub enum ModelLifecycle {
    Pending,
    Ready(ModelInstance),
}

impl ModelLifecycle {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelLifecycle::Ready(_))
    }
}

/// Deterministic idle bobbing offset at `elapsed` seconds.
///
/// A pure function of elapsed time (not delta-accumulated), so it is
/// frame-rate independent and resumes correctly after pauses.
pub fn bob_offset(elapsed: f32) -> f32 {
    (elapsed * BOB_RATE).sin() * BOB_AMPLITUDE - BOB_SINK
}

/// All mutable app state: the section tracker, the model lifecycle, and the
/// tween channels driving the model pose and the loading-overlay fade.
pub struct AppState {
    pub sections: SectionTracker,
    pub model: ModelLifecycle,
    rotation_z: Channel,
    position_x: Channel,
    overlay_alpha: Channel,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sections: SectionTracker::new(),
            model: ModelLifecycle::Pending,
            rotation_z: Channel::new(0.0),
            position_x: Channel::new(0.0),
            overlay_alpha: Channel::new(1.0),
        }
    }

    /// Feed a scroll sample; starts a section transition when the derived
    /// section changes.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_h: f32, now: f32) {
        if let Some(section) = self.sections.update(scroll_y, viewport_h) {
            self.enter_section(section, now);
        }
    }

    /// Animate the model toward a section's transform.
    ///
    /// Safe no-op while the model is still pending; the tracker has already
    /// recorded the section, so the placement on arrival picks it up. Each
    /// property re-targets independently, superseding any in-flight tween.
    pub fn enter_section(&mut self, section: usize, now: f32) {
        if !self.model.is_ready() {
            return;
        }
        let target = transform_for(section);
        self.rotation_z.go_to(
            target.rotation_z,
            now,
            SECTION_TWEEN_DURATION_SEC,
            0.0,
            Easing::QuadInOut,
        );
        self.position_x.go_to(
            target.position_x,
            now,
            SECTION_TWEEN_DURATION_SEC,
            0.0,
            Easing::QuadInOut,
        );
    }

    /// Install the freshly loaded model, posed at the current section.
    pub fn model_ready(&mut self) {
        let target = transform_for(self.sections.current());
        self.rotation_z.set(target.rotation_z);
        self.position_x.set(target.position_x);
        self.model = ModelLifecycle::Ready(ModelInstance {
            position: Vec3::new(target.position_x, 0.0, 0.0),
            rotation: Vec3::new(MODEL_TILT_X, 0.0, target.rotation_z),
            scale: MODEL_SCALE,
        });
    }

    /// Start the loading-overlay fade toward fully transparent.
    pub fn begin_fade_out(&mut self, now: f32) {
        self.overlay_alpha
            .go_to(0.0, now, FADE_DURATION_SEC, FADE_DELAY_SEC, Easing::QuadOut);
    }

    /// Per-frame update: sample the tween channels into the model pose and
    /// apply the bobbing offset.
    pub fn advance(&mut self, now: f32) {
        let rotation_z = self.rotation_z.sample(now);
        let position_x = self.position_x.sample(now);
        self.overlay_alpha.sample(now);
        if let ModelLifecycle::Ready(m) = &mut self.model {
            m.rotation.z = rotation_z;
            m.position.x = position_x;
            m.position.y = bob_offset(now);
        }
    }

    pub fn overlay_alpha(&self) -> f32 {
        self.overlay_alpha.value()
    }

    /// Model matrix for the renderer, once the model exists.
    pub fn model_matrix(&self) -> Option<Mat4> {
        match &self.model {
            ModelLifecycle::Ready(m) => Some(m.model_matrix()),
            ModelLifecycle::Pending => None,
        }
    }
}
