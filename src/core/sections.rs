// Scroll-to-section mapping and the per-section transform table.
//
// The page is a vertical stack of full-viewport sections; the model gets a
// target rotation and horizontal offset for each one. Mapping is pure so it
// can be tested off the wasm target.

/// Target pose for the showcase model within one page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTransform {
    pub rotation_z: f32,
    pub position_x: f32,
}

/// Ordered per-section transforms, indexed by section number.
pub const SECTION_TRANSFORMS: [SectionTransform; 3] = [
    SectionTransform {
        rotation_z: 0.45,
        position_x: 1.5,
    },
    SectionTransform {
        rotation_z: -0.45,
        position_x: -1.5,
    },
    SectionTransform {
        rotation_z: 0.0314,
        position_x: 0.0,
    },
];

/// Map a scroll offset to a section index.
///
/// The nearest section wins (`round(scroll_y / viewport_h)`), clamped to the
/// transform table so overscroll past the last section stays on it. A
/// non-positive viewport height maps everything to section 0.
pub fn compute_section(scroll_y: f32, viewport_h: f32) -> usize {
    if viewport_h <= 0.0 {
        return 0;
    }
    let raw = (scroll_y / viewport_h).round().max(0.0) as usize;
    raw.min(SECTION_TRANSFORMS.len() - 1)
}

/// Transform for a section index, clamped to the table bounds.
pub fn transform_for(section: usize) -> SectionTransform {
    SECTION_TRANSFORMS[section.min(SECTION_TRANSFORMS.len() - 1)]
}

/// Tracks the discrete section derived from a continuous scroll offset.
///
/// Holds the last computed index; scrolling within the same section is a
/// no-op so an in-flight transition is never restarted redundantly.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTracker {
    current: usize,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Recompute the section from a scroll sample.
    ///
    /// Returns `Some(index)` only when the section changed, which is the
    /// caller's cue to start a transition animation.
    pub fn update(&mut self, scroll_y: f32, viewport_h: f32) -> Option<usize> {
        let next = compute_section(scroll_y, viewport_h);
        if next != self.current {
            self.current = next;
            Some(next)
        } else {
            None
        }
    }
}
