use std::f64::consts::TAU;

use oculus_engine::canvas::DrawSurface;
use oculus_engine::coords::{Rect, Vec2, Viewport};

use super::config::EyeConfig;
use super::orientation::{distance_xy, gaze_degrees, target_rotation};
use super::rotation::{project, RotationState};
use super::section::draw_section;
use super::vector::Vec3;
use crate::event::{EventResult, UiEvent};
use crate::widget::Widget;

/// The eye widget: rotation state, a scratch vector and the frame routine.
#[derive(Debug, Clone)]
pub struct EyeRenderer {
    config: EyeConfig,
    rotation: RotationState,
    scratch: Vec3,
    /// Last pointer position, window logical px.
    pointer: Option<Vec2>,
}

impl EyeRenderer {
    pub fn new(config: EyeConfig) -> Self {
        Self {
            config,
            rotation: RotationState::default(),
            scratch: Vec3::zero(),
            pointer: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &EyeConfig {
        &self.config
    }

    #[inline]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Records a pointer move and recomputes the rotation.
    ///
    /// `container` is the eye's bounding rect and `viewport` the window size,
    /// both in logical px. Non-finite positions are ignored and leave the
    /// eye as it was; returns whether the move was applied.
    pub fn update(&mut self, pointer: Vec2, container: Rect, viewport: Viewport) -> bool {
        if !pointer.is_finite() {
            log::debug!("eye: ignoring non-finite pointer {pointer:?}");
            return false;
        }
        self.pointer = Some(pointer);
        self.rotation = target_rotation(
            pointer,
            container,
            viewport,
            self.config.effect_distance,
            self.config.eye_roll_restriction,
        );
        log::trace!(
            "eye: pointer ({:.1}, {:.1}) -> theta = phi = {:.5}",
            pointer.x,
            pointer.y,
            self.rotation.theta
        );
        true
    }

    /// Gaze angle for the current pointer, or `None` before the first move.
    pub fn gaze(&self, container: Rect) -> Option<f64> {
        let (dx, dy) = distance_xy(self.pointer?, container);
        Some(gaze_degrees(dx, dy))
    }

    /// Draws one full frame into `surface` (canvas logical space).
    pub fn render(&mut self, surface: &mut dyn DrawSurface, container: Rect) {
        let c = &self.config;
        let radius = c.radius();

        surface.save();
        // Clears with the context's transparent fill.
        surface.fill_rect(0.0, 0.0, c.width(), c.height());
        surface.translate((c.length >> 1) as f64, (c.length >> 1) as f64);
        surface.scale(1.0, -1.0);

        if let Some(deg) = self.gaze(container) {
            surface.rotate(-deg.to_radians());
        }

        // Sclera.
        surface.begin_path();
        surface.arc(0.0, 0.0, radius, 0.0, TAU, false);
        surface.set_fill_style(c.colors.sclera.fill);
        surface.fill();

        // Iris, then pupil.
        surface.set_line_width(c.line_width);
        let (iris, pupil) = c.section_offsets();
        let n = project(&mut self.scratch, Vec3::Z, self.rotation);
        draw_section(surface, n, iris, radius, c.colors.iris, c.fill);
        let n = project(&mut self.scratch, Vec3::Z, self.rotation);
        draw_section(surface, n, pupil, radius, c.colors.pupil, c.fill);

        // Sclera outline.
        surface.set_stroke_style(c.colors.sclera.stroke);
        surface.set_line_width(c.line_width / 2.0);
        surface.begin_path();
        surface.arc(0.0, 0.0, radius, 0.0, TAU, false);
        surface.stroke();

        surface.restore();
    }
}

impl Default for EyeRenderer {
    fn default() -> Self {
        Self::new(EyeConfig::default())
    }
}

impl Widget for EyeRenderer {
    fn paint(&mut self, surface: &mut dyn DrawSurface, rect: Rect) {
        self.render(surface, rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::PointerMoved { pos, viewport } => {
                if self.update(*pos, rect, *viewport) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }
}
