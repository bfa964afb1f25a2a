//! The eye widget.
//!
//! A sphere seen from a fixed camera: a sclera disc plus two circular
//! cross-sections (iris, pupil) of the sphere, rotated towards the pointer
//! and projected to canvas ellipses.

mod config;
mod orientation;
mod renderer;
mod rotation;
mod section;
mod vector;

pub use config::{EyeColors, EyeConfig, SectionStyle, IRIS_HEX, PUPIL_HEX, SCLERA_HEX};
pub use orientation::{distance_xy, gaze_degrees, max_distance_of_effect, orientation, target_rotation};
pub use renderer::EyeRenderer;
pub use rotation::{project, restricted_limit, RotationState, CENTER, LIMIT};
pub use section::{draw_section, start_angle_cosine, SectionEllipse};
pub use vector::Vec3;
