use oculus_engine::paint::{Color, ColorParseError};

/// Stroke and fill colour of one drawn shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SectionStyle {
    pub stroke: Color,
    pub fill: Color,
}

impl SectionStyle {
    /// Parses `#rrggbb` / `#rrggbbaa` stroke and fill colours.
    pub fn from_hex(stroke: &str, fill: &str) -> Result<Self, ColorParseError> {
        Ok(Self { stroke: Color::from_hex(stroke)?, fill: Color::from_hex(fill)? })
    }
}

/// Built-in palette as `(stroke, fill)` hex pairs.
pub const SCLERA_HEX: (&str, &str) = ("#242323", "#fcfcfc");
pub const IRIS_HEX: (&str, &str) = ("#70bee6", "#70bee6");
pub const PUPIL_HEX: (&str, &str) = ("#242323", "#242323");

/// Colours of the eye.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyeColors {
    pub sclera: SectionStyle,
    pub iris: SectionStyle,
    pub pupil: SectionStyle,
}

impl EyeColors {
    /// Parses `(stroke, fill)` hex pairs for each part of the eye.
    pub fn from_hex(
        sclera: (&str, &str),
        iris: (&str, &str),
        pupil: (&str, &str),
    ) -> Result<Self, ColorParseError> {
        Ok(Self {
            sclera: SectionStyle::from_hex(sclera.0, sclera.1)?,
            iris: SectionStyle::from_hex(iris.0, iris.1)?,
            pupil: SectionStyle::from_hex(pupil.0, pupil.1)?,
        })
    }
}

impl Default for EyeColors {
    fn default() -> Self {
        Self::from_hex(SCLERA_HEX, IRIS_HEX, PUPIL_HEX).expect("built-in eye palette is valid hex")
    }
}

/// Geometry, colours and element ids of the eye widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeConfig {
    /// Canvas width and height, logical px.
    pub length: u32,
    pub line_width: f64,
    /// Angular resolution of the sections: the iris spans `2π/n`, the pupil `π/n`.
    pub nb_sections: u32,
    pub colors: EyeColors,
    /// Fill sections after stroking them.
    pub fill: bool,
    /// Multiplier on the window's larger dimension giving the distance at
    /// which the eye stops following the pointer.
    pub effect_distance: f64,
    /// Multiplier on the minimal rotation step giving the lowest orientation.
    pub eye_roll_restriction: f64,
    pub wrapper_id: String,
    pub canvas_id: String,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            length: 250,
            line_width: 2.0,
            nb_sections: 16,
            colors: EyeColors::default(),
            fill: true,
            effect_distance: 1.0,
            eye_roll_restriction: 120.0,
            wrapper_id: "wrapper-id".to_string(),
            canvas_id: "canvas-id".to_string(),
        }
    }
}

impl EyeConfig {
    /// Canvas side length as a float (logical px).
    #[inline]
    pub fn width(&self) -> f64 {
        self.length as f64
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.length as f64
    }

    /// Radius of the sclera disc: the canvas half-width minus the line width.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.width() / 2.0 - self.line_width
    }

    /// Section offsets `(iris, pupil)`: cosines of their half angles.
    pub fn section_offsets(&self) -> (f64, f64) {
        use std::f64::consts::PI;
        let n = self.nb_sections.max(1) as f64;
        ((2.0 / n * PI).cos(), (1.0 / n * PI).cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn default_geometry() {
        let c = EyeConfig::default();
        assert_eq!(c.length, 250);
        assert_eq!(c.radius(), 123.0);
        assert_eq!(c.wrapper_id, "wrapper-id");
        assert_eq!(c.canvas_id, "canvas-id");
        assert!(c.fill);
    }

    #[test]
    fn default_palette_parses_to_expected_bytes() {
        let ink = Color::from_srgb_u8(0x24, 0x23, 0x23, 0xff);
        let blue = Color::from_srgb_u8(0x70, 0xbe, 0xe6, 0xff);
        let expected = EyeColors {
            sclera: SectionStyle { stroke: ink, fill: Color::from_srgb_u8(0xfc, 0xfc, 0xfc, 0xff) },
            iris: SectionStyle { stroke: blue, fill: blue },
            pupil: SectionStyle { stroke: ink, fill: ink },
        };
        assert_eq!(EyeColors::default(), expected);
    }

    #[test]
    fn bad_hex_is_reported() {
        assert!(SectionStyle::from_hex("#242323", "fcfcfc").is_err());
        assert!(EyeColors::from_hex(SCLERA_HEX, ("#70bee6", "#zzzzzz"), PUPIL_HEX).is_err());
    }

    #[test]
    fn section_offsets_for_sixteen_sections() {
        let (iris, pupil) = EyeConfig::default().section_offsets();
        assert!((iris - (PI / 8.0).cos()).abs() < 1e-12);
        assert!((pupil - (PI / 16.0).cos()).abs() < 1e-12);
        assert!(iris < pupil);
    }
}
