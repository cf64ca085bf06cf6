//! Plaque geometry parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Minimum base-layer thickness in mm.
///
/// The base never drops below this even when the requested total thickness
/// is smaller than the dot height, so the plaque stays structurally sound.
pub const MIN_BASE_MM: f64 = 2.0;

/// Parameters for plaque generation.
///
/// All fields are independent inputs with documented defaults; the only
/// derived quantity is the base-layer thickness,
/// `max(total_mm - dot_height_mm, 2.0)`.
///
/// Invalid values (non-finite or non-positive dimensions, a zero segment
/// count) fall back to their defaults when the plaque is built; see
/// [`PlaqueParams::sanitized`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaqueParams {
    /// Total plaque thickness in inches (base + dots).
    pub total_thickness_in: f64,

    /// Height of a raised dot above the base, in mm.
    pub dot_height_mm: f64,

    /// Diameter of a raised dot, in mm.
    pub dot_diameter_mm: f64,

    /// Lateral tessellation segments per dot cylinder.
    /// Expected range 8-64; the range is the caller's responsibility.
    pub segments: usize,

    /// Margin around the cell grid, in mm.
    pub margin_mm: f64,

    /// Width of one Braille cell footprint, in mm.
    pub cell_width_mm: f64,

    /// Height of one Braille cell footprint, in mm.
    pub cell_height_mm: f64,

    /// Horizontal distance between the two dot columns of a cell, in mm.
    pub dot_pitch_x_mm: f64,

    /// Vertical distance between adjacent dot rows of a cell, in mm.
    pub dot_pitch_y_mm: f64,
}

impl Default for PlaqueParams {
    fn default() -> Self {
        Self {
            total_thickness_in: 0.2,
            dot_height_mm: 0.6,
            dot_diameter_mm: 1.5,
            segments: 24,
            margin_mm: 4.0,
            cell_width_mm: 6.0,
            cell_height_mm: 10.0,
            dot_pitch_x_mm: 2.5,
            dot_pitch_y_mm: 2.5,
        }
    }
}

impl PlaqueParams {
    /// Total plaque thickness converted to mm.
    #[must_use]
    pub fn total_mm(&self) -> f64 {
        self.total_thickness_in * MM_PER_INCH
    }

    /// Base-layer thickness in mm, floored at [`MIN_BASE_MM`].
    #[must_use]
    pub fn base_mm(&self) -> f64 {
        (self.total_mm() - self.dot_height_mm).max(MIN_BASE_MM)
    }

    /// Dot radius in mm.
    #[must_use]
    pub fn dot_radius_mm(&self) -> f64 {
        self.dot_diameter_mm / 2.0
    }

    /// Replace invalid fields with their defaults.
    ///
    /// Every dimensional field that is non-finite or non-positive falls
    /// back to its default, as does a zero segment count. Applied once at
    /// the top of plaque building so downstream geometry never sees NaN
    /// coordinates or zero-segment cylinders.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();

        fn dim(value: f64, default: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        }

        Self {
            total_thickness_in: dim(self.total_thickness_in, defaults.total_thickness_in),
            dot_height_mm: dim(self.dot_height_mm, defaults.dot_height_mm),
            dot_diameter_mm: dim(self.dot_diameter_mm, defaults.dot_diameter_mm),
            segments: if self.segments == 0 {
                defaults.segments
            } else {
                self.segments
            },
            margin_mm: dim(self.margin_mm, defaults.margin_mm),
            cell_width_mm: dim(self.cell_width_mm, defaults.cell_width_mm),
            cell_height_mm: dim(self.cell_height_mm, defaults.cell_height_mm),
            dot_pitch_x_mm: dim(self.dot_pitch_x_mm, defaults.dot_pitch_x_mm),
            dot_pitch_y_mm: dim(self.dot_pitch_y_mm, defaults.dot_pitch_y_mm),
        }
    }

    /// Set total thickness in inches.
    #[must_use]
    pub const fn with_total_thickness_in(mut self, inches: f64) -> Self {
        self.total_thickness_in = inches;
        self
    }

    /// Set dot height in mm.
    #[must_use]
    pub const fn with_dot_height(mut self, mm: f64) -> Self {
        self.dot_height_mm = mm;
        self
    }

    /// Set dot diameter in mm.
    #[must_use]
    pub const fn with_dot_diameter(mut self, mm: f64) -> Self {
        self.dot_diameter_mm = mm;
        self
    }

    /// Set cylinder tessellation segments.
    #[must_use]
    pub const fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set grid margin in mm.
    #[must_use]
    pub const fn with_margin(mut self, mm: f64) -> Self {
        self.margin_mm = mm;
        self
    }
}
