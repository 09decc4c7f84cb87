//! Pixel geometry of a rendered grid.
//!
//! Dots sit on a square lattice inset by the dot radius, so dot `(0, 0)` is
//! centred at `(r, r)` and dot `(size-1, size-1)` at `(G-r, G-r)` for a grid
//! rendered `G` pixels wide.

use super::LatticePoint;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{instrument, trace};

/// Fixed visual parameters of one grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize)]
pub struct GridLayout {
    /// Radius of a rendered dot, in pixels.
    dot_radius_px: f64,
    /// Side length of the rendered square, in pixels.
    grid_size_px: f64,
    /// Hit radius as a fraction of the dot separation, in `(0, 1]`.
    click_threshold_ratio: f64,
    /// Dots along each side.
    size: u32,
}

impl GridLayout {
    /// Creates a validated layout.
    #[instrument]
    pub fn new(
        dot_radius_px: f64,
        grid_size_px: f64,
        click_threshold_ratio: f64,
        size: u32,
    ) -> Result<Self, LayoutError> {
        if !dot_radius_px.is_finite() || dot_radius_px < 0.0 {
            return Err(LayoutError::new(format!(
                "Dot radius must be a finite non-negative number, got {dot_radius_px}"
            )));
        }
        if !grid_size_px.is_finite() || grid_size_px <= 2.0 * dot_radius_px {
            return Err(LayoutError::new(format!(
                "Grid size {grid_size_px} must exceed twice the dot radius {dot_radius_px}"
            )));
        }
        if !(click_threshold_ratio > 0.0 && click_threshold_ratio <= 1.0) {
            return Err(LayoutError::new(format!(
                "Click threshold ratio must be in (0, 1], got {click_threshold_ratio}"
            )));
        }
        if size < 2 {
            return Err(LayoutError::new(format!(
                "A pointer layout needs at least 2 dots per side, got {size}"
            )));
        }

        Ok(Self {
            dot_radius_px,
            grid_size_px,
            click_threshold_ratio,
            size,
        })
    }

    /// Number of dot-to-dot gaps along one side.
    pub fn lattice_spans(&self) -> u32 {
        self.size - 1
    }

    /// Distance between neighbouring dot centres.
    pub fn dot_separation_px(&self) -> f64 {
        (self.grid_size_px - 2.0 * self.dot_radius_px) / f64::from(self.lattice_spans())
    }

    /// Largest pointer distance from a dot centre that still counts as a hit.
    pub fn hit_radius_px(&self) -> f64 {
        self.click_threshold_ratio * self.dot_separation_px()
    }

    /// Pixel position of a dot centre.
    pub fn dot_center(&self, point: LatticePoint) -> (f64, f64) {
        let sep = self.dot_separation_px();
        (
            self.dot_radius_px + f64::from(point.x) * sep,
            self.dot_radius_px + f64::from(point.y) * sep,
        )
    }

    /// Maps a pointer position to the dot under it, if it is close enough.
    ///
    /// Positions between dots, or outside the hit radius of the nearest dot,
    /// are not grid interactions and yield `None`.
    #[instrument(skip(self))]
    pub fn coordinate_to_lattice_point(&self, pixel_x: f64, pixel_y: f64) -> Option<LatticePoint> {
        let point = LatticePoint::new(self.nearest_index(pixel_x), self.nearest_index(pixel_y));

        let (cx, cy) = self.dot_center(point);
        let distance = (pixel_x - cx).hypot(pixel_y - cy);

        // NaN distances fail this comparison too.
        if distance < self.hit_radius_px() {
            trace!(%point, distance, "Pointer hit");
            Some(point)
        } else {
            trace!(%point, distance, "Pointer missed");
            None
        }
    }

    fn nearest_index(&self, pixel: f64) -> u32 {
        let index = ((pixel - self.dot_radius_px) / self.dot_separation_px()).round();
        // Saturating cast: NaN becomes 0 and is rejected by the distance test.
        index.clamp(0.0, f64::from(self.lattice_spans())) as u32
    }
}

/// Invalid layout parameters.
#[derive(Debug, Clone, Display, Error)]
#[display("Layout error: {} at {}:{}", message, file, line)]
pub struct LayoutError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LayoutError {
    /// Creates a new layout error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
