use crate::models::{Discipline, Position, Shot};
use crate::target::{target_scale, CENTER, VIEWBOX_SIZE};

/// Display units per millimeter of shot offset.
pub const UNITS_PER_MM: f64 = 4.0;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;
pub const ZOOM_DEFAULT: f64 = 1.0;

/// Map a shot onto display coordinates. The y axis is flipped: positive
/// `y_mm` is up on the target, positive SVG y is down.
pub fn project(shot: &Shot, discipline: Discipline) -> Position {
    let scale = UNITS_PER_MM * target_scale(discipline);
    Position {
        x: CENTER + shot.x_mm.unwrap_or(0.0) * scale,
        y: CENTER - shot.y_mm.unwrap_or(0.0) * scale,
    }
}

/// Zoom actually applied to the ring group.
pub fn final_zoom(zoom: f64, discipline: Discipline) -> f64 {
    zoom * target_scale(discipline)
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

// Round to the step grid so repeated +/-0.1 never accumulates float error.
fn snap(zoom: f64) -> f64 {
    (zoom / ZOOM_STEP).round() * ZOOM_STEP
}

pub fn zoom_in(zoom: f64) -> f64 {
    clamp_zoom(snap(zoom + ZOOM_STEP))
}

pub fn zoom_out(zoom: f64) -> f64 {
    clamp_zoom(snap(zoom - ZOOM_STEP))
}

pub fn can_zoom_in(zoom: f64) -> bool {
    zoom < ZOOM_MAX
}

pub fn can_zoom_out(zoom: f64) -> bool {
    zoom > ZOOM_MIN
}

/// Zoom readout, e.g. `1.3` -> `130`.
pub fn zoom_percent(zoom: f64) -> u32 {
    (zoom * 100.0).round() as u32
}

/// `scale(s) translate(t, t)` transform that keeps the viewbox center fixed.
///
/// SVG scales about the top-left origin, so the translation (expressed in
/// pre-scale units) pulls the scaled content back to the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate: f64,
}

impl ViewTransform {
    pub fn centered(scale: f64) -> Self {
        let offset = (VIEWBOX_SIZE - VIEWBOX_SIZE * scale) / 2.0;
        ViewTransform {
            scale,
            translate: offset / scale,
        }
    }

    /// Where a point in the group's local space lands in the viewbox.
    pub fn apply(&self, p: Position) -> Position {
        Position {
            x: self.scale * (p.x + self.translate),
            y: self.scale * (p.y + self.translate),
        }
    }

    pub fn svg_attr(&self) -> String {
        format!(
            "scale({}) translate({}, {})",
            self.scale, self.translate, self.translate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_project_missing_coordinates_is_center() {
        let p = project(&Shot::new(10.9, 0.0), Discipline::Rifle);
        assert!(approx(p.x, 100.0));
        assert!(approx(p.y, 100.0));
    }

    #[test]
    fn test_project_rifle_inverts_y() {
        let shot = Shot::new(9.5, 0.0).at(2.0, 3.0);
        let p = project(&shot, Discipline::Rifle);
        assert!(approx(p.x, 108.0));
        assert!(approx(p.y, 88.0));
    }

    #[test]
    fn test_project_pistol_is_precompressed() {
        let shot = Shot::new(9.0, 0.3).at(10.0, -5.0);
        let p = project(&shot, Discipline::Pistol);
        assert!(approx(p.x, 112.0));
        assert!(approx(p.y, 106.0));
    }

    #[test]
    fn test_final_zoom() {
        assert!(approx(final_zoom(2.0, Discipline::Rifle), 2.0));
        assert!(approx(final_zoom(2.0, Discipline::Pistol), 0.6));
        assert!(approx(final_zoom(0.5, Discipline::Pistol), 0.15));
    }

    #[test]
    fn test_center_is_fixed_for_every_zoom() {
        let center = Position { x: CENTER, y: CENTER };
        for step in 0..=25 {
            let zoom = ZOOM_MIN + step as f64 * ZOOM_STEP;
            for d in [Discipline::Rifle, Discipline::Pistol] {
                let t = ViewTransform::centered(final_zoom(zoom, d));
                let p = t.apply(center);
                assert!((p.x - CENTER).abs() < 1e-9, "zoom {zoom} {d}");
                assert!((p.y - CENTER).abs() < 1e-9, "zoom {zoom} {d}");
            }
        }
    }

    #[test]
    fn test_shot_group_lines_up_with_rings() {
        // Rings use final zoom on raw ring-space offsets; shots are already
        // pre-compressed and only need the user zoom.
        let shot = Shot::new(8.0, 0.2).at(12.0, 7.5);
        for zoom in [0.5, 1.0, 2.3, 3.0] {
            let d = Discipline::Pistol;
            let ring_space = Position {
                x: CENTER + 12.0 * UNITS_PER_MM,
                y: CENTER - 7.5 * UNITS_PER_MM,
            };
            let via_rings = ViewTransform::centered(final_zoom(zoom, d)).apply(ring_space);
            let via_shots = ViewTransform::centered(zoom).apply(project(&shot, d));
            assert!(approx(via_rings.x, via_shots.x));
            assert!(approx(via_rings.y, via_shots.y));
        }
    }

    #[test]
    fn test_zoom_steps_stay_in_bounds() {
        let mut z = ZOOM_DEFAULT;
        for _ in 0..40 {
            z = zoom_in(z);
        }
        assert!(approx(z, ZOOM_MAX));
        assert!(!can_zoom_in(z));
        for _ in 0..40 {
            z = zoom_out(z);
        }
        assert!(approx(z, ZOOM_MIN));
        assert!(!can_zoom_out(z));
    }

    #[test]
    fn test_zoom_steps_do_not_drift() {
        let mut z = ZOOM_MIN;
        for _ in 0..7 {
            z = zoom_in(z);
        }
        assert_eq!(zoom_percent(z), 120);
        assert!(approx(z, 1.2));
    }

    #[test]
    fn test_clamp_zoom() {
        assert!(approx(clamp_zoom(0.1), ZOOM_MIN));
        assert!(approx(clamp_zoom(9.0), ZOOM_MAX));
        assert!(approx(clamp_zoom(1.7), 1.7));
    }

    #[test]
    fn test_svg_attr_identity() {
        assert_eq!(ViewTransform::centered(1.0).svg_attr(), "scale(1) translate(0, 0)");
    }
}
