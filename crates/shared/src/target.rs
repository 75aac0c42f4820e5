//! Target face geometry for the 200x200 display viewbox.
//!
//! Ring radii are twice the ISSF half-widths in millimeters so the 10m
//! air rifle face fills the viewbox. The pistol face is pre-compressed
//! with `target_scale` before zoom is applied.

use crate::models::Discipline;

pub const VIEWBOX_SIZE: f64 = 200.0;
pub const CENTER: f64 = VIEWBOX_SIZE / 2.0;

pub const RING_STROKE_WIDTH: f64 = 1.0;

const WHITE: &str = "#f8fafc";
const BLACK: &str = "#1e293b";
const GREY: &str = "#d1d5db";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
}

const fn white(radius: f64) -> Ring {
    Ring { radius, fill: WHITE, stroke: GREY }
}

const fn black(radius: f64) -> Ring {
    Ring { radius, fill: BLACK, stroke: WHITE }
}

const fn dot(radius: f64) -> Ring {
    Ring { radius, fill: WHITE, stroke: WHITE }
}

// Outermost first, so painting in order leaves inner rings on top.
const RIFLE_RINGS: [Ring; 9] = [
    white(91.0),
    white(81.0),
    white(71.0),
    black(61.0),
    black(51.0),
    black(41.0),
    black(31.0),
    black(21.0),
    black(11.0),
];

const PISTOL_RINGS: [Ring; 10] = [
    white(311.0),
    white(279.0),
    white(247.0),
    white(215.0),
    white(183.0),
    white(151.0),
    black(119.0),
    black(87.0),
    black(55.0),
    black(23.0),
];

const RIFLE_DOT: Ring = dot(1.0);
const PISTOL_DOT: Ring = dot(10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFace {
    pub rings: &'static [Ring],
    pub center_dot: Ring,
}

/// Rings and center dot to paint for a discipline.
pub fn target_face(discipline: Discipline) -> TargetFace {
    match discipline {
        Discipline::Rifle => TargetFace {
            rings: &RIFLE_RINGS,
            center_dot: RIFLE_DOT,
        },
        Discipline::Pistol => TargetFace {
            rings: &PISTOL_RINGS,
            center_dot: PISTOL_DOT,
        },
    }
}

/// Pre-compression applied before the interactive zoom. Pistol rings are
/// far larger than the viewbox.
pub fn target_scale(discipline: Discipline) -> f64 {
    match discipline {
        Discipline::Rifle => 1.0,
        Discipline::Pistol => 0.3,
    }
}

/// Shot marker radius in ring units.
pub fn shot_radius(discipline: Discipline) -> f64 {
    match discipline {
        Discipline::Rifle => 8.0,
        Discipline::Pistol => 18.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radii(face: &TargetFace) -> Vec<f64> {
        face.rings.iter().map(|r| r.radius).collect()
    }

    #[test]
    fn test_rifle_face() {
        let face = target_face(Discipline::Rifle);
        assert_eq!(
            radii(&face),
            vec![91.0, 81.0, 71.0, 61.0, 51.0, 41.0, 31.0, 21.0, 11.0]
        );
        assert!((face.center_dot.radius - 1.0).abs() < 1e-9);
        let white_count = face.rings.iter().filter(|r| r.fill == WHITE).count();
        assert_eq!(white_count, 3);
    }

    #[test]
    fn test_pistol_face() {
        let face = target_face(Discipline::Pistol);
        assert_eq!(
            radii(&face),
            vec![311.0, 279.0, 247.0, 215.0, 183.0, 151.0, 119.0, 87.0, 55.0, 23.0]
        );
        assert!((face.center_dot.radius - 10.0).abs() < 1e-9);
        let black_count = face.rings.iter().filter(|r| r.fill == BLACK).count();
        assert_eq!(black_count, 4);
    }

    #[test]
    fn test_rings_are_strictly_decreasing() {
        for d in [Discipline::Rifle, Discipline::Pistol] {
            let r = radii(&target_face(d));
            assert!(r.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn test_black_rings_have_white_stroke() {
        let face = target_face(Discipline::Rifle);
        for ring in face.rings.iter().filter(|r| r.fill == BLACK) {
            assert_eq!(ring.stroke, WHITE);
        }
    }

    #[test]
    fn test_discipline_constants() {
        assert!((target_scale(Discipline::Rifle) - 1.0).abs() < 1e-9);
        assert!((target_scale(Discipline::Pistol) - 0.3).abs() < 1e-9);
        assert!((shot_radius(Discipline::Rifle) - 8.0).abs() < 1e-9);
        assert!((shot_radius(Discipline::Pistol) - 18.0).abs() < 1e-9);
    }
}
