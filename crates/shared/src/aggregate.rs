use crate::models::{Discipline, Shot};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTotals {
    pub primary: f64,
    pub secondary: f64,
}

pub fn totals(shots: &[Shot]) -> ScoreTotals {
    shots.iter().fold(ScoreTotals::default(), |acc, s| ScoreTotals {
        primary: acc.primary + s.primary_score,
        secondary: acc.secondary + s.secondary_score,
    })
}

/// Half-up rounding to an integer.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// One decimal place, ties away from zero.
///
/// `{:.1}` breaks exact ties to even. The only values that sit exactly on a
/// one-decimal tie are odd multiples of 0.25, so those are rounded by hand.
pub fn fixed1(value: f64) -> String {
    // -0.0 prints without a sign
    let value = if value == 0.0 { 0.0 } else { value };
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters.abs() % 2.0 == 1.0 {
        let tenths = ((value * 10.0).abs() + 0.5).copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{:.1}", value)
}

/// Label for a set, a set badge, or a whole sequence.
///
/// Pistol: `"92 (3.4)"`, the rounded ring total with the summed decimal
/// tiebreak. Rifle: `"94.5"`. Discipline comes from the sublist's first shot.
pub fn format_total(shots: &[Shot]) -> String {
    format_total_as(shots, Discipline::infer(shots))
}

/// `format_total` with the discipline already decided, e.g. by the first
/// shot of the enclosing sequence.
pub fn format_total_as(shots: &[Shot], discipline: Discipline) -> String {
    let t = totals(shots);
    match discipline {
        Discipline::Pistol => format!("{} ({})", round_half_up(t.primary), fixed1(t.secondary)),
        Discipline::Rifle => fixed1(t.primary),
    }
}

/// Main label plus optional sub-label for a single shot cell.
pub fn format_shot(shot: &Shot, discipline: Discipline) -> (String, Option<String>) {
    match discipline {
        Discipline::Pistol => (
            format!("{}", round_half_up(shot.primary_score)),
            Some(fixed1(shot.secondary_score)),
        ),
        Discipline::Rifle => (fixed1(shot.primary_score), None),
    }
}

/// Per-shot quality used to colour shot cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ShotGrade {
    pub fn of(score: f64) -> ShotGrade {
        if score >= 10.0 {
            ShotGrade::Excellent
        } else if score >= 9.8 {
            ShotGrade::Good
        } else if score >= 9.5 {
            ShotGrade::Fair
        } else {
            ShotGrade::Poor
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ShotGrade::Excellent => "grade-excellent",
            ShotGrade::Good => "grade-good",
            ShotGrade::Fair => "grade-fair",
            ShotGrade::Poor => "grade-poor",
        }
    }
}

/// Band for a 60-shot match total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> ScoreBand {
        if score >= 590.0 {
            ScoreBand::High
        } else if score >= 580.0 {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::High => "band-high",
            ScoreBand::Mid => "band-mid",
            ScoreBand::Low => "band-low",
        }
    }
}

/// Signed one-decimal delta, e.g. `+1.2` / `-0.4` / `+0.0`.
pub fn format_delta(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{}", fixed1(delta))
    } else {
        fixed1(delta)
    }
}
