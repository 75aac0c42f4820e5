use serde::{Deserialize, Serialize};

/// A single recorded shot.
///
/// Coordinates are millimeters from the target center with +y pointing up.
/// Missing coordinates render the shot at the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    #[serde(default)]
    pub x_mm: Option<f64>,
    #[serde(default)]
    pub y_mm: Option<f64>,
    pub primary_score: f64,
    pub secondary_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_time: Option<String>,
}

impl Shot {
    pub fn new(primary_score: f64, secondary_score: f64) -> Self {
        Shot {
            x_mm: None,
            y_mm: None,
            primary_score,
            secondary_score,
            shot_time: None,
        }
    }

    pub fn at(mut self, x_mm: f64, y_mm: f64) -> Self {
        self.x_mm = Some(x_mm);
        self.y_mm = Some(y_mm);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Rifle,
    Pistol,
}

impl Discipline {
    /// Classify a shot sequence from its first shot: a positive secondary
    /// score means pistol (inner/outer ring dual scoring).
    ///
    /// Only the leading shot is inspected; the rest of the list is trusted
    /// to be the same discipline.
    pub fn infer(shots: &[Shot]) -> Discipline {
        match shots.first() {
            Some(first) if first.secondary_score > 0.0 => Discipline::Pistol,
            _ => Discipline::Rifle,
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Rifle => write!(f, "Rifle"),
            Discipline::Pistol => write!(f, "Pistol"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One completed string of shots with server-side aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayStats {
    pub total_shots: u32,
    pub total_score: f64,
    pub best_score: f64,
    pub average_score: f64,
    #[serde(default)]
    pub list_of_shots: Vec<Shot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub day: String,
    pub total_shots: u32,
    pub total_sighters: u32,
    pub best_score: f64,
    #[serde(default)]
    pub list_of_relays: Vec<RelayStats>,
    #[serde(default)]
    pub list_of_sighters: Vec<Shot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub best_score: f64,
    pub average_score: f64,
    pub best_score_delta: f64,
    pub average_score_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub athlete_id: Option<i64>,
    #[serde(default)]
    pub is_admin: bool,
}

impl CurrentUser {
    /// Name shown in the top bar: full name when set, otherwise the login.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_empty_is_rifle() {
        assert_eq!(Discipline::infer(&[]), Discipline::Rifle);
    }

    #[test]
    fn test_infer_pistol_from_first_shot() {
        let shots = vec![Shot::new(9.0, 0.4), Shot::new(10.0, 0.0)];
        assert_eq!(Discipline::infer(&shots), Discipline::Pistol);
    }

    #[test]
    fn test_infer_ignores_later_shots() {
        // Only the leading shot decides
        let shots = vec![Shot::new(10.4, 0.0), Shot::new(9.0, 0.7)];
        assert_eq!(Discipline::infer(&shots), Discipline::Rifle);
    }

    #[test]
    fn test_shot_deserializes_without_coordinates() {
        let json = r#"{"primary_score":10.2,"secondary_score":0.0}"#;
        let shot: Shot = serde_json::from_str(json).unwrap();
        assert!(shot.x_mm.is_none());
        assert!(shot.y_mm.is_none());
        assert!((shot.primary_score - 10.2).abs() < 1e-9);
    }

    #[test]
    fn test_shot_deserializes_api_record() {
        let json = r#"{"shot_time":"2024-05-01T10:00:00","primary_score":9.8,"secondary_score":0.0,"x_mm":1.25,"y_mm":-0.5}"#;
        let shot: Shot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.x_mm, Some(1.25));
        assert_eq!(shot.y_mm, Some(-0.5));
        assert_eq!(shot.shot_time.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn test_day_stats_deserializes() {
        let json = r#"{"day":"2024-05-01","total_shots":62,"total_sighters":2,"best_score":104.3,
            "list_of_relays":[{"total_shots":60,"total_score":620.5,"best_score":104.3,"average_score":10.34,
            "list_of_shots":[{"primary_score":10.5,"secondary_score":0.0,"x_mm":0.3,"y_mm":0.1}]}],
            "list_of_sighters":[{"primary_score":9.9,"secondary_score":0.0}]}"#;
        let day: DayStats = serde_json::from_str(json).unwrap();
        assert_eq!(day.day, "2024-05-01");
        assert_eq!(day.list_of_relays.len(), 1);
        assert_eq!(day.list_of_relays[0].list_of_shots.len(), 1);
        assert_eq!(day.list_of_sighters.len(), 1);
    }

    #[test]
    fn test_current_user_display_name() {
        let mut user = CurrentUser {
            username: "jdoe".to_string(),
            email: None,
            full_name: Some("Jane Doe".to_string()),
            athlete_id: Some(3),
            is_admin: false,
        };
        assert_eq!(user.display_name(), "Jane Doe");
        user.full_name = Some("  ".to_string());
        assert_eq!(user.display_name(), "jdoe");
    }
}
