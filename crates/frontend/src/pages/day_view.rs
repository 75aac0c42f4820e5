use dioxus::prelude::*;
use shotboard_shared::aggregate::{fixed1, ScoreBand};
use shotboard_shared::models::{DayStats, RelayStats};

use crate::api::{require_token, ApiClient};
use crate::dates;
use crate::pages::{error_notice, loading_notice};
use crate::session::Session;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct RelayCard {
    pub set_id: u32,
    pub shots: u32,
    pub total: String,
    pub best: String,
    pub average: String,
}

pub fn relay_cards(relays: &[RelayStats]) -> Vec<RelayCard> {
    relays
        .iter()
        .enumerate()
        .map(|(i, r)| RelayCard {
            set_id: i as u32 + 1,
            shots: r.total_shots,
            total: fixed1(r.total_score),
            best: fixed1(r.best_score),
            average: fixed1(r.average_score),
        })
        .collect()
}

pub fn sighter_labels(day: &DayStats) -> Vec<String> {
    day.list_of_sighters
        .iter()
        .map(|s| fixed1(s.primary_score))
        .collect()
}

#[component]
pub fn DayPage(date: ReadSignal<String>) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let nav = navigator();

    let day = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        let date = date();
        async move {
            let token = require_token(&session)?;
            api.shots_by_day(&token, &date).await
        }
    });

    let title = dates::long_date(&date.read());

    let body = match &*day.read() {
        Some(Ok(stats)) => {
            let cards = relay_cards(&stats.list_of_relays);
            let sighters = sighter_labels(stats);
            let best = fixed1(stats.best_score);
            let band = ScoreBand::of(stats.best_score).css_class();
            let total_shots = stats.total_shots;
            let total_sighters = stats.total_sighters;
            rsx! {
                div { class: "day-summary",
                    span { "Total shots: {total_shots}" }
                    span { "Sighters: {total_sighters}" }
                    span { "Best score: " span { class: "day-best {band}", "{best}" } }
                }
                if cards.is_empty() {
                    p { class: "muted", "No sets recorded on this day." }
                }
                div { class: "relay-cards",
                    for card in cards {
                        div { key: "{card.set_id}", class: "card relay-card",
                            h3 { "Set {card.set_id}" }
                            div { class: "relay-stats",
                                span { "Shots: {card.shots}" }
                                span { "Total: {card.total}" }
                                span { "Best: {card.best}" }
                                span { "Avg: {card.average}" }
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    nav.push(Route::SetView { date: date(), set_id: card.set_id });
                                },
                                "View Set"
                            }
                        }
                    }
                }
                if !sighters.is_empty() {
                    section { class: "sighters",
                        h4 { "Sighters" }
                        div { class: "badge-row",
                            for label in sighters {
                                span { class: "badge badge-secondary", "{label}" }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => error_notice(e),
        None => loading_notice(),
    };

    rsx! {
        div { class: "page day-view",
            div { class: "page-header",
                Link { class: "btn btn-outline", to: Route::Dashboard {}, "← Dashboard" }
                h2 { "{title}" }
            }
            section { class: "card", {body} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotboard_shared::models::Shot;

    fn day() -> DayStats {
        serde_json::from_str(
            r#"{"day":"2024-05-06","total_shots":20,"total_sighters":2,"best_score":196.35,
                "list_of_relays":[
                  {"total_shots":10,"total_score":98.4,"best_score":10.6,"average_score":9.84,"list_of_shots":[]},
                  {"total_shots":10,"total_score":97.95,"best_score":10.4,"average_score":9.795,"list_of_shots":[]}],
                "list_of_sighters":[{"primary_score":9.7,"secondary_score":0.0},{"primary_score":10.1,"secondary_score":0.0}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_relay_cards() {
        let cards = relay_cards(&day().list_of_relays);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].set_id, 1);
        assert_eq!(cards[0].total, "98.4");
        assert_eq!(cards[1].set_id, 2);
        assert_eq!(cards[1].best, "10.4");
    }

    #[test]
    fn test_sighter_labels() {
        assert_eq!(sighter_labels(&day()), vec!["9.7", "10.1"]);
    }

    #[test]
    fn test_no_sighters() {
        let mut d = day();
        d.list_of_sighters = Vec::<Shot>::new();
        assert!(sighter_labels(&d).is_empty());
    }
}
