use dioxus::prelude::*;
use shotboard_shared::aggregate::{fixed1, format_delta, ScoreBand};
use shotboard_shared::models::{DayStats, Stats};

use crate::api::{require_token, ApiClient};
use crate::components::period_selector::{Period, PeriodSelector};
use crate::config::AppConfig;
use crate::dates;
use crate::pages::{error_notice, loading_notice};
use crate::session::Session;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub delta: String,
}

pub fn stat_cards(stats: &Stats) -> [StatCard; 2] {
    [
        StatCard {
            title: "Best Score",
            value: fixed1(stats.best_score),
            delta: format_delta(stats.best_score_delta),
        },
        StatCard {
            title: "Average Score",
            value: fixed1(stats.average_score),
            delta: format_delta(stats.average_score_delta),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayChip {
    pub date: String,
    pub set_id: u32,
    pub total: String,
    pub band: &'static str,
    pub shots: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub date: String,
    pub title: String,
    pub set_count: usize,
    pub sighters: u32,
    pub best: String,
    pub best_band: &'static str,
    pub relays: Vec<RelayChip>,
}

/// Recent-days list entries. Relays link to set views by 1-based position.
pub fn day_rows(days: &[DayStats]) -> Vec<DayRow> {
    days.iter()
        .map(|day| DayRow {
            date: day.day.clone(),
            title: dates::long_date(&day.day),
            set_count: day.list_of_relays.len(),
            sighters: day.total_sighters,
            best: fixed1(day.best_score),
            best_band: ScoreBand::of(day.best_score).css_class(),
            relays: day
                .list_of_relays
                .iter()
                .enumerate()
                .map(|(i, relay)| RelayChip {
                    date: day.day.clone(),
                    set_id: i as u32 + 1,
                    total: fixed1(relay.total_score),
                    band: ScoreBand::of(relay.total_score).css_class(),
                    shots: relay.total_shots,
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let config = use_context::<AppConfig>();
    let nav = navigator();

    let period = use_signal(|| Period::from_days(config.default_period_days));

    let stats_api = api.clone();
    let stats_session = session.clone();
    let stats = use_resource(move || {
        let api = stats_api.clone();
        let session = stats_session.clone();
        let days = period().days();
        async move {
            let token = require_token(&session)?;
            api.stats(&token, days).await
        }
    });

    let recent = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        let days = period().days();
        async move {
            let token = require_token(&session)?;
            api.recent_scores(&token, days).await
        }
    });

    let days = period().days();

    let cards = match &*stats.read() {
        Some(Ok(s)) => {
            let cards = stat_cards(s);
            rsx! {
                for card in cards {
                    div { class: "card stat-card",
                        h3 { "{card.title}" }
                        div { class: "stat-value", "{card.value}" }
                        p { class: "muted", "{card.delta} vs previous {days} days" }
                    }
                }
            }
        }
        Some(Err(e)) => error_notice(e),
        None => loading_notice(),
    };

    let recent_list = match &*recent.read() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No scores recorded in the last {days} days." }
        },
        Some(Ok(list)) => {
            let rows = day_rows(list);
            rsx! {
                div { class: "day-list",
                    for row in rows {
                        div {
                            key: "{row.title}",
                            class: "day-row",
                            onclick: move |_| {
                                nav.push(Route::DayView { date: row.date.clone() });
                            },
                            div { class: "day-row-header",
                                span { class: "day-title", "{row.title}" }
                                span { class: "badge", "{row.set_count} sets" }
                                if row.sighters > 0 {
                                    span { class: "badge badge-secondary", "{row.sighters} sighters" }
                                }
                                span { class: "day-best {row.best_band}", "{row.best}" }
                            }
                            div { class: "relay-grid",
                                for chip in row.relays {
                                    div {
                                        key: "{chip.set_id}",
                                        class: "relay-chip",
                                        onclick: move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            nav.push(Route::SetView {
                                                date: chip.date.clone(),
                                                set_id: chip.set_id,
                                            });
                                        },
                                        span { "Set {chip.set_id}" }
                                        span { class: "badge {chip.band}", "{chip.total}" }
                                        span { class: "muted", "{chip.shots} shots" }
                                    }
                                }
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
        div { class: "page dashboard",
            div { class: "page-header",
                h2 { "Dashboard" }
                PeriodSelector { period }
            }
            div { class: "stat-grid", {cards} }
            section { class: "card",
                h3 { "Recent Scores" }
                {recent_list}
            }
        }
    }
}
