use dioxus::prelude::*;
use shotboard_shared::aggregate::{fixed1, format_shot, format_total, ShotGrade};
use shotboard_shared::models::{Discipline, Shot};
use shotboard_shared::projector::ZOOM_DEFAULT;
use shotboard_shared::selection::{toggle_shot, Selection, SET_SIZE};

use crate::api::{require_token, ApiClient};
use crate::components::interactive_shot_target::InteractiveShotTarget;
use crate::components::shot_target::ShotTarget;
use crate::dates;
use crate::pages::{error_notice, loading_notice};
use crate::session::Session;
use crate::Route;

/// Panels shown in "Sets" mode: a 60-shot match.
pub const MAX_PANELS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Sets,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotCell {
    /// Index within the panel.
    pub local: usize,
    /// Index within the full relay.
    pub global: usize,
    pub label: String,
    pub sub_label: Option<String>,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub index: usize,
    /// 1-based set number for the heading.
    pub number: usize,
    pub shots: Vec<Shot>,
    pub badge: String,
    pub cells: Vec<ShotCell>,
}

/// Map the relay-wide hovered shot into panel-local coordinates.
pub fn panel_hover(hovered: Option<usize>, panel: usize) -> Option<usize> {
    let start = panel * SET_SIZE;
    hovered
        .filter(|&h| h >= start && h < start + SET_SIZE)
        .map(|h| h - start)
}

/// Split a relay into at most `MAX_PANELS` ten-shot panels.
pub fn panel_views(shots: &[Shot], hovered: Option<usize>, selected: &[Selection]) -> Vec<PanelView> {
    shots
        .chunks(SET_SIZE)
        .take(MAX_PANELS)
        .enumerate()
        .map(|(p, chunk)| {
            let discipline = Discipline::infer(chunk);
            let panel_selected = selected.get(p);
            let cells = chunk
                .iter()
                .enumerate()
                .map(|(local, shot)| {
                    let global = p * SET_SIZE + local;
                    let (label, sub_label) = format_shot(shot, discipline);
                    let mut class =
                        format!("shot-cell {}", ShotGrade::of(shot.primary_score).css_class());
                    if hovered == Some(global) {
                        class.push_str(" hovered");
                    }
                    if panel_selected.is_some_and(|s| s.contains(&local)) {
                        class.push_str(" selected");
                    }
                    ShotCell {
                        local,
                        global,
                        label,
                        sub_label,
                        class,
                    }
                })
                .collect();
            PanelView {
                index: p,
                number: p + 1,
                shots: chunk.to_vec(),
                badge: format_total(chunk),
                cells,
            }
        })
        .collect()
}

#[component]
pub fn SetPage(date: ReadSignal<String>, set_id: ReadSignal<u32>) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();

    let mut view_mode = use_signal(|| ViewMode::Sets);
    let mut panel_zooms = use_signal(|| vec![ZOOM_DEFAULT; MAX_PANELS]);
    let mut panel_selected = use_signal(|| vec![Selection::new(); MAX_PANELS]);
    let mut hovered_shot = use_signal(|| None::<usize>);
    let mut all_zoom = use_signal(|| ZOOM_DEFAULT);

    let relays = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        let date = date();
        let set_id = set_id();
        async move {
            let token = require_token(&session)?;
            api.shots_by_set(&token, &date, set_id).await
        }
    });

    let title = format!("{} - Set {}", dates::long_date(&date.read()), set_id());
    let mode = *view_mode.read();
    let toggle_class = |m: ViewMode| {
        if m == mode {
            "btn btn-toggle active"
        } else {
            "btn btn-toggle"
        }
    };
    let sets_class = toggle_class(ViewMode::Sets);
    let all_class = toggle_class(ViewMode::All);

    let body = match &*relays.read() {
        Some(Ok(list)) => match list.first() {
            None => rsx! { p { class: "muted", "No data" } },
            Some(relay) => {
                let shots = relay.list_of_shots.clone();
                let discipline = Discipline::infer(&shots);
                let total = fixed1(relay.total_score);
                let best = fixed1(relay.best_score);
                let average = fixed1(relay.average_score);
                let relay_shots = relay.total_shots;
                let all_badge = format_total(&shots);
                let panels = panel_views(&shots, hovered_shot(), &panel_selected.read());

                rsx! {
                    div { class: "relay-stats",
                        span { "Shots: {relay_shots}" }
                        span { "Total: {total}" }
                        span { "Best: {best}" }
                        span { "Avg: {average}" }
                        span { class: "badge", "{discipline}" }
                    }
                    if mode == ViewMode::Sets {
                        div { class: "panel-grid",
                            for panel in panels {
                                div { key: "{panel.index}", class: "set-panel",
                                    div { class: "set-panel-header",
                                        h3 { "Set {panel.number}" }
                                        span { class: "badge badge-outline", "{panel.badge}" }
                                    }
                                    ShotTarget {
                                        shots: panel.shots,
                                        zoom: panel_zooms.read().get(panel.index).copied().unwrap_or(ZOOM_DEFAULT),
                                        on_zoom_change: move |z: f64| {
                                            if let Some(slot) = panel_zooms.write().get_mut(panel.index) {
                                                *slot = z;
                                            }
                                        },
                                        hovered_shot: panel_hover(hovered_shot(), panel.index),
                                        selected: panel_selected.read().get(panel.index).cloned().unwrap_or_default(),
                                        on_clear_selection: move |_| {
                                            if let Some(s) = panel_selected.write().get_mut(panel.index) {
                                                s.clear();
                                            }
                                        },
                                    }
                                    div { class: "shot-grid",
                                        for cell in panel.cells {
                                            div {
                                                key: "{cell.local}",
                                                class: "{cell.class}",
                                                onmouseenter: move |_| hovered_shot.set(Some(cell.global)),
                                                onmouseleave: move |_| hovered_shot.set(None),
                                                onclick: move |_| {
                                                    if let Some(s) = panel_selected.write().get_mut(panel.index) {
                                                        *s = toggle_shot(s, cell.local);
                                                    }
                                                },
                                                span { class: "shot-score", "{cell.label}" }
                                                if let Some(sub) = cell.sub_label {
                                                    span { class: "shot-sub", "{sub}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "all-shots",
                            div { class: "set-panel-header",
                                h3 { "All Shots" }
                                span { class: "badge badge-outline", "{all_badge}" }
                            }
                            InteractiveShotTarget {
                                shots,
                                zoom: all_zoom(),
                                on_zoom_change: move |z: f64| all_zoom.set(z),
                            }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => error_notice(e),
        None => loading_notice(),
    };

    rsx! {
        div { class: "page set-view",
            div { class: "page-header",
                Link { class: "btn btn-outline", to: Route::DayView { date: date() }, "← Day" }
                h2 { "{title}" }
                div { class: "toggle-group",
                    button {
                        class: sets_class,
                        onclick: move |_| view_mode.set(ViewMode::Sets),
                        "Sets"
                    }
                    button {
                        class: all_class,
                        onclick: move |_| view_mode.set(ViewMode::All),
                        "All"
                    }
                }
            }
            section { class: "card", {body} }
        }
    }
}
