use dioxus::prelude::*;
use shotboard_shared::aggregate::{format_shot, format_total_as, ShotGrade};
use shotboard_shared::models::{Discipline, Shot};
use shotboard_shared::projector::ZOOM_DEFAULT;
use shotboard_shared::selection::{self, TargetState};

use super::shot_target::ShotTarget;

/// Header row drawn above the first shot of each set.
#[derive(Debug, Clone, PartialEq)]
pub struct SetHeader {
    pub number: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotRow {
    pub index: usize,
    /// 1-based position shown in the list.
    pub number: usize,
    pub header: Option<SetHeader>,
    pub label: String,
    pub sub_label: Option<String>,
    pub class: String,
}

/// Rows of the shot list, with set headers and per-row CSS classes.
/// Headers and rows share the discipline of the sequence's first shot.
pub fn shot_rows(shots: &[Shot], state: &TargetState) -> Vec<ShotRow> {
    let discipline = Discipline::infer(shots);
    shots
        .iter()
        .enumerate()
        .map(|(index, shot)| {
            let header = selection::starts_set(index).then(|| {
                let number = selection::set_number(index);
                let range = selection::set_range(number, shots.len());
                SetHeader {
                    number,
                    label: format_total_as(&shots[range], discipline),
                }
            });

            let (label, sub_label) = format_shot(shot, discipline);

            let mut class = format!("shot-row {}", ShotGrade::of(shot.primary_score).css_class());
            if state.selected.contains(&index) {
                class.push_str(" selected");
            }
            if state.is_set_hovered(index) {
                class.push_str(" set-hovered");
            }
            if state.hover.shot == Some(index) {
                class.push_str(" hovered");
            }

            ShotRow {
                index,
                number: index + 1,
                header,
                label,
                sub_label,
                class,
            }
        })
        .collect()
}

/// Target plus a shot list that drives hover and multi-select.
///
/// Hover and selection live in this instance only.
#[component]
pub fn InteractiveShotTarget(
    shots: Vec<Shot>,
    #[props(default = ZOOM_DEFAULT)] zoom: f64,
    on_zoom_change: Option<EventHandler<f64>>,
    #[props(default = true)] show_zoom_controls: bool,
    #[props(default = true)] show_clear_button: bool,
    #[props(default = true)] show_shot_list: bool,
    title: Option<String>,
) -> Element {
    let mut state = use_signal(TargetState::default);

    let len = shots.len();
    let snapshot = state.read().clone();
    let rows = shot_rows(&shots, &snapshot);
    let selected_count = snapshot.selected.len();
    let list_class = if selection::set_count(len) > 1 { "shot-list scrollable" } else { "shot-list" };

    rsx! {
        div { class: "interactive-target",
            div { class: "interactive-target-face",
                if let Some(title) = title {
                    h3 { class: "target-title", "{title}" }
                }
                ShotTarget {
                    shots: shots.clone(),
                    zoom,
                    on_zoom_change,
                    hovered_shot: snapshot.hover.shot,
                    hovered_set: snapshot.hover.set,
                    selected: snapshot.selected.clone(),
                    on_clear_selection: move |_| state.write().clear_selection(),
                    show_zoom_controls,
                    show_clear_button,
                }
                if selected_count > 0 {
                    span { class: "badge badge-selected", "{selected_count} selected" }
                }
            }
            if show_shot_list {
                div { class: "{list_class}",
                    for row in rows {
                        div { key: "{row.index}",
                            if let Some(header) = row.header {
                                div {
                                    class: "set-header",
                                    onclick: move |_| state.write().click_set(header.number, len),
                                    onmouseenter: move |_| state.write().hover_set(header.number),
                                    onmouseleave: move |_| state.write().leave_set(),
                                    "Set {header.number} - {header.label}"
                                }
                            }
                            div {
                                class: "{row.class}",
                                onclick: move |_| state.write().click_shot(row.index),
                                onmouseenter: move |_| state.write().hover_shot(row.index),
                                onmouseleave: move |_| state.write().leave_shot(),
                                span { class: "shot-number", "#{row.number}" }
                                span { class: "shot-score", "{row.label}" }
                                if let Some(sub) = row.sub_label {
                                    span { class: "shot-sub", "{sub}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
