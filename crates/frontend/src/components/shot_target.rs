use dioxus::prelude::*;
use shotboard_shared::models::{Discipline, Shot};
use shotboard_shared::projector::{self, ViewTransform, ZOOM_DEFAULT};
use shotboard_shared::selection::{render_passes, HoverState, Selection};
use shotboard_shared::target::{self, Ring, RING_STROKE_WIDTH, VIEWBOX_SIZE};

const MARKER_STROKE: &str = "#1e293b";
const MARKER_STROKE_WIDTH: f64 = 1.5;

/// Full `<svg>` markup for a target with its shots.
pub fn build_target_svg(
    shots: &[Shot],
    zoom: f64,
    hover: HoverState,
    selected: &Selection,
) -> String {
    let discipline = Discipline::infer(shots);
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}" class="target-svg" data-discipline="{discipline}">"#
    ));
    build_rings(&mut svg, discipline, zoom);
    build_shot_markers(&mut svg, shots, discipline, zoom, hover, selected);
    svg.push_str("</svg>");

    svg
}

fn push_circle(svg: &mut String, ring: &Ring) {
    svg.push_str(&format!(
        r#"<circle cx="{c}" cy="{c}" r="{}" fill="{}" stroke="{}" stroke-width="{RING_STROKE_WIDTH}"/>"#,
        ring.radius,
        ring.fill,
        ring.stroke,
        c = target::CENTER,
    ));
}

fn build_rings(svg: &mut String, discipline: Discipline, zoom: f64) {
    let face = target::target_face(discipline);
    let transform = ViewTransform::centered(projector::final_zoom(zoom, discipline));

    svg.push_str(&format!(
        r#"<g class="target-rings" transform="{}">"#,
        transform.svg_attr()
    ));
    for ring in face.rings {
        push_circle(svg, ring);
    }
    push_circle(svg, &face.center_dot);
    svg.push_str("</g>");
}

// Positions from `project` are already compressed by the target scale, so
// this group only carries the user zoom. Marker size is compressed to match.
fn build_shot_markers(
    svg: &mut String,
    shots: &[Shot],
    discipline: Discipline,
    zoom: f64,
    hover: HoverState,
    selected: &Selection,
) {
    let transform = ViewTransform::centered(zoom);
    let scale = target::target_scale(discipline);
    let r = target::shot_radius(discipline) * scale;
    let sw = MARKER_STROKE_WIDTH * scale;

    svg.push_str(&format!(
        r#"<g class="target-shots" transform="{}">"#,
        transform.svg_attr()
    ));
    for marker in render_passes(shots.len(), hover, selected) {
        let p = projector::project(&shots[marker.index], discipline);
        svg.push_str(&format!(
            r#"<circle data-index="{}" cx="{}" cy="{}" r="{r}" fill="{}" fill-opacity="{}" stroke="{MARKER_STROKE}" stroke-width="{sw}"/>"#,
            marker.index,
            p.x,
            p.y,
            marker.layer.fill(),
            marker.layer.opacity(),
        ));
    }
    svg.push_str("</g>");
}

/// Read-only target face with optional zoom and clear controls.
///
/// Zoom buttons only show when `on_zoom_change` is wired; the clear button
/// only shows while something is selected and `on_clear_selection` is wired.
#[component]
#[allow(clippy::too_many_arguments)]
pub fn ShotTarget(
    shots: Vec<Shot>,
    #[props(default = ZOOM_DEFAULT)] zoom: f64,
    on_zoom_change: Option<EventHandler<f64>>,
    hovered_shot: Option<usize>,
    hovered_set: Option<usize>,
    #[props(default)] selected: Selection,
    on_clear_selection: Option<EventHandler<()>>,
    #[props(default = true)] show_zoom_controls: bool,
    #[props(default = true)] show_clear_button: bool,
) -> Element {
    let hover = HoverState {
        shot: hovered_shot,
        set: hovered_set,
    };
    let svg_html = build_target_svg(&shots, zoom, hover, &selected);

    let zoom_handler = on_zoom_change.filter(|_| show_zoom_controls);
    let clear_handler = on_clear_selection.filter(|_| show_clear_button && !selected.is_empty());
    let percent = projector::zoom_percent(zoom);

    rsx! {
        div { class: "shot-target",
            if zoom_handler.is_some() || clear_handler.is_some() {
                div { class: "target-toolbar",
                    if let Some(handler) = zoom_handler {
                        div { class: "zoom-controls",
                            button {
                                class: "btn btn-sm",
                                "aria-label": "Zoom out",
                                disabled: !projector::can_zoom_out(zoom),
                                onclick: move |_| handler.call(projector::zoom_out(zoom)),
                                "−"
                            }
                            span { class: "zoom-readout", "{percent}%" }
                            button {
                                class: "btn btn-sm",
                                "aria-label": "Zoom in",
                                disabled: !projector::can_zoom_in(zoom),
                                onclick: move |_| handler.call(projector::zoom_in(zoom)),
                                "+"
                            }
                        }
                    }
                    if let Some(clear) = clear_handler {
                        button {
                            class: "btn btn-sm btn-outline clear-selection",
                            onclick: move |_| clear.call(()),
                            "Clear"
                        }
                    }
                }
            }
            div { class: "target-face", dangerous_inner_html: "{svg_html}" }
        }
    }
}
