//! Set arithmetic plus the hover / multi-select state behind the
//! interactive target.
//!
//! Shot indices are 0-based positions in the full sequence. Set numbers are
//! 1-based: shots 0..10 are set 1, 10..20 set 2, and so on.

use std::collections::BTreeSet;
use std::ops::Range;

/// Shots per scoring set.
pub const SET_SIZE: usize = 10;

pub type Selection = BTreeSet<usize>;

/// 1-based set number a shot index belongs to.
pub fn set_number(index: usize) -> usize {
    index / SET_SIZE + 1
}

/// Whether `index` opens a new set (where set headers are drawn).
pub fn starts_set(index: usize) -> bool {
    index % SET_SIZE == 0
}

/// Shot indices belonging to `set_number`, truncated to `len`.
/// Set 0 or a set past the end yields an empty range.
pub fn set_range(set_number: usize, len: usize) -> Range<usize> {
    if set_number == 0 {
        return 0..0;
    }
    let start = ((set_number - 1) * SET_SIZE).min(len);
    let end = (start + SET_SIZE).min(len);
    start..end
}

/// Number of sets a sequence of `len` shots splits into.
pub fn set_count(len: usize) -> usize {
    len.div_ceil(SET_SIZE)
}

/// Flip membership of a single shot.
pub fn toggle_shot(selection: &Selection, index: usize) -> Selection {
    let mut next = selection.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next
}

/// All-or-nothing set toggle: if every index is already selected they are
/// all removed, otherwise they are all added.
pub fn toggle_set(selection: &Selection, set_indices: Range<usize>) -> Selection {
    let mut next = selection.clone();
    let all_selected = set_indices.clone().all(|i| selection.contains(&i));
    if all_selected {
        for i in set_indices {
            next.remove(&i);
        }
    } else {
        next.extend(set_indices);
    }
    next
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    pub shot: Option<usize>,
    pub set: Option<usize>,
}

/// Hover and selection for one target instance. Hover and selection are
/// independent; clearing one never touches the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetState {
    pub hover: HoverState,
    pub selected: Selection,
}

impl TargetState {
    pub fn hover_shot(&mut self, index: usize) {
        self.hover.shot = Some(index);
    }

    pub fn leave_shot(&mut self) {
        self.hover.shot = None;
    }

    pub fn hover_set(&mut self, set_number: usize) {
        self.hover.set = Some(set_number);
    }

    pub fn leave_set(&mut self) {
        self.hover.set = None;
    }

    pub fn click_shot(&mut self, index: usize) {
        self.selected = toggle_shot(&self.selected, index);
    }

    pub fn click_set(&mut self, set_number: usize, len: usize) {
        self.selected = toggle_set(&self.selected, set_range(set_number, len));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_set_hovered(&self, index: usize) -> bool {
        self.hover.set == Some(set_number(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    HoveredSet,
    HoveredShot,
}

impl Layer {
    pub fn opacity(self) -> f64 {
        match self {
            Layer::Base => 0.85,
            Layer::HoveredSet => 0.8,
            Layer::HoveredShot => 1.0,
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Layer::Base => "#f43f5e",
            Layer::HoveredSet | Layer::HoveredShot => "#ef4444",
        }
    }
}

/// One marker to draw, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub index: usize,
    pub layer: Layer,
}

/// Paint order for `len` shots: base pass (restricted to the selection when
/// it is non-empty), then the hovered set, then the hovered shot on top.
pub fn render_passes(len: usize, hover: HoverState, selected: &Selection) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(len + SET_SIZE + 1);

    let base = (0..len).filter(|i| selected.is_empty() || selected.contains(i));
    markers.extend(base.map(|index| Marker {
        index,
        layer: Layer::Base,
    }));

    if let Some(set) = hover.set {
        markers.extend(set_range(set, len).map(|index| Marker {
            index,
            layer: Layer::HoveredSet,
        }));
    }

    if let Some(index) = hover.shot.filter(|&i| i < len) {
        markers.push(Marker {
            index,
            layer: Layer::HoveredShot,
        });
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(indices: &[usize]) -> Selection {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_set_number() {
        assert_eq!(set_number(0), 1);
        assert_eq!(set_number(9), 1);
        assert_eq!(set_number(10), 2);
        assert_eq!(set_number(59), 6);
    }

    #[test]
    fn test_set_range_full_and_partial() {
        assert_eq!(set_range(1, 25), 0..10);
        assert_eq!(set_range(3, 25), 20..25);
        assert!(set_range(4, 25).is_empty());
        assert!(set_range(0, 25).is_empty());
    }

    #[test]
    fn test_set_count() {
        assert_eq!(set_count(0), 0);
        assert_eq!(set_count(10), 1);
        assert_eq!(set_count(11), 2);
        assert_eq!(set_count(60), 6);
    }

    #[test]
    fn test_toggle_shot() {
        let s = toggle_shot(&Selection::new(), 4);
        assert_eq!(s, sel(&[4]));
        let s = toggle_shot(&s, 4);
        assert!(s.is_empty());
    }

    #[test]
    fn test_toggle_set_partial_selects_all() {
        let start = sel(&[11, 13]);
        let s = toggle_set(&start, 10..20);
        assert_eq!(s, (10..20).collect());
    }

    #[test]
    fn test_toggle_set_full_deselects_all() {
        let start: Selection = (0..20).collect();
        let s = toggle_set(&start, 10..20);
        assert_eq!(s, (0..10).collect());
    }

    #[test]
    fn test_set_click_sequence() {
        // partial -> all selected -> none selected
        let mut state = TargetState::default();
        state.click_shot(12);
        state.click_set(2, 30);
        assert!((10..20).all(|i| state.selected.contains(&i)));
        state.click_set(2, 30);
        assert!(state.selected.is_empty());
        state.click_set(2, 30);
        assert_eq!(state.selected, (10..20).collect());
    }

    #[test]
    fn test_set_click_leaves_other_sets_alone() {
        let mut state = TargetState::default();
        state.click_shot(3);
        state.click_set(2, 20);
        state.click_set(2, 20);
        assert_eq!(state.selected, sel(&[3]));
    }

    #[test]
    fn test_clear_keeps_hover() {
        let mut state = TargetState::default();
        state.click_shot(5);
        state.hover_shot(7);
        state.hover_set(1);
        state.clear_selection();
        assert!(state.selected.is_empty());
        assert_eq!(state.hover.shot, Some(7));
        assert_eq!(state.hover.set, Some(1));
    }

    #[test]
    fn test_leave_clears_only_its_own_hover() {
        let mut state = TargetState::default();
        state.hover_shot(2);
        state.hover_set(1);
        state.leave_shot();
        assert_eq!(state.hover, HoverState { shot: None, set: Some(1) });
        state.leave_set();
        assert_eq!(state.hover, HoverState::default());
    }

    #[test]
    fn test_base_pass_unfiltered_without_selection() {
        let markers = render_passes(12, HoverState::default(), &Selection::new());
        assert_eq!(markers.len(), 12);
        assert!(markers.iter().all(|m| m.layer == Layer::Base));
    }

    #[test]
    fn test_base_pass_filtered_to_selection() {
        let markers = render_passes(12, HoverState::default(), &sel(&[1, 4]));
        let idx: Vec<usize> = markers.iter().map(|m| m.index).collect();
        assert_eq!(idx, vec![1, 4]);
    }

    #[test]
    fn test_select_then_clear_restores_base_pass() {
        let mut state = TargetState::default();
        state.click_shot(5);
        assert_eq!(render_passes(10, state.hover, &state.selected).len(), 1);
        state.clear_selection();
        assert_eq!(render_passes(10, state.hover, &state.selected).len(), 10);
    }

    #[test]
    fn test_hovered_set_ignores_selection() {
        let hover = HoverState { shot: None, set: Some(2) };
        let markers = render_passes(30, hover, &sel(&[0]));
        let set_markers: Vec<usize> = markers
            .iter()
            .filter(|m| m.layer == Layer::HoveredSet)
            .map(|m| m.index)
            .collect();
        assert_eq!(set_markers, (10..20).collect::<Vec<_>>());
        assert!(markers
            .iter()
            .filter(|m| m.layer == Layer::HoveredSet)
            .all(|m| (m.layer.opacity() - 0.8).abs() < 1e-9));
    }

    #[test]
    fn test_hovered_shot_drawn_last() {
        let hover = HoverState { shot: Some(3), set: Some(1) };
        let markers = render_passes(10, hover, &Selection::new());
        let last = markers.last().unwrap();
        assert_eq!(last.index, 3);
        assert_eq!(last.layer, Layer::HoveredShot);
        assert!((last.layer.opacity() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_hover_draws_nothing_extra() {
        let hover = HoverState { shot: Some(40), set: Some(9) };
        let markers = render_passes(10, hover, &Selection::new());
        assert_eq!(markers.len(), 10);
    }
}
