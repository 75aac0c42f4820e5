pub mod interactive_shot_target;
pub mod period_selector;
pub mod shot_target;
pub mod top_bar;
