pub mod chat_area;
pub mod input_bar;
pub mod org_selector;
pub mod quick_actions;
