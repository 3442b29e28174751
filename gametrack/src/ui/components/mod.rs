pub mod alert;
pub mod empty_state;
pub mod filter_input;
pub mod game_form;
pub mod help_bar;
pub mod help_popup;
pub mod popup;
pub mod progress_prompt;
pub mod remove_confirmation;
