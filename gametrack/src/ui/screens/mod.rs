pub mod games_dialog;
pub mod register_screen;
