use std::time::{Duration, Instant};

use gametrack::input::Key;
use gametrack::state::{FormField, InputMode};
use gametrack::store::{GameRecord, MemoryStorage};
use gametrack::testing::TestApp;

fn library() -> Vec<GameRecord> {
    vec![
        GameRecord::new("Zelda", "2017", "Switch", "Adventure", 100),
        GameRecord::new("Halo", "2001", "Xbox", "Shooter", 40),
        GameRecord::new("Zelda II", "1987", "Other", "Adventure", 0),
    ]
}

/// Open the games dialog from the form
fn open_dialog(app: &mut TestApp) {
    app.send_ctrl(Key::Char('o'));
    assert!(app.state().dialog.is_some(), "dialog should be open");
}

/// Replace the prefilled prompt value with `value`
fn answer_prompt(app: &mut TestApp, value: &str) {
    let prefilled = app
        .dialog()
        .progress_prompt
        .as_ref()
        .map(|p| p.input.len())
        .unwrap_or_default();
    for _ in 0..prefilled {
        app.send_key(Key::Backspace);
    }
    app.type_text(value);
    app.send_key(Key::Enter);
}

fn selected_name(app: &TestApp) -> Option<String> {
    app.dialog()
        .selected_game(app.records())
        .map(|g| g.name.clone())
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    // Plain 'q' is text on the form
    app.send_key(Key::Char('q'));
    app.assert_not_quit();
    assert_eq!(app.state().form.name, "q");

    app.send_ctrl(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_q_quits_from_dialog() {
    let mut app = TestApp::new();
    open_dialog(&mut app);

    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);

    app.send_key(Key::F(1));
    assert!(app.state().help_visible);

    // Keys other than the toggles are swallowed while help is open
    app.send_key(Key::Char('x'));
    assert!(app.state().form.name.is_empty());

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_register_game_through_form() {
    let mut app = TestApp::new();

    app.type_text("Hollow Knight");
    app.send_key(Key::Tab);
    app.type_text("2017");
    app.send_key(Key::Tab);
    assert_eq!(app.state().form.current_field, FormField::Platform);
    app.send_key(Key::Right); // PC -> PlayStation
    app.send_key(Key::Right); // -> Xbox
    app.send_key(Key::Right); // -> Switch
    app.send_key(Key::Tab);
    app.type_text("Metroidvania");
    app.send_key(Key::Tab);
    app.send_keys(&[Key::Left, Key::Left]); // 100 -> 90
    app.send_key(Key::Enter);

    assert_eq!(app.records().len(), 1);
    let game = &app.records()[0];
    assert_eq!(game.name, "Hollow Knight");
    assert_eq!(game.year, "2017");
    assert_eq!(game.platform, "Switch");
    assert_eq!(game.genre, "Metroidvania");
    assert_eq!(game.progress, 90);

    // Persisted immediately
    assert_eq!(app.reload(), app.records());
    assert_eq!(app.storage().writes(), 1);

    // Form reset, dialog opened on the new game
    assert_eq!(app.state().form.name, "");
    assert_eq!(app.state().form.progress, 100);
    assert_eq!(app.state().form.current_field, FormField::Name);
    assert_eq!(selected_name(&app).as_deref(), Some("Hollow Knight"));
}

#[test]
fn test_submit_with_default_progress_renders_full_row() {
    let mut app = TestApp::new();
    app.type_text("Celeste");
    app.send_key(Key::Enter);

    assert_eq!(app.records()[0].progress, 100);

    let screen = app.render(120, 40);
    assert!(screen.contains("Celeste"));
    assert!(screen.contains("100%"));
}

#[test]
fn test_submit_appends_after_existing_games() {
    let mut app = TestApp::with_games(&library());
    app.type_text("Doom");
    app.send_key(Key::Enter);

    let names: Vec<&str> = app.records().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Zelda", "Halo", "Zelda II", "Doom"]);
    assert_eq!(selected_name(&app).as_deref(), Some("Doom"));
}

#[test]
fn test_submit_with_failing_storage_keeps_game_and_reports() {
    let mut app = TestApp::with_storage(MemoryStorage::new().failing_writes());
    app.type_text("Outer Wilds");
    app.send_key(Key::Enter);

    assert_eq!(app.records().len(), 1);
    let status = app.state().status.as_ref().expect("status should be set");
    assert!(status.is_error);
    assert!(app.reload().is_empty());
}

#[test]
fn test_name_filter_is_case_insensitive() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    app.send_key(Key::Char('/'));
    assert_eq!(app.dialog().input_mode, InputMode::Filter);
    app.type_text("zel");
    app.send_key(Key::Enter);

    assert_eq!(app.dialog().input_mode, InputMode::Normal);
    let visible = app.dialog().filter.apply(app.records());
    let names: Vec<&str> = visible.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Zelda", "Zelda II"]);

    // Filtering never writes
    assert_eq!(app.storage().writes(), 0);
}

#[test]
fn test_platform_filter_cycles_through_options() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    // All -> PC -> PlayStation -> Xbox
    app.send_keys(&[Key::Char('p'), Key::Char('p'), Key::Char('p')]);
    assert_eq!(app.dialog().filter.platform.as_deref(), Some("Xbox"));
    assert_eq!(selected_name(&app).as_deref(), Some("Halo"));

    // Backwards to PlayStation: nothing matches
    app.send_key(Key::Char('P'));
    assert!(app.dialog().filter.apply(app.records()).is_empty());
    let screen = app.render(120, 40);
    assert!(screen.contains("No games match the current filters."));
}

#[test]
fn test_esc_clears_filter_before_closing() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('/'));
    app.type_text("halo");
    app.send_key(Key::Enter);
    assert!(app.dialog().filter.is_active());

    app.send_key(Key::Esc);
    assert!(app.state().dialog.is_some());
    assert!(!app.dialog().filter.is_active());

    app.send_key(Key::Esc);
    assert!(app.state().dialog.is_none());
}

#[test]
fn test_dialog_reopens_unfiltered() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('p'));
    app.send_key(Key::Char('/'));
    app.type_text("zel");
    app.send_key(Key::Enter);
    assert!(app.dialog().filter.is_active());

    // First Esc clears, second closes
    app.send_key(Key::Esc);
    app.send_key(Key::Esc);
    open_dialog(&mut app);
    assert!(!app.dialog().filter.is_active());
    assert_eq!(app.dialog().filter.apply(app.records()).len(), 3);
}

#[test]
fn test_edit_progress_updates_and_highlights() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('j')); // Halo

    app.send_key(Key::Char('e'));
    assert_eq!(app.dialog().input_mode, InputMode::ProgressPrompt);
    assert_eq!(
        app.dialog().progress_prompt.as_ref().map(|p| p.input.as_str()),
        Some("40")
    );

    answer_prompt(&mut app, "75");

    let halo_id = app.records()[1].id;
    assert_eq!(app.records()[1].progress, 75);
    assert_eq!(app.reload()[1].progress, 75);
    assert!(app.dialog().is_highlighted(halo_id));

    // The highlight fades after its duration
    app.tick(Instant::now() + Duration::from_secs(2));
    assert!(!app.dialog().is_highlighted(halo_id));
}

#[test]
fn test_edit_progress_rejects_invalid_values() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    for bad in ["150", "-1", "abc", "12.5"] {
        app.send_key(Key::Char('e'));
        answer_prompt(&mut app, bad);

        assert_eq!(
            app.state().alert.as_deref(),
            Some("Invalid value. Enter a number between 0 and 100."),
            "input {:?} should be rejected",
            bad
        );
        // Any key dismisses the alert without acting
        app.send_key(Key::Char('d'));
        assert!(app.state().alert.is_none());
        assert_eq!(app.dialog().input_mode, InputMode::Normal);
    }

    assert_eq!(app.records()[0].progress, 100);
    assert_eq!(app.storage().writes(), 0);
}

#[test]
fn test_edit_progress_cancel_is_noop() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    app.send_key(Key::Char('e'));
    app.type_text("5");
    app.send_key(Key::Esc);

    assert_eq!(app.dialog().input_mode, InputMode::Normal);
    assert!(app.dialog().progress_prompt.is_none());
    assert_eq!(app.records()[0].progress, 100);
    assert_eq!(app.storage().writes(), 0);
}

#[test]
fn test_edit_progress_with_filter_targets_visible_row() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('/'));
    app.type_text("zelda ii");
    app.send_key(Key::Enter);

    app.send_key(Key::Char('e'));
    answer_prompt(&mut app, "30");

    assert_eq!(app.records()[2].progress, 30);
    assert_eq!(app.records()[0].progress, 100);
}

#[test]
fn test_remove_confirmed() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('j'));

    app.send_key(Key::Char('d'));
    assert_eq!(app.dialog().input_mode, InputMode::RemoveConfirmation);
    let screen = app.render(120, 40);
    assert!(screen.contains("Halo"));

    app.send_key(Key::Char('y'));

    let names: Vec<&str> = app.records().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Zelda", "Zelda II"]);
    assert_eq!(app.reload().len(), 2);
    assert_eq!(app.dialog().input_mode, InputMode::Normal);
}

#[test]
fn test_remove_declined_by_any_other_key() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    app.send_key(Key::Delete);
    app.send_key(Key::Char('n'));

    assert_eq!(app.records().len(), 3);
    assert_eq!(app.storage().writes(), 0);
    assert_eq!(app.dialog().input_mode, InputMode::Normal);
}

#[test]
fn test_remove_with_filter_removes_the_right_game() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);
    app.send_key(Key::Char('/'));
    app.type_text("zel");
    app.send_key(Key::Enter);
    app.send_key(Key::Char('j')); // Zelda II, third in the full list

    app.send_key(Key::Backspace);
    app.send_key(Key::Char('Y'));

    let names: Vec<&str> = app.records().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Zelda", "Halo"]);
    // Selection stays inside the shrunken filtered list
    assert_eq!(selected_name(&app).as_deref(), Some("Zelda"));
}

#[test]
fn test_remove_last_game_shows_empty_message() {
    let mut app = TestApp::with_games(&library()[..1]);
    open_dialog(&mut app);
    app.send_key(Key::Char('d'));
    app.send_key(Key::Char('y'));

    assert!(app.records().is_empty());
    let screen = app.render(120, 40);
    assert!(screen.contains("No games registered yet."));
}

#[test]
fn test_empty_store_renders_empty_message() {
    let mut app = TestApp::new();
    open_dialog(&mut app);

    // Edit and remove have nothing to act on
    app.send_key(Key::Char('e'));
    app.send_key(Key::Char('d'));
    assert_eq!(app.dialog().input_mode, InputMode::Normal);

    let screen = app.render(100, 30);
    assert!(screen.contains("No games registered yet."));
}

#[test]
fn test_legacy_slot_loads() {
    let legacy = r#"[
        {"name": "Zelda", "year": 2017, "platform": "Switch", "genre": "Adventure", "progress": "80"},
        {"name": "Doom", "year": "1993", "platform": "PC", "genre": "Shooter", "progress": 100}
    ]"#;
    let mut app = TestApp::with_storage(MemoryStorage::with_slot("gamesList", legacy));

    assert_eq!(app.records().len(), 2);
    assert_eq!(app.records()[0].year, "2017");
    assert_eq!(app.records()[0].progress, 80);

    // Legacy records can be edited like any other
    open_dialog(&mut app);
    app.send_key(Key::Char('e'));
    answer_prompt(&mut app, "90");
    assert_eq!(app.reload()[0].progress, 90);
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let app = TestApp::with_storage(MemoryStorage::with_slot("gamesList", "{not json"));
    assert!(app.records().is_empty());
}

#[test]
fn test_navigation_wraps_in_dialog() {
    let mut app = TestApp::with_games(&library());
    open_dialog(&mut app);

    app.send_key(Key::Char('k'));
    assert_eq!(selected_name(&app).as_deref(), Some("Zelda II"));
    app.send_key(Key::Char('j'));
    assert_eq!(selected_name(&app).as_deref(), Some("Zelda"));
    app.send_key(Key::Char('G'));
    assert_eq!(selected_name(&app).as_deref(), Some("Zelda II"));
    app.send_key(Key::Char('g'));
    assert_eq!(selected_name(&app).as_deref(), Some("Zelda"));
}
