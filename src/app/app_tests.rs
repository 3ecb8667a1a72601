use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, RenderState};
use crate::engine::config::{AssetConfig, GameConfig};
use crate::game::Outcome;
use crate::input::AssetStore;

fn seed_assets(root: &Path) {
    fs::create_dir_all(root.join("texts")).unwrap();
    fs::create_dir_all(root.join("predictions")).unwrap();
    fs::write(
        root.join("tokens.json"),
        r#"["The", "Ġcat", "Ġcar", "Ġsat", "Ġsit", "Ġon", "Ġmat"]"#,
    )
    .unwrap();
    fs::write(
        root.join("texts/tale.json"),
        r#"{"sequence": ["The", "Ġcat", "Ġsat", "Ġon"]}"#,
    )
    .unwrap();
    fs::write(root.join("texts/tiny.json"), r#"{"sequence": ["Hi"]}"#).unwrap();
    fs::write(
        root.join("predictions/tale_predictions.json"),
        r#"[
            {},
            {"m1": [{"token": "Ġdog", "probability": 0.6}, {"token": "Ġcat", "probability": 0.3}]},
            {"m1": [{"token": "Ġran", "probability": 0.5}, {"token": "Ġjumped", "probability": 0.2}]},
            {"m1": [{"token": "Ġon", "probability": 0.9}], "m2": [{"token": "Ġby", "probability": 0.4}]}
        ]"#,
    )
    .unwrap();
}

fn create_test_app() -> (App, TempDir) {
    let dir = tempdir().unwrap();
    seed_assets(dir.path());
    let store = AssetStore::open(AssetConfig::with_root(dir.path()), "Ġ").unwrap();
    let config = GameConfig {
        prompt_tokens: 2,
        ..GameConfig::default()
    };
    (App::new(config, store), dir)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_event(AppEvent::Type(c));
    }
}

#[test]
fn test_app_starts_in_select() {
    let (app, _dir) = create_test_app();
    assert_eq!(app.mode(), AppMode::Select);
    let state: RenderState = app.render_state();
    assert_eq!(state.texts.len(), 2);
    assert!(state.tokens.is_empty());
}

#[test]
fn test_app_handle_event_quit() {
    let (mut app, _dir) = create_test_app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_select_wraps_and_opens() {
    let (mut app, _dir) = create_test_app();
    app.handle_event(AppEvent::SelectPrev);
    assert_eq!(app.render_state().text_cursor, 1);
    app.handle_event(AppEvent::SelectNext);
    app.handle_event(AppEvent::OpenSelected);
    assert_eq!(app.mode(), AppMode::Guessing);
    assert_eq!(app.render_state().text_id.as_deref(), Some("tale"));
}

#[test]
fn test_typing_ranks_suggestions() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    type_str(&mut app, "sat");
    assert_eq!(app.suggestions()[0], "Ġsat");
    assert!(app.suggestions().len() <= 7);

    app.handle_event(AppEvent::Backspace);
    app.handle_event(AppEvent::Backspace);
    app.handle_event(AppEvent::Backspace);
    assert_eq!(app.input(), "");
    assert!(app.suggestions().is_empty());
}

#[test]
fn test_leading_space_types_marker() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    type_str(&mut app, " sat");
    assert_eq!(app.input(), "Ġsat");
    assert_eq!(app.suggestions()[0], "Ġsat");
}

#[test]
fn test_accept_guess_advances() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    type_str(&mut app, " sat");
    app.handle_event(AppEvent::Accept);

    let game = app.game().unwrap();
    assert_eq!(game.score(), 1);
    assert_eq!(game.step(), 3);
    assert!(app.input().is_empty());
    assert!(app.last_guess().unwrap().correct);
}

#[test]
fn test_wrong_guess_then_complete() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    type_str(&mut app, " sit");
    app.handle_event(AppEvent::Accept);
    assert_eq!(
        app.game().unwrap().displayed()[2].outcome,
        Outcome::Wrong("Ġsit".to_string())
    );

    app.handle_event(AppEvent::Skip);
    assert_eq!(app.mode(), AppMode::Completed);
    let state = app.render_state();
    assert_eq!(state.skip_count, 1);
    assert_eq!(state.progress, (4, 4));
    assert_eq!(state.accuracy, 0.0);
}

#[test]
fn test_casual_mode_offers_target() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    app.handle_event(AppEvent::ToggleHardcore);
    assert!(!app.is_hardcore());

    let options = app.options();
    assert!(options.contains(&"Ġsat".to_string()));
    assert!(options.len() <= 5);

    // Typing is ignored in casual mode.
    type_str(&mut app, "x");
    assert!(app.input().is_empty());

    let target_pos = options.iter().position(|o| o == "Ġsat").unwrap();
    for _ in 0..target_pos {
        app.handle_event(AppEvent::SuggestionNext);
    }
    app.handle_event(AppEvent::Accept);
    assert_eq!(app.game().unwrap().score(), 1);
}

#[test]
fn test_command_deck_skip_and_return() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    app.handle_event(AppEvent::Back);
    assert_eq!(app.mode(), AppMode::Command);
    type_str(&mut app, ":skip");
    app.handle_event(AppEvent::SubmitCommand);
    assert_eq!(app.mode(), AppMode::Guessing);
    assert_eq!(app.game().unwrap().skip_count(), 1);
}

#[test]
fn test_command_deck_open_text_by_id() {
    let (mut app, _dir) = create_test_app();
    app.handle_event(AppEvent::EnterCommand);
    type_str(&mut app, "@tiny");
    app.handle_event(AppEvent::SubmitCommand);
    // Shorter than the prompt: nothing to guess.
    assert_eq!(app.mode(), AppMode::Completed);
}

#[test]
fn test_unknown_text_sets_status() {
    let (mut app, _dir) = create_test_app();
    app.handle_event(AppEvent::OpenText("nope".to_string()));
    assert_eq!(app.mode(), AppMode::Select);
    assert!(app.render_state().status.unwrap().contains("nope"));
}

#[test]
fn test_invalid_command_sets_status() {
    let (mut app, _dir) = create_test_app();
    app.handle_event(AppEvent::EnterCommand);
    type_str(&mut app, ":bogus");
    app.handle_event(AppEvent::SubmitCommand);
    assert!(app.render_state().status.unwrap().contains(":bogus"));
}

#[test]
fn test_inspector_shows_predictions() {
    let (mut app, _dir) = create_test_app();
    app.open_text("tale");
    app.handle_event(AppEvent::InspectPrev);

    let inspector = app.render_state().inspector.unwrap();
    assert_eq!(inspector.index, 1);
    assert_eq!(inspector.context, "The");
    assert_eq!(inspector.models[0].items[1].token, "Ġcat");

    app.handle_event(AppEvent::InspectNext);
    assert!(app.render_state().inspector.is_none());
}
