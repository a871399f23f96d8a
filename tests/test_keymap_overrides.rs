use crossterm::event::{KeyCode, KeyModifiers};
use zwickly::config::Config;
use zwickly::keymap::{Action, KeyBinding, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+r", Action::MarkAllRead));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('r'), KeyModifiers::CONTROL),
        Some(Action::MarkAllRead)
    );
    // 'a' was the preset key for MarkAllRead
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('a'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_invalid_override_never_matches() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[keymap]
preset = "standard"

[[keymap.overrides]]
key = "hyper+q"
action = "quit"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    for code in [KeyCode::Char('q'), KeyCode::Char('c')] {
        assert_eq!(config.keymap.get_action(code, KeyModifiers::NONE), None);
    }
    // Unrelated bindings keep working
    assert_eq!(
        config.keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
        Some(Action::Confirm)
    );
}
