use crossterm::event::{KeyCode, KeyModifiers};
use zwickly::keymap::{Action, KeyBinding, Keymap, KeymapPreset};

#[test]
fn test_override_shadows_preset_binding() {
    // 'w' replaces 'k' for MoveUp in the vim preset
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Every preset key for an overridden action is hidden, arrows included
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_tab_shortcut_can_be_moved() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("f5", Action::TabProfile)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::F(5), KeyModifiers::NONE),
        Some(Action::TabProfile)
    );
    assert_eq!(keymap.get_action(KeyCode::Char('5'), KeyModifiers::NONE), None);
    assert_eq!(Action::TabProfile.nav_target(), Some(zwickly::Screen::Profile));
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![
            KeyBinding::new("w", Action::MoveUp),
            KeyBinding::new("x", Action::Quit),
        ],
    };

    let nav_display = keymap.navigation_display();
    assert_eq!(nav_display, "W/J", "got: '{}'", nav_display);

    assert_eq!(keymap.get_key_display_for_action(Action::MoveUp), "W");
    assert_eq!(keymap.get_key_display_for_action(Action::Quit), "X");
    assert_eq!(keymap.confirm_display(), "Enter");
}
