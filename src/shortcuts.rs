//! Centralized shortcut and action system.
//!
//! Every main-view shortcut is declared once in [`MAIN_SHORTCUTS`]. The
//! registry built from that table drives event handling, and the same table
//! feeds the help overlay and the status-bar hints.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === FOCUS & NAVIGATION ===
    /// Focus the next panel
    FocusNext,
    /// Focus the previous panel
    FocusPrevious,
    /// Move up inside the focused panel
    NavigateUp,
    /// Move down inside the focused panel
    NavigateDown,
    /// Move left inside the focused panel
    NavigateLeft,
    /// Move right inside the focused panel
    NavigateRight,
    /// Select design, apply preset or edit color
    Activate,

    // === SESSION ===
    /// Save the current palette and design as a favorite
    AddFavorite,
    /// Flip the preview flag
    TogglePreview,

    // === MESSAGES ===
    /// Open the quote request in the messaging app
    RequestQuote,
    /// Open the share message in the messaging app
    ShareDesign,
    /// Copy the quote request text to the clipboard
    CopyQuoteRequest,

    // === GENERAL ===
    /// Show or hide the help overlay
    ToggleHelp,
    /// Leave the application
    Quit,
    /// Clear the status message
    Cancel,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::Activate => "activate",
            Self::AddFavorite => "add_favorite",
            Self::TogglePreview => "toggle_preview",
            Self::RequestQuote => "request_quote",
            Self::ShareDesign => "share_design",
            Self::CopyQuoteRequest => "copy_quote_request",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// Help section a shortcut is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Moving around
    Navigation,
    /// Changing the design
    Design,
    /// Sending messages
    Messages,
    /// Everything else
    General,
}

impl Section {
    /// All sections in help order.
    pub const ALL: [Self; 4] = [Self::Navigation, Self::Design, Self::Messages, Self::General];

    /// Section heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Navigation => "NAVIGATION",
            Self::Design => "DESIGN",
            Self::Messages => "MESSAGES",
            Self::General => "GENERAL",
        }
    }
}

/// Declaration of one shortcut.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    /// Key label shown to the user
    pub keys: &'static str,
    /// Key events that trigger the action
    pub bindings: &'static [(KeyCode, KeyModifiers)],
    /// Action performed
    pub action: Action,
    /// Help text
    pub description: &'static str,
    /// Short status-bar hint, if the shortcut is worth advertising there
    pub hint: Option<&'static str>,
    /// Help section
    pub section: Section,
}

/// Main-view shortcuts, in help order.
pub static MAIN_SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        keys: "Tab",
        bindings: &[(KeyCode::Tab, KeyModifiers::NONE)],
        action: Action::FocusNext,
        description: "Focus next panel",
        hint: Some("Panel"),
        section: Section::Navigation,
    },
    Shortcut {
        keys: "Shift+Tab",
        bindings: &[
            (KeyCode::BackTab, KeyModifiers::SHIFT),
            (KeyCode::BackTab, KeyModifiers::NONE),
        ],
        action: Action::FocusPrevious,
        description: "Focus previous panel",
        hint: None,
        section: Section::Navigation,
    },
    Shortcut {
        keys: "↑/k",
        bindings: &[
            (KeyCode::Up, KeyModifiers::NONE),
            (KeyCode::Char('k'), KeyModifiers::NONE),
        ],
        action: Action::NavigateUp,
        description: "Move up",
        hint: None,
        section: Section::Navigation,
    },
    Shortcut {
        keys: "↓/j",
        bindings: &[
            (KeyCode::Down, KeyModifiers::NONE),
            (KeyCode::Char('j'), KeyModifiers::NONE),
        ],
        action: Action::NavigateDown,
        description: "Move down",
        hint: None,
        section: Section::Navigation,
    },
    Shortcut {
        keys: "←/h",
        bindings: &[
            (KeyCode::Left, KeyModifiers::NONE),
            (KeyCode::Char('h'), KeyModifiers::NONE),
        ],
        action: Action::NavigateLeft,
        description: "Move left",
        hint: None,
        section: Section::Navigation,
    },
    Shortcut {
        keys: "→/l",
        bindings: &[
            (KeyCode::Right, KeyModifiers::NONE),
            (KeyCode::Char('l'), KeyModifiers::NONE),
        ],
        action: Action::NavigateRight,
        description: "Move right",
        hint: None,
        section: Section::Navigation,
    },
    Shortcut {
        keys: "Enter",
        bindings: &[(KeyCode::Enter, KeyModifiers::NONE)],
        action: Action::Activate,
        description: "Select design, apply preset or edit color",
        hint: Some("Select"),
        section: Section::Design,
    },
    Shortcut {
        keys: "f",
        bindings: &[(KeyCode::Char('f'), KeyModifiers::NONE)],
        action: Action::AddFavorite,
        description: "Save current design as favorite",
        hint: Some("Favorite"),
        section: Section::Design,
    },
    Shortcut {
        keys: "v",
        bindings: &[(KeyCode::Char('v'), KeyModifiers::NONE)],
        action: Action::TogglePreview,
        description: "Toggle preview flag",
        hint: None,
        section: Section::Design,
    },
    Shortcut {
        keys: "w",
        bindings: &[(KeyCode::Char('w'), KeyModifiers::NONE)],
        action: Action::RequestQuote,
        description: "Request a quote through the messaging app",
        hint: Some("Quote"),
        section: Section::Messages,
    },
    Shortcut {
        keys: "s",
        bindings: &[(KeyCode::Char('s'), KeyModifiers::NONE)],
        action: Action::ShareDesign,
        description: "Share the design through the messaging app",
        hint: Some("Share"),
        section: Section::Messages,
    },
    Shortcut {
        keys: "y",
        bindings: &[(KeyCode::Char('y'), KeyModifiers::NONE)],
        action: Action::CopyQuoteRequest,
        description: "Copy quote request to clipboard",
        hint: None,
        section: Section::Messages,
    },
    Shortcut {
        keys: "?",
        bindings: &[
            (KeyCode::Char('?'), KeyModifiers::NONE),
            (KeyCode::Char('?'), KeyModifiers::SHIFT),
        ],
        action: Action::ToggleHelp,
        description: "Show this help",
        hint: Some("Help"),
        section: Section::General,
    },
    Shortcut {
        keys: "Esc",
        bindings: &[(KeyCode::Esc, KeyModifiers::NONE)],
        action: Action::Cancel,
        description: "Clear status message",
        hint: None,
        section: Section::General,
    },
    Shortcut {
        keys: "q/Ctrl+C",
        bindings: &[
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ],
        action: Action::Quit,
        description: "Quit",
        hint: Some("Quit"),
        section: Section::General,
    },
];

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier state
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry from [`MAIN_SHORTCUTS`].
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        for shortcut in MAIN_SHORTCUTS {
            for &(code, modifiers) in shortcut.bindings {
                registry.register(code, modifiers, shortcut.action);
            }
        }
        registry
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Shortcuts listed in a help section.
    pub fn section(section: Section) -> impl Iterator<Item = &'static Shortcut> {
        MAIN_SHORTCUTS
            .iter()
            .filter(move |shortcut| shortcut.section == section)
    }

    /// (key label, hint) pairs for the status bar.
    #[must_use]
    pub fn status_hints(max_hints: usize) -> Vec<(&'static str, &'static str)> {
        MAIN_SHORTCUTS
            .iter()
            .filter_map(|shortcut| shortcut.hint.map(|hint| (shortcut.keys, hint)))
            .take(max_hints)
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::FocusNext));

        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::AddFavorite));

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(event), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();
        for (c, action) in [
            ('h', Action::NavigateLeft),
            ('j', Action::NavigateDown),
            ('k', Action::NavigateUp),
            ('l', Action::NavigateRight),
        ] {
            assert_eq!(
                registry.lookup(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(action)
            );
        }
    }

    #[test]
    fn test_no_binding_declared_twice() {
        let mut seen = HashSet::new();
        for shortcut in MAIN_SHORTCUTS {
            for binding in shortcut.bindings {
                assert!(seen.insert(*binding), "duplicate binding {binding:?}");
            }
        }
    }

    #[test]
    fn test_every_action_reachable() {
        let actions: HashSet<Action> = MAIN_SHORTCUTS.iter().map(|s| s.action).collect();
        assert_eq!(actions.len(), MAIN_SHORTCUTS.len());
        assert!(actions.contains(&Action::RequestQuote));
        assert!(actions.contains(&Action::ShareDesign));
    }

    #[test]
    fn test_status_hints() {
        let hints = ShortcutRegistry::status_hints(3);
        assert_eq!(hints.len(), 3);
        assert_eq!(hints[0], ("Tab", "Panel"));
    }

    #[test]
    fn test_sections_cover_all_shortcuts() {
        let total: usize = Section::ALL
            .iter()
            .map(|section| ShortcutRegistry::section(*section).count())
            .sum();
        assert_eq!(total, MAIN_SHORTCUTS.len());
    }
}
