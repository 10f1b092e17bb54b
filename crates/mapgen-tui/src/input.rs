//! Input handling - convert key events to viewer commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the viewer can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Quit,
    /// Switch between terrain and region coloring
    ToggleRegions,
    TogglePause,
    Faster,
    Slower,
    /// Run the current dungeon to completion
    Finish,
    /// Start over with a fresh seed
    NewSeed,
    Scroll { dx: i32, dy: i32 },
    Help,
}

/// Convert a key event to a viewer command.
pub fn key_to_command(key: KeyEvent) -> Option<ViewerCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(ViewerCommand::Quit), // Ctrl+C
            _ => None,
        };
    }

    // Shift scrolls a screenful faster
    let stride = if key.modifiers.contains(KeyModifiers::SHIFT) { 10 } else { 1 };

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewerCommand::Quit),
        KeyCode::Char('r') => Some(ViewerCommand::ToggleRegions),
        KeyCode::Char(' ') => Some(ViewerCommand::TogglePause),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewerCommand::Faster),
        KeyCode::Char('-') => Some(ViewerCommand::Slower),
        KeyCode::Char('f') => Some(ViewerCommand::Finish),
        KeyCode::Char('n') => Some(ViewerCommand::NewSeed),
        KeyCode::Char('?') => Some(ViewerCommand::Help),

        KeyCode::Up => Some(ViewerCommand::Scroll { dx: 0, dy: -stride }),
        KeyCode::Down => Some(ViewerCommand::Scroll { dx: 0, dy: stride }),
        KeyCode::Left => Some(ViewerCommand::Scroll { dx: -stride, dy: 0 }),
        KeyCode::Right => Some(ViewerCommand::Scroll { dx: stride, dy: 0 }),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('q'))), Some(ViewerCommand::Quit));
        assert_eq!(key_to_command(key(KeyCode::Esc)), Some(ViewerCommand::Quit));
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ViewerCommand::Quit)
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('+'))), Some(ViewerCommand::Faster));
        assert_eq!(key_to_command(key(KeyCode::Char('-'))), Some(ViewerCommand::Slower));
    }

    #[test]
    fn test_arrows_scroll() {
        assert_eq!(
            key_to_command(key(KeyCode::Left)),
            Some(ViewerCommand::Scroll { dx: -1, dy: 0 })
        );
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT)),
            Some(ViewerCommand::Scroll { dx: 0, dy: 10 })
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_to_command(key(KeyCode::Char('z'))), None);
    }
}
