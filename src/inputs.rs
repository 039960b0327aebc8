//! Keyboard shortcut surface
//!
//! Fixed, host-global bindings: arrow keys for pages, `+`/`=`/`-` for
//! zoom. With one viewer per host session there is nothing to scope or
//! configure.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Commands the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    PreviousPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    /// No default key; exposed for host UI elements (toolbar buttons).
    FitToPage,
}

/// Map a key event to a viewer command, if any.
///
/// Key repeat counts as a press so held arrows keep navigating; releases
/// are filtered out.
pub fn command_for_key(key: &KeyEvent) -> Option<ViewerCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(ViewerCommand::PreviousPage),
        KeyCode::Right => Some(ViewerCommand::NextPage),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewerCommand::ZoomIn),
        KeyCode::Char('-') => Some(ViewerCommand::ZoomOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::key;

    #[test]
    fn test_fixed_bindings() {
        assert_eq!(
            command_for_key(&key(KeyCode::Left)),
            Some(ViewerCommand::PreviousPage)
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Right)),
            Some(ViewerCommand::NextPage)
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Char('+'))),
            Some(ViewerCommand::ZoomIn)
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Char('='))),
            Some(ViewerCommand::ZoomIn)
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Char('-'))),
            Some(ViewerCommand::ZoomOut)
        );
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        assert_eq!(command_for_key(&key(KeyCode::Up)), None);
        assert_eq!(command_for_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_events_filtered() {
        let mut released = key(KeyCode::Right);
        released.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(&released), None);
    }
}
