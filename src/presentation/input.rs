use crate::application::{App, AppMode};
use crate::domain::Direction;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Printout => Self::handle_printout_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key {
            KeyCode::Char('c') => app.create_maze(),
            KeyCode::Char('g') => app.get_maze(),
            KeyCode::Char('a') => app.adopt_maze_as_game(),
            KeyCode::Char('p') => app.print_maze(),
            KeyCode::Up | KeyCode::Char('k') => app.move_pony(Direction::North),
            KeyCode::Down | KeyCode::Char('j') => app.move_pony(Direction::South),
            KeyCode::Left | KeyCode::Char('h') => app.move_pony(Direction::West),
            KeyCode::Right | KeyCode::Char('l') => app.move_pony(Direction::East),
            KeyCode::Char('s') => app.move_pony(Direction::Stay),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Esc => app.status_message = None,
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_popup();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_printout_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            app.close_popup();
        }
    }
}
