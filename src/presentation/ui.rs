use crate::application::{App, AppMode, RequestState};
use crate::domain::{project_grid, CellTag, CellTags};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_controls(f, chunks[1]);
    render_maze(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    match app.mode {
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Printout => render_printout_popup(f, app.printout.as_deref().unwrap_or("")),
        AppMode::Normal => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "pony-maze | Maze: {} | Game: {}",
        app.store.maze_id().unwrap_or("-"),
        app.store.game_id().unwrap_or("-"),
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Black).bg(Color::Yellow);
    let controls = Line::from(vec![
        Span::styled(" c ", key),
        Span::raw(" Create Maze  "),
        Span::styled(" g ", key),
        Span::raw(" Get Maze  "),
        Span::styled(" a ", key),
        Span::raw(" Play  "),
        Span::styled(" ←↑↓→ ", key),
        Span::raw(" Move  "),
        Span::styled(" p ", key),
        Span::raw(" Print  "),
        Span::styled(" ? ", key),
        Span::raw(" Help  "),
        Span::styled(" q ", key),
        Span::raw(" Quit"),
    ]);
    let widget = Paragraph::new(controls).block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(widget, area);
}

/// Background color of a cell. Pony wins over domokun, domokun over the exit.
pub fn cell_fill(tags: &CellTags) -> Color {
    if tags.contains(&CellTag::Pony) {
        Color::LightMagenta
    } else if tags.contains(&CellTag::Domokun) {
        Color::Red
    } else if tags.contains(&CellTag::EndPoint) {
        Color::LightGreen
    } else {
        Color::Gray
    }
}

pub fn cell_letter(tags: &CellTags) -> char {
    if tags.contains(&CellTag::Pony) {
        'P'
    } else if tags.contains(&CellTag::Domokun) {
        'D'
    } else if tags.contains(&CellTag::EndPoint) {
        'E'
    } else {
        ' '
    }
}

/// Two terminal lines per maze row: the north walls, then the cells.
pub fn maze_lines(grid: &[Vec<CellTags>]) -> Vec<Line<'static>> {
    let wall = Style::default().fg(Color::White);
    let mut lines = Vec::with_capacity(grid.len() * 2);
    for row in grid {
        let top: Vec<Span> = row
            .iter()
            .map(|tags| {
                let text = if tags.contains(&CellTag::North) { "───" } else { "   " };
                Span::styled(text, wall)
            })
            .collect();
        let body: Vec<Span> = row
            .iter()
            .map(|tags| {
                let left = if tags.contains(&CellTag::West) { '│' } else { ' ' };
                let right = if tags.contains(&CellTag::East) { '│' } else { ' ' };
                Span::styled(
                    format!("{left}{}{right}", cell_letter(tags)),
                    Style::default().bg(cell_fill(tags)).fg(Color::Black),
                )
            })
            .collect();
        lines.push(Line::from(top));
        lines.push(Line::from(body));
    }
    lines
}

fn render_maze(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let grid = project_grid(
        &snapshot.pony,
        &snapshot.domokun,
        &snapshot.end_point,
        &snapshot.size,
        &snapshot.data,
    );
    let title = format!(
        "Maze {}x{} (difficulty {})",
        snapshot.width(),
        snapshot.height(),
        snapshot.difficulty
    );
    let maze = Paragraph::new(maze_lines(&grid)).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(maze, area);
}

fn flags<T>(name: &str, state: &RequestState<T>) -> String {
    let status = match (state.loading, state.error) {
        (true, _) => "loading",
        (false, true) => "error",
        (false, false) => "idle",
    };
    format!("{name}: {status}")
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let store = &app.store;
    let text = match app.mode {
        AppMode::Normal => {
            let containers = [
                flags("maze", &store.maze),
                flags("mazeState", &store.maze_state),
                flags("nextMove", &store.next_move),
            ]
            .join(" | ");
            match &app.status_message {
                Some(status) => format!("{status} | {containers}"),
                None => containers,
            }
        }
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::Printout => "Esc/q: close".to_string(),
    };

    let style = if store.maze.error || store.maze_state.error || store.next_move.error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn popup_area(area: Rect) -> Rect {
    Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    }
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let popup_area = popup_area(f.area());
    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;
    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let help_widget = Paragraph::new(help_lines[start_line..end_line].join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(help_widget, popup_area);
}

fn render_printout_popup(f: &mut Frame, text: &str) {
    let popup_area = popup_area(f.area());
    f.render_widget(Clear, popup_area);
    let widget = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL).title("Printed maze"));
    f.render_widget(widget, popup_area);
}

pub const HELP_TEXT: &str = r#"PONY MAZE

=== GETTING STARTED ===
c               Create a new maze on the service
g               Fetch the current maze state and redraw the grid
a               Play the created maze (use its id for moves and printing)

=== PLAYING ===
Arrow keys      Move the pony (hjkl also work)
s               Stay in place for one turn
p               Print the maze as the service renders it

=== LEGEND ===
P (pink)        Pony
D (red)         Domokun
E (green)       Exit
───  │          Walls

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll this help text
Home            Jump to top
Esc/?/q         Close this window

Errors from the service are written to the log file, not shown here.
The status bar only reports whether each request is idle, loading or failed."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::orchestration::tests::StubApi;
    use ratatui::{backend::TestBackend, Terminal};

    fn tags(list: &[CellTag]) -> CellTags {
        list.iter().copied().collect()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 45)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_fill_precedence() {
        assert_eq!(cell_fill(&tags(&[CellTag::Pony, CellTag::Domokun])), Color::LightMagenta);
        assert_eq!(cell_fill(&tags(&[CellTag::Domokun, CellTag::EndPoint])), Color::Red);
        assert_eq!(cell_fill(&tags(&[CellTag::EndPoint])), Color::LightGreen);
        assert_eq!(cell_fill(&tags(&[CellTag::North])), Color::Gray);
    }

    #[test]
    fn test_cell_letters() {
        assert_eq!(cell_letter(&tags(&[CellTag::Pony])), 'P');
        assert_eq!(cell_letter(&tags(&[CellTag::Domokun])), 'D');
        assert_eq!(cell_letter(&tags(&[CellTag::EndPoint])), 'E');
        assert_eq!(cell_letter(&tags(&[])), ' ');
    }

    #[test]
    fn test_maze_lines_draw_walls() {
        let grid = vec![vec![
            tags(&[CellTag::North, CellTag::West, CellTag::Pony]),
            tags(&[CellTag::East]),
        ]];
        let lines = maze_lines(&grid);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "───");
        assert_eq!(lines[0].spans[1].content, "   ");
        assert_eq!(lines[1].spans[0].content, "│P ");
        assert_eq!(lines[1].spans[1].content, "  │");
        assert_eq!(lines[1].spans[0].style.bg, Some(Color::LightMagenta));
    }

    #[test]
    fn test_render_default_grid_shows_entities() {
        let app = App::new(Box::new(StubApi::new()));
        let screen = screen(&app);
        assert!(screen.contains("Create Maze"));
        assert!(screen.contains("Get Maze"));
        assert!(screen.contains("Maze 15x15"));
    }

    #[test]
    fn test_entities_drawn_at_projected_cells() {
        let app = App::new(Box::new(StubApi::new()));
        let mut terminal = Terminal::new(TestBackend::new(80, 45)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();

        // Maze block starts below header and controls; inner area at (1, 5).
        // Each maze row takes two lines, each cell three columns.
        let letter_at = |index: u16| {
            let (row, col) = (index / 15, index % 15);
            let cell = &buffer[(1 + col * 3 + 1, 5 + row * 2 + 1)];
            (cell.symbol().to_string(), cell.bg)
        };
        assert_eq!(letter_at(70), ("P".to_string(), Color::LightMagenta));
        assert_eq!(letter_at(218), ("D".to_string(), Color::Red));
        assert_eq!(letter_at(186), ("E".to_string(), Color::LightGreen));
    }

    #[test]
    fn test_render_after_fetch() {
        let mut app = App::new(Box::new(StubApi::new()));
        app.create_maze();
        app.get_maze();
        let screen = screen(&app);
        assert!(screen.contains("Maze: abc123"));
        assert!(screen.contains("maze: idle"));
    }

    #[test]
    fn test_render_popups() {
        let mut app = App::new(Box::new(StubApi::new()));
        app.show_help();
        assert!(screen(&app).contains("PONY MAZE"));

        app.printout = Some("PRINTED-MAZE".to_string());
        app.mode = AppMode::Printout;
        assert!(screen(&app).contains("PRINTED-MAZE"));
    }
}
