//! Stateless UI rendering for the three screens and the quit prompt.

use mentiroso_engine::{GamePhase, Outcome, Player, TargetWord};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::app::App;

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Screen
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);

    match app.board().phase() {
        GamePhase::Setup => draw_setup(frame, chunks[1], app),
        GamePhase::Playing => draw_playing(frame, chunks[1], app),
        GamePhase::GameOver => draw_game_over(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if app.confirm_quit() {
        draw_quit_prompt(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.board();
    let mut spans = vec![Span::styled(
        board.word().to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if board.phase() == GamePhase::Playing {
        spans.push(Span::raw(format!("   PLAYERS: {}", board.active_count())));
    }
    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Roster
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let players = app.board().players();
    if players.is_empty() {
        let empty = Paragraph::new("No players yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().title("Players").borders(Borders::ALL));
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = players
            .iter()
            .map(|p| ListItem::new(p.name().as_str()))
            .collect();
        draw_roster(frame, chunks[0], items, app.selected());
    }

    let input = Paragraph::new(format!("{}_", app.input()))
        .block(Block::default().title("Name").borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    let start_style = if app.board().can_start() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let hints = Line::from(vec![
        Span::raw("Enter: add  Del: remove  "),
        Span::styled("Tab: start", start_style),
        Span::raw("  Esc: exit"),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[2]);
}

fn draw_playing(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let word = app.board().word();
    let items: Vec<ListItem> = app
        .board()
        .players()
        .iter()
        .map(|p| ListItem::new(player_line(p, word, app.can_undo(p))))
        .collect();
    draw_roster(frame, chunks[0], items, app.selected());

    let hints = Paragraph::new("Enter: strike  u: undo  Up/Down: select  q: quit game")
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[1]);
}

/// One roster row: name, revealed letters, and remaining blanks.
fn player_line<'a>(player: &'a Player, word: &TargetWord, undo: bool) -> Line<'a> {
    let out = player.is_eliminated(word.len());
    let name_style = if out {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(format!("{:<16}", player.name()), name_style)];
    for (i, letter) in word.letters().iter().enumerate() {
        let span = if i < player.strikes() {
            Span::styled(
                format!("{} ", letter),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("_ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }
    if out {
        spans.push(Span::styled(" OUT", Style::default().fg(Color::Red)));
    } else if undo {
        spans.push(Span::styled(" ←", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn draw_roster(frame: &mut Frame, area: Rect, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(Block::default().title("Players").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let headline = match app.board().outcome() {
        Some(Outcome::Winner(player)) => format!("{} WINS!", player.name()),
        Some(Outcome::NoSurvivors) | None => "NOBODY WINS".to_string(),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("p: play again   r: new table   q: exit"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game Over").borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, 44, 7));
}

fn draw_quit_prompt(frame: &mut Frame) {
    let area = center_rect(frame.area(), 40, 6);
    let text = vec![
        Line::from(Span::styled(
            "Exit game?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Unsaved progress will be lost."),
        Line::from(""),
        Line::from("y: yes   n: no"),
    ];
    let prompt = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Confirm Exit").borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn add(app: &mut App, name: &str) {
        for c in name.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_setup_screen_lists_players() {
        let mut app = App::new(TargetWord::default());
        add(&mut app, "Ana");
        let screen = render(&app);
        assert!(screen.contains("MENTIROSO"));
        assert!(screen.contains("Ana"));
        assert!(screen.contains("Tab: start"));
    }

    #[test]
    fn test_playing_screen_reveals_letters() {
        let mut app = App::new(TargetWord::default());
        add(&mut app, "Ana");
        add(&mut app, "Luis");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("PLAYERS: 2"));
        assert!(screen.contains("M E _"));
    }

    #[test]
    fn test_quit_prompt_overlays_game() {
        let mut app = App::new(TargetWord::default());
        add(&mut app, "Ana");
        add(&mut app, "Luis");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));

        let screen = render(&app);
        assert!(screen.contains("Exit game?"));
    }

    #[test]
    fn test_game_over_names_winner() {
        let mut app = App::new(TargetWord::new("no").expect("valid word"));
        add(&mut app, "Ana");
        add(&mut app, "Luis");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Luis WINS!"));
    }
}
