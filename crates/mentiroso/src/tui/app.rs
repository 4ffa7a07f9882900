//! Application state and key handling.
//!
//! The app holds only what the screens need on top of the scoreboard:
//! the name being typed, the selected row, the pending quit prompt, and a
//! status line. Every change to the game goes through an [`Intent`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mentiroso_engine::{Effect, GamePhase, Intent, Player, PlayerId, Scoreboard, TargetWord};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    board: Scoreboard,
    input: String,
    selected: usize,
    confirm_quit: bool,
    should_exit: bool,
    status: String,
}

impl App {
    /// Creates an app around a fresh scoreboard.
    #[instrument]
    pub fn new(word: TargetWord) -> Self {
        Self {
            board: Scoreboard::new(word),
            input: String::new(),
            selected: 0,
            confirm_quit: false,
            should_exit: false,
            status: "Add at least two players to start.".to_string(),
        }
    }

    /// The scoreboard being displayed.
    pub fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// Name typed so far on the setup screen.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the highlighted player.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the quit confirmation is showing.
    pub fn confirm_quit(&self) -> bool {
        self.confirm_quit
    }

    /// Whether the event loop should stop.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Last status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The highlighted player, if the roster is not empty.
    pub fn selected_player(&self) -> Option<&Player> {
        self.board.players().get(self.selected)
    }

    /// Whether the undo control applies to a player.
    ///
    /// Undo is offered for players with strikes who are still in the game.
    pub fn can_undo(&self, player: &Player) -> bool {
        player.strikes() > 0 && player.is_active(self.board.word().len())
    }

    /// Handles one key event.
    #[instrument(skip(self), fields(phase = %self.board.phase(), confirm_quit = self.confirm_quit))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            self.should_exit = true;
            return;
        }

        match self.board.phase() {
            GamePhase::Setup => self.handle_setup_key(key.code),
            GamePhase::Playing if self.confirm_quit => self.handle_quit_prompt_key(key.code),
            GamePhase::Playing => self.handle_playing_key(key.code),
            GamePhase::GameOver => self.handle_game_over_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.input);
                if self.dispatch(Intent::AddPlayer(name)).is_applied() {
                    self.selected = self.board.players().len().saturating_sub(1);
                    self.status = format!("{} players on the table.", self.board.players().len());
                }
            }
            KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Intent::RemovePlayer(id));
                }
            }
            KeyCode::Tab => {
                if self.board.can_start() {
                    self.dispatch(Intent::StartGame);
                    self.selected = 0;
                    self.status = "Game on. Enter marks a letter.".to_string();
                } else {
                    self.status = "Need at least two players to start.".to_string();
                }
            }
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Esc => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Intent::AddStrike(id));
                    self.announce_game_over();
                }
            }
            KeyCode::Backspace | KeyCode::Char('u') => {
                if let Some(player) = self.selected_player()
                    && self.can_undo(player)
                {
                    let id = player.id();
                    self.dispatch(Intent::UndoStrike(id));
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Asking for quit confirmation");
                self.confirm_quit = true;
            }
            _ => {}
        }
    }

    fn handle_quit_prompt_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.confirm_quit = false;
                self.dispatch(Intent::ResetGame);
                self.selected = 0;
                self.status = "Game abandoned. Add players to start again.".to_string();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_quit = false;
            }
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('p') => {
                self.dispatch(Intent::PlayAgain);
                self.selected = 0;
                self.status = "New round, same table.".to_string();
            }
            KeyCode::Char('r') => {
                self.dispatch(Intent::ResetGame);
                self.selected = 0;
                self.status = "Add at least two players to start.".to_string();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            _ => {}
        }
    }

    /// Applies an intent and reports an ignored one on the status line.
    fn dispatch(&mut self, intent: Intent) -> Effect {
        let effect = self.board.apply(intent);
        if let Effect::Ignored(reason) = effect {
            self.status = reason.to_string();
        }
        self.clamp_selection();
        effect
    }

    fn announce_game_over(&mut self) {
        if let Some(outcome) = self.board.outcome() {
            self.status = format!("{}! p: play again, r: new table, q: exit", outcome);
        }
    }

    fn selected_id(&self) -> Option<PlayerId> {
        self.selected_player().map(Player::id)
    }

    fn select_previous(&mut self) {
        let count = self.board.players().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    fn select_next(&mut self) {
        let count = self.board.players().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    fn clamp_selection(&mut self) {
        let count = self.board.players().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn table(names: &[&str]) -> App {
        let mut app = App::new(TargetWord::default());
        for name in names {
            type_name(&mut app, name);
        }
        app
    }

    #[test]
    fn test_typing_adds_players() {
        let app = table(&["Ana", "Luis"]);
        let names: Vec<_> = app.board().players().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Ana", "Luis"]);
        assert!(app.input().is_empty());
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_q_is_a_letter_during_setup() {
        let mut app = table(&[]);
        type_name(&mut app, "Quique");
        assert_eq!(app.board().players()[0].name(), "Quique");
        assert!(!app.should_exit());
    }

    #[test]
    fn test_blank_name_reports_status() {
        let mut app = table(&[]);
        type_name(&mut app, "   ");
        assert!(app.board().players().is_empty());
        assert_eq!(app.status(), "Player name is blank");
    }

    #[test]
    fn test_tab_needs_two_players() {
        let mut app = table(&["Ana"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board().phase(), GamePhase::Setup);

        type_name(&mut app, "Luis");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board().phase(), GamePhase::Playing);
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut app = table(&["Ana", "Luis"]);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Delete);
        let names: Vec<_> = app.board().players().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Luis"]);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_full_round_and_play_again() {
        let mut app = table(&["Ana", "Luis"]);
        press(&mut app, KeyCode::Tab);

        for _ in 0..9 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.board().phase(), GamePhase::GameOver);
        assert_eq!(app.board().winner().map(|p| p.name().as_str()), Some("Luis"));
        assert!(app.status().starts_with("Luis wins"));

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.board().phase(), GamePhase::Playing);
        assert!(app.board().players().iter().all(|p| p.strikes() == 0));
    }

    #[test]
    fn test_undo_offered_only_for_active_players_with_strikes() {
        let mut app = table(&["Ana", "Luis", "Eva"]);
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.board().players()[0].strikes(), 0);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.board().players()[0].strikes(), 1);

        for _ in 0..8 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.board().players()[0].strikes(), 9);
        let ana = app.board().players()[0].clone();
        assert!(!app.can_undo(&ana));
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.board().players()[0].strikes(), 9);
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = table(&["Ana", "Luis"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.confirm_quit());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().players()[0].strikes(), 1);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.confirm_quit());
        assert_eq!(app.board().phase(), GamePhase::Playing);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(!app.confirm_quit());
        assert_eq!(app.board().phase(), GamePhase::Setup);
        assert!(app.board().players().is_empty());
        assert!(!app.should_exit());
    }

    #[test]
    fn test_reset_from_game_over() {
        let mut app = table(&["Ana", "Luis"]);
        press(&mut app, KeyCode::Tab);
        for _ in 0..9 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.board().phase(), GamePhase::Setup);
        assert!(app.board().players().is_empty());
    }

    #[test]
    fn test_ctrl_c_exits_from_any_screen() {
        let mut app = table(&["Ana"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_exit());
        assert!(app.input().is_empty());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = table(&[]);
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.input().is_empty());
    }
}
