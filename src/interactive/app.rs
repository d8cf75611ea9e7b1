//! TUI application state and logic

use crate::client::{Authenticator, Client, ClientError, Credentials};
use crate::game::{GameSession, GameStatus, InputEvent, Statistics, Update};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<A: Authenticator, W: WordSource> {
    pub client: Client<A, W>,
    pub input_mode: InputMode,
    pub username: String,
    pub password: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Username,
    Password,
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<A: Authenticator, W: WordSource> App<A, W> {
    #[must_use]
    pub fn new(client: Client<A, W>) -> Self {
        Self {
            client,
            input_mode: InputMode::Username,
            username: String::new(),
            password: String::new(),
            messages: vec![Message {
                text: "Log in to start playing.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Current game, if any
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.client.session()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn login(&mut self) {
        let credentials = Credentials::new(self.username.trim(), self.password.as_str());

        match self.client.login(&credentials) {
            Ok(()) => {
                self.password.clear();
                self.add_message("Login successful!", MessageStyle::Success);
                self.new_game();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                // Send the user back to whichever field is missing
                if self.username.trim().is_empty() {
                    self.input_mode = InputMode::Username;
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.client.start_game() {
            Ok(session) => {
                let length = session.word_length();
                self.input_mode = InputMode::Playing;
                self.add_message(
                    &format!("Guess the {length}-letter word!"),
                    MessageStyle::Success,
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start game");
                self.add_message(
                    &format!("Error starting game: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn logout(&mut self) {
        if self.client.logout() {
            self.username.clear();
            self.password.clear();
            self.input_mode = InputMode::Username;
            self.add_message("Logged out successfully!", MessageStyle::Success);
        }
    }

    /// Send one game event and react to the result
    pub fn play(&mut self, event: InputEvent) {
        match self.client.dispatch(event) {
            Ok(Update::Submitted { status, .. }) => self.finish_row(status),
            Ok(Update::Unchanged | Update::InputChanged) => {}
            Err(ClientError::Game(e)) if e.is_ignorable() => {
                tracing::debug!(error = %e, "ignored input after game end");
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_row(&mut self, status: GameStatus) {
        let Some(session) = self.client.session() else {
            return;
        };

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                let guesses = session.attempts().len();
                self.stats.record(session);
                self.input_mode = InputMode::Finished;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    _ => "🎉 You guessed the word! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for new game, 'l' to log out or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            GameStatus::Lost => {
                let target = session.target().text().to_uppercase();
                self.stats.record(session);
                self.input_mode = InputMode::Finished;

                self.add_message(
                    &format!("Game over! The word was: {target}"),
                    MessageStyle::Error,
                );
                self.add_message(
                    "Press 'n' for new game, 'l' to log out or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Username | InputMode::Password => self.handle_login_key(key),
            InputMode::Playing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.logout();
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.play(InputEvent::AppendLetter(c));
                }
                KeyCode::Backspace => self.play(InputEvent::DeleteLetter),
                KeyCode::Enter => self.play(InputEvent::Submit),
                _ => {}
            },
            InputMode::Finished => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        self.new_game();
                    }
                    KeyCode::Char('l') => {
                        self.logout();
                    }
                    _ => {
                        // Late keys after the game ends are ignored
                    }
                }
            }
        }
    }

    fn active_field(&mut self) -> &mut String {
        if self.input_mode == InputMode::Username {
            &mut self.username
        } else {
            &mut self.password
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.input_mode = match self.input_mode {
                    InputMode::Username => InputMode::Password,
                    _ => InputMode::Username,
                };
            }
            KeyCode::Char(c) => self.active_field().push(c),
            KeyCode::Backspace => {
                self.active_field().pop();
            }
            KeyCode::Enter => {
                if self.input_mode == InputMode::Username {
                    self.input_mode = InputMode::Password;
                } else {
                    self.login();
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<A: Authenticator, W: WordSource>(app: App<A, W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, A: Authenticator, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<A, W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
