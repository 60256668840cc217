//! TUI application state and logic

use crate::commands::simple::GuessTracker;
use crate::solver::Solution;
use crate::wordlists::{DictionarySelector, LengthChoice};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub selector: DictionarySelector,
    pub rng: StdRng,
    pub length: LengthChoice,
    pub solution: Solution,
    pub tracker: GuessTracker,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_wrong: usize,
    pub fewest_wrong: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_wrong as f64 / self.games_won as f64
        }
    }

    fn record(&mut self, wrong: usize) {
        self.games_won += 1;
        self.total_wrong += wrong;
        self.fewest_wrong = Some(self.fewest_wrong.map_or(wrong, |best| best.min(wrong)));
    }
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate set can be selected from the dictionary.
    pub fn new(
        selector: DictionarySelector,
        mut rng: StdRng,
        length: LengthChoice,
    ) -> Result<Self> {
        let solution = Solution::new(selector.select(length, &mut rng)?)?;

        let mut app = Self {
            selector,
            rng,
            length,
            solution,
            tracker: GuessTracker::new(),
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.announce_game();
        Ok(app)
    }

    /// Start a new game with a freshly selected word length
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate set can be selected from the dictionary.
    pub fn new_game(&mut self) -> Result<()> {
        let candidates = self.selector.select(self.length, &mut self.rng)?;
        self.solution = Solution::new(candidates)?;
        self.tracker = GuessTracker::new();
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.announce_game();
        Ok(())
    }

    fn announce_game(&mut self) {
        let length = self.solution.word_length();
        self.add_message(
            &format!("I'm thinking of a {length}-letter word. Guess a letter."),
            MessageStyle::Info,
        );
    }

    /// Submit a typed character as a guess
    pub fn guess_letter(&mut self, input: char) {
        let letter = match self.tracker.validate(&input.to_string()) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let correct = self.solution.guess(letter);
        self.tracker.record(letter, correct);

        if correct {
            self.add_message(&format!("Yes, there is a '{letter}'."), MessageStyle::Success);
        } else {
            self.add_message(&format!("Sorry, no '{letter}'."), MessageStyle::Error);
        }

        if self.solution.is_solved() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(self.tracker.incorrect_count());
        self.input_mode = InputMode::WinCelebration;

        match self.solution.current_target() {
            Ok(target) => {
                let text = format!("Congrats! The word was {target}");
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => {
                if let KeyCode::Char(c) = key.code {
                    self.guess_letter(c);
                }
            }
            InputMode::WinCelebration => {
                if key.code == KeyCode::Enter
                    && let Err(e) = self.new_game()
                {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw and handle events until the player quits
fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
