//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::letter_list;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("EVIL HANGMAN")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_word(f, app, chunks[0]);
    render_guesses(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let pattern = app.solution.progress_text();
    let length = app.solution.word_length();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            pattern.to_uppercase(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "{length} letters, {} still hidden",
            app.solution.missing_count()
        ))
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let incorrect = app.tracker.incorrect();
    let content = vec![
        Line::from(vec![
            Span::raw("Guessed:   "),
            Span::raw(letter_list(app.tracker.guesses())),
        ]),
        Line::from(vec![
            Span::raw("Incorrect: "),
            Span::styled(letter_list(&incorrect), Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Misses:    {}", incorrect.len())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_reveal_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_reveal_progress(f: &mut Frame, app: &App, area: Rect) {
    let length = app.solution.word_length();
    let shown = length - app.solution.missing_count();
    let percent = if length == 0 {
        0
    } else {
        (shown * 100 / length) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{shown}/{length} | {} candidates remain",
            app.solution.candidate_count()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " Solved! | Press Enter for a new game or Esc to quit ",
            Color::Green,
        ),
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games = Paragraph::new(format!("Games won: {}", app.stats.games_won))
        .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let average = Paragraph::new(format!("Avg misses: {:.1}", app.stats.average_wrong()))
        .alignment(Alignment::Center);
    f.render_widget(average, chunks[1]);

    let best_text = app
        .stats
        .fewest_wrong
        .map_or_else(|| "Best: -".to_string(), |best| format!("Best: {best}"));
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "Enter: New Game | Esc: Quit",
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{DictionarySelector, LengthChoice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_pattern_and_guesses() {
        let selector = DictionarySelector::new(words_from_slice(&["echo", "heal", "belt"]));
        let mut app =
            App::new(selector, StdRng::seed_from_u64(0), LengthChoice::FirstWord).unwrap();
        app.guess_letter('e');
        app.guess_letter('z');

        let text = screen_text(&app);
        assert!(text.contains("EVIL HANGMAN"));
        assert!(text.contains("_ E _ _"));
        assert!(text.contains("[e, z]"));
    }
}
