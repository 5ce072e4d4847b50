//! Terminal UI example using crossterm and ratatui.
//!
//! A minimal reagent-name field: type a formula, hold Ctrl while
//! pressing a digit to get the subscript form. Run with:
//! cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use chem_input::{
    Engine, KeyCode, KeyEvent, Modifiers, TextField, ThemeConfig, flatten_formula, hex_rgb,
    localize_datetime,
};

struct App {
    engine: Engine,
    field: String,
    theme: ThemeConfig,
    clock: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            field: String::new(),
            theme: ThemeConfig::default(),
            clock: current_clock(),
            should_quit: false,
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        self.clock = current_clock();

        let Some(key) = convert_crossterm_event(event) else {
            return;
        };

        // A handled event already appended its subscript; feeding the
        // raw character through as well would double the input.
        if self.engine.handle_event(&mut self.field, key).is_handled() {
            return;
        }

        match key.code {
            KeyCode::Char(c) if !key.mods.contains(Modifiers::CTRL) => self.field.push(c),
            KeyCode::Backspace => {
                self.field.pop();
            }
            KeyCode::Enter => self.field.clear(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    if event.modifiers.contains(KeyModifiers::SUPER) {
        mods |= Modifiers::META;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        _ => return None,
    };

    Some(KeyEvent { code, mods })
}

fn current_clock() -> String {
    localize_datetime(&chrono::Utc::now().to_rfc3339()).unwrap_or_default()
}

/// "#rrggbb" to a terminal color, Reset when malformed.
fn hex_color(hex: &str) -> Color {
    match hex_rgb(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let accent = hex_color(app.theme.color("blue").unwrap_or("#3669ba"));

    let field = Paragraph::new(app.field.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Formula")
            .style(Style::default().fg(accent)),
    );
    f.render_widget(field, chunks[0]);

    let plain = Paragraph::new(flatten_formula(&app.field))
        .block(Block::default().borders(Borders::ALL).title("Plain"));
    f.render_widget(plain, chunks[1]);

    let help = vec![
        Line::from(app.clock.as_str()),
        Line::from("Ctrl+digit inserts a subscript. Enter clears, Esc quits."),
    ];
    let status = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    f.set_cursor(
        chunks[0].x + 1 + app.field.grapheme_len() as u16,
        chunks[0].y + 1,
    );
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
