//! Ratatui backend implementation for the FormBackend trait.
//!
//! Displays all fields at once with keyboard navigation, the active errors
//! under their inputs, and the last submitted values below the form.

use contact_form::{ContactForm, Element, Field, FormBackend, FormError, Role, SUBMIT, Surface};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User left the form (pressed Esc) without a successful submit.
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiFormError> for FormError {
    fn from(err: RatatuiFormError) -> Self {
        match err {
            RatatuiFormError::Cancelled => FormError::Cancelled,
            other => FormError::backend(other),
        }
    }
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui form backend that displays all fields at once.
#[derive(Debug, Clone, Default)]
pub struct RatatuiFormBackend {
    /// Color theme for the UI.
    theme: Theme,
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form backend with default settings.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(Field),
    Submit,
}

const FOCUS_ORDER: [Focus; 5] = [
    Focus::Field(Field::FirstName),
    Focus::Field(Field::LastName),
    Focus::Field(Field::Email),
    Focus::Field(Field::Message),
    Focus::Submit,
];

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal-side state layered on top of the form: focus and cursor.
#[derive(Debug)]
struct ViewState {
    focus: Focus,
    /// Cursor position in chars within the focused field.
    cursor: usize,
    theme: Theme,
}

impl ViewState {
    fn new(form: &ContactForm, theme: Theme) -> Self {
        let mut state = Self {
            focus: FOCUS_ORDER[0],
            cursor: 0,
            theme,
        };
        state.focus_on(form, FOCUS_ORDER[0]);
        state
    }

    fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    fn focus_on(&mut self, form: &ContactForm, focus: Focus) {
        self.focus = focus;
        self.cursor = match focus {
            Focus::Field(field) => form.values().get(field).chars().count(),
            Focus::Submit => 0,
        };
    }

    fn focus_index(&self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    fn next_field(&mut self, form: &ContactForm) {
        let next = (self.focus_index() + 1).min(FOCUS_ORDER.len() - 1);
        self.focus_on(form, FOCUS_ORDER[next]);
    }

    fn prev_field(&mut self, form: &ContactForm) {
        let prev = self.focus_index().saturating_sub(1);
        self.focus_on(form, FOCUS_ORDER[prev]);
    }

    fn edit(&mut self, form: &mut ContactForm, edit: impl FnOnce(&mut String, &mut usize)) {
        if let Some(field) = self.focused_field() {
            let mut value = form.values().get(field).to_string();
            edit(&mut value, &mut self.cursor);
            form.change(field, value);
        }
    }

    fn handle_text_input(&mut self, form: &mut ContactForm, c: char) {
        self.edit(form, |value, cursor| {
            value.insert(byte_offset(value, *cursor), c);
            *cursor += 1;
        });
    }

    fn handle_backspace(&mut self, form: &mut ContactForm) {
        if self.cursor == 0 {
            return;
        }
        self.edit(form, |value, cursor| {
            *cursor -= 1;
            value.remove(byte_offset(value, *cursor));
        });
    }

    fn handle_delete(&mut self, form: &mut ContactForm) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if self.cursor >= form.values().get(field).chars().count() {
            return;
        }
        self.edit(form, |value, cursor| {
            value.remove(byte_offset(value, *cursor));
        });
    }

    fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_right(&mut self, form: &ContactForm) {
        if let Some(field) = self.focused_field()
            && self.cursor < form.values().get(field).chars().count()
        {
            self.cursor += 1;
        }
    }

    fn submit(&mut self, form: &mut ContactForm) {
        let outcome = form.submit();
        // Jump to the first field that needs fixing.
        if let Some((field, _)) = outcome.errors().and_then(|errors| errors.iter().next()) {
            self.focus_on(form, Focus::Field(field));
        }
    }

    fn handle_key(&mut self, form: &mut ContactForm, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Esc => return Flow::Quit,
            // Raw mode swallows SIGINT, so Ctrl+C leaves like Esc
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            // Ctrl+Enter or F10 to submit from anywhere
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(form),
            KeyCode::F(10) => self.submit(form),
            // Enter: submit if on button, otherwise move to next field
            KeyCode::Enter => {
                if self.focus == Focus::Submit {
                    self.submit(form);
                } else {
                    self.next_field(form);
                }
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_field(form),
            KeyCode::Tab | KeyCode::Down => self.next_field(form),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(form),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(form),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.focus_on(form, self.focus),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_text_input(form, c);
            }
            KeyCode::Backspace => self.handle_backspace(form),
            KeyCode::Delete => self.handle_delete(form),
            _ => {}
        }
        Flow::Continue
    }
}

/// Byte index of the `char_idx`-th char, or the end of the string.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Height of one input box: top border, value, bottom border (which carries the error).
const FIELD_HEIGHT: u16 = 3;

const FIELD_COUNT: u16 = Field::ALL.len() as u16;

fn draw_form(frame: &mut Frame, form: &ContactForm, state: &ViewState) {
    let surface = form.surface();
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(FIELD_HEIGHT * FIELD_COUNT), // Fields
            Constraint::Length(3),                          // Submit button
            Constraint::Min(3),                             // Submitted values
            Constraint::Length(1),                          // Help bar
        ])
        .split(frame.area());

    // Header
    let header = surface.header().map(Element::text).unwrap_or_default();
    let header = Paragraph::new(header)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    // Fields
    let field_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Field::ALL.map(|_| Constraint::Length(FIELD_HEIGHT)))
        .split(chunks[1]);
    for (input, area) in surface.all_by_role(Role::TextBox).zip(field_rows.iter()) {
        draw_field(frame, &surface, input, *area, state);
    }

    // Submit button
    let submit_focused = state.focus == Focus::Submit;
    let submit_style = if submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit_text = if submit_focused {
        format!("  [ {SUBMIT} ]  ")
    } else {
        format!("    {SUBMIT}    ")
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[2]);

    // Submitted values
    let outputs: Vec<Line> = surface
        .all_by_role(Role::Output)
        .map(|output| Line::from(output.text().to_string()))
        .collect();
    let (outputs, style) = if outputs.is_empty() {
        (
            vec![Line::from("Nothing submitted yet")],
            Style::default().fg(theme.border),
        )
    } else {
        (outputs, Style::default().fg(theme.success))
    };
    let submitted = Paragraph::new(outputs).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Submitted "),
    );
    frame.render_widget(submitted, chunks[3]);

    // Help bar
    let help_text = "Tab/↓: Next  Shift+Tab/↑: Previous  F10: Submit  Esc: Quit";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[4]);
}

fn draw_field(
    frame: &mut Frame,
    surface: &Surface,
    input: &Element,
    area: Rect,
    state: &ViewState,
) {
    let theme = &state.theme;
    let field = input.field();
    let is_focused = field.is_some() && field == state.focused_field();
    let error = field.and_then(|field| surface.error(field));

    let border_color = if error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", input.label().unwrap_or_default()))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(input.text().to_string()).style(Style::default().fg(theme.text));
    frame.render_widget(text, inner);

    if is_focused && inner.height > 0 {
        let offset = u16::try_from(state.cursor).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(offset);
        if cursor_x < inner.right() {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    // The error replaces the bottom border. A squeezed layout may leave no row for it.
    if let Some(error) = error
        && area.height > 0
    {
        let error_text =
            Paragraph::new(error.text().to_string()).style(Style::default().fg(theme.error));
        let error_area = Rect {
            x: area.x.saturating_add(1),
            y: area.bottom().saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        }
        .intersection(area);
        frame.render_widget(error_text, error_area);
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn drive(&self, form: &mut ContactForm) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = ViewState::new(form, self.theme.clone());

        let result = run_loop(&mut terminal, form, &mut state);
        self.restore_terminal(&mut terminal)?;
        result?;

        if !form.is_submitted() {
            debug!("form left without a submission");
            return Err(RatatuiFormError::Cancelled);
        }

        Ok(())
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    form: &mut ContactForm,
    state: &mut ViewState,
) -> Result<(), RatatuiFormError> {
    loop {
        terminal.draw(|frame| draw_form(frame, form, state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if state.handle_key(form, key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
