use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use emails_input::{EmailsInput, EmailsInputConfig};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};
use std::io::stdout;
use std::time::Duration;

/// Minimal terminal host mounting the emails-input control.
fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let mut input = EmailsInput::new(
        EmailsInputConfig::new()
            .initial_value("ivan@mail.ru, max@mail.ru")
            .placeholder("add more people…")
            .on_change(|emails| tracing::info!(count = emails.len(), "email list changed")),
    );

    enable_raw_mode()?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // The hosting surface exists now, so the control can go live.
    input.attach();

    let result = run(&mut terminal, &mut input);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    input: &mut EmailsInput,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(frame.size());

            input.render(frame, chunks[0]);

            let hints = Paragraph::new(
                "Type an address, press , or Enter to add ● click ✕ to remove ● Esc quits",
            );
            frame.render_widget(hints, chunks[1]);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let ev = event::read()?;
        if let Event::Key(key) = &ev {
            if key.code == KeyCode::Esc {
                return Ok(());
            }
        }
        input.handle_event(&ev);
    }
}
