use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use emails_input::{EmailsInput, EmailsInputConfig};
use ratatui::{backend::TestBackend, style::Color, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

fn draw(terminal: &mut Terminal<TestBackend>, input: &mut EmailsInput) {
    terminal
        .draw(|frame| input.render(frame, frame.size()))
        .unwrap();
}

fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        })
        .collect()
}

/// Column (in cells, not bytes) where `needle` starts within a rendered row.
fn column_of(row: &str, needle: &str) -> u16 {
    let chars: Vec<char> = row.chars().collect();
    let needle_chars: Vec<char> = needle.chars().collect();
    chars
        .windows(needle_chars.len())
        .position(|window| window == needle_chars.as_slice())
        .expect("needle rendered") as u16
}

/// Locate the first cell showing `symbol`, as (column, row).
fn find_symbol(terminal: &Terminal<TestBackend>, symbol: &str) -> Option<(u16, u16)> {
    let buffer = terminal.backend().buffer();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if buffer.get(x, y).symbol() == symbol {
                return Some((x, y));
            }
        }
    }
    None
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_end_to_end_initial_value() {
    let changes: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let seen = changes.clone();

    let mut input = EmailsInput::new(
        EmailsInputConfig::new()
            .initial_value("x@y.com, bad-addr, x@y.com")
            .on_change(move |emails| seen.borrow_mut().push(emails.to_vec())),
    );
    input.attach();

    assert_eq!(input.emails(), vec!["x@y.com", "bad-addr"]);
    assert_eq!(input.email_count(), 2);

    // One duplicate reported for the repeated x@y.com.
    assert_eq!(input.notices().notices().len(), 1);
    assert!(input.notices().notices()[0].message.contains("x@y.com"));

    // One batch, one change notification, both addresses present.
    assert_eq!(changes.borrow().len(), 1);
    assert_eq!(changes.borrow()[0], vec!["x@y.com", "bad-addr"]);

    // The second entry carries the invalid flag.
    assert!(input.entries()[0].valid);
    assert!(!input.entries()[1].valid);
}

#[test]
fn test_render_shows_chips_and_placeholder() {
    let mut input = EmailsInput::new(
        EmailsInputConfig::new()
            .initial_value("x@y.com")
            .placeholder("type an email"),
    );
    input.attach();

    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    let screen = buffer_rows(&terminal).join("\n");
    assert!(screen.contains("x@y.com"));
    assert!(screen.contains("✕"));
    assert!(screen.contains("type an email"));
}

#[test]
fn test_invalid_chip_renders_with_invalid_styling() {
    let mut input =
        EmailsInput::new(EmailsInputConfig::new().initial_value("x@y.com, bad-addr"));
    input.attach();

    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    let rows = buffer_rows(&terminal);
    let row = 1; // first chip row, inside the border
    let column = column_of(&rows[row as usize], "bad-addr");

    let buffer = terminal.backend().buffer();
    // Default theme: invalid chips are red, valid chips are not.
    assert_eq!(buffer.get(column, row).style().fg, Some(Color::Red));

    let valid_column = column_of(&rows[row as usize], "x@y.com");
    assert_ne!(buffer.get(valid_column, row).style().fg, Some(Color::Red));
}

#[test]
fn test_clicking_remove_control_removes_address() {
    let mut input = EmailsInput::new(EmailsInputConfig::new().initial_value("x@y.com"));
    input.attach();

    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    let (column, row) = find_symbol(&terminal, "✕").expect("remove control rendered");
    assert!(input.handle_mouse(click(column, row)));

    assert_eq!(input.email_count(), 0);
    draw(&mut terminal, &mut input);
    assert!(!buffer_rows(&terminal).join("\n").contains("x@y.com"));
}

#[test]
fn test_clicking_empty_space_focuses_field() {
    let mut input = EmailsInput::new(EmailsInputConfig::new().initial_value("x@y.com"));
    input.attach();
    input.handle_focus_lost();

    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    // Unfocused empty field shows no cursor marker.
    assert!(find_symbol(&terminal, "▏").is_none());

    // Bottom-left corner of the inner area holds no chip.
    assert!(input.handle_mouse(click(2, 4)));
    draw(&mut terminal, &mut input);
    assert!(find_symbol(&terminal, "▏").is_some());
}

#[test]
fn test_handle_event_routes_paste_and_keys() {
    let mut input = EmailsInput::new(EmailsInputConfig::new());
    input.attach();

    assert!(input.handle_event(&Event::Paste("a@b.com,c@d.com".to_string())));
    assert_eq!(input.emails(), vec!["a@b.com", "c@d.com"]);

    for c in "e@f.com".chars() {
        input.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )));
    }
    assert!(input.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE
    ))));
    assert_eq!(input.email_count(), 3);

    // Focus loss submits pending text but keeps propagating to the host.
    for c in "g@h.com".chars() {
        input.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )));
    }
    assert!(!input.handle_event(&Event::FocusLost));
    assert_eq!(input.email_count(), 4);
}

#[test]
fn test_render_before_attach_is_inert() {
    let mut input = EmailsInput::new(EmailsInputConfig::new().initial_value("x@y.com"));

    let backend = TestBackend::new(40, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    let screen = buffer_rows(&terminal).join("\n");
    assert!(!screen.contains("x@y.com"));
    assert_eq!(screen.trim().replace('\n', ""), "");
}

#[test]
fn test_chips_wrap_and_field_stays_last() {
    let mut input = EmailsInput::new(
        EmailsInputConfig::new()
            .initial_value("one@example.com, two@example.com, three@example.com")
            .placeholder("next"),
    );
    input.attach();

    let backend = TestBackend::new(30, 8);
    let mut terminal = Terminal::new(backend).unwrap();
    draw(&mut terminal, &mut input);

    let rows = buffer_rows(&terminal);
    let chip_row = |needle: &str| rows.iter().position(|r| r.contains(needle)).unwrap();

    let first = chip_row("one@example.com");
    let last = chip_row("three@example.com");
    let field = chip_row("next");

    assert!(first < last, "chips wrap across rows in insertion order");
    assert!(field >= last, "text field renders after all chips");
}
