use crate::config::EmailsInputConfig;
use crate::error::AddError;
use crate::notices::{self, NoticeBoard};
use crate::store::{AddressEntry, EmailStore};
use crate::theme::InputTheme;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Minimum columns the text field claims before wrapping to its own row.
const MIN_FIELD_WIDTH: u16 = 12;

/// Per-frame hit region for one chip, used to route mouse clicks.
///
/// Regions are rebuilt from live entries on every render, so a region can
/// never outlive its chip: removal on any path drops the region at the next
/// frame.
#[derive(Debug, Clone)]
struct ChipRegion {
    address: String,
    chip: Rect,
    remove: Rect,
}

/// Embeddable email-list input control.
///
/// Projects the store into one chip per address (valid or invalid styling,
/// each with a `✕` remove control) followed by a persistent text field that
/// is always last. Typing `,` or Enter, pasting comma-separated text, or
/// leaving the field submits the pending text as a batch.
///
/// The control is inert until [`EmailsInput::attach`] is called by the
/// embedder: before that, events and renders are no-ops.
pub struct EmailsInput {
    store: EmailStore,
    theme: InputTheme,
    placeholder: String,
    notices: NoticeBoard,

    // Persistent text field state
    field: String,
    cursor: usize,
    field_focused: bool,

    // Lifecycle
    attached: bool,
    initial_value: String,

    // Frame-local projection state for mouse hit-testing
    regions: Vec<ChipRegion>,
    area: Rect,
}

impl EmailsInput {
    /// Create an inert control from `config`. Call [`attach`](Self::attach)
    /// once the hosting surface is ready.
    pub fn new(config: EmailsInputConfig) -> Self {
        let store = match config.on_change {
            Some(callback) => EmailStore::with_change_callback(callback),
            None => EmailStore::new(),
        };

        Self {
            store,
            theme: config.theme,
            placeholder: config.placeholder,
            notices: NoticeBoard::new(),
            field: String::new(),
            cursor: 0,
            field_focused: false,
            attached: false,
            initial_value: config.initial_value,
            regions: Vec::new(),
            area: Rect::default(),
        }
    }

    /// Mark the control as mounted and process the configured initial value
    /// as one batch. Idempotent.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.field_focused = true;

        let initial = std::mem::take(&mut self.initial_value);
        if !initial.is_empty() {
            self.submit(&initial);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // Host binding -------------------------------------------------------

    /// Add one or more comma-separated addresses, exactly as if the user had
    /// submitted them through the text field. No-op before `attach`.
    pub fn add_email(&mut self, raw: &str) {
        if !self.attached {
            return;
        }
        self.submit(raw);
    }

    /// Current addresses in insertion order.
    pub fn emails(&self) -> Vec<String> {
        self.store.emails()
    }

    /// Number of stored addresses.
    pub fn email_count(&self) -> usize {
        self.store.len()
    }

    /// Entries with ids and validity flags.
    pub fn entries(&self) -> &[AddressEntry] {
        self.store.entries()
    }

    /// Active notices (rejected tokens waiting to expire).
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Pending, not yet submitted field text.
    pub fn field_text(&self) -> &str {
        &self.field
    }

    // Event handling -----------------------------------------------------

    /// Route a terminal event to the control. Returns whether the event was
    /// consumed; unconsumed events should keep propagating to the host.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => {
                self.handle_paste(text);
                true
            }
            Event::FocusLost => {
                self.handle_focus_lost();
                false
            }
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => false,
        }
    }

    /// Handle a key event. `,` and Enter submit the pending field text;
    /// printable characters edit the field. Handled keys are consumed so
    /// they cannot trigger host-level shortcuts.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.attached || key.kind == KeyEventKind::Release {
            return false;
        }

        match key.code {
            KeyCode::Char(',') => {
                self.field_focused = true;
                let len = self.field.chars().count();
                if len > 1 {
                    let text = std::mem::take(&mut self.field);
                    self.cursor = 0;
                    self.submit(&text);
                } else if len == 0 {
                    tracing::debug!("separator pressed on empty field");
                    self.report(vec![AddError::LeadingSeparator]);
                } else {
                    // A single pending char: the comma joins the field and
                    // the text-changed rule decides what happens.
                    self.insert_char(',');
                    self.text_changed();
                }
                true
            }
            KeyCode::Enter => {
                self.field_focused = true;
                if self.field.chars().count() > 1 {
                    let text = std::mem::take(&mut self.field);
                    self.cursor = 0;
                    self.submit(&text);
                }
                true
            }
            KeyCode::Char(c) => {
                self.field_focused = true;
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let mut chars: Vec<char> = self.field.chars().collect();
                    chars.remove(self.cursor - 1);
                    self.field = chars.into_iter().collect();
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Delete => {
                let mut chars: Vec<char> = self.field.chars().collect();
                if self.cursor < chars.len() {
                    chars.remove(self.cursor);
                    self.field = chars.into_iter().collect();
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.field.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.field.chars().count();
                true
            }
            KeyCode::Tab => {
                // Yield focus; pending text submits per the focus-lost rule.
                self.handle_focus_lost();
                false
            }
            _ => false,
        }
    }

    /// Handle pasted text (bracketed paste). The pasted characters join the
    /// field; if the field then contains a separator, the text-changed rule
    /// submits or clears it.
    pub fn handle_paste(&mut self, pasted: &str) {
        if !self.attached {
            return;
        }
        self.field_focused = true;
        for c in pasted.chars() {
            self.insert_char(c);
        }
        self.text_changed();
    }

    /// Handle focus leaving the control: a non-empty field submits, and the
    /// field clears regardless of outcome.
    pub fn handle_focus_lost(&mut self) {
        if !self.attached {
            return;
        }
        if !self.field.is_empty() {
            let text = std::mem::take(&mut self.field);
            self.submit(&text);
        }
        self.field.clear();
        self.cursor = 0;
        self.field_focused = false;
    }

    /// Handle a mouse event against the regions recorded by the last render.
    /// A click on a chip's `✕` removes that address; a click anywhere else
    /// inside the control focuses the text field.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.attached || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let position = Position::new(mouse.column, mouse.row);
        if !self.area.contains(position) {
            return false;
        }

        if let Some(region) = self.regions.iter().find(|r| r.remove.contains(position)) {
            let address = region.address.clone();
            self.store.remove(&address);
            return true;
        }

        if !self.regions.iter().any(|r| r.chip.contains(position)) {
            // Clicking empty container space still lets the user type.
            self.field_focused = true;
        }
        true
    }

    // Submission ---------------------------------------------------------

    /// Run one `add` batch and surface every rejected token as a notice.
    fn submit(&mut self, raw: &str) {
        let report = self.store.add(raw);
        self.report(report.errors);
    }

    /// Text-changed rule: a field containing the separator submits when
    /// longer than one char, and clears in every case (a lone leading `,`
    /// clears rather than submits).
    fn text_changed(&mut self) {
        if !self.field.contains(',') {
            return;
        }
        if self.field.chars().count() > 1 {
            let text = self.field.clone();
            self.submit(&text);
        }
        self.field.clear();
        self.cursor = 0;
    }

    fn report(&mut self, errors: Vec<AddError>) {
        for error in errors {
            tracing::debug!(%error, "rejected input");
            match error {
                AddError::Duplicate { .. } => self.notices.warning(error.to_string()),
                AddError::LeadingSeparator => self.notices.error(error.to_string()),
            }
        }
    }

    fn insert_char(&mut self, c: char) {
        let mut chars: Vec<char> = self.field.chars().collect();
        let at = self.cursor.min(chars.len());
        chars.insert(at, c);
        self.field = chars.into_iter().collect();
        self.cursor = at + 1;
    }

    // Rendering ----------------------------------------------------------

    /// Render the control into `area`: chips in insertion order, wrapping
    /// across rows, the text field always last, notices overlaid on top.
    /// No-op before `attach`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.attached || area.width < 3 || area.height < 3 {
            return;
        }

        self.notices.tick();
        self.area = area;
        self.regions.clear();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.root);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut x = inner.x;
        let mut y = inner.y;

        for entry in self.store.entries() {
            let label = format!(" {} ", entry.address);
            let label_width = label.chars().count() as u16;
            let chip_width = label_width + 2; // trailing "✕ "

            if chip_width > inner.width {
                continue; // wider than the whole control, skip drawing
            }
            if x + chip_width > inner.x + inner.width {
                x = inner.x;
                y += 1;
            }
            if y >= inner.y + inner.height {
                break;
            }

            let chip_area = Rect {
                x,
                y,
                width: chip_width,
                height: 1,
            };
            let chip_style = if entry.valid {
                self.theme.valid_item
            } else {
                self.theme.invalid_item
            };
            let chip = Paragraph::new(Line::from(vec![
                Span::styled(label, chip_style),
                Span::styled("✕ ", self.theme.remove_control),
            ]));
            frame.render_widget(chip, chip_area);

            self.regions.push(ChipRegion {
                address: entry.address.clone(),
                chip: chip_area,
                remove: Rect {
                    x: chip_area.x + label_width,
                    y: chip_area.y,
                    width: 2,
                    height: 1,
                },
            });

            x += chip_width + 1;
        }

        // The field claims the rest of the row, or a full row of its own
        // when too little space is left.
        if (inner.x + inner.width).saturating_sub(x) < MIN_FIELD_WIDTH && x > inner.x {
            x = inner.x;
            y += 1;
        }
        if y >= inner.y + inner.height {
            notices::render(frame, area, &self.notices);
            return;
        }
        let field_area = Rect {
            x,
            y,
            width: (inner.x + inner.width).saturating_sub(x),
            height: 1,
        };
        self.render_field(frame, field_area);

        notices::render(frame, area, &self.notices);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect) {
        let paragraph = if self.field.is_empty() && !self.placeholder.is_empty() {
            Paragraph::new(Span::styled(self.placeholder.clone(), self.theme.placeholder))
        } else {
            let display = if self.field_focused {
                let mut chars: Vec<char> = self.field.chars().collect();
                chars.insert(self.cursor.min(chars.len()), '▏');
                chars.into_iter().collect()
            } else {
                self.field.clone()
            };
            Paragraph::new(Span::styled(display, self.theme.field))
        };
        frame.render_widget(paragraph, area);
    }
}

impl Default for EmailsInput {
    fn default() -> Self {
        Self::new(EmailsInputConfig::default())
    }
}
