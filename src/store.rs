use crate::error::AddError;
use crate::parser;
use crate::validator;

/// Callback invoked with the full current address list after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&[String])>;

/// One stored address with its display metadata.
///
/// `id` comes from a per-store counter and is never reused after removal, so
/// it is safe to key a visual item with. `valid` is the validator's verdict
/// at insertion time and is not re-evaluated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub address: String,
    pub id: u64,
    pub valid: bool,
}

/// Outcome of a single [`EmailStore::add`] call: which addresses were
/// appended and which tokens were rejected. A rejection never aborts the
/// batch; the remaining tokens still process in order.
#[derive(Debug, Default)]
pub struct AddReport {
    pub added: Vec<String>,
    pub errors: Vec<AddError>,
}

impl AddReport {
    /// Whether this call appended at least one entry.
    pub fn mutated(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Ordered set of unique address strings, insertion order preserved.
///
/// Owns the email list exclusively; the render layer and host binding only
/// read it or request mutations through this API. Uniqueness is literal
/// string equality on the trimmed token, with no case-folding of the domain
/// part.
pub struct EmailStore {
    entries: Vec<AddressEntry>,
    next_id: u64,
    on_change: Option<ChangeCallback>,
}

impl EmailStore {
    /// Create an empty store with no change callback.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            on_change: None,
        }
    }

    /// Create an empty store that reports every mutation to `callback`.
    pub fn with_change_callback(callback: ChangeCallback) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            on_change: Some(callback),
        }
    }

    /// Replace the change callback.
    pub fn set_change_callback(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    /// Parse `raw_text` and append every new, non-empty token in
    /// left-to-right order.
    ///
    /// Duplicates are recorded in the report and skipped without aborting the
    /// batch. The change callback fires once per call, after the whole batch,
    /// and only when at least one token was appended.
    pub fn add(&mut self, raw_text: &str) -> AddReport {
        let mut report = AddReport::default();

        for token in parser::parse(raw_text) {
            if self.contains(&token) {
                tracing::debug!(address = %token, "rejected duplicate address");
                report.errors.push(AddError::Duplicate { address: token });
                continue;
            }

            let valid = validator::validate(&token);
            let id = self.next_id;
            self.next_id += 1;

            tracing::debug!(address = %token, id, valid, "added address");
            self.entries.push(AddressEntry {
                address: token.clone(),
                id,
                valid,
            });
            report.added.push(token);
        }

        if report.mutated() {
            self.notify();
        }
        report
    }

    /// Remove the first entry matching `address` by exact string equality.
    ///
    /// Fires the change callback when something was removed; silent no-op
    /// when the address is absent. Returns whether an entry was removed.
    pub fn remove(&mut self, address: &str) -> bool {
        let Some(position) = self.entries.iter().position(|e| e.address == address) else {
            return false;
        };

        self.entries.remove(position);
        tracing::debug!(address, "removed address");
        self.notify();
        true
    }

    /// Current addresses in insertion order.
    pub fn emails(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.address.clone()).collect()
    }

    /// Number of stored addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `address` is already in the list (exact string match).
    pub fn contains(&self, address: &str) -> bool {
        self.entries.iter().any(|e| e.address == address)
    }

    /// Entries with their ids and validity flags, for the render layer.
    pub fn entries(&self) -> &[AddressEntry] {
        &self.entries
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            let emails: Vec<String> = self.entries.iter().map(|e| e.address.clone()).collect();
            callback(&emails);
        }
    }
}

impl Default for EmailStore {
    fn default() -> Self {
        Self::new()
    }
}
