//! Name / platform filtering for the games dialog.

use crate::store::GameRecord;

/// Records left visible after filtering.
///
/// `All` borrows the full list itself, so callers can rely on the
/// references (and the slice) being the ones the store owns.
#[derive(Debug, Clone, PartialEq)]
pub enum Visible<'a> {
    All(&'a [GameRecord]),
    Subset(Vec<&'a GameRecord>),
}

impl<'a> Visible<'a> {
    pub fn len(&self) -> usize {
        match self {
            Visible::All(records) => records.len(),
            Visible::Subset(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a GameRecord> {
        match self {
            Visible::All(records) => records.get(index),
            Visible::Subset(records) => records.get(index).copied(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a GameRecord> + '_> {
        match self {
            Visible::All(records) => Box::new(records.iter()),
            Visible::Subset(records) => Box::new(records.iter().copied()),
        }
    }
}

/// Filter `records`, preserving order.
///
/// A record is kept when its name contains `name_query` ignoring case and
/// its platform equals `platform_query` exactly. Empty queries match
/// everything.
pub fn visible<'a>(
    records: &'a [GameRecord],
    name_query: &str,
    platform_query: Option<&str>,
) -> Visible<'a> {
    let platform_query = platform_query.filter(|p| !p.is_empty());

    if name_query.is_empty() && platform_query.is_none() {
        return Visible::All(records);
    }

    let query_lower = name_query.to_lowercase();
    Visible::Subset(
        records
            .iter()
            .filter(|r| query_lower.is_empty() || r.name.to_lowercase().contains(&query_lower))
            .filter(|r| platform_query.is_none_or(|p| r.platform == p))
            .collect(),
    )
}

/// Current queries of the games dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub name: String,
    pub platform: Option<String>,
}

impl FilterQuery {
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || self.platform.is_some()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.platform = None;
    }

    pub fn apply<'a>(&self, records: &'a [GameRecord]) -> Visible<'a> {
        visible(records, &self.name, self.platform.as_deref())
    }

    /// Step the platform query through "all" followed by each option
    pub fn cycle_platform(&mut self, options: &[String], forward: bool) {
        if options.is_empty() {
            self.platform = None;
            return;
        }

        // Slot 0 is "all platforms"; slot i + 1 is options[i]
        let slots = options.len() + 1;
        let current = self
            .platform
            .as_ref()
            .and_then(|p| options.iter().position(|o| o == p))
            .map(|i| i + 1)
            .unwrap_or(0);

        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        self.platform = next.checked_sub(1).map(|i| options[i].clone());
    }
}
