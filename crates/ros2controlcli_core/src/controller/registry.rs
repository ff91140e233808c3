use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::ControllerSnapshot;

/// Controller list keyed by name.
///
/// Names are unique per manager; if a list ever repeats a name, the first
/// entry is kept.
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    by_name: HashMap<String, ControllerSnapshot>,
}

impl ControllerRegistry {
    pub fn get(&self, name: &str) -> Option<&ControllerSnapshot> {
        self.by_name.get(name)
    }

    /// Snapshots ordered by controller name.
    pub fn sorted(&self) -> Vec<&ControllerSnapshot> {
        let mut all: Vec<_> = self.by_name.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

impl FromIterator<ControllerSnapshot> for ControllerRegistry {
    fn from_iter<I: IntoIterator<Item = ControllerSnapshot>>(iter: I) -> Self {
        let mut by_name = HashMap::new();
        for snapshot in iter {
            if let Entry::Vacant(slot) = by_name.entry(snapshot.name.clone()) {
                slot.insert(snapshot);
            }
        }
        Self { by_name }
    }
}
