//! Bidirectional mapping between city ids and display names.
//!
//! The registry is the only place names live; the adjacency structure and
//! the shortest-path engines work purely on integer ids.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::CityId;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A registered city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

/// Id <-> name registry sized to the graph's vertex capacity.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    names: Vec<Option<String>>,
    name_to_id: HashMap<String, CityId>,
}

impl CityRegistry {
    /// Create an empty registry that accepts ids in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: vec![None; capacity],
            name_to_id: HashMap::with_capacity(capacity),
        }
    }

    /// Upper bound (exclusive) on registrable ids.
    pub fn capacity(&self) -> usize {
        self.names.len()
    }

    /// Number of registered cities.
    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    /// Register a city. Both the id and the name must be unused.
    pub fn register(&mut self, id: CityId, name: &str) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .names
            .get_mut(id)
            .ok_or(Error::CityIdOutOfRange { id, capacity })?;

        if slot.is_some() || self.name_to_id.contains_key(name) {
            return Err(Error::DuplicateCity {
                id,
                name: name.to_string(),
            });
        }

        *slot = Some(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        Ok(())
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: CityId) -> bool {
        matches!(self.names.get(id), Some(Some(_)))
    }

    /// Lookup a city identifier by its case-sensitive name.
    pub fn id_by_name(&self, name: &str) -> Option<CityId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a city name by identifier.
    pub fn name(&self, id: CityId) -> Option<&str> {
        self.names.get(id).and_then(|name| name.as_deref())
    }

    /// Resolve a name, attaching close matches to the error when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<CityId> {
        self.id_by_name(name).ok_or_else(|| Error::UnknownCity {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, 3),
        })
    }

    /// Registered cities in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.names.iter().enumerate().filter_map(|(id, name)| {
            name.as_ref().map(|name| City {
                id,
                name: name.clone(),
            })
        })
    }

    /// Names similar to `query`, best match first, at most `limit` entries.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
