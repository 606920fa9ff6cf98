//! Canonical registry of generator sets
//!
//! The registry is the single source of truth for whether two simulated
//! states are the same: it maps every distinct [`GeneratorSet`] it has seen to
//! a dense [`GeneratorId`], assigned in first-seen order from 0. IDs are never
//! removed or reassigned, so two circuits preprocessed against the same
//! registry share IDs for identical states.

use ahash::AHashMap;
use qusat_tableau::{GeneratorId, GeneratorSet};

/// Dense, append-only map from generator sets to IDs
///
/// # Example
/// ```
/// use qusat_encoder::registry::GeneratorRegistry;
/// use qusat_tableau::TableauState;
///
/// let mut registry = GeneratorRegistry::new();
/// let zero = registry.lookup_or_insert(TableauState::new(1).level_generator());
/// let plus = registry.lookup_or_insert(TableauState::initialize(1, "x").level_generator());
/// let again = registry.lookup_or_insert(TableauState::new(1).level_generator());
///
/// assert_eq!(zero.index(), 0);
/// assert_eq!(plus.index(), 1);
/// assert_eq!(again, zero);
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeneratorRegistry {
    generators: Vec<GeneratorSet>,
    ids: AHashMap<GeneratorSet, GeneratorId>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generators: Vec::with_capacity(capacity),
            ids: AHashMap::with_capacity(capacity),
        }
    }

    /// Return the ID of `generator`, assigning the next one if it is new
    pub fn lookup_or_insert(&mut self, generator: GeneratorSet) -> GeneratorId {
        if let Some(&id) = self.ids.get(&generator) {
            return id;
        }
        let id = GeneratorId::new(self.generators.len());
        self.generators.push(generator.clone());
        self.ids.insert(generator, id);
        id
    }

    /// ID of an already registered generator set
    pub fn id_of(&self, generator: &GeneratorSet) -> Option<GeneratorId> {
        self.ids.get(generator).copied()
    }

    /// Generator set registered under `id`
    pub fn get(&self, id: GeneratorId) -> Option<&GeneratorSet> {
        self.generators.get(id.index())
    }

    /// Number of distinct generator sets seen so far
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Iterate over `(id, generator set)` in ID order
    pub fn iter(&self) -> impl Iterator<Item = (GeneratorId, &GeneratorSet)> {
        self.generators
            .iter()
            .enumerate()
            .map(|(i, g)| (GeneratorId::new(i), g))
    }
}
