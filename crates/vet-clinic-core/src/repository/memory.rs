//! In-memory repository.

use std::collections::HashMap;

use super::{Entity, Repository, RepositoryError, RepositoryResult};

/// Insertion-ordered in-memory store keyed by entity ID.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a repository from existing entities. Later duplicates are rejected.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> RepositoryResult<Self> {
        let mut repo = Self::new();
        for entity in entities {
            repo.add(entity)?;
        }
        Ok(repo)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) -> RepositoryResult<()> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(RepositoryError::Conflict(id.to_string()));
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(entity);
        Ok(())
    }

    fn get(&self, id: &T::Id) -> RepositoryResult<&T> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &T::Id) -> RepositoryResult<&mut T> {
        match self.index.get(id) {
            Some(&position) => Ok(&mut self.entries[position]),
            None => Err(RepositoryError::NotFound(id.to_string())),
        }
    }

    fn list(&self) -> Vec<&T> {
        self.entries.iter().collect()
    }

    fn list_mut(&mut self) -> Vec<&mut T> {
        self.entries.iter_mut().collect()
    }

    fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
