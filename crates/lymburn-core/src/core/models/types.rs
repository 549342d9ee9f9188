use super::ids::TypeId;
use std::collections::HashMap;

/// Interns particle type names into dense [`TypeId`] indices.
///
/// Type names are only labels used to look up pair parameters; the registry
/// keeps them in insertion order so that ids are stable for the lifetime of
/// a system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    names: Vec<String>,
    ids: HashMap<String, TypeId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, registering it if it has not been seen yet.
    pub fn intern(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = TypeId::new(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Name of `id`, or its numeric form when the id is not registered.
    pub fn describe(&self, id: TypeId) -> String {
        self.name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (TypeId::new(i), name.as_str()))
    }
}

impl<'a> FromIterator<&'a str> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.intern(name);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_same_id_for_repeated_name() {
        let mut registry = TypeRegistry::new();
        let a = registry.intern("A");
        let b = registry.intern("B");
        assert_ne!(a, b);
        assert_eq!(registry.intern("A"), a);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let registry: TypeRegistry = ["B", "A", "C"].into_iter().collect();
        assert_eq!(registry.get("B"), Some(TypeId::new(0)));
        assert_eq!(registry.get("A"), Some(TypeId::new(1)));
        assert_eq!(registry.get("C"), Some(TypeId::new(2)));
        assert_eq!(registry.name(TypeId::new(2)), Some("C"));
    }

    #[test]
    fn describe_falls_back_to_numeric_id() {
        let registry: TypeRegistry = ["A"].into_iter().collect();
        assert_eq!(registry.describe(TypeId::new(0)), "A");
        assert_eq!(registry.describe(TypeId::new(5)), "type#5");
    }

    #[test]
    fn unknown_name_is_none() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get("A"), None);
    }
}
