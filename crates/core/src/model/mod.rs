//! Core data model for imported symbols.
//!
//! - `ClassifiedSymbol`: one imported function attributed to a library tag.
//! - `SymbolTable`: library tag -> ordered function names, in first-seen order.
//!
//! Both are plain owned containers built once per run and never mutated after
//! the classifier hands them over.

use serde::{Deserialize, Serialize};

/// Library tag used for symbols that carry no version marker.
pub const UNKNOWN_LIBRARY: &str = "unknown";

/// An imported function attributed to its originating library tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSymbol {
    pub function: String,
    pub library: String,
}

impl ClassifiedSymbol {
    pub fn new(function: impl Into<String>, library: impl Into<String>) -> Self {
        Self { function: function.into(), library: library.into() }
    }
}

/// All functions requested from a single library, in import order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGroup {
    pub library: String,
    pub functions: Vec<String>,
}

/// Mapping from library tag to the functions imported from it.
///
/// Libraries keep the order in which they were first seen; functions keep
/// import order and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    groups: Vec<SymbolGroup>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `symbol` to its library group, creating the group on first sight.
    pub fn insert(&mut self, symbol: ClassifiedSymbol) {
        match self.groups.iter_mut().find(|g| g.library == symbol.library) {
            Some(group) => group.functions.push(symbol.function),
            None => self
                .groups
                .push(SymbolGroup { library: symbol.library, functions: vec![symbol.function] }),
        }
    }

    pub fn groups(&self) -> &[SymbolGroup] {
        &self.groups
    }

    /// Functions imported from `library`, if any were seen.
    pub fn functions(&self, library: &str) -> Option<&[String]> {
        self.groups.iter().find(|g| g.library == library).map(|g| g.functions.as_slice())
    }

    /// Library tags in first-seen order.
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.library.as_str())
    }

    /// Every `(library, function)` pair in evaluation order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .iter()
            .flat_map(|g| g.functions.iter().map(move |f| (g.library.as_str(), f.as_str())))
    }

    /// Total number of imported functions, duplicates included.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.functions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<ClassifiedSymbol> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = ClassifiedSymbol>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for symbol in iter {
            table.insert(symbol);
        }
        table
    }
}
