//! Data model for parsed step documentation — format-agnostic.

/// Documentation extracted from a single step-definition doc-comment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    /// Step tag lines (`@Given ...`), ordered Given, When, Then.
    pub steps: Vec<String>,
    /// First paragraph of the comment.
    pub description: String,
    /// De-indented `@code` block, or empty.
    pub example: String,
}

/// A documented step method together with its owning trait.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub class_name: String,
    pub class_description: String,
    pub name: String,
    pub doc: MethodDoc,
}

impl MethodInfo {
    pub fn new(class_name: &str, class_description: &str, name: &str, doc: MethodDoc) -> Self {
        Self {
            class_name: class_name.to_string(),
            class_description: class_description.to_string(),
            name: name.to_string(),
            doc,
        }
    }
}

/// A trait and its documented step methods.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraitDoc {
    pub name: String,
    pub description: String,
    pub methods: Vec<MethodInfo>,
}

/// Trait name → methods, iterated in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraitInfo {
    traits: Vec<TraitDoc>,
}

impl TraitInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trait. A trait that is already present has its methods extended.
    pub fn insert(&mut self, doc: TraitDoc) {
        match self.traits.iter_mut().find(|t| t.name == doc.name) {
            Some(existing) => existing.methods.extend(doc.methods),
            None => self.traits.push(doc),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitDoc> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Total number of documented methods across all traits.
    pub fn method_count(&self) -> usize {
        self.traits.iter().map(|t| t.methods.len()).sum()
    }
}

impl FromIterator<TraitDoc> for TraitInfo {
    fn from_iter<I: IntoIterator<Item = TraitDoc>>(iter: I) -> Self {
        let mut info = TraitInfo::new();
        for doc in iter {
            info.insert(doc);
        }
        info
    }
}
