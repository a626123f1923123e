use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending/income category. Categories nest one level: a child points
/// at its parent through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    /// Words that, found in a transaction description, assign it here
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id: None,
            keywords: Vec::new(),
        }
    }

    /// Create a child of `parent`.
    pub fn child_of(parent: &Category, name: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent.id),
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// The id budgets aggregate on: the parent's for a child, its own otherwise.
    #[must_use]
    pub fn top_level_id(&self) -> Uuid {
        self.parent_id.unwrap_or(self.id)
    }
}
