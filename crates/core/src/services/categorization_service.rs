use log::debug;

use crate::models::budget::Transaction;
use crate::models::category::Category;

/// Keyword-based auto-categorization of transactions.
pub struct CategorizationService;

impl CategorizationService {
    pub fn new() -> Self {
        Self
    }

    /// First category (in the given order) having a keyword contained in
    /// `description`, case-insensitively. Blank keywords never match.
    #[must_use]
    pub fn categorize<'a>(
        &self,
        description: &str,
        categories: &'a [Category],
    ) -> Option<&'a Category> {
        let haystack = description.trim().to_lowercase();
        if haystack.is_empty() {
            return None;
        }

        categories.iter().find(|category| {
            category.keywords.iter().any(|keyword| {
                let needle = keyword.trim().to_lowercase();
                !needle.is_empty() && haystack.contains(&needle)
            })
        })
    }

    /// Categorize every transaction that has no category yet.
    /// Manually assigned categories are left alone.
    /// Returns the number of transactions assigned.
    pub fn categorize_all(&self, transactions: &mut [Transaction], categories: &[Category]) -> usize {
        let mut assigned = 0;
        for transaction in transactions.iter_mut().filter(|t| t.category_id.is_none()) {
            if let Some(category) = self.categorize(&transaction.description, categories) {
                transaction.assign(category);
                assigned += 1;
            }
        }
        debug!("Auto-categorized {assigned} of {} transactions", transactions.len());
        assigned
    }
}

impl Default for CategorizationService {
    fn default() -> Self {
        Self::new()
    }
}
