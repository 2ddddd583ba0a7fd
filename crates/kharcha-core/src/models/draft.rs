//! Transaction draft model produced by the scan pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending category for a transaction.
///
/// Closed set; `Others` is the catch-all default, so every receipt maps to
/// exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Health,
    Shopping,
    Bills,
    Others,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Bills,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Others => "Others",
        }
    }

    /// Parse from a category name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "entertainment" => Some(Category::Entertainment),
            "health" => Some(Category::Health),
            "shopping" => Some(Category::Shopping),
            "bills" => Some(Category::Bills),
            "others" => Some(Category::Others),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Others
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Best-effort structured guess extracted from one receipt.
///
/// `title` and `category` always hold a value; `amount` is `None` when no
/// numeric value could be found, which is a legitimate outcome and not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Merchant or receipt title, defaults to "Receipt".
    pub title: String,

    /// Monetary amount, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Assigned spending category.
    pub category: Category,
}

impl TransactionDraft {
    /// The manual-entry fallback draft offered whenever recognition fails.
    pub fn placeholder() -> Self {
        Self {
            title: "Receipt".to_string(),
            amount: None,
            category: Category::Others,
        }
    }

    pub fn has_amount(&self) -> bool {
        self.amount.is_some()
    }

    /// Render the draft as the plain string fields the transaction form
    /// consumes. A missing amount becomes the empty string, signaling that
    /// manual entry is required.
    pub fn form_fields(&self) -> DraftFields {
        DraftFields {
            title: self.title.clone(),
            amount: self
                .amount
                .map(|a| a.to_string())
                .unwrap_or_default(),
            category: self.category.as_str().to_string(),
        }
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// The `{ title, amount, category }` string contract handed to the
/// transaction-creation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftFields {
    pub title: String,
    pub amount: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("  food "), Some(Category::Food));
        assert_eq!(Category::from_str("groceries"), None);
    }

    #[test]
    fn test_category_default_is_others() {
        assert_eq!(Category::default(), Category::Others);
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
    }

    #[test]
    fn test_placeholder_draft() {
        let draft = TransactionDraft::placeholder();
        assert_eq!(draft.title, "Receipt");
        assert!(!draft.has_amount());
        assert_eq!(draft.category, Category::Others);
    }

    #[test]
    fn test_form_fields_renders_missing_amount_as_empty() {
        let draft = TransactionDraft::placeholder();
        let fields = draft.form_fields();
        assert_eq!(fields.title, "Receipt");
        assert_eq!(fields.amount, "");
        assert_eq!(fields.category, "Others");
    }

    #[test]
    fn test_form_fields_with_amount() {
        let draft = TransactionDraft {
            title: "Everest Cafe".to_string(),
            amount: Some(Decimal::from_str("450.50").unwrap()),
            category: Category::Food,
        };

        let fields = draft.form_fields();
        assert_eq!(fields.amount, "450.50");
        assert_eq!(fields.category, "Food");
    }
}
