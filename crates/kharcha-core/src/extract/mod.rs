//! Receipt field extraction module.

mod amount;
mod category;
pub mod patterns;
mod title;

pub use amount::{extract_amount, format_npr, parse_amount};
pub use category::{categorize, category_rules};
pub use title::{extract_title, DEFAULT_TITLE};

use crate::models::TransactionDraft;

/// Derive a transaction draft from recognized receipt text.
///
/// Total over any input (empty text, non-Latin text, text without
/// numbers) and always yields a fully populated draft using the
/// documented defaults. Pure: identical text gives an identical draft.
pub fn draft_from_text(text: &str) -> TransactionDraft {
    TransactionDraft {
        title: extract_title(text),
        amount: extract_amount(text),
        category: categorize(text),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::Category;

    #[test]
    fn test_full_receipt() {
        let text = "Everest Cafe\nKathmandu 44600\n\nMomo x2 240\nDal Bhat 310\nTotal: Rs. 550\nThank you!";

        let draft = draft_from_text(text);

        assert_eq!(
            draft,
            TransactionDraft {
                title: "Everest Cafe".to_string(),
                amount: Some(Decimal::from(550)),
                category: Category::Food,
            }
        );
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        assert_eq!(draft_from_text(""), TransactionDraft::placeholder());
    }

    #[test]
    fn test_no_numbers_yields_draft_without_amount() {
        let draft = draft_from_text("Himalayan Pharmacy\nGet well soon");
        assert_eq!(draft.title, "Himalayan Pharmacy");
        assert_eq!(draft.amount, None);
        assert_eq!(draft.category, Category::Health);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Gongabu Bus Park\nfare 55";
        assert_eq!(draft_from_text(text), draft_from_text(text));
    }
}
