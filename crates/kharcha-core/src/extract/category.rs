//! Keyword-based receipt categorization.

use tracing::debug;

use crate::models::Category;

/// Ordered category rules: the first rule with any keyword hit wins.
/// Order matters: earlier rules shadow later ones, and Food is checked
/// before Bills.
const CATEGORY_RULES: [(Category, &[&str]); 6] = [
    (
        Category::Food,
        &["restaurant", "cafe", "hotel", "food", "pizza", "burger", "kitchen", "dining"],
    ),
    (
        Category::Transport,
        &["taxi", "uber", "bus", "transport", "fuel", "petrol", "gas"],
    ),
    (
        Category::Health,
        &["pharmacy", "hospital", "clinic", "medical", "doctor", "health"],
    ),
    (
        Category::Shopping,
        &["mall", "store", "shop", "market", "clothing", "electronics"],
    ),
    (
        Category::Entertainment,
        &["movie", "cinema", "entertainment", "game", "fun"],
    ),
    (
        Category::Bills,
        &["electric", "water", "internet", "phone", "bill", "utility"],
    ),
];

/// The ordered (category, keywords) rule table.
pub fn category_rules() -> &'static [(Category, &'static [&'static str])] {
    &CATEGORY_RULES
}

/// Assign a spending category from receipt text.
///
/// Case-insensitive substring matching over the whole text; total over
/// any input, with `Others` when no keyword hits.
pub fn categorize(text: &str) -> Category {
    let lower = text.to_lowercase();

    for (category, keywords) in &CATEGORY_RULES {
        if let Some(keyword) = keywords.iter().find(|kw| lower.contains(**kw)) {
            debug!("Category {} matched on keyword '{}'", category, keyword);
            return *category;
        }
    }

    Category::Others
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sample_per_category() {
        assert_eq!(categorize("Everest Restaurant, Thamel"), Category::Food);
        assert_eq!(categorize("KTM taxi fare"), Category::Transport);
        assert_eq!(categorize("City Pharmacy Pvt Ltd"), Category::Health);
        assert_eq!(categorize("Bhatbhateni Super Market"), Category::Shopping);
        assert_eq!(categorize("QFX Cinema, Labim"), Category::Entertainment);
        assert_eq!(categorize("Electricity payment September"), Category::Bills);
    }

    #[test]
    fn test_no_match_is_others() {
        assert_eq!(categorize("assorted sundries"), Category::Others);
        assert_eq!(categorize(""), Category::Others);
        assert_eq!(categorize("९९९ धन्यवाद"), Category::Others);
    }

    #[test]
    fn test_food_precedes_bills() {
        let text = "Hotel Annapurna restaurant\nelectric bill included";
        assert_eq!(categorize(text), Category::Food);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let expected = [
            Category::Food,
            Category::Transport,
            Category::Health,
            Category::Shopping,
            Category::Entertainment,
            Category::Bills,
        ];
        let order: Vec<Category> = category_rules().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(categorize("FUEL STATION"), Category::Transport);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // Plain substring containment, no word boundaries.
        assert_eq!(categorize("Seafood platter"), Category::Food);
    }
}
