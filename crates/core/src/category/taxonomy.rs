//! Static category taxonomy.
//!
//! Leaf category names are free-form strings owned by the persistence
//! collaborator; the taxonomy maps them onto a closed set of parent
//! categories at compile time. Unmapped leaves fall back to
//! [`ParentCategory::Uncategorized`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Closed set of parent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentCategory {
    /// Rent, mortgage, household.
    Housing,
    /// Groceries, restaurants, coffee.
    FoodDining,
    /// Fuel, transit, ride hailing, parking.
    Transport,
    /// Retail and online shopping.
    Shopping,
    /// Streaming, games, events.
    Entertainment,
    /// Medical, pharmacy, fitness.
    Health,
    /// Flights, hotels, holidays.
    Travel,
    /// Power, water, telecom, subscriptions that keep the lights on.
    Utilities,
    /// Tuition, courses, books.
    Education,
    /// Grooming and personal upkeep.
    PersonalCare,
    /// Fallback parent for unmapped leaf categories.
    Uncategorized,
}

impl ParentCategory {
    /// Stable identifier used in serialized output.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::FoodDining => "food_dining",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Utilities => "utilities",
            Self::Education => "education",
            Self::PersonalCare => "personal_care",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::FoodDining => "Food & Dining",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Accent color as a hex string, for caller-side visualization.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Housing => "#8e44ad",
            Self::FoodDining => "#e67e22",
            Self::Transport => "#2980b9",
            Self::Shopping => "#c0392b",
            Self::Entertainment => "#d35400",
            Self::Health => "#27ae60",
            Self::Travel => "#16a085",
            Self::Utilities => "#f39c12",
            Self::Education => "#2c3e50",
            Self::PersonalCare => "#9b59b6",
            Self::Uncategorized => "#7f8c8d",
        }
    }

    /// Icon name, for caller-side visualization.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Housing => "home",
            Self::FoodDining => "utensils",
            Self::Transport => "car",
            Self::Shopping => "shopping-bag",
            Self::Entertainment => "film",
            Self::Health => "heart-pulse",
            Self::Travel => "plane",
            Self::Utilities => "plug",
            Self::Education => "graduation-cap",
            Self::PersonalCare => "scissors",
            Self::Uncategorized => "circle-help",
        }
    }

    /// All parent categories, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::FoodDining,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Health,
            Self::Travel,
            Self::Utilities,
            Self::Education,
            Self::PersonalCare,
            Self::Uncategorized,
        ]
    }

    /// Maps a free-form leaf category name to its parent.
    ///
    /// Matching is case-insensitive on the trimmed name; unmapped leaves
    /// fall back to `Uncategorized`.
    #[must_use]
    pub fn from_leaf(leaf: &str) -> Self {
        LEAF_INDEX
            .get(leaf.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(Self::Uncategorized)
    }
}

/// Static leaf → parent table. Keys are lowercase.
static LEAF_PARENTS: &[(&str, ParentCategory)] = &[
    // Housing
    ("rent", ParentCategory::Housing),
    ("mortgage", ParentCategory::Housing),
    ("home improvement", ParentCategory::Housing),
    ("furniture", ParentCategory::Housing),
    ("household supplies", ParentCategory::Housing),
    // Food & Dining
    ("groceries", ParentCategory::FoodDining),
    ("restaurants", ParentCategory::FoodDining),
    ("coffee shops", ParentCategory::FoodDining),
    ("fast food", ParentCategory::FoodDining),
    ("food delivery", ParentCategory::FoodDining),
    ("bars", ParentCategory::FoodDining),
    // Transport
    ("fuel", ParentCategory::Transport),
    ("public transit", ParentCategory::Transport),
    ("ride hailing", ParentCategory::Transport),
    ("parking", ParentCategory::Transport),
    ("tolls", ParentCategory::Transport),
    ("car maintenance", ParentCategory::Transport),
    // Shopping
    ("clothing", ParentCategory::Shopping),
    ("electronics", ParentCategory::Shopping),
    ("online shopping", ParentCategory::Shopping),
    ("gifts", ParentCategory::Shopping),
    ("books", ParentCategory::Shopping),
    // Entertainment
    ("streaming", ParentCategory::Entertainment),
    ("games", ParentCategory::Entertainment),
    ("movies", ParentCategory::Entertainment),
    ("concerts", ParentCategory::Entertainment),
    ("hobbies", ParentCategory::Entertainment),
    // Health
    ("pharmacy", ParentCategory::Health),
    ("doctor", ParentCategory::Health),
    ("dental", ParentCategory::Health),
    ("gym", ParentCategory::Health),
    ("health insurance", ParentCategory::Health),
    // Travel
    ("flights", ParentCategory::Travel),
    ("hotels", ParentCategory::Travel),
    ("vacation", ParentCategory::Travel),
    ("car rental", ParentCategory::Travel),
    // Utilities
    ("electricity", ParentCategory::Utilities),
    ("water", ParentCategory::Utilities),
    ("internet", ParentCategory::Utilities),
    ("mobile phone", ParentCategory::Utilities),
    ("gas", ParentCategory::Utilities),
    // Education
    ("tuition", ParentCategory::Education),
    ("courses", ParentCategory::Education),
    ("school supplies", ParentCategory::Education),
    // Personal Care
    ("haircut", ParentCategory::PersonalCare),
    ("cosmetics", ParentCategory::PersonalCare),
    ("spa", ParentCategory::PersonalCare),
];

static LEAF_INDEX: Lazy<HashMap<&'static str, ParentCategory>> =
    Lazy::new(|| LEAF_PARENTS.iter().copied().collect());
