use serde::{Serialize, Serializer};

/// Rating of a user, or the `"Unrated"` placeholder when none is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Rated(i32),
    Unrated,
}

impl From<Option<i32>> for Rating {
    fn from(value: Option<i32>) -> Self {
        match value {
            Some(rating) => Rating::Rated(rating),
            None => Rating::Unrated,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rating::Rated(rating) => serializer.serialize_i32(*rating),
            Rating::Unrated => serializer.serialize_str("Unrated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn from_rating(rating: i32) -> Option<Self> {
        match rating {
            800..=1000 => Some(DifficultyTier::Easy),
            1001..=1400 => Some(DifficultyTier::Medium),
            1401..=i32::MAX => Some(DifficultyTier::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl TierCounts {
    pub fn add(&mut self, tier: DifficultyTier) {
        match tier {
            DifficultyTier::Easy => self.easy += 1,
            DifficultyTier::Medium => self.medium += 1,
            DifficultyTier::Hard => self.hard += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }
}

/// One leaderboard row. Every field is always serialized, zero counts included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub username: String,
    pub rating: Rating,
    #[serde(flatten)]
    pub tiers: TierCounts,
    pub solved_last_week: u32,
    pub total_solved: u32,
}
