//! Review entity and rating type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::place::PlaceId;
use crate::domain::user::UserId;

/// Review identifier, assigned sequentially by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

impl ReviewId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error raised for ratings outside [1, 5]
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Rating must be an integer between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub i64);

/// Integer rating in [1, 5]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating after range validation
    pub fn new(value: i64) -> Result<Self, RatingOutOfRange> {
        if (1..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

/// A user's review of a place; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    rating: Rating,
    text: String,
    user_id: UserId,
    place_id: PlaceId,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        id: ReviewId,
        user_id: UserId,
        place_id: PlaceId,
        rating: Rating,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rating,
            text: text.into(),
            user_id,
            place_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn place_id(&self) -> PlaceId {
        self.place_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
