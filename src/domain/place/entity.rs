//! Place entity and query result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::review::ReviewId;

/// Place identifier, assigned sequentially by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(i64);

impl PlaceId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reviewable place
///
/// Name and address are stored with their original casing; the
/// (name, address) pair is unique case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    id: PlaceId,
    name: String,
    address: String,
    created_at: DateTime<Utc>,
}

impl Place {
    pub fn new(id: PlaceId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> PlaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// One row of a place search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSearchResult {
    pub id: PlaceId,
    pub name: String,
    /// Mean of the place's review ratings; `None` when it has no reviews
    pub average_rating: Option<f64>,
}

/// A review joined with its author's display name, as rendered in a
/// place detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewWithAuthor {
    pub id: ReviewId,
    pub rating: u8,
    pub text: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

/// Full place detail payload
///
/// `reviews` places the viewing user's own review first (when present);
/// the remainder keep whatever order the store returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub id: PlaceId,
    pub name: String,
    pub address: String,
    /// Mean rating rounded to 2 decimal places; `None` when no reviews
    pub average_rating: Option<f64>,
    pub reviews: Vec<ReviewWithAuthor>,
    pub created_at: DateTime<Utc>,
}
