//! Demo data seeding for in-memory stores

use rand::Rng;
use tracing::{info, warn};

use crate::domain::place::PlaceRepository;
use crate::domain::review::{Rating, ReviewRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Irene", "Jack", "Karen",
    "Leo", "Maria", "Nathan", "Olivia", "Paul", "Quinn", "Rachel", "Sam", "Tina",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Lee",
];

const PLACE_ADJECTIVES: &[&str] = &[
    "Golden", "Silver", "Blue", "Green", "Royal", "Grand", "Little", "Happy", "Sunny", "Cozy",
];

const PLACE_NOUNS: &[&str] = &[
    "Harbor", "Garden", "Corner", "Palace", "Star", "Valley", "Bridge", "Market", "Plaza", "Grove",
];

const PLACE_TYPES: &[&str] = &[
    "Restaurant", "Clinic", "Shop", "Cafe", "Hospital", "Gym", "Salon", "Hotel",
];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Park Rd", "Elm St", "Maple Dr", "Cedar Ln", "High St", "River Rd",
];

const REVIEW_TEXTS: &[&str] = &[
    "Great experience, would come back.",
    "Friendly staff but a bit slow.",
    "Exceeded my expectations.",
    "Average at best.",
    "Hidden gem, highly recommended.",
    "Not worth the price.",
    "Clean and well organized.",
    "The service could be better.",
    "Absolutely loved it.",
    "Decent, nothing special.",
];

/// How many entities to generate
#[derive(Debug, Clone, Copy)]
pub struct SeedCounts {
    pub users: usize,
    pub places: usize,
    pub reviews: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            users: 20,
            places: 30,
            reviews: 100,
        }
    }
}

/// Populate the repositories with randomly generated demo data.
///
/// Generated (user, place) review pairs may collide; collisions are skipped,
/// so the final review count can come in under `counts.reviews`.
pub async fn seed_data<U, P, R>(
    users: &U,
    places: &P,
    reviews: &R,
    counts: SeedCounts,
) -> Result<(), DomainError>
where
    U: UserRepository,
    P: PlaceRepository,
    R: ReviewRepository,
{
    let mut rng = rand::thread_rng();

    let mut user_ids = Vec::with_capacity(counts.users);
    let mut attempts = 0;
    while user_ids.len() < counts.users && attempts < counts.users * 10 {
        attempts += 1;
        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
        );
        let phone = format!("+1{}", rng.gen_range(2_000_000_000u64..9_999_999_999u64));

        match users.create(&name, &phone).await {
            Ok(user) => user_ids.push(user.id()),
            // Regenerate on phone collision
            Err(DomainError::Conflict { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    let mut place_ids = Vec::with_capacity(counts.places);
    let mut attempts = 0;
    while place_ids.len() < counts.places && attempts < counts.places * 10 {
        attempts += 1;
        let name = format!(
            "{} {} {}",
            PLACE_ADJECTIVES[rng.gen_range(0..PLACE_ADJECTIVES.len())],
            PLACE_NOUNS[rng.gen_range(0..PLACE_NOUNS.len())],
            PLACE_TYPES[rng.gen_range(0..PLACE_TYPES.len())]
        );
        let address = format!(
            "{} {}",
            rng.gen_range(1..999),
            STREETS[rng.gen_range(0..STREETS.len())]
        );

        match places.create(&name, &address).await {
            Ok(place) => place_ids.push(place.id()),
            Err(DomainError::Conflict { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    if user_ids.is_empty() || place_ids.is_empty() {
        warn!("Seeding produced no users or no places; skipping reviews");
        return Ok(());
    }

    let mut created_reviews = 0;
    for _ in 0..counts.reviews {
        let user_id = user_ids[rng.gen_range(0..user_ids.len())];
        let place_id = place_ids[rng.gen_range(0..place_ids.len())];
        let rating = Rating::new(rng.gen_range(1..=5))
            .map_err(|e| DomainError::internal(e.to_string()))?;
        let text = REVIEW_TEXTS[rng.gen_range(0..REVIEW_TEXTS.len())];

        match reviews.create(user_id, place_id, rating, text).await {
            Ok(_) => created_reviews += 1,
            Err(DomainError::DuplicateReview { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    info!(
        users = user_ids.len(),
        places = place_ids.len(),
        reviews = created_reviews,
        "Seeded demo data"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::place::InMemoryPlaceRepository;
    use crate::infrastructure::review::InMemoryReviewRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    #[tokio::test]
    async fn test_seed_populates_repositories() {
        let users = InMemoryUserRepository::new();
        let places = InMemoryPlaceRepository::new();
        let reviews = InMemoryReviewRepository::new();

        let counts = SeedCounts {
            users: 5,
            places: 8,
            reviews: 20,
        };

        seed_data(&users, &places, &reviews, counts).await.unwrap();

        assert_eq!(users.count().await.unwrap(), 5);
        assert_eq!(places.count().await.unwrap(), 8);
        // Duplicate pairs are skipped, so at most the requested count
        assert!(reviews.count().await.unwrap() <= 20);
        assert!(reviews.count().await.unwrap() > 0);
    }

    #[tokio::test]
    async fn test_seed_zero_counts() {
        let users = InMemoryUserRepository::new();
        let places = InMemoryPlaceRepository::new();
        let reviews = InMemoryReviewRepository::new();

        let counts = SeedCounts {
            users: 0,
            places: 0,
            reviews: 10,
        };

        seed_data(&users, &places, &reviews, counts).await.unwrap();

        assert_eq!(users.count().await.unwrap(), 0);
        assert_eq!(reviews.count().await.unwrap(), 0);
    }
}
