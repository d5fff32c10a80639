//! Application state for shared services

use std::sync::Arc;

use crate::domain::place::{PlaceDetail, PlaceId, PlaceRepository, PlaceSearchResult};
use crate::domain::review::ReviewRepository;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{
    CreateReviewRequest, CreatedReview, PlaceQueryService, RegisterUserRequest, ReviewService,
    SearchQuery, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub review_service: Arc<dyn ReviewServiceTrait>,
    pub place_query_service: Arc<dyn PlaceQueryServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

/// Trait for user registration and lookup
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn authenticate_by_phone(&self, phone_number: &str)
        -> Result<Option<User>, DomainError>;
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;
}

/// Trait for review submission
#[async_trait::async_trait]
pub trait ReviewServiceTrait: Send + Sync {
    async fn create(
        &self,
        principal: &User,
        request: CreateReviewRequest,
    ) -> Result<CreatedReview, DomainError>;
}

/// Trait for place search and detail reads
#[async_trait::async_trait]
pub trait PlaceQueryServiceTrait: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PlaceSearchResult>, DomainError>;
    async fn detail(&self, place_id: PlaceId, principal: &User)
        -> Result<PlaceDetail, DomainError>;
    /// Repository-level probe for readiness checks; bypasses the cache
    async fn place_count(&self) -> Result<usize, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate_by_phone(self, phone_number).await
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }
}

#[async_trait::async_trait]
impl<P, R> ReviewServiceTrait for ReviewService<P, R>
where
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
{
    async fn create(
        &self,
        principal: &User,
        request: CreateReviewRequest,
    ) -> Result<CreatedReview, DomainError> {
        ReviewService::create(self, principal, request).await
    }
}

#[async_trait::async_trait]
impl<U, P, R> PlaceQueryServiceTrait for PlaceQueryService<U, P, R>
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    R: ReviewRepository + 'static,
{
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PlaceSearchResult>, DomainError> {
        PlaceQueryService::search(self, query).await
    }

    async fn detail(
        &self,
        place_id: PlaceId,
        principal: &User,
    ) -> Result<PlaceDetail, DomainError> {
        PlaceQueryService::detail(self, place_id, principal).await
    }

    async fn place_count(&self) -> Result<usize, DomainError> {
        PlaceQueryService::place_count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        review_service: Arc<dyn ReviewServiceTrait>,
        place_query_service: Arc<dyn PlaceQueryServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            user_service,
            review_service,
            place_query_service,
            jwt_service,
        }
    }
}
