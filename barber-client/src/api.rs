//! Typed surface of the booking API
//!
//! [`BookingApi`] is the seam between the sync layer and the transport:
//! the real implementation lives on [`RestClient`], tests substitute doubles.

use async_trait::async_trait;
use shared::{Approval, Order, OrderDraft, OrderStatus, Review, ReviewDraft};

use crate::{ClientResult, RestClient};

/// A named remote collection exposed through the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Orders,
    Reviews,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Orders => "order",
            Resource::Reviews => "review",
        }
    }
}

/// Scope of a review listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewScope {
    /// Every review, any moderation state (admin context)
    #[default]
    All,
    /// Only approved reviews; the filter is applied server-side
    ApprovedOnly,
}

/// Remote collection operations for orders and reviews
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;
    async fn list_reviews(&self, scope: ReviewScope) -> ClientResult<Vec<Review>>;
    async fn get_review(&self, id: i64) -> ClientResult<Review>;
    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<()>;
    async fn create_review(&self, draft: &ReviewDraft) -> ClientResult<()>;
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<()>;
    async fn set_review_approval(&self, id: i64, approval: Approval) -> ClientResult<()>;
    async fn delete_order(&self, id: i64) -> ClientResult<()>;
    async fn delete_review(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl BookingApi for RestClient {
    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("api/orders").await
    }

    async fn list_reviews(&self, scope: ReviewScope) -> ClientResult<Vec<Review>> {
        let path = match scope {
            ReviewScope::All => "api/reviews",
            ReviewScope::ApprovedOnly => "api/reviews?approved=true",
        };
        self.get(path).await
    }

    async fn get_review(&self, id: i64) -> ClientResult<Review> {
        self.get(&format!("api/review/{id}")).await
    }

    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<()> {
        self.post("api/order", draft).await
    }

    async fn create_review(&self, draft: &ReviewDraft) -> ClientResult<()> {
        self.post("api/review", draft).await
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<()> {
        self.put(
            &format!("api/order/{id}"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    async fn set_review_approval(&self, id: i64, approval: Approval) -> ClientResult<()> {
        self.put(
            &format!("api/review/{id}"),
            &serde_json::json!({ "approved": approval }),
        )
        .await
    }

    async fn delete_order(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("api/order/{id}")).await
    }

    async fn delete_review(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("api/review/{id}")).await
    }
}
