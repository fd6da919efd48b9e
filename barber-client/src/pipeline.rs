//! Fetch → filter → sort → render pipeline
//!
//! One pipeline per page context. Every successful run hands the sink a
//! full replacement of the rendered rows; a failed read leaves the
//! last-good render in place. Each fetch carries a generation number so a
//! slow, older response is discarded instead of overwriting a newer render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::api::{BookingApi, Resource, ReviewScope};
use crate::error::ClientError;
use crate::filter::{OrderCriteria, ReviewCriteria, filter_orders, filter_reviews, public_reviews, sort_reviews_newest_first};
use crate::notify::{LoginGate, NoticeKind, Notifier};
use crate::stats::{OrderStats, ReviewStats};
use crate::view::{OrderRow, ReviewCard, ReviewRow};

/// Rendered-output consumer for the admin context. Receives full
/// replacements only, never patches.
pub trait AdminSink: Send + Sync {
    fn replace_orders(&self, rows: Vec<OrderRow>, stats: OrderStats);
    fn replace_reviews(&self, rows: Vec<ReviewRow>);
}

/// Rendered-output consumer for the public site
pub trait PublicSink: Send + Sync {
    fn replace_reviews(&self, cards: Vec<ReviewCard>, stats: ReviewStats);
}

/// A page context's refresh surface, driven by the scheduler and by
/// mutation outcomes.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Full fetch→filter→render pass over every collection of the context
    async fn run(&self);
    /// Re-fetch a single collection after a mutation landed
    async fn refresh(&self, resource: Resource);
}

/// Admin panel pipeline: orders table, review moderation table, dashboard
/// counters.
pub struct AdminPipeline<A> {
    api: Arc<A>,
    sink: Arc<dyn AdminSink>,
    notifier: Arc<dyn Notifier>,
    login: Arc<dyn LoginGate>,
    order_criteria: RwLock<OrderCriteria>,
    review_criteria: RwLock<ReviewCriteria>,
    order_generation: AtomicU64,
    review_generation: AtomicU64,
}

impl<A: BookingApi> AdminPipeline<A> {
    pub fn new(
        api: Arc<A>,
        sink: Arc<dyn AdminSink>,
        notifier: Arc<dyn Notifier>,
        login: Arc<dyn LoginGate>,
    ) -> Self {
        Self {
            api,
            sink,
            notifier,
            login,
            order_criteria: RwLock::new(OrderCriteria::default()),
            review_criteria: RwLock::new(ReviewCriteria::default()),
            order_generation: AtomicU64::new(0),
            review_generation: AtomicU64::new(0),
        }
    }

    /// Replace the order filter criteria. The caller triggers the refresh.
    pub fn set_order_criteria(&self, criteria: OrderCriteria) {
        *write_lock(&self.order_criteria) = criteria;
    }

    /// Replace the review filter criteria. The caller triggers the refresh.
    pub fn set_review_criteria(&self, criteria: ReviewCriteria) {
        *write_lock(&self.review_criteria) = criteria;
    }

    /// Returns `false` when the server demanded re-authentication, so a
    /// full run can stop instead of redirecting twice.
    async fn refresh_orders(&self) -> bool {
        let generation = self.order_generation.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.list_orders().await {
            Ok(orders) => {
                if self.order_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "stale order fetch discarded");
                    return true;
                }
                let criteria = read_lock(&self.order_criteria).clone();
                let rows: Vec<OrderRow> = filter_orders(&orders, &criteria)
                    .iter()
                    .map(OrderRow::from_order)
                    .collect();
                let stats = OrderStats::collect(&orders, &shared::util::today_iso());
                self.sink.replace_orders(rows, stats);
                true
            }
            Err(ClientError::AuthRequired) => {
                self.login.redirect_to_login();
                false
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load orders");
                self.notifier.notify(NoticeKind::Error, "Failed to load orders");
                true
            }
        }
    }

    async fn refresh_reviews(&self) {
        let generation = self.review_generation.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.list_reviews(ReviewScope::All).await {
            Ok(reviews) => {
                if self.review_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "stale review fetch discarded");
                    return;
                }
                let criteria = read_lock(&self.review_criteria).clone();
                let mut kept = filter_reviews(&reviews, &criteria);
                sort_reviews_newest_first(&mut kept);
                let rows: Vec<ReviewRow> = kept.iter().map(ReviewRow::from_review).collect();
                self.sink.replace_reviews(rows);
            }
            Err(ClientError::AuthRequired) => self.login.redirect_to_login(),
            Err(err) => {
                tracing::error!(error = %err, "failed to load reviews");
                self.notifier.notify(NoticeKind::Error, "Failed to load reviews");
            }
        }
    }
}

#[async_trait]
impl<A: BookingApi> Pipeline for AdminPipeline<A> {
    async fn run(&self) {
        if self.refresh_orders().await {
            self.refresh_reviews().await;
        }
    }

    async fn refresh(&self, resource: Resource) {
        match resource {
            Resource::Orders => {
                self.refresh_orders().await;
            }
            Resource::Reviews => self.refresh_reviews().await,
        }
    }
}

/// Public site pipeline: approved reviews grid plus the rating summary.
pub struct PublicPipeline<A> {
    api: Arc<A>,
    sink: Arc<dyn PublicSink>,
    notifier: Arc<dyn Notifier>,
    generation: AtomicU64,
}

impl<A: BookingApi> PublicPipeline<A> {
    pub fn new(api: Arc<A>, sink: Arc<dyn PublicSink>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            sink,
            notifier,
            generation: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl<A: BookingApi> Pipeline for PublicPipeline<A> {
    async fn run(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.list_reviews(ReviewScope::ApprovedOnly).await {
            Ok(reviews) => {
                if self.generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "stale public review fetch discarded");
                    return;
                }
                // the summary covers every approved review, the grid only
                // the newest six
                let stats = ReviewStats::collect(&reviews);
                let cards: Vec<ReviewCard> = public_reviews(reviews)
                    .iter()
                    .map(ReviewCard::from_review)
                    .collect();
                self.sink.replace_reviews(cards, stats);
            }
            Err(ClientError::AuthRequired) => {
                // the public page has no login surface; auth demands are
                // logged, never shown as errors
                tracing::warn!("authentication demanded on the public review listing");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load reviews");
                self.notifier.notify(NoticeKind::Error, "Failed to load reviews");
            }
        }
    }

    async fn refresh(&self, resource: Resource) {
        match resource {
            // the public site lists no orders; nothing to re-render
            Resource::Orders => {}
            Resource::Reviews => self.run().await,
        }
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
