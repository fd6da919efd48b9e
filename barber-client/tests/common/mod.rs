//! Shared test doubles: an in-memory `BookingApi`, recording sinks and
//! collaborator stubs.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use barber_client::stats::{OrderStats, ReviewStats};
use barber_client::view::{OrderRow, ReviewCard, ReviewRow};
use barber_client::{
    AdminSink, BookingApi, ClientError, ClientResult, LoginGate, NoticeKind, Notifier, PublicSink,
    ReviewScope,
};
use shared::{Approval, Order, OrderDraft, OrderStatus, Review, ReviewDraft};

/// Failure the mock should produce instead of answering
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    Auth,
    Status(u16),
}

impl MockFailure {
    fn into_error(self) -> ClientError {
        match self {
            MockFailure::Auth => ClientError::AuthRequired,
            MockFailure::Status(status) => ClientError::RequestFailed { status },
        }
    }
}

/// In-memory API double. Mutations actually change the stored collections,
/// so a follow-up fetch observes their effect.
#[derive(Default)]
pub struct MockApi {
    pub orders: Mutex<Vec<Order>>,
    pub reviews: Mutex<Vec<Review>>,
    pub fail_with: Mutex<Option<MockFailure>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_data(orders: Vec<Order>, reviews: Vec<Review>) -> Arc<Self> {
        Arc::new(Self {
            orders: Mutex::new(orders),
            reviews: Mutex::new(reviews),
            ..Self::default()
        })
    }

    pub fn fail_next_with(&self, failure: MockFailure) {
        *self.fail_with.lock().unwrap() = Some(failure);
    }

    pub fn succeed(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call.into());
        match *self.fail_with.lock().unwrap() {
            Some(failure) => Err(failure.into_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookingApi for MockApi {
    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.record("GET orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn list_reviews(&self, scope: ReviewScope) -> ClientResult<Vec<Review>> {
        self.record(format!("GET reviews {scope:?}"))?;
        let reviews = self.reviews.lock().unwrap().clone();
        Ok(match scope {
            ReviewScope::All => reviews,
            ReviewScope::ApprovedOnly => reviews
                .into_iter()
                .filter(|r| r.approved == Approval::Approved)
                .collect(),
        })
    }

    async fn get_review(&self, id: i64) -> ClientResult<Review> {
        self.record(format!("GET review/{id}"))?;
        self.reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ClientError::RequestFailed { status: 404 })
    }

    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<()> {
        self.record("POST order")?;
        let mut orders = self.orders.lock().unwrap();
        let id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        orders.push(Order {
            id,
            date: draft.date.clone(),
            time: draft.time.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            service: draft.service.clone(),
            status: OrderStatus::New,
            timestamp: Some("2026-03-01T09:00:00".into()),
        });
        Ok(())
    }

    async fn create_review(&self, draft: &ReviewDraft) -> ClientResult<()> {
        self.record("POST review")?;
        let mut reviews = self.reviews.lock().unwrap();
        let id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        reviews.push(Review {
            id,
            name: draft.name.clone(),
            service: draft.service.clone(),
            text: draft.text.clone(),
            rating: draft.rating,
            date: "2026-03-01T09:00:00".into(),
            approved: Approval::Pending,
        });
        Ok(())
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> ClientResult<()> {
        self.record(format!("PUT order/{id}"))?;
        if let Some(order) = self.orders.lock().unwrap().iter_mut().find(|o| o.id == id) {
            order.status = status;
        }
        Ok(())
    }

    async fn set_review_approval(&self, id: i64, approval: Approval) -> ClientResult<()> {
        self.record(format!("PUT review/{id}"))?;
        if let Some(review) = self.reviews.lock().unwrap().iter_mut().find(|r| r.id == id) {
            review.approved = approval;
        }
        Ok(())
    }

    async fn delete_order(&self, id: i64) -> ClientResult<()> {
        self.record(format!("DELETE order/{id}"))?;
        self.orders.lock().unwrap().retain(|o| o.id != id);
        Ok(())
    }

    async fn delete_review(&self, id: i64) -> ClientResult<()> {
        self.record(format!("DELETE review/{id}"))?;
        self.reviews.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

/// Notifier recording every notice
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().unwrap().push((kind, message.to_string()));
    }
}

/// Login gate counting redirects
#[derive(Default)]
pub struct RecordingGate {
    pub redirects: AtomicUsize,
}

impl RecordingGate {
    pub fn count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl LoginGate for RecordingGate {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Admin sink recording every full replacement it receives
#[derive(Default)]
pub struct RecordingAdminSink {
    pub order_renders: Mutex<Vec<(Vec<OrderRow>, OrderStats)>>,
    pub review_renders: Mutex<Vec<Vec<ReviewRow>>>,
}

impl RecordingAdminSink {
    pub fn last_orders(&self) -> Option<(Vec<OrderRow>, OrderStats)> {
        self.order_renders.lock().unwrap().last().cloned()
    }

    pub fn last_reviews(&self) -> Option<Vec<ReviewRow>> {
        self.review_renders.lock().unwrap().last().cloned()
    }

    pub fn order_render_count(&self) -> usize {
        self.order_renders.lock().unwrap().len()
    }
}

impl AdminSink for RecordingAdminSink {
    fn replace_orders(&self, rows: Vec<OrderRow>, stats: OrderStats) {
        self.order_renders.lock().unwrap().push((rows, stats));
    }

    fn replace_reviews(&self, rows: Vec<ReviewRow>) {
        self.review_renders.lock().unwrap().push(rows);
    }
}

/// Public sink recording every replacement
#[derive(Default)]
pub struct RecordingPublicSink {
    pub renders: Mutex<Vec<(Vec<ReviewCard>, ReviewStats)>>,
}

impl RecordingPublicSink {
    pub fn last(&self) -> Option<(Vec<ReviewCard>, ReviewStats)> {
        self.renders.lock().unwrap().last().cloned()
    }
}

impl PublicSink for RecordingPublicSink {
    fn replace_reviews(&self, cards: Vec<ReviewCard>, stats: ReviewStats) {
        self.renders.lock().unwrap().push((cards, stats));
    }
}

pub fn order(id: i64, status: OrderStatus, date: &str) -> Order {
    Order {
        id,
        date: date.into(),
        time: "12:00".into(),
        name: format!("client-{id}"),
        phone: "+7 900 000-00-00".into(),
        service: "Haircut".into(),
        status,
        timestamp: None,
    }
}

pub fn review(id: i64, date: &str, rating: u8, approved: Approval) -> Review {
    Review {
        id,
        name: format!("author-{id}"),
        service: Some("Haircut".into()),
        text: "Sharp lines, friendly master.".into(),
        rating,
        date: date.into(),
        approved,
    }
}
