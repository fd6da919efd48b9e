//! View-model materialization
//!
//! Pure mappings from fetched entities to display-ready rows. Label and
//! class lookups are total functions; nothing here mutates what it reads.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::{Approval, Order, OrderStatus, Review};

/// Preview length for review text in the admin table
pub const TEXT_PREVIEW_LIMIT: usize = 100;

/// CSS class key for an order status.
///
/// Total by construction: the wire decode already folds unknown labels into
/// `New`, so an unrecognized status renders with the `new` class.
pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::New => "new",
        OrderStatus::Confirmed => "confirmed",
        OrderStatus::Completed => "completed",
        OrderStatus::Cancelled => "cancelled",
    }
}

/// Display label for a moderation state
pub fn approval_label(approval: Approval) -> &'static str {
    match approval {
        Approval::Approved => "Approved",
        Approval::Pending => "Pending",
        Approval::Rejected => "Rejected",
    }
}

/// CSS class key for a moderation state
pub fn approval_class(approval: Approval) -> &'static str {
    match approval {
        Approval::Approved => "approved",
        Approval::Pending => "pending",
        Approval::Rejected => "rejected",
    }
}

/// Rating as a fixed five-glyph string: filled stars up to the rating,
/// empty stars after. Ratings above 5 clamp to all filled.
pub fn stars(rating: u8) -> String {
    let rating = rating.min(5);
    (1..=5)
        .map(|i| if i <= rating { '★' } else { '☆' })
        .collect()
}

/// Truncate review text for the table cell. Returns the preview and whether
/// the full text needs an expand affordance (single-item fetch).
pub fn preview_text(text: &str) -> (String, bool) {
    if text.chars().count() <= TEXT_PREVIEW_LIMIT {
        return (text.to_string(), false);
    }
    let mut preview: String = text.chars().take(TEXT_PREVIEW_LIMIT).collect();
    preview.push('…');
    (preview, true)
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Short date form for table cells (`DD.MM.YYYY`). Unparseable input is
/// shown as-is.
pub fn short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Long date form for cards (`D Month YYYY`)
pub fn long_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Long date form with clock time, for the full-review view
pub fn long_date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-d %B %Y, %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// One row of the admin order table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl OrderRow {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id,
            date: short_date(&order.date),
            time: order.time.clone(),
            name: order.name.clone(),
            phone: order.phone.clone(),
            service: order.service.clone(),
            status_label: order.status.label(),
            status_class: status_class(order.status),
        }
    }
}

/// One row of the admin review table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub id: i64,
    pub date: String,
    pub name: String,
    /// Em dash placeholder when the customer named no service
    pub service: String,
    pub stars: String,
    pub text: String,
    /// Full text exceeds the preview and is fetched on demand
    pub expandable: bool,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// Approve is offered unless the review is already approved
    pub can_approve: bool,
    /// Reject is offered unless the review is already pending
    pub can_reject: bool,
}

impl ReviewRow {
    pub fn from_review(review: &Review) -> Self {
        let (text, expandable) = preview_text(&review.text);
        Self {
            id: review.id,
            date: short_date(&review.date),
            name: review.name.clone(),
            service: review.service.clone().unwrap_or_else(|| "—".into()),
            stars: stars(review.rating),
            text,
            expandable,
            status_label: approval_label(review.approved),
            status_class: approval_class(review.approved),
            can_approve: review.approved != Approval::Approved,
            can_reject: review.approved != Approval::Pending,
        }
    }
}

/// One card of the public review grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub name: String,
    pub date: String,
    pub service: Option<String>,
    pub stars: String,
    pub text: String,
}

impl ReviewCard {
    pub fn from_review(review: &Review) -> Self {
        Self {
            name: review.name.clone(),
            date: long_date(&review.date),
            service: review.service.clone(),
            stars: stars(review.rating),
            text: review.text.clone(),
        }
    }
}

/// Full single-review view, backing the expand affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDetail {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub service: String,
    pub stars: String,
    pub text: String,
}

impl ReviewDetail {
    pub fn from_review(review: &Review) -> Self {
        Self {
            id: review.id,
            name: review.name.clone(),
            date: long_date_time(&review.date),
            service: review.service.clone().unwrap_or_else(|| "Not specified".into()),
            stars: stars(review.rating),
            text: review.text.clone(),
        }
    }
}
