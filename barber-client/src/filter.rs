//! Client-side filtering and ordering of fetched collections
//!
//! Pure functions: given a collection and criteria they return an ordered
//! subset, nothing else. Orders keep the server's ordering; reviews are
//! always presented newest first.

use shared::{Approval, Order, OrderStatus, Review};

/// How many reviews the public listing shows at most
pub const PUBLIC_REVIEW_LIMIT: usize = 6;

/// Order status criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse a filter-control value: "all" or a status label.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            StatusFilter::Only(OrderStatus::from_label(raw))
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

/// Criteria for the admin order listing
#[derive(Debug, Clone, Default)]
pub struct OrderCriteria {
    pub status: StatusFilter,
    /// Exact appointment date (`YYYY-MM-DD`); `None` means any date
    pub date: Option<String>,
}

impl OrderCriteria {
    pub fn matches(&self, order: &Order) -> bool {
        if !self.status.matches(order.status) {
            return false;
        }
        match &self.date {
            Some(date) if !date.is_empty() => order.date == *date,
            _ => true,
        }
    }
}

/// Keep the orders satisfying the criteria, preserving server order.
pub fn filter_orders(orders: &[Order], criteria: &OrderCriteria) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| criteria.matches(o))
        .cloned()
        .collect()
}

/// Review moderation-state criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl ApprovalFilter {
    /// Parse a filter-control value; anything unrecognized means "all".
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => ApprovalFilter::Pending,
            "approved" => ApprovalFilter::Approved,
            "rejected" => ApprovalFilter::Rejected,
            _ => ApprovalFilter::All,
        }
    }

    pub fn matches(&self, approval: Approval) -> bool {
        match self {
            ApprovalFilter::All => true,
            ApprovalFilter::Pending => approval == Approval::Pending,
            ApprovalFilter::Approved => approval == Approval::Approved,
            ApprovalFilter::Rejected => approval == Approval::Rejected,
        }
    }
}

/// Rating criterion. Comparison is numeric regardless of how the control
/// supplied the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    Any,
    Exactly(u8),
}

impl RatingFilter {
    /// Parse a filter-control value: "all", or the rating as digits.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u8>() {
            Ok(rating) => RatingFilter::Exactly(rating),
            Err(_) => RatingFilter::Any,
        }
    }

    pub fn matches(&self, rating: u8) -> bool {
        match self {
            RatingFilter::Any => true,
            RatingFilter::Exactly(wanted) => rating == *wanted,
        }
    }
}

/// Criteria for the admin review listing
#[derive(Debug, Clone, Default)]
pub struct ReviewCriteria {
    pub status: ApprovalFilter,
    pub rating: RatingFilter,
    /// Case-insensitive substring matched against name OR text
    pub search: String,
}

impl ReviewCriteria {
    pub fn matches(&self, review: &Review) -> bool {
        if !self.status.matches(review.approved) {
            return false;
        }
        if !self.rating.matches(review.rating) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        review.name.to_lowercase().contains(&needle) || review.text.to_lowercase().contains(&needle)
    }
}

/// Keep the reviews satisfying the criteria, preserving input order.
pub fn filter_reviews(reviews: &[Review], criteria: &ReviewCriteria) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Sort newest first. ISO timestamps compare lexicographically; the sort is
/// stable, so same-instant reviews keep their input order.
pub fn sort_reviews_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Public listing: newest first, capped at [`PUBLIC_REVIEW_LIMIT`] entries.
///
/// Approval filtering is requested server-side (`?approved=true`); an empty
/// result is the regular "no reviews yet" state, not an error.
pub fn public_reviews(mut reviews: Vec<Review>) -> Vec<Review> {
    sort_reviews_newest_first(&mut reviews);
    reviews.truncate(PUBLIC_REVIEW_LIMIT);
    reviews
}
