//! Dashboard counters computed from fetched collections

use shared::{Order, OrderStatus, Review};

/// Admin dashboard order counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub new_orders: usize,
    pub today: usize,
    pub completed: usize,
    pub total: usize,
}

impl OrderStats {
    /// Count orders per dashboard tile. "Today" is exact string equality on
    /// the `YYYY-MM-DD` form, matching the wire date format.
    pub fn collect(orders: &[Order], today: &str) -> Self {
        Self {
            new_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::New)
                .count(),
            today: orders.iter().filter(|o| o.date == today).count(),
            completed: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Completed)
                .count(),
            total: orders.len(),
        }
    }
}

/// Public review summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStats {
    pub total: usize,
    /// Average rating rendered to one decimal; the empty set shows "5.0"
    pub average_rating: String,
}

impl ReviewStats {
    pub fn collect(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self {
                total: 0,
                average_rating: "5.0".into(),
            };
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Self {
            total: reviews.len(),
            average_rating: format!("{:.1}", f64::from(sum) / reviews.len() as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Approval;

    fn order(status: OrderStatus, date: &str) -> Order {
        Order {
            id: 1,
            date: date.into(),
            time: "10:00".into(),
            name: "Ivan".into(),
            phone: "+7 900 000-00-00".into(),
            service: "Haircut".into(),
            status,
            timestamp: None,
        }
    }

    fn review(rating: u8) -> Review {
        Review {
            id: 1,
            name: "Oleg".into(),
            service: None,
            text: "Fine.".into(),
            rating,
            date: "2026-02-10T12:00:00".into(),
            approved: Approval::Approved,
        }
    }

    #[test]
    fn order_counters() {
        let orders = vec![
            order(OrderStatus::New, "2026-03-01"),
            order(OrderStatus::New, "2026-03-02"),
            order(OrderStatus::Completed, "2026-03-01"),
            order(OrderStatus::Cancelled, "2026-02-28"),
        ];
        let stats = OrderStats::collect(&orders, "2026-03-01");
        assert_eq!(stats.new_orders, 2);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn review_average_to_one_decimal() {
        let stats = ReviewStats::collect(&[review(5), review(4), review(4)]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_rating, "4.3");
    }

    #[test]
    fn empty_review_set_reports_five() {
        let stats = ReviewStats::collect(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, "5.0");
    }
}
