//! Order Model

use serde::{Deserialize, Serialize};

/// Booking status. Closed set: the client never invents a fifth value.
///
/// Wire encoding is the plain label string. Decoding is total: any label
/// outside the set falls back to `New`, matching how every consumer of the
/// API treats unknown statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    New,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Confirmed,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a wire label. Total: unknown labels map to `New`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Confirmed" => OrderStatus::Confirmed,
            "Completed" => OrderStatus::Completed,
            "Cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::New,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        OrderStatus::from_label(&s)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Booking order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Calendar date of the appointment (`YYYY-MM-DD`)
    pub date: String,
    /// Clock string of the appointment (`HH:MM`)
    pub time: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub status: OrderStatus,
    /// Creation instant, server-assigned (ISO timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Create payload for a booking order. The server assigns id, timestamp
/// and the initial `New` status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub service: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}

impl OrderDraft {
    /// Check that every required field is present and non-blank.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        for (field, value) in [
            ("service", &self.service),
            ("date", &self.date),
            ("time", &self.time),
            ("name", &self.name),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(field);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_label(status.label()), status);
        }
    }

    #[test]
    fn unknown_status_decodes_to_new() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 3,
            "date": "2026-03-01",
            "time": "14:00",
            "name": "Ivan",
            "phone": "+7 900 000-00-00",
            "service": "Haircut",
            "status": "Archived"
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_value(OrderStatus::Confirmed).unwrap();
        assert_eq!(json, serde_json::json!("Confirmed"));
    }

    #[test]
    fn missing_status_defaults_to_new() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 1,
            "date": "2026-03-01",
            "time": "10:00",
            "name": "Ivan",
            "phone": "+7 900 000-00-00",
            "service": "Shave"
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[test]
    fn draft_requires_every_field() {
        let draft = OrderDraft {
            service: "Haircut".into(),
            date: "2026-03-01".into(),
            time: "10:00".into(),
            name: "Ivan".into(),
            phone: "  ".into(),
        };
        assert_eq!(draft.validate(), Err("phone"));
    }
}
