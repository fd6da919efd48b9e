//! Review Model

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum review text length, enforced client-side before submission.
pub const REVIEW_TEXT_LIMIT: usize = 500;

/// Review moderation status.
///
/// This is a tri-state, not a boolean: the wire encoding is JSON `true`
/// (approved), `false` (awaiting moderation) and `null` (rejected). The
/// mapping is total in both directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Approval {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl From<Option<bool>> for Approval {
    fn from(wire: Option<bool>) -> Self {
        match wire {
            Some(true) => Approval::Approved,
            Some(false) => Approval::Pending,
            None => Approval::Rejected,
        }
    }
}

impl From<Approval> for Option<bool> {
    fn from(approval: Approval) -> Self {
        match approval {
            Approval::Approved => Some(true),
            Approval::Pending => Some(false),
            Approval::Rejected => None,
        }
    }
}

/// Customer review entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    /// Service the review refers to, if the customer named one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub text: String,
    /// Star rating 1–5. Stored data may carry it as a number or a numeric
    /// string; both decode to the same rating.
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: u8,
    /// Submission instant (ISO timestamp)
    pub date: String,
    #[serde(default)]
    pub approved: Approval,
}

/// Create payload for a review. The server assigns id and date and forces
/// the initial pending state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub text: String,
}

impl ReviewDraft {
    /// Check required fields, rating range and the text length boundary.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name");
        }
        if !(1..=5).contains(&self.rating) {
            return Err("rating");
        }
        if self.text.trim().is_empty() || self.text.chars().count() > REVIEW_TEXT_LIMIT {
            return Err("text");
        }
        Ok(())
    }
}

/// Accept a rating as a JSON number or a numeric string.
fn lenient_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    struct RatingVisitor;

    impl serde::de::Visitor<'_> for RatingVisitor {
        type Value = u8;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a rating as an integer or a numeric string")
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u8, E> {
            u8::try_from(v).map_err(|_| E::custom(format!("rating {v} out of range")))
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u8, E> {
            u8::try_from(v).map_err(|_| E::custom(format!("rating {v} out of range")))
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u8, E> {
            v.trim()
                .parse::<u8>()
                .map_err(|_| E::custom(format!("rating {v:?} is not a number")))
        }
    }

    deserializer.deserialize_any(RatingVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_json(approved: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "name": "Oleg",
            "text": "Clean fade, quick hands.",
            "rating": 5,
            "date": "2026-02-10T12:30:00",
            "approved": approved
        })
    }

    #[test]
    fn approval_tri_state_is_total() {
        for (wire, expected) in [
            (serde_json::json!(true), Approval::Approved),
            (serde_json::json!(false), Approval::Pending),
            (serde_json::json!(null), Approval::Rejected),
        ] {
            let review: Review = serde_json::from_value(review_json(wire.clone())).unwrap();
            assert_eq!(review.approved, expected);
            // and back out unchanged
            let out = serde_json::to_value(&review).unwrap();
            assert_eq!(out["approved"], wire);
        }
    }

    #[test]
    fn rating_accepts_string_and_number() {
        for rating in [serde_json::json!(3), serde_json::json!("3")] {
            let mut value = review_json(serde_json::json!(true));
            value["rating"] = rating;
            let review: Review = serde_json::from_value(value).unwrap();
            assert_eq!(review.rating, 3);
        }
    }

    #[test]
    fn draft_rejects_overlong_text() {
        let draft = ReviewDraft {
            name: "Oleg".into(),
            rating: 4,
            service: None,
            text: "x".repeat(REVIEW_TEXT_LIMIT + 1),
        };
        assert_eq!(draft.validate(), Err("text"));

        let at_limit = ReviewDraft {
            text: "x".repeat(REVIEW_TEXT_LIMIT),
            ..draft
        };
        assert_eq!(at_limit.validate(), Ok(()));
    }

    #[test]
    fn draft_rejects_out_of_range_rating() {
        let draft = ReviewDraft {
            name: "Oleg".into(),
            rating: 0,
            service: None,
            text: "Fine.".into(),
        };
        assert_eq!(draft.validate(), Err("rating"));
    }
}
