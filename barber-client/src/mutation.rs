//! Mutation dispatch
//!
//! User intents arrive as explicit command objects and run through a single
//! state machine: Idle → Requesting → {Success, AuthRequired, Failed}.
//! Local guards (missing selection, failed validation, unconfirmed
//! destructive action) block the call before any network I/O happens.

use std::sync::Arc;

use shared::{Approval, OrderDraft, OrderStatus, ReviewDraft};

use crate::api::{BookingApi, Resource};
use crate::error::{ClientError, ClientResult};
use crate::notify::{LoginGate, NoticeKind, Notifier};

/// One user-originated mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Change an order's status. `status: None` means the caller never
    /// selected a value; the dispatch is blocked locally.
    UpdateOrderStatus { id: i64, status: Option<OrderStatus> },
    /// Delete an order. `confirmed` carries the destructive-action guard.
    DeleteOrder { id: i64, confirmed: bool },
    /// Delete a review. `confirmed` carries the destructive-action guard.
    DeleteReview { id: i64, confirmed: bool },
    ApproveReview { id: i64 },
    RejectReview { id: i64 },
    CreateOrder(OrderDraft),
    CreateReview(ReviewDraft),
}

/// Terminal state of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The mutation landed; the named collection must be re-fetched
    Completed { refresh: Resource },
    /// The server demanded re-authentication; the login gate was invoked
    /// and no other surfacing happened
    RedirectedToLogin,
    /// The request was made and failed; a generic notice was surfaced
    Failed,
    /// A local guard stopped the dispatch before any network call
    Blocked,
}

/// Executes [`Action`]s against the API and reports what to refresh.
pub struct MutationController<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    login: Arc<dyn LoginGate>,
}

impl<A: BookingApi> MutationController<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, login: Arc<dyn LoginGate>) -> Self {
        Self {
            api,
            notifier,
            login,
        }
    }

    pub async fn dispatch(&self, action: Action) -> DispatchOutcome {
        match action {
            Action::UpdateOrderStatus { id, status } => {
                let Some(status) = status else {
                    return self.block(ClientError::NoSelection, "Select a status first");
                };
                self.finish(
                    self.api.update_order_status(id, status).await,
                    &format!("Order #{id} status changed to \"{status}\""),
                    "Failed to update the order status",
                    Resource::Orders,
                )
            }
            Action::DeleteOrder { id, confirmed } => {
                if !confirmed {
                    tracing::debug!(id, "order delete not confirmed, dropping");
                    return DispatchOutcome::Blocked;
                }
                self.finish(
                    self.api.delete_order(id).await,
                    &format!("Order #{id} deleted"),
                    "Failed to delete the order",
                    Resource::Orders,
                )
            }
            Action::DeleteReview { id, confirmed } => {
                if !confirmed {
                    tracing::debug!(id, "review delete not confirmed, dropping");
                    return DispatchOutcome::Blocked;
                }
                self.finish(
                    self.api.delete_review(id).await,
                    &format!("Review #{id} deleted"),
                    "Failed to delete the review",
                    Resource::Reviews,
                )
            }
            Action::ApproveReview { id } => self.finish(
                self.api.set_review_approval(id, Approval::Approved).await,
                &format!("Review #{id} approved"),
                "Failed to approve the review",
                Resource::Reviews,
            ),
            Action::RejectReview { id } => self.finish(
                self.api.set_review_approval(id, Approval::Rejected).await,
                &format!("Review #{id} rejected"),
                "Failed to reject the review",
                Resource::Reviews,
            ),
            Action::CreateOrder(draft) => {
                if let Err(field) = draft.validate() {
                    return self.block(
                        ClientError::Validation { field },
                        &format!("Check the \"{field}\" field"),
                    );
                }
                self.finish(
                    self.api.create_order(&draft).await,
                    "Booking sent! We will call you to confirm.",
                    "Could not send the booking. Try again later.",
                    Resource::Orders,
                )
            }
            Action::CreateReview(draft) => {
                if let Err(field) = draft.validate() {
                    return self.block(
                        ClientError::Validation { field },
                        &format!("Check the \"{field}\" field"),
                    );
                }
                self.finish(
                    self.api.create_review(&draft).await,
                    "Thanks for your review! It will appear after moderation.",
                    "Could not send the review. Try again later.",
                    Resource::Reviews,
                )
            }
        }
    }

    /// Local guard tripped: warn and stop before any network call.
    fn block(&self, guard: ClientError, message: &str) -> DispatchOutcome {
        tracing::debug!(error = %guard, "mutation blocked locally");
        self.notifier.notify(NoticeKind::Warning, message);
        DispatchOutcome::Blocked
    }

    /// Map a finished request onto the outcome, the notices and the
    /// auth short-circuit.
    fn finish(
        &self,
        result: ClientResult<()>,
        success_message: &str,
        failure_message: &str,
        refresh: Resource,
    ) -> DispatchOutcome {
        match result {
            Ok(()) => {
                self.notifier.notify(NoticeKind::Success, success_message);
                DispatchOutcome::Completed { refresh }
            }
            Err(ClientError::AuthRequired) => {
                self.login.redirect_to_login();
                DispatchOutcome::RedirectedToLogin
            }
            Err(err) => {
                tracing::error!(resource = refresh.name(), error = %err, "mutation failed");
                self.notifier.notify(NoticeKind::Error, failure_message);
                DispatchOutcome::Failed
            }
        }
    }
}
