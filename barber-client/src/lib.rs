//! Barber Client - synchronization layer for the booking API
//!
//! Fetch → filter → sort → render pipeline over the remote order and
//! review collections, plus mutation dispatch and background polling.
//! The presentation layer plugs in through the `ViewSink`/`Notifier`/
//! `LoginGate` seams.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod mutation;
pub mod notify;
pub mod pipeline;
pub mod poll;
pub mod stats;
pub mod view;

pub use api::{BookingApi, Resource, ReviewScope};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::RestClient;
pub use mutation::{Action, DispatchOutcome, MutationController};
pub use notify::{LoginGate, NoticeKind, Notifier, TracingNotifier};
pub use pipeline::{AdminPipeline, AdminSink, Pipeline, PublicPipeline, PublicSink};
pub use poll::{PollingScheduler, SchedulerHandle};

// Re-export shared types for convenience
pub use shared::{Approval, Order, OrderDraft, OrderStatus, Review, ReviewDraft};
