//! User-facing notification and login-redirect seams
//!
//! The presentation layer is out of scope here; these traits are the points
//! where a page context plugs its own toast surface and login navigation in.

/// Notice severity. Warnings come from local guards (validation, missing
/// selection) and get distinct styling from hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Sink for user-visible notices
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Default notifier: routes notices into the tracing stream
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!("{message}"),
            NoticeKind::Warning => tracing::warn!("{message}"),
            NoticeKind::Error => tracing::error!("{message}"),
        }
    }
}

/// External collaborator invoked whenever the server demands
/// re-authentication. The call replaces all other error surfacing.
pub trait LoginGate: Send + Sync {
    fn redirect_to_login(&self);
}
