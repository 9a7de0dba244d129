//! Contact-intent capture: draft state, acknowledgment, and mail-client handoff.
//!
//! ARCHITECTURE
//! ============
//! [`ContactCapture`] is the pure state (draft + `acknowledged` flag), held
//! behind a [`CaptureStore`] by whoever renders it.
//! [`ContactFlow`] sequences a submission against two seams:
//!
//! - [`MailHost`]: the blocking notice and URI navigation of the host page.
//! - [`ResetScheduler`]: the delayed reset of the acknowledgment flag.
//!
//! Ordering on success is fixed: the flag is set and the store released, then
//! navigation happens, then the reset is scheduled. A failed validation
//! touches neither seam except the notice.
//!
//! TRADE-OFFS
//! ==========
//! Acknowledgment is optimistic. The host cannot tell whether a mail client
//! opened or whether anything was sent, so a valid draft always reports success.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use std::cell::RefCell;
use std::time::Duration;

use crate::config::{ResetPolicy, SiteConfig};
use crate::contact::{ContactDraft, ContactField, ValidationError};
use crate::mailto::MailtoLink;

// =============================================================================
// STATE
// =============================================================================

/// Contact form state for one page visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactCapture {
    draft: ContactDraft,
    acknowledged: bool,
}

impl ContactCapture {
    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Whether the "message sent" indicator is showing.
    #[must_use]
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Replace one field of the draft.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and, if valid, mark it acknowledged and return its link.
    ///
    /// The draft is kept so the visitor can resubmit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a field is blank; state is unchanged.
    pub fn submit(&mut self, receiver: &str) -> Result<MailtoLink, ValidationError> {
        self.draft.validate()?;
        let link = MailtoLink::for_draft(receiver, &self.draft);
        self.acknowledged = true;
        Ok(link)
    }

    /// Hide the acknowledgment. Idempotent.
    pub fn clear_acknowledgment(&mut self) {
        self.acknowledged = false;
    }
}

/// Shared, mutable home of the live [`ContactCapture`].
pub trait CaptureStore {
    /// Run `f` against the capture. `None` when the state is gone or busy.
    fn update_capture<R>(&self, f: impl FnOnce(&mut ContactCapture) -> R) -> Option<R>;
}

impl CaptureStore for RefCell<ContactCapture> {
    fn update_capture<R>(&self, f: impl FnOnce(&mut ContactCapture) -> R) -> Option<R> {
        match self.try_borrow_mut() {
            Ok(mut capture) => Some(f(&mut capture)),
            Err(_) => None,
        }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Host page facilities used by a submission.
pub trait MailHost {
    /// Show a blocking notice to the visitor.
    fn alert(&self, notice: &str);

    /// Hand a URI to the host's navigation. Failures stay inside the host.
    fn navigate(&self, uri: &str);
}

/// Handle to a scheduled acknowledgment reset.
pub trait ScheduledTask {
    /// Prevent the reset from running if it has not run yet.
    fn cancel(self);

    /// Let the reset run regardless of what happens to the owner.
    fn detach(self);

    /// Whether the reset is still waiting to run.
    fn is_pending(&self) -> bool;
}

/// Runs a callback once after a delay.
pub trait ResetScheduler {
    type Task: ScheduledTask;

    fn schedule<F>(&self, delay: Duration, reset: F) -> Self::Task
    where
        F: FnOnce() + 'static;
}

// =============================================================================
// FLOW
// =============================================================================

/// Submission sequencing for the contact form.
pub struct ContactFlow<H, S> {
    host: H,
    scheduler: S,
    receiver: String,
    acknowledgment: Duration,
}

impl<H, S> ContactFlow<H, S>
where
    H: MailHost,
    S: ResetScheduler,
{
    #[must_use]
    pub fn new(config: &SiteConfig, host: H, scheduler: S) -> Self {
        Self {
            host,
            scheduler,
            receiver: config.receiver.clone(),
            acknowledgment: config.acknowledgment_duration(),
        }
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Submit the draft held in `store`.
    ///
    /// On success the capture is acknowledged and released, the host
    /// navigates to the `mailto:` link, and `reset` is scheduled after the
    /// acknowledgment duration. `reset` is expected to call
    /// [`ContactCapture::clear_acknowledgment`] on the live state.
    ///
    /// Returns `None` without side effects when the store yields no capture.
    /// A validation failure is returned as `Some(Err(..))` after the notice
    /// has been shown; nothing else happens.
    pub fn submit<C, F>(&self, store: &C, reset: F) -> Option<Result<S::Task, ValidationError>>
    where
        C: CaptureStore + ?Sized,
        F: FnOnce() + 'static,
    {
        let link = match store.update_capture(|c| c.submit(&self.receiver))? {
            Ok(link) => link,
            Err(err) => {
                self.host.alert(&err.to_string());
                return Some(Err(err));
            }
        };
        self.host.navigate(link.as_str());
        Some(Ok(self.scheduler.schedule(self.acknowledgment, reset)))
    }
}

// =============================================================================
// PENDING RESETS
// =============================================================================

/// Tracks outstanding reset tasks according to a [`ResetPolicy`].
///
/// Under `Detach` tasks are released as soon as they are tracked. Under
/// `CancelOnDrop` they are held and cancelled by [`Self::cancel_all`] or drop;
/// tasks that already ran are dropped the next time one is tracked.
pub struct PendingResets<T: ScheduledTask> {
    policy: ResetPolicy,
    tasks: Vec<T>,
}

impl<T: ScheduledTask> PendingResets<T> {
    #[must_use]
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            policy,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }

    /// Number of tasks currently held for cancellation.
    #[must_use]
    pub fn held(&self) -> usize {
        self.tasks.len()
    }

    pub fn track(&mut self, task: T) {
        match self.policy {
            ResetPolicy::Detach => task.detach(),
            ResetPolicy::CancelOnDrop => {
                self.tasks.retain(T::is_pending);
                self.tasks.push(task);
            }
        }
    }

    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }
}

impl<T: ScheduledTask> Drop for PendingResets<T> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
