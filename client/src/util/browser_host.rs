//! Browser implementation of the contact flow's host seam.
//!
//! `alert` maps to `window.alert` and `navigate` to `location.href`. Both are
//! browser-only; SSR and native test builds no-op. Failures are logged and
//! swallowed because acknowledgment is optimistic either way.

#[cfg(test)]
#[path = "browser_host_test.rs"]
mod browser_host_test;

use site::capture::MailHost;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl MailHost for BrowserHost {
    fn alert(&self, notice: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(notice) {
                    log::warn!("alert failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notice;
        }
    }

    fn navigate(&self, uri: &str) {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.location().set_href(uri) {
                        log::warn!("mail client handoff failed: {e:?}");
                    }
                }
                None => log::warn!("mail client handoff skipped: no window"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = uri;
        }
    }
}
