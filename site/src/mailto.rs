//! `mailto:` link construction for the contact handoff.
//!
//! Subject and body are encoded with the same rules as JavaScript's
//! `encodeURIComponent`: every UTF-8 byte is percent-encoded except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )`. Spaces become `%20`, never `+`.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::contact::ContactDraft;

/// Characters escaped inside a URI component.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a single URI component.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Plain-text subject line for a draft.
#[must_use]
pub fn subject_for(draft: &ContactDraft) -> String {
    format!("Contacto desde web - {}", draft.name)
}

/// Plain-text body for a draft: name and message on labeled lines.
#[must_use]
pub fn body_for(draft: &ContactDraft) -> String {
    format!("Nombre: {}\n\nMensaje:\n{}", draft.name, draft.message)
}

/// A fully encoded `mailto:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    uri: String,
}

impl MailtoLink {
    /// Build the link for `draft` addressed to `receiver`.
    ///
    /// The receiver is inserted verbatim; it comes from configuration and is
    /// expected to be a plain address.
    #[must_use]
    pub fn for_draft(receiver: &str, draft: &ContactDraft) -> Self {
        let subject = encode_component(&subject_for(draft));
        let body = encode_component(&body_for(draft));
        Self {
            uri: format!("mailto:{receiver}?subject={subject}&body={body}"),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}
