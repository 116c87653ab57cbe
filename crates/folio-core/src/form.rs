//! Contact form submission state.
//!
//! The DOM layer collects fields, asks [`ContactForm::begin`] for the request
//! to send, performs the POST and feeds the result to [`ContactForm::finish`].
//! Exactly one of the loading, error and sent indicators is visible while a
//! submission is in flight or has completed.

use thiserror::Error;
use url::form_urlencoded;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
const DEFAULT_ACTION: &str = "/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("a submission is already in flight")]
    InFlight,
}

/// The request couldn't reach the server at all.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("network error: {0}")]
pub struct NetworkError(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest {
    pub action: String,
    pub method: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResponse {
    pub status: u16,
    pub status_text: String,
    /// Response body, `None` when it could not be read.
    pub body: Option<String>,
}

impl FormResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Sent,
}

/// Which indicator elements should carry the visible class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indicators {
    pub loading: bool,
    pub error: bool,
    pub sent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub status: FormStatus,
    /// Clear every field in the form.
    pub reset_fields: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    status: FormStatus,
}

/// URL-encode string fields as `key=value&...`.
pub fn encode_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in fields {
        ser.append_pair(k.as_ref(), v.as_ref());
    }
    ser.finish()
}

/// Message shown for a non-2xx response.
pub fn failure_message(response: &FormResponse) -> String {
    let body = response.body.as_deref().map(str::trim).unwrap_or_default();
    if body.is_empty() {
        format!(
            "Form submission failed: {} {}",
            response.status, response.status_text
        )
    } else {
        body.to_string()
    }
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.status == FormStatus::Loading
    }

    /// The submit control is disabled while a request is pending.
    #[inline]
    pub fn submit_enabled(&self) -> bool {
        !self.in_flight()
    }

    pub fn indicators(&self) -> Indicators {
        match self.status {
            FormStatus::Idle => Indicators::default(),
            FormStatus::Loading => Indicators {
                loading: true,
                ..Indicators::default()
            },
            FormStatus::Failed(_) => Indicators {
                error: true,
                ..Indicators::default()
            },
            FormStatus::Sent => Indicators {
                sent: true,
                ..Indicators::default()
            },
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Start a submission to `action` (the form's `action` attribute).
    pub fn begin<K, V>(
        &mut self,
        action: Option<&str>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<FormRequest, FormError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.in_flight() {
            return Err(FormError::InFlight);
        }
        let action = action
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_ACTION)
            .to_string();
        self.status = FormStatus::Loading;
        Ok(FormRequest {
            action,
            method: "POST",
            content_type: FORM_CONTENT_TYPE,
            body: encode_fields(fields),
        })
    }

    /// Complete the in-flight submission.
    pub fn finish(&mut self, result: Result<FormResponse, NetworkError>) -> FormOutcome {
        let (status, reset_fields) = match result {
            Err(e) => {
                log::warn!("[form] {e}");
                (FormStatus::Failed(NETWORK_ERROR_MESSAGE.to_string()), false)
            }
            Ok(resp) if resp.is_success() => (FormStatus::Sent, true),
            Ok(resp) => {
                log::warn!("[form] rejected with status {}", resp.status);
                (FormStatus::Failed(failure_message(&resp)), false)
            }
        };
        self.status = status.clone();
        FormOutcome {
            status,
            reset_fields,
        }
    }
}
