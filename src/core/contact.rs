//! Contact form submission
//!
//! Validates the visitor's message and posts it to a third-party form relay.
//! The relay is reached through the [`FormRelay`] trait so the submission
//! flow can run against a mock in tests and against `fetch` in the browser.

use serde::Serialize;

/// Default relay endpoint for contact submissions
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xdkokpvy";

/// Shown when the relay rejects a submission or cannot be reached
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Your message could not be sent. Please try again or reach out by email.";

/// Contact relay settings, provided to the component tree by `App`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

/// Contact form errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Relay rejected the submission (HTTP {status})")]
    Rejected { status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}

/// One contact form submission, serialized as the relay's JSON body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot; bots fill it, the relay drops those submissions
    #[serde(rename = "_gotcha")]
    pub gotcha: String,
}

impl FormSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            gotcha: String::new(),
        }
    }

    /// Client-side field constraints; the honeypot is left to the relay
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("Email"));
        }
        validate_email(self.email.trim())?;
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("Message"));
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), ContactError> {
    let (local, domain) = email.split_once('@').ok_or(ContactError::InvalidEmail)?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ContactError::InvalidEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ContactError::InvalidEmail);
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(ContactError::InvalidEmail),
    }
}

/// Outbound transport for contact submissions
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// POST the submission to `endpoint` and return the HTTP status code
    async fn post(&self, endpoint: &str, submission: &FormSubmission) -> Result<u16, ContactError>;
}

/// Browser relay using `fetch` through gloo-net
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchRelay;

impl FormRelay for FetchRelay {
    async fn post(&self, endpoint: &str, submission: &FormSubmission) -> Result<u16, ContactError> {
        let response = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .map_err(|e| ContactError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        Ok(response.status())
    }
}

/// Validate and send one submission; any 2xx status counts as success
pub async fn submit_contact<R: FormRelay>(
    relay: &R,
    config: &ContactConfig,
    submission: &FormSubmission,
) -> Result<(), ContactError> {
    submission.validate()?;

    let status = relay.post(&config.endpoint, submission).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Rejected { status })
    }
}

/// Lifecycle of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Submitted,
    Failed(String),
}

impl SubmissionStatus {
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => SubmissionStatus::Submitted,
            Err(err @ (ContactError::MissingField(_) | ContactError::InvalidEmail)) => {
                SubmissionStatus::Failed(err.to_string())
            }
            Err(_) => SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Field values plus submission status of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: FormSubmission,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn new(fields: FormSubmission) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    /// The form is replaced by the thank-you message once this is true
    pub fn submitted(&self) -> bool {
        self.status.is_submitted()
    }

    /// Submit the current fields; they are kept as-is when sending fails
    pub async fn submit<R: FormRelay>(
        &mut self,
        relay: &R,
        config: &ContactConfig,
    ) -> Result<(), ContactError> {
        self.status = SubmissionStatus::Sending;
        let result = submit_contact(relay, config, &self.fields).await;
        self.status = SubmissionStatus::from_result(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Relay double that records requests and answers with a fixed outcome
    struct MockRelay {
        outcome: Result<u16, ContactError>,
        requests: Mutex<Vec<(String, FormSubmission)>>,
    }

    impl MockRelay {
        fn status(status: u16) -> Self {
            Self {
                outcome: Ok(status),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                outcome: Err(ContactError::Network("connection refused".to_string())),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl FormRelay for MockRelay {
        async fn post(
            &self,
            endpoint: &str,
            submission: &FormSubmission,
        ) -> Result<u16, ContactError> {
            self.requests
                .lock()
                .unwrap()
                .push((endpoint.to_string(), submission.clone()));
            self.outcome.clone()
        }
    }

    fn jane() -> FormSubmission {
        FormSubmission::new("Jane", "jane@x.com", "hi")
    }

    #[tokio::test]
    async fn test_submit_success_marks_submitted() {
        let relay = MockRelay::status(200);
        let mut form = ContactForm::new(jane());

        let result = form.submit(&relay, &ContactConfig::default()).await;

        assert!(result.is_ok());
        assert!(form.submitted());
        assert_eq!(relay.request_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_server_error_keeps_form() {
        let relay = MockRelay::status(500);
        let mut form = ContactForm::new(jane());

        let result = form.submit(&relay, &ContactConfig::default()).await;

        assert_eq!(result, Err(ContactError::Rejected { status: 500 }));
        assert!(!form.submitted());
        assert_eq!(form.fields, jane());
        assert_eq!(form.status.error(), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_network_error_keeps_form() {
        let relay = MockRelay::unreachable();
        let mut form = ContactForm::new(jane());

        let result = form.submit(&relay, &ContactConfig::default()).await;

        assert!(matches!(result, Err(ContactError::Network(_))));
        assert!(!form.submitted());
        assert_eq!(form.fields, jane());
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let relay = MockRelay::status(204);
        let mut form = ContactForm::new(jane());

        assert!(form.submit(&relay, &ContactConfig::default()).await.is_ok());
        assert!(form.submitted());
    }

    #[tokio::test]
    async fn test_redirect_status_is_failure() {
        let relay = MockRelay::status(302);

        let result = submit_contact(&relay, &ContactConfig::default(), &jane()).await;

        assert_eq!(result, Err(ContactError::Rejected { status: 302 }));
    }

    #[tokio::test]
    async fn test_invalid_submission_not_sent() {
        let relay = MockRelay::status(200);
        let mut form = ContactForm::new(FormSubmission::new("Jane", "", "hi"));

        let result = form.submit(&relay, &ContactConfig::default()).await;

        assert_eq!(result, Err(ContactError::MissingField("Email")));
        assert_eq!(relay.request_count(), 0);
        assert_eq!(form.status.error(), Some("Email is required"));
    }

    #[tokio::test]
    async fn test_posts_to_configured_endpoint() {
        let relay = MockRelay::status(200);
        let config = ContactConfig {
            endpoint: "https://relay.test/f/abc".to_string(),
        };

        submit_contact(&relay, &config, &jane()).await.unwrap();

        let requests = relay.requests.lock().unwrap();
        assert_eq!(requests[0].0, "https://relay.test/f/abc");
        assert_eq!(requests[0].1, jane());
    }

    #[tokio::test]
    async fn test_honeypot_not_checked_locally() {
        let relay = MockRelay::status(200);
        let mut submission = jane();
        submission.gotcha = "http://spam.example".to_string();

        let result = submit_contact(&relay, &ContactConfig::default(), &submission).await;

        assert!(result.is_ok());
        assert_eq!(relay.request_count(), 1);
    }

    #[test]
    fn test_json_body_keys() {
        let value = serde_json::to_value(jane()).unwrap();

        assert_eq!(value["name"], "Jane");
        assert_eq!(value["email"], "jane@x.com");
        assert_eq!(value["message"], "hi");
        assert_eq!(value["_gotcha"], "");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_validate_required_fields() {
        assert_eq!(
            FormSubmission::new("  ", "jane@x.com", "hi").validate(),
            Err(ContactError::MissingField("Name"))
        );
        assert_eq!(
            FormSubmission::new("Jane", "jane@x.com", "\n").validate(),
            Err(ContactError::MissingField("Message"))
        );
        assert!(jane().validate().is_ok());
    }

    #[test]
    fn test_validate_email_shape() {
        for bad in ["jane", "jane@", "@x.com", "jane@x", "jane@@x.com", "ja ne@x.com", "jane@.com"] {
            assert_eq!(
                FormSubmission::new("Jane", bad, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
        assert!(FormSubmission::new("Jane", "jane.doe@mail.example.org", "hi")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_status_from_result() {
        assert_eq!(SubmissionStatus::from_result(&Ok(())), SubmissionStatus::Submitted);
        assert_eq!(
            SubmissionStatus::from_result(&Err(ContactError::InvalidEmail)),
            SubmissionStatus::Failed("Invalid email format".to_string())
        );
        assert_eq!(
            SubmissionStatus::from_result(&Err(ContactError::Rejected { status: 422 })),
            SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string())
        );
        assert!(SubmissionStatus::Sending.is_sending());
        assert_eq!(SubmissionStatus::Idle.error(), None);
    }
}
