use crate::core::contact::ContactValues;
use serde::Serialize;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    #[error("mail relay is not configured (set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY at build time)")]
    Unconfigured,
    #[error("failed to encode relay payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("relay transport error: {0}")]
    Transport(String),
    #[error("relay rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Identifiers for the third-party mail relay, baked in at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailRelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailRelayConfig {
    pub fn from_build_env() -> Result<Self, RelayError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .ok_or(RelayError::Unconfigured)
        };
        Ok(Self {
            service_id: non_empty(service_id)?,
            template_id: non_empty(template_id)?,
            public_key: non_empty(public_key)?,
        })
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub message: &'a str,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a MailRelayConfig, values: &'a ContactValues) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                user_name: values.name.trim(),
                user_email: values.email.trim(),
                message: values.message.trim(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, RelayError> {
        Ok(serde_json::to_string(self)?)
    }
}
