//! Blocking HTTP clients for the external services.
//!
//! Each client is constructed once in `main` from [`AppConfig`] and handed to
//! the app. Calls are one-shot: no retries, no background threads.
//!
//! [`AppConfig`]: crate::config::AppConfig

pub mod genai;
pub mod nasa;

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{service} returned HTTP {code}: {body}")]
    Status {
        service: &'static str,
        code: u16,
        body: String,
    },
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },
    #[error("{service} sent an unreadable response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{service} response is missing `{field}`")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
}

/// Build a `ureq` agent with the same timeout on every phase.
pub(crate) fn build_agent(timeout_secs: u64) -> ureq::Agent {
    let timeout = Duration::from_secs(timeout_secs);
    ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .timeout_write(timeout)
        .build()
}

pub(crate) fn call_error(service: &'static str, err: ureq::Error) -> ServiceError {
    match err {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            ServiceError::Status {
                service,
                code,
                body: truncate(&body, 300),
            }
        }
        ureq::Error::Transport(t) => ServiceError::Transport {
            service,
            message: t.to_string(),
        },
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé…");
    }

    #[test]
    fn error_messages_name_the_service() {
        let err = ServiceError::MissingField {
            service: "image generation",
            field: "data[0].url",
        };
        assert_eq!(
            err.to_string(),
            "image generation response is missing `data[0].url`"
        );
    }
}
