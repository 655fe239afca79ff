//! Wire-level structures of the osquery extension protocol.
//!
//! These mirror the shapes osquery uses on its extension channel: requests
//! and responses are string-to-string maps, and every call carries an
//! `ExtensionStatus` with code 0 meaning success. The transport that moves
//! them is the host's concern, not this crate's.

use std::collections::BTreeMap;

/// A plugin request: a map of string keys to string values, with at least
/// an `action` key selecting the operation.
pub type ExtensionPluginRequest = BTreeMap<String, String>;

/// A plugin response payload: an ordered sequence of string-to-string maps
/// (rows, or column routes for schema introspection).
pub type ExtensionPluginResponse = Vec<BTreeMap<String, String>>;

/// Outcome of a single extension call. Code 0 is success; any other code
/// is a failure with a diagnostic message. The default status is success.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtensionStatus {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub uuid: Option<i64>,
}

impl Default for ExtensionStatus {
    fn default() -> Self {
        ExtensionStatus::new(0, None, None)
    }
}

impl ExtensionStatus {
    pub fn new<C, M, U>(code: C, message: M, uuid: U) -> Self
    where
        C: Into<Option<i32>>,
        M: Into<Option<String>>,
        U: Into<Option<i64>>,
    {
        ExtensionStatus {
            code: code.into(),
            message: message.into(),
            uuid: uuid.into(),
        }
    }
}

/// Envelope for a plugin call result: a status plus an optional payload.
/// Failures carry no payload.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtensionResponse {
    pub status: Option<ExtensionStatus>,
    pub response: Option<ExtensionPluginResponse>,
}

impl ExtensionResponse {
    pub fn new<S, R>(status: S, response: R) -> Self
    where
        S: Into<Option<ExtensionStatus>>,
        R: Into<Option<ExtensionPluginResponse>>,
    {
        ExtensionResponse {
            status: status.into(),
            response: response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_new_accepts_plain_values() {
        let status = ExtensionStatus::new(0, None, None);
        assert_eq!(status.code, Some(0));
        assert_eq!(status.message, None);
        assert_eq!(status.uuid, None);
    }

    #[test]
    fn test_status_new_accepts_message() {
        let status = ExtensionStatus::new(1, "boom".to_string(), None);
        assert_eq!(status.code, Some(1));
        assert_eq!(status.message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_default_status_is_ok() {
        let status = ExtensionStatus::default();
        assert_eq!(status.code, Some(0));
        assert!(status.message.is_none());
    }

    #[test]
    fn test_response_new_wraps_in_some() {
        let resp = ExtensionResponse::new(ExtensionStatus::new(0, None, None), vec![]);
        assert!(resp.status.is_some());
        assert_eq!(resp.response, Some(vec![]));
    }

    #[test]
    fn test_response_without_payload() {
        let resp = ExtensionResponse::new(
            ExtensionStatus::new(1, "failed".to_string(), None),
            None::<ExtensionPluginResponse>,
        );
        assert!(resp.response.is_none());
    }
}
