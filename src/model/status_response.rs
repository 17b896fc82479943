use serde::{Deserialize, Serialize};

/// Wire body of every JSON response from `/api/form`. Only the three fixed
/// status texts below ever cross the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn submitted() -> Self {
        Self {
            status: "submitted".into(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            status: "invalid submission".into(),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: "something went wrong".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StatusResponse;

    #[test]
    fn bodies_match_the_wire_format() {
        assert_eq!(
            serde_json::to_string(&StatusResponse::submitted()).unwrap(),
            r#"{"status":"submitted"}"#
        );
        assert_eq!(
            serde_json::to_string(&StatusResponse::invalid()).unwrap(),
            r#"{"status":"invalid submission"}"#
        );
        assert_eq!(
            serde_json::to_string(&StatusResponse::failed()).unwrap(),
            r#"{"status":"something went wrong"}"#
        );
    }
}
