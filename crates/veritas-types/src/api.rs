use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
}

// -- Prediction --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub response: String,
}

// -- Errors --

/// Error body shape shared by every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_shape() {
        let body = serde_json::to_string(&AuthResponse { success: true }).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[test]
    fn predict_request_rejects_unknown_fields() {
        let result: Result<PredictRequest, _> =
            serde_json::from_str(r#"{"message": "hi", "extra": 1}"#);
        assert!(result.is_err());
    }
}
