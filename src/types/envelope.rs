use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::{DomainError, StoredAccount};
use crate::errors::{ErrorBody, ErrorResponse};

/// Payload of a [`ResponseEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Account(StoredAccount),
    Error(DomainError),
}

/// The single output of a signup: a status code and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl ResponseEnvelope {
    /// 200 carrying the stored account
    pub fn ok(account: StoredAccount) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Account(account),
        }
    }

    /// Envelope for a domain error, status taken from the error
    pub fn error(err: DomainError) -> Self {
        Self {
            status_code: err.status_code(),
            body: ResponseBody::Error(err),
        }
    }

    pub fn account(&self) -> Option<&StoredAccount> {
        match &self.body {
            ResponseBody::Account(account) => Some(account),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn error_value(&self) -> Option<&DomainError> {
        match &self.body {
            ResponseBody::Error(err) => Some(err),
            ResponseBody::Account(_) => None,
        }
    }
}

impl From<DomainError> for ResponseEnvelope {
    fn from(err: DomainError) -> Self {
        Self::error(err)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse {
            error: ErrorBody {
                code: err.code().to_string(),
                field: err.field().map(|f| f.as_str().to_string()),
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            ResponseBody::Account(account) => (status, Json(account)).into_response(),
            ResponseBody::Error(err) => (status, Json(ErrorResponse::from(&err))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, Field};

    fn account() -> StoredAccount {
        StoredAccount {
            id: AccountId::new("id1"),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "hashed_secret".to_string(),
        }
    }

    #[test]
    fn test_ok_envelope() {
        let envelope = ResponseEnvelope::ok(account());
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.account(), Some(&account()));
        assert!(envelope.error_value().is_none());
    }

    #[test]
    fn test_error_envelope_takes_status_from_error() {
        let envelope = ResponseEnvelope::from(DomainError::MissingField(Field::Name));
        assert_eq!(envelope.status_code, 400);
        assert!(envelope.account().is_none());

        let envelope = ResponseEnvelope::from(DomainError::ServerFailure);
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.error_value(), Some(&DomainError::ServerFailure));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::from(&DomainError::InvalidField(Field::Email));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"]["code"], "INVALID_PARAM");
        assert_eq!(json["error"]["field"], "email");
        assert_eq!(json["error"]["message"], "Invalid param: email");
    }

    #[test]
    fn test_server_failure_body_has_no_field() {
        let body = ErrorResponse::from(&DomainError::ServerFailure);
        let json = serde_json::to_value(&body).unwrap();

        assert!(json["error"].get("field").is_none());
    }

    #[test]
    fn test_into_response_uses_envelope_status() {
        let response = ResponseEnvelope::ok(account()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = ResponseEnvelope::from(DomainError::ServerFailure).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
