use error_chain::ChainedError;
use log::error;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde_json::json;

use crate::db;

pub const BAD_REQUEST: &str = "Bad request";

#[derive(Debug)]
pub enum ApiError {
    /// Malformed input: unparseable ids, bad vote deltas, unknown query values.
    BadRequest(String),
    /// A well-formed reference to a row that does not exist.
    NotFound(String),
    RouteNotFound,
    Internal(db::Error),
}

impl ApiError {
    pub fn bad_request<S: Into<String>>(msg: S) -> ApiError {
        ApiError::BadRequest(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> ApiError {
        ApiError::NotFound(msg.into())
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) | ApiError::RouteNotFound => Status::NotFound,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::RouteNotFound => "Path not found",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl From<db::Error> for ApiError {
    fn from(err: db::Error) -> ApiError {
        ApiError::Internal(err)
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let ApiError::Internal(ref e) = self {
            error!("{} {} failed: {}", req.method(), req.uri(), e.display_chain());
        }
        let body = Json(json!({ "msg": self.message() }));
        (self.status(), body).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = ApiError::from(db::Error::from("relation \"articles\" does not exist"));
        assert_eq!(err.status(), Status::InternalServerError);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn client_errors_carry_their_message() {
        let err = ApiError::not_found("No article found for article_id: 7");
        assert_eq!(err.status(), Status::NotFound);
        assert_eq!(err.message(), "No article found for article_id: 7");

        let err = ApiError::bad_request(BAD_REQUEST);
        assert_eq!(err.status(), Status::BadRequest);
        assert_eq!(err.message(), "Bad request");

        assert_eq!(ApiError::RouteNotFound.message(), "Path not found");
    }
}
