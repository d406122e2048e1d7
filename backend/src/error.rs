use rocket::http::Status;
use rocket::response::{content::RawHtml, Responder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Carries the ballot page to show alongside the failure.
    #[error("Vote store unavailable")]
    StoreUnavailable(String),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let (status, html) = match self {
            ApiError::StoreUnavailable(page) => (Status::ServiceUnavailable, page),
        };

        rocket::Response::build_from(RawHtml(html).respond_to(req)?)
            .status(status)
            .ok()
    }
}
