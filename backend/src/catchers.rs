use rocket::{Request, catch, http::Status, response::content::RawHtml};

use crate::page::render_error;

#[catch(404)]
pub fn not_found(_req: &Request) -> RawHtml<String> {
    RawHtml(render_error(404, "The requested resource was not found."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> RawHtml<String> {
    RawHtml(render_error(500, "An internal server error occurred."))
}

#[catch(default)]
pub fn fallback(status: Status, _req: &Request) -> RawHtml<String> {
    RawHtml(render_error(status.code, status.reason().unwrap_or("Unexpected error.")))
}
