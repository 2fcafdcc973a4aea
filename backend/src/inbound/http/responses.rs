//! Response builders shared by the page handlers.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};

/// Body sent when a signed-in user is required.
pub const SIGN_IN_REQUIRED: &str = "Please sign in first";

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// `200 OK` plain-text message.
pub fn plain_text(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message.into())
}

/// `200 OK` rendered page.
pub fn html(page: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(page)
}
