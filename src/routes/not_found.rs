use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;

use crate::templating::NotFoundTemplate;

pub async fn not_found() -> Result<HttpResponse, actix_web::Error> {
    let page = NotFoundTemplate
        .render()
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(page))
}
