use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;

use crate::content::{FAQ, PORTFOLIO};
use crate::templating::HomeTemplate;

pub async fn home() -> Result<HttpResponse, actix_web::Error> {
    let page = HomeTemplate {
        portfolio: &PORTFOLIO,
        faqs: &FAQ,
    }
    .render()
    .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
