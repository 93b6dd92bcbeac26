use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::forwarder::FormForwarder;
use crate::routes::contact::{contact_form, submit_contact};
use crate::routes::health_check::health_check;
use crate::routes::home::home;
use crate::routes::not_found::not_found;

pub fn run(listener: TcpListener, forwarder: FormForwarder) -> Result<Server, std::io::Error> {
    let forwarder = web::Data::new(forwarder);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact))
            .service(Files::new("/static", "./static"))
            .default_service(web::route().to(not_found))
            .app_data(forwarder.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
