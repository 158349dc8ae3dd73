use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::clients::product::HttpProductClient;
use crate::forms::discounts::{AddDiscountForm, ApplyDiscountForm, EditDiscountForm};
use crate::repository::DieselRepository;
use crate::routes::{MessageResponse, json_config, path_config};
use crate::services::ServiceError;
use crate::services::diagnostics::{DiagnosticEvent, DiagnosticSink, LogSink};
use crate::services::discounts::{
    DISCOUNT_DELETED, apply_discount_to_product, create_discount, list_discounts,
    modify_discount, remove_discount,
};

/// Registers the discount endpoints and their extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(show_discounts)
        .service(add_discount)
        .service(apply_discount)
        .service(edit_discount)
        .service(delete_discount);
}

fn failure(sink: &LogSink, operation: &'static str, err: ServiceError, message: &str) -> HttpResponse {
    sink.record(DiagnosticEvent::Failure {
        operation,
        detail: err.to_string(),
    });
    HttpResponse::InternalServerError().json(MessageResponse::new(message))
}

#[get("/discounts")]
pub async fn show_discounts(
    repo: web::Data<DieselRepository>,
    sink: web::Data<LogSink>,
) -> impl Responder {
    match list_discounts(repo.get_ref()) {
        Ok(discounts) => HttpResponse::Ok().json(discounts),
        Err(err) => failure(&sink, "list discounts", err, "Error al listar descuentos"),
    }
}

#[post("/discounts")]
pub async fn add_discount(
    repo: web::Data<DieselRepository>,
    sink: web::Data<LogSink>,
    form: web::Json<AddDiscountForm>,
) -> impl Responder {
    match create_discount(repo.get_ref(), form.into_inner()) {
        Ok(discount) => HttpResponse::Created().json(discount),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(err) => failure(&sink, "create discount", err, "Error al crear descuento"),
    }
}

#[post("/discounts/apply")]
pub async fn apply_discount(
    repo: web::Data<DieselRepository>,
    client: web::Data<HttpProductClient>,
    sink: web::Data<LogSink>,
    form: web::Json<ApplyDiscountForm>,
) -> impl Responder {
    match apply_discount_to_product(
        repo.get_ref(),
        client.get_ref(),
        sink.get_ref(),
        form.into_inner(),
    )
    .await
    {
        Ok(applied) => HttpResponse::Ok().json(applied),
        Err(ServiceError::NotFound(message)) => {
            HttpResponse::NotFound().json(MessageResponse::new(message))
        }
        Err(err) => failure(&sink, "apply discount", err, "Error al aplicar descuento"),
    }
}

#[route("/discounts/{discount_id}", method = "PUT", method = "PATCH")]
pub async fn edit_discount(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    sink: web::Data<LogSink>,
    form: web::Json<EditDiscountForm>,
) -> impl Responder {
    let discount_id = path.into_inner();

    match modify_discount(repo.get_ref(), discount_id, form.into_inner()) {
        Ok(discount) => HttpResponse::Ok().json(discount),
        Err(ServiceError::NotFound(message)) => {
            HttpResponse::NotFound().json(MessageResponse::new(message))
        }
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(err) => failure(
            &sink,
            "update discount",
            err,
            "Error al actualizar descuento",
        ),
    }
}

#[delete("/discounts/{discount_id}")]
pub async fn delete_discount(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    sink: web::Data<LogSink>,
) -> impl Responder {
    let discount_id = path.into_inner();

    match remove_discount(repo.get_ref(), discount_id) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(DISCOUNT_DELETED)),
        Err(ServiceError::NotFound(message)) => {
            HttpResponse::NotFound().json(MessageResponse::new(message))
        }
        Err(err) => failure(&sink, "delete discount", err, "Error al eliminar descuento"),
    }
}
