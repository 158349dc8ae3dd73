use actix_web::{HttpResponse, error::InternalError, web};
use serde::{Deserialize, Serialize};

use crate::services::DISCOUNT_NOT_FOUND;

pub mod discounts;

/// JSON body carried by every non-entity response, errors included.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON extractor settings that answer malformed bodies with a `{message}` object.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Path extractor settings: an id that does not parse names no discount.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(MessageResponse::new(DISCOUNT_NOT_FOUND));
        InternalError::from_response(err, response).into()
    })
}
