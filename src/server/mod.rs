//! HTTP surface for the screening pipeline.
//!
//! Three routes, mirroring the original front-end:
//!
//! - `GET  /` renders the entry form,
//! - `POST /` runs the pipeline and re-renders the page with the outcome,
//! - `POST /predict` runs the pipeline and renders the page with the outcome
//!   and the raw integer label.
//!
//! The loaded model is injected as shared `web::Data` state; it is read-only
//! for the process lifetime, so concurrent requests need no locking.
//! Validation failures map to 400 with the offending field named; anything
//! unexpected maps to 500 with a generic message.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, ResponseError};
use tracing::{error, info};

use crate::handler::{self, PredictError};
use crate::model::ScreeningModel;

pub mod pages;

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::MissingFeature(_) | PredictError::InvalidNumericValue { .. } => {
                StatusCode::BAD_REQUEST
            }
            PredictError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The Display impl for Internal is already generic; the detail goes
        // to the server log only.
        if let PredictError::Internal(detail) = self {
            error!(%detail, "prediction failed");
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
async fn index() -> HttpResponse {
    html(pages::form_page())
}

#[post("/")]
async fn submit(
    model: web::Data<ScreeningModel>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, PredictError> {
    let prediction = handler::predict(model.get_ref(), &form)?;
    info!(label = prediction.label, "prediction served");
    Ok(html(pages::outcome_page(prediction.outcome)))
}

#[post("/predict")]
async fn predict(
    model: web::Data<ScreeningModel>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, PredictError> {
    let prediction = handler::predict(model.get_ref(), &form)?;
    info!(label = prediction.label, "prediction served");
    Ok(html(pages::prediction_page(prediction)))
}

/// Register all routes. Shared between the binary and endpoint tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(submit).service(predict);
}

/// Serve the screening front-end until the process is stopped.
pub async fn run(model: ScreeningModel, bind: &str) -> std::io::Result<()> {
    let model = web::Data::new(model);
    HttpServer::new(move || App::new().app_data(model.clone()).configure(routes))
        .bind(bind)?
        .run()
        .await
}
