use poem::http::StatusCode;
use poem_openapi::payload::Json;
use tracing::{error, info};

use business::domain::product::errors::ProductError;

use crate::api::error::{IntoProblemResponse, ProblemResponse};

impl IntoProblemResponse for ProductError {
    fn into_problem_response(self, instance: &str) -> (StatusCode, Json<ProblemResponse>) {
        let status = match &self {
            ProductError::CodeLength | ProductError::NameEmpty | ProductError::PriceNegative => {
                info!(target: "Catalog -- ", "Validation error: {}", self);
                StatusCode::BAD_REQUEST
            }
            ProductError::NotFound(_) => {
                info!(target: "Catalog -- ", "Not found: {}", self);
                StatusCode::NOT_FOUND
            }
            ProductError::Conflict => {
                info!(target: "Catalog -- ", "Data integrity violation: {}", self);
                StatusCode::BAD_REQUEST
            }
            ProductError::Currency(err) => {
                // upstream body is logged here and never surfaced to clients
                error!(target: "Catalog -- ", "Currency rate error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProductError::Repository(err) => {
                error!(target: "Catalog -- ", "Repository error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = self.to_string();
        (
            status,
            Json(ProblemResponse {
                status: status.as_u16(),
                detail,
                instance: instance.to_string(),
            }),
        )
    }
}
