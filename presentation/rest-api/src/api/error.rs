use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Problem-style error body: status code, human-readable detail, and the
/// request path the failure belongs to.
#[derive(Object, Debug)]
pub struct ProblemResponse {
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

pub trait IntoProblemResponse {
    fn into_problem_response(self, instance: &str) -> (StatusCode, Json<ProblemResponse>);
}
