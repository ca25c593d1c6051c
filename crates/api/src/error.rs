use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mylearn_core::error::CoreError;
use mylearn_db::repositories::ReportError;
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a small HTML error page.
///
/// Form mistakes are the user's fault and map to 400. Everything the store
/// or the server rejects maps to 500 and echoes the underlying error text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mylearn_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Writing an uploaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Database(e) => AppError::Database(e),
            ReportError::Core(e) => AppError::Core(e),
        }
    }
}

impl AppError {
    /// HTTP status, error code and message for this error.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Integrity(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTEGRITY_ERROR",
                    msg.clone(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Server-side failures ---
            AppError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "RENDER_ERROR",
                err.to_string(),
            ),
            AppError::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                err.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(error = %self, code, "Request rejected");
        }

        let body = format!(
            "<!doctype html>\n\
             <html lang=\"en\">\n\
             <head><meta charset=\"utf-8\"><title>{status}</title></head>\n\
             <body>\n\
             <h1>{status}</h1>\n\
             <p class=\"error-code\">{code}</p>\n\
             <p class=\"error-message\">{message}</p>\n\
             <p><a href=\"/\">Back to the portal</a></p>\n\
             </body>\n\
             </html>\n",
            message = handlebars::html_escape(&message),
        );

        (status, Html(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations map to 500 `CONFLICT`.
/// - Foreign key violations map to 500 `INTEGRITY_ERROR`.
/// - Everything else maps to 500 `DATABASE_ERROR`.
///
/// The store's own message is passed through in every case.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = match db_err.kind() {
                ErrorKind::UniqueViolation => "CONFLICT",
                ErrorKind::ForeignKeyViolation => "INTEGRITY_ERROR",
                _ => "DATABASE_ERROR",
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                format!("Error while saving: {}", db_err.message()),
            )
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            other.to_string(),
        ),
    }
}
