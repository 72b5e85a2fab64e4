use crate::config::Config;
use crate::crm_client::CrmClient;
use crate::errors::AppError;
use crate::models::{CrmRecord, LeadSubmission, NotificationMessage, ParsedName};
use crate::notifier::TelegramNotifier;
use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the CRM web-to-lead endpoint.
    pub crm: CrmClient,
    /// Best-effort Telegram notifier.
    pub notifier: TelegramNotifier,
}

/// Builds the application router with the full middleware stack.
pub fn router(state: Arc<AppState>) -> Router {
    let form_routes = Router::new().route("/submit", post(submit_lead)).layer(
        ServiceBuilder::new()
            // Form payloads are tiny; anything larger is not a lead
            .layer(RequestBodyLimitLayer::new(32 * 1024)),
    );

    Router::new()
        .route("/", get(index))
        .merge(form_routes)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// GET /
///
/// Sends the visitor to the static form page.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// POST /submit
///
/// Accepts the lead-capture form and answers with a 303 redirect either
/// way. The CRM forward happens inline; the Telegram notification runs on
/// a background task once the redirect is decided.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `submission` - The form-encoded submission body.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<LeadSubmission>,
) -> Redirect {
    match process_submission(&state, &submission).await {
        Ok(message) => {
            // The redirect is decided before the notification task starts;
            // a slow or failing Telegram API cannot hold up the submitter.
            let response = Redirect::to(&state.config.success_redirect_url);

            let notifier = state.notifier.clone();
            let text = message.render();
            tokio::spawn(async move {
                notifier.notify(&text).await;
            });

            response
        }
        Err(e) => {
            match &e {
                AppError::CrmUnreachable(_) | AppError::ClientInit(_) => {
                    tracing::error!("Lead submission failed: {}", e)
                }
                _ => tracing::warn!("Lead submission rejected: {}", e),
            }

            let target = format!(
                "{}?code={}",
                state.config.error_redirect_url,
                e.redirect_code()
            );
            Redirect::to(&target)
        }
    }
}

/// Runs the submission flow up to the point where the notification content
/// is ready to send. Split from the handler so the flow can be exercised
/// without an HTTP server.
///
/// A completed CRM exchange with a 4xx/5xx status is a soft failure: it is
/// logged and the lead still counts as submitted, since the notification is
/// the operators' fallback channel for exactly that case.
pub async fn process_submission(
    state: &AppState,
    submission: &LeadSubmission,
) -> Result<NotificationMessage, AppError> {
    // 1. Validation (no outbound traffic before this passes)
    if !submission.has_required_fields() {
        return Err(AppError::MissingFields);
    }

    let full_name = submission.full_name.as_deref().unwrap_or_default();
    let mobile = submission.mobile.as_deref().unwrap_or_default();

    // 2. Name split
    let name = ParsedName::derive(full_name).ok_or(AppError::InvalidName)?;

    // 3. Forward to CRM (synchronous; gates the redirect)
    let record = CrmRecord::build(&state.config.crm_org_id, &name, mobile, submission);
    let outcome = state.crm.forward(&record).await?;

    if outcome.status.as_u16() >= 400 {
        tracing::warn!("CRM rejected lead with {}: {}", outcome.status, outcome.body);
    }

    // 4. Notification content; the caller schedules delivery after the
    //    response is decided
    Ok(NotificationMessage::from_submission(submission))
}
