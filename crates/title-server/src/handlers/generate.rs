use actix_web::{web, HttpRequest, HttpResponse};
use title_core::{normalize, NormalizeOptions, TitleParams, TitleRequest, TitlesResponse};

use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use crate::middleware::extract_trace_id;
use crate::state::AppState;

pub const SECRET_HEADER: &str = "x-api-secret";

/// `POST /generate-titles` (and the legacy `POST /api/generate`)
pub async fn handler(
    state: web::Data<AppState>,
    req: web::Json<TitleRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse> {
    let trace_id = extract_trace_id(&http_req).unwrap_or_default();
    let request = req.into_inner();
    let config = state.config.as_ref();

    let params = validate(&request, config)?;
    authorize(&http_req, &request, config)?;

    tracing::info!(
        trace_id = %trace_id,
        language = %params.language,
        count = params.count,
        "Generating titles"
    );

    let prompt = config.prompt.render(&params);
    let options = config.completion_options();

    // Dropping this future (client went away) aborts the outbound request.
    let raw = match tokio::time::timeout(
        config.request_timeout,
        state.llm.complete(&prompt, &options),
    )
    .await
    {
        Ok(Ok(raw)) => raw,
        Ok(Err(err)) => {
            tracing::error!(trace_id = %trace_id, error = %err, "Model request failed");
            return Err(AppError::Provider(err));
        }
        Err(_) => {
            tracing::error!(
                trace_id = %trace_id,
                timeout_secs = config.request_timeout.as_secs_f32(),
                "Model request timed out"
            );
            return Err(AppError::ProviderTimeout(config.request_timeout));
        }
    };

    let titles = normalize(
        &raw,
        NormalizeOptions::default()
            .with_min_len(config.min_title_len)
            .with_max_count(params.count as usize),
    );

    if titles.is_empty() {
        tracing::warn!(trace_id = %trace_id, "Model output contained no usable titles");
    } else {
        tracing::debug!(trace_id = %trace_id, titles = titles.len(), "Titles generated");
    }

    Ok(HttpResponse::Ok().json(TitlesResponse { titles }))
}

fn validate(request: &TitleRequest, config: &ServerConfig) -> Result<TitleParams> {
    let topic = request.topic().ok_or(AppError::MissingTopic)?;

    let count = match request.count {
        None => config.default_count,
        Some(0) => {
            return Err(AppError::InvalidField {
                field: "count",
                reason: "count must be a positive integer".to_string(),
            })
        }
        Some(count) if count > config.max_count => {
            return Err(AppError::InvalidField {
                field: "count",
                reason: format!("count must not exceed {}", config.max_count),
            })
        }
        Some(count) => count,
    };

    let language = request
        .language()
        .unwrap_or(config.default_language.as_str())
        .to_string();

    Ok(TitleParams {
        topic: topic.to_string(),
        language,
        count,
    })
}

fn authorize(http_req: &HttpRequest, request: &TitleRequest, config: &ServerConfig) -> Result<()> {
    let Some(expected) = config.shared_secret.as_deref() else {
        return Ok(());
    };

    let presented = http_req
        .headers()
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .or(request.secret.as_deref());

    match presented {
        Some(secret) if secret == expected => Ok(()),
        _ => {
            tracing::warn!("Rejected request with missing or invalid shared secret");
            Err(AppError::Unauthorized)
        }
    }
}
