use actix_web::{get, http::StatusCode, post, web, HttpRequest, HttpResponse, ResponseError};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::{
    app_state::AppState,
    constants::prompts::DOWNLOAD_FILE_NAME,
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::{
        domain::{GenerationResult, ProviderCredential},
        dto::{
            request::{DownloadForm, GenerateQuestionsForm, GenerateQuestionsRequestDto, VariantQuery},
            response::GenerationResponse,
        },
    },
    services::http_helpers::{html_page, text_attachment},
    views::page::{render_page, PageOutcome},
};

#[get("/")]
pub async fn index(state: web::Data<AppState>, query: web::Query<VariantQuery>) -> HttpResponse {
    let variant = query.variant.unwrap_or(state.config.label_variant);
    let form = GenerateQuestionsForm::default();

    html_page(
        StatusCode::OK,
        render_page(variant, &form, &PageOutcome::Empty),
    )
}

async fn generate_from_form(
    state: &AppState,
    form: &GenerateQuestionsForm,
) -> AppResult<GenerationResult> {
    let credential = form.credential()?;
    let request = form.to_generation_request()?;
    state.generation_service.generate(request, &credential).await
}

#[post("/generate")]
pub async fn generate_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<GenerateQuestionsForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let variant = form.variant.unwrap_or(state.config.label_variant);

    match generate_from_form(&state, &form).await {
        Ok(result) => html_page(
            StatusCode::OK,
            render_page(variant, &form, &PageOutcome::Generated(&result.text)),
        ),
        Err(err) => {
            log::warn!(
                "[{}] Form generation rejected ({}): {}",
                get_request_id(&req).unwrap_or_default(),
                err.error_code(),
                err
            );
            let message = err.to_string();
            html_page(
                err.status_code(),
                render_page(
                    variant,
                    &form,
                    &PageOutcome::Error {
                        message: &message,
                        hint: err.hint(),
                    },
                ),
            )
        }
    }
}

#[post("/download")]
pub async fn download(form: web::Form<DownloadForm>) -> HttpResponse {
    text_attachment(DOWNLOAD_FILE_NAME, form.into_inner().content)
}

#[post("/api/generate")]
pub async fn generate_api(
    state: web::Data<AppState>,
    auth: Option<BearerAuth>,
    request: web::Json<GenerateQuestionsRequestDto>,
) -> Result<HttpResponse, AppError> {
    let credential = ProviderCredential::new(auth.as_ref().map(|a| a.token()).unwrap_or_default())?;

    let result = state
        .generation_service
        .generate(request.into_inner().into(), &credential)
        .await?;

    Ok(HttpResponse::Ok().json(GenerationResponse::from(result)))
}
