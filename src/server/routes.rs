use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{Method, StatusCode},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    foundation::error::BlueboardError,
    generate::{
        classify::GenerationParameters,
        pipeline::submit_prompt,
    },
    scene::{
        list::Scene,
        model::{AnimationKind, AnimationObject},
    },
    server::{
        error::{ApiError, ApiResult},
        rooms::{NewAnimation, ServerEvent},
        state::AppState,
        ws::ws_handler,
    },
    store::records::{
        AnimationConfig, ContentRecord, NewContent, NewProgress, ProgressRecord,
        ProgressWithContent,
    },
};

const DEFAULT_TITLE_CHARS: usize = 60;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/animations", post(create_animation))
        .route("/animations/:id", get(get_animation).put(update_animation))
        .route("/content", get(list_content).post(create_content))
        .route("/progress", post(create_progress))
        .route("/progress/:user_id", get(list_progress));

    Router::new()
        .nest("/api", api)
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimationRequest {
    pub prompt: String,
    #[serde(default)]
    pub objects: Vec<AnimationObject>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct CreateAnimationResponse {
    pub success: bool,
    pub content: ContentRecord,
    pub generated_text: String,
    pub animation_type: String,
    pub subject: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnimationRequest {
    pub objects: Vec<AnimationObject>,
    #[serde(default)]
    pub room_id: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct UpdateAnimationResponse {
    pub success: bool,
    pub content: ContentRecord,
}

/// The prompt cut to its first 60 characters.
pub fn default_title(prompt: &str) -> String {
    prompt.trim().chars().take(DEFAULT_TITLE_CHARS).collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id(raw: &str, what: &str) -> Result<i64, BlueboardError> {
    raw.trim()
        .parse()
        .map_err(|_| BlueboardError::not_found(format!("{what} '{raw}' not found")))
}

async fn create_animation(
    State(state): State<AppState>,
    body: Result<Json<CreateAnimationRequest>, JsonRejection>,
) -> ApiResult<Json<CreateAnimationResponse>> {
    let Json(req) = body.map_err(ApiError::from_rejection)?;
    let scene = Scene::from_objects(req.objects)?;
    let outcome = submit_prompt(&state.generator, &scene, &req.prompt).await?;
    let classification = outcome.classification;

    let title = non_blank(req.title).unwrap_or_else(|| default_title(&outcome.prompt));
    let description =
        non_blank(req.description).unwrap_or_else(|| classification.generated_text.clone());

    let content = state
        .store
        .create_content(NewContent {
            title,
            description,
            subject: classification.subject.clone(),
            prompt: outcome.prompt,
            animation_config: AnimationConfig {
                objects: outcome.scene.to_vec(),
                animation_type: Some(AnimationKind::from_label(&classification.animation_type)),
                parameters: Some(classification.parameters.clone()),
                generated_text: Some(classification.generated_text.clone()),
            },
            created_by: None,
            is_public: true,
        })
        .await?;

    if let Some(room) = non_blank(req.room_id) {
        let delivered = state.hub.broadcast(
            &room,
            ServerEvent::NewAnimation(NewAnimation {
                content: content.clone(),
                objects: content.animation_config.objects.clone(),
            }),
        );
        tracing::debug!(%room, delivered, "new animation broadcast");
    }

    Ok(Json(CreateAnimationResponse {
        success: true,
        content,
        generated_text: classification.generated_text,
        animation_type: classification.animation_type,
        subject: classification.subject,
        parameters: classification.parameters,
    }))
}

async fn get_animation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContentRecord>> {
    let id = parse_id(&id, "animation")?;
    let content = state
        .store
        .get_content(id)
        .await
        .ok_or_else(|| BlueboardError::not_found(format!("animation {id} not found")))?;
    Ok(Json(content))
}

async fn update_animation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAnimationRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateAnimationResponse>> {
    let id = parse_id(&id, "animation")?;
    let Json(req) = body.map_err(ApiError::from_rejection)?;
    let objects = Scene::from_objects(req.objects)?.to_vec();

    let content = state
        .store
        .update_objects(id, objects)
        .await?
        .ok_or_else(|| BlueboardError::not_found(format!("animation {id} not found")))?;

    if let Some(room) = non_blank(req.room_id) {
        state.hub.broadcast(
            &room,
            ServerEvent::AnimationUpdated(content.animation_config.objects.clone()),
        );
    }

    Ok(Json(UpdateAnimationResponse {
        success: true,
        content,
    }))
}

async fn create_content(
    State(state): State<AppState>,
    body: Result<Json<NewContent>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContentRecord>)> {
    let Json(new) = body.map_err(ApiError::from_rejection)?;
    let record = state.store.create_content(new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_content(State(state): State<AppState>) -> Json<Vec<ContentRecord>> {
    Json(state.store.list_content().await)
}

async fn create_progress(
    State(state): State<AppState>,
    body: Result<Json<NewProgress>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProgressRecord>)> {
    let Json(new) = body.map_err(ApiError::from_rejection)?;
    let record = state.store.create_progress(new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<ProgressWithContent>>> {
    let user_id: i64 = user_id
        .trim()
        .parse()
        .map_err(|_| BlueboardError::validation(format!("invalid user id '{user_id}'")))?;
    Ok(Json(state.store.list_progress(user_id).await))
}

#[cfg(test)]
#[path = "../../tests/unit/server/routes.rs"]
mod tests;
