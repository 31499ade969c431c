use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::{rejection::JsonRejection, Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

/// Fields a create or update body must carry at the top level.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "deadline",
    "description",
    "requirements",
    "languages",
    "location",
    "company",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub location_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub commitments: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: String,
    pub title: String,
    pub created: String,
    pub deadline: String,
    pub description: String,
    pub requirements: Vec<JobRequirement>,
    pub languages: Vec<Language>,
    pub location: Location,
    pub company: Company,
}

#[derive(Default, Serialize, Deserialize)]
struct DbFile {
    #[serde(default)]
    job_posts: Vec<JobPost>,
}

/// Job posts in insertion order, optionally mirrored to a JSON file after
/// every change.
#[derive(Debug, Default)]
pub struct Store {
    posts: Vec<JobPost>,
    path: Option<PathBuf>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store backed by `path`. A missing or unreadable file starts
    /// the store empty.
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let posts = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<DbFile>(&raw) {
                Ok(file) => file.job_posts,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring corrupt database file");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self {
            posts,
            path: Some(path),
        }
    }

    pub fn posts(&self) -> &[JobPost] {
        &self.posts
    }

    /// Write `posts` to the backing file, then adopt them. A failed write
    /// leaves the store unchanged.
    async fn commit(&mut self, posts: Vec<JobPost>) -> Result<(), ApiError> {
        if let Some(path) = &self.path {
            let file = DbFile { job_posts: posts };
            let raw = serde_json::to_string_pretty(&file).map_err(ApiError::internal)?;
            if let Err(e) = tokio::fs::write(path, raw).await {
                warn!(path = %path.display(), error = %e, "database write failed");
                return Err(ApiError::internal(e));
            }
            self.posts = file.job_posts;
        } else {
            self.posts = posts;
        }
        Ok(())
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Error response carrying `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Job post not found".to_string(),
        }
    }

    fn internal(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn app() -> Router {
    router(Store::in_memory())
}

pub fn router(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/job-posts", get(list_job_posts).post(create_job_post))
        .route(
            "/job-posts/{id}",
            get(get_job_post).put(update_job_post).delete(delete_job_post),
        )
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Store::in_memory()).await
}

pub async fn serve(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, router(store)).await
}

/// Unwrap a JSON object body. Missing, malformed or empty bodies all count
/// as no data.
fn object_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match payload {
        Ok(Json(Value::Object(map))) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::bad_request("No data provided")),
    }
}

/// Check required fields, default `created`, and decode.
fn job_post_from(mut data: Map<String, Value>) -> Result<JobPost, ApiError> {
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !data.contains_key(**f)) {
        return Err(ApiError::bad_request(format!("Missing required field: {missing}")));
    }
    data.entry("created")
        .or_insert_with(|| Value::String(now_iso()));
    serde_json::from_value(Value::Object(data))
        .map_err(|e| ApiError::bad_request(format!("Invalid job post: {e}")))
}

fn now_iso() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

async fn list_job_posts(State(db): State<Db>) -> Json<Vec<JobPost>> {
    Json(db.read().await.posts.clone())
}

async fn create_job_post(
    State(db): State<Db>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<JobPost>), ApiError> {
    let mut data = object_body(payload)?;
    data.entry("id")
        .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
    let post = job_post_from(data)?;

    let mut store = db.write().await;
    if store.posts.iter().any(|p| p.id == post.id) {
        return Err(ApiError::bad_request(format!(
            "Job post with ID {} already exists",
            post.id
        )));
    }
    let mut posts = store.posts.clone();
    posts.push(post.clone());
    store.commit(posts).await?;
    info!(id = %post.id, "job post created");
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_job_post(
    State(db): State<Db>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<JobPost>, ApiError> {
    let store = db.read().await;
    store
        .posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

async fn update_job_post(
    State(db): State<Db>,
    UrlPath(id): UrlPath<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<JobPost>, ApiError> {
    let mut data = object_body(payload)?;
    // the path wins over whatever id the body carries
    data.insert("id".to_string(), Value::String(id.clone()));
    let post = job_post_from(data)?;

    let mut store = db.write().await;
    let index = store
        .posts
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(ApiError::not_found)?;
    let mut posts = store.posts.clone();
    posts[index] = post.clone();
    store.commit(posts).await?;
    info!(id = %post.id, "job post updated");
    Ok(Json(post))
}

async fn delete_job_post(
    State(db): State<Db>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Value>, ApiError> {
    let mut store = db.write().await;
    let index = store
        .posts
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(ApiError::not_found)?;
    let mut posts = store.posts.clone();
    posts.remove(index);
    store.commit(posts).await?;
    info!(id = %id, "job post deleted");
    Ok(Json(json!({ "message": "Job post deleted successfully" })))
}
