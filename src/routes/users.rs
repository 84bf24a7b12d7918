use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{FeedQuery, FeedResponse, Identity, MatchesResponse, NewUser, RegisterRequest, RegisterResponse};
use crate::routes::{error_response, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users", web::post().to(register))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}/matchable", web::get().to(get_matchable_users))
        .route("/users/{id}/matches", web::get().to(get_matches));
}

/// Register endpoint
///
/// POST /api/v1/users
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "age": 25,
///   "genderPreference": 0,
///   "name": "Alice",
///   "location": "New York",
///   "photoUrl": "http://example.com/pic.jpg"
/// }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let gender_preference = match req.gender_preference.resolve() {
        Ok(pref) => pref,
        Err(e) => return error_response(&e),
    };

    let profile = NewUser {
        age: req.age,
        gender_preference,
        name: req.name,
        location: req.location,
        photo_url: req.photo_url,
    };

    match state.service.register(Identity::from(req.user_id), profile).await {
        Ok(user) => HttpResponse::Created().json(RegisterResponse { success: true, user }),
        Err(e) => error_response(&e),
    }
}

/// GET /api/v1/users/{id}
async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let identity = Identity::from(path.into_inner());

    match state.service.get_user(&identity).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => error_response(&e),
    }
}

/// Candidate feed
///
/// GET /api/v1/users/{id}/matchable?offset=0&limit=20
///
/// `limit` defaults to `feed.default_limit` and is capped at `feed.max_limit`.
async fn get_matchable_users(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FeedQuery>,
) -> impl Responder {
    let requester = Identity::from(path.into_inner());
    let offset = query.offset.unwrap_or(0);
    let limit = state.feed.clamp_limit(query.limit);

    let users = state.service.matchable_users(&requester, offset, limit).await;

    tracing::debug!(
        "Returning {} matchable users for {} (offset {}, limit {})",
        users.len(),
        requester,
        offset,
        limit
    );

    let next_offset = (limit > 0 && users.len() == limit).then_some(offset + users.len());

    HttpResponse::Ok().json(FeedResponse {
        users,
        offset,
        limit,
        next_offset,
    })
}

/// Mutual matches of a user
///
/// GET /api/v1/users/{id}/matches
async fn get_matches(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let identity = Identity::from(path.into_inner());
    let matches = state.service.matches_for(&identity).await;

    HttpResponse::Ok().json(MatchesResponse {
        user_id: identity,
        count: matches.len(),
        matches,
    })
}
