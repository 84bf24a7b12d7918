use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{Identity, MatchQuery, MatchResponse, SwipeRequest, SwipeResponse, SwipeStatusQuery, SwipeStatusResponse};
use crate::routes::{error_response, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/swipes", web::post().to(swipe))
        .route("/swipes/status", web::get().to(get_swipe_status))
        .route("/matches/check", web::get().to(check_match));
}

/// Swipe endpoint
///
/// POST /api/v1/swipes
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetUserId": "string",
///   "decision": "pass|like|superlike" or 0|1|2
/// }
/// ```
async fn swipe(state: web::Data<AppState>, req: web::Json<SwipeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let decision = match req.decision.resolve() {
        Ok(decision) => decision,
        Err(e) => return error_response(&e),
    };

    let actor = Identity::from(req.user_id.as_str());
    let target = Identity::from(req.target_user_id.as_str());

    match state.service.swipe(&actor, &target, decision).await {
        Ok((record, is_match)) => HttpResponse::Ok().json(SwipeResponse {
            success: true,
            record,
            is_match,
        }),
        Err(e) => error_response(&e),
    }
}

/// GET /api/v1/swipes/status?actor={id}&target={id}
async fn get_swipe_status(
    state: web::Data<AppState>,
    query: web::Query<SwipeStatusQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let actor = Identity::from(query.actor);
    let target = Identity::from(query.target);

    let status = state.service.get_swipe_status(&actor, &target).await;

    HttpResponse::Ok().json(SwipeStatusResponse { actor, target, status })
}

/// GET /api/v1/matches/check?userA={id}&userB={id}
async fn check_match(state: web::Data<AppState>, query: web::Query<MatchQuery>) -> impl Responder {
    let query = query.into_inner();
    let user_a = Identity::from(query.user_a);
    let user_b = Identity::from(query.user_b);

    let is_match = state.service.is_match(&user_a, &user_b).await;

    HttpResponse::Ok().json(MatchResponse { user_a, user_b, is_match })
}
