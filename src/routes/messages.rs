use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ConversationQuery, ConversationResponse, Identity, MessageRequest, MessageResponse};
use crate::routes::{error_response, validation_failed, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/messages", web::post().to(send_message))
        .route("/messages", web::get().to(get_conversation));
}

/// Send a message to a mutual match
///
/// POST /api/v1/messages
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "recipientId": "string",
///   "body": "hello"
/// }
/// ```
async fn send_message(state: web::Data<AppState>, req: web::Json<MessageRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let sender = Identity::from(req.user_id);
    let recipient = Identity::from(req.recipient_id);

    match state.service.message(&sender, &recipient, req.body).await {
        Ok(message) => HttpResponse::Ok().json(MessageResponse { success: true, message }),
        Err(e) => error_response(&e),
    }
}

/// GET /api/v1/messages?userId={id}&peerId={id}
async fn get_conversation(
    state: web::Data<AppState>,
    query: web::Query<ConversationQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let user = Identity::from(query.user_id);
    let peer = Identity::from(query.peer_id);

    let messages = state.service.conversation(&user, &peer).await;

    HttpResponse::Ok().json(ConversationResponse {
        count: messages.len(),
        messages,
    })
}
