use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ChatMessageRequest, InitializeChatRequest},
        response::{ChatMessageResponse, InitializeChatResponse},
    },
};

#[post("/api/chat/sessions")]
pub async fn initialize_chat(
    state: web::Data<AppState>,
    request: web::Json<InitializeChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state
        .chat_service
        .initialize_session(&request.session_id, &request.mcq_details)
        .await;

    Ok(HttpResponse::Created().json(InitializeChatResponse {
        session_id: request.session_id,
        message: "Chat session initialized".to_string(),
    }))
}

#[post("/api/chat/messages")]
pub async fn send_chat_message(
    state: web::Data<AppState>,
    request: web::Json<ChatMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let reply = state
        .chat_service
        .invoke_response(&request.session_id, &request.message)
        .await?;

    Ok(HttpResponse::Ok().json(ChatMessageResponse {
        session_id: request.session_id,
        reply,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, services::completion_client::MockCompletionClient};
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state_with(mock: MockCompletionClient) -> AppState {
        AppState::with_client(Config::test_config(), Arc::new(mock))
    }

    #[actix_web::test]
    async fn message_before_session_returns_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(MockCompletionClient::new())))
                .service(send_chat_message),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/chat/messages")
            .set_json(serde_json::json!({"session_id": "s1", "message": "hi"}))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn initialized_session_accepts_messages() {
        let mut mock = MockCompletionClient::new();
        mock.expect_chat()
            .times(1)
            .returning(|_, _| Ok("B is correct because plants absorb CO2.".to_string()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(mock)))
                .service(initialize_chat)
                .service(send_chat_message),
        )
        .await;

        let init = test::TestRequest::post()
            .uri("/api/chat/sessions")
            .set_json(serde_json::json!({
                "session_id": "s1",
                "mcq_details": "Question: Which gas do plants absorb?"
            }))
            .to_request();
        let init_response = test::call_service(&app, init).await;
        assert_eq!(init_response.status(), StatusCode::CREATED);

        let message = test::TestRequest::post()
            .uri("/api/chat/messages")
            .set_json(serde_json::json!({"session_id": "s1", "message": "Why B?"}))
            .to_request();
        let response = test::call_service(&app, message).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["reply"], "B is correct because plants absorb CO2.");
    }
}
