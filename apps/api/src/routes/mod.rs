pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::resume::handlers as resumes;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).put(resumes::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/:id/edits",
            post(editor::handle_apply_edits),
        )
        .route("/api/v1/preview", post(editor::handle_preview))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::auth::USER_ID_HEADER;
    use crate::resume::data::ResumeData;
    use crate::resume::sections::SectionId;
    use crate::resume::store::{ResumeStore, StoredResume};
    use crate::testing::{test_state, FailingResumeStore};

    fn request(method: Method, uri: &str, user: Option<Uuid>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user.to_string());
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        builder.body(body).unwrap()
    }

    async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn stored(owner: Uuid) -> StoredResume {
        let data = ResumeData::from_value(&json!({
            "personalInfo": { "name": "Ada Lovelace" },
            "summary": "Engineer",
            "experiences": [{ "position": "Engineer", "company": "Acme" }]
        }));
        StoredResume {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Main".into(),
            template_id: Some("classic-01".into()),
            data,
            section_order: vec![
                SectionId::from("experiences"),
                SectionId::from("personalInfo"),
                SectionId::from("summary"),
            ],
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = test_state([]);
        let (status, body) = send(build_router(state), request(Method::GET, "/health", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_templates_by_category() {
        let (state, _) = test_state([]);
        let router = build_router(state);
        let (status, body) = send(
            router.clone(),
            request(Method::GET, "/api/v1/templates?category=executive", None, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "exec-01");

        let (status, body) = send(
            router,
            request(Method::GET, "/api/v1/templates?category=retro", None, None),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_preview_is_stateless_and_ordered() {
        let (state, store) = test_state([]);
        let body = json!({
            "data": {
                "personalInfo": { "name": "Ada" },
                "summary": "",
                "skills": [{ "name": "Rust" }],
                "education": "not a list"
            },
            "previousOrder": ["skills", "summary", "personalInfo"]
        });
        let (status, body) = send(
            build_router(state),
            request(Method::POST, "/api/v1/preview", None, Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["order"], json!(["skills", "personalInfo"]));
        let ids: Vec<&str> = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["skills", "personalInfo"]);
        assert_eq!(body["template_id"], "modern-01");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_preview_with_unknown_template() {
        let (state, _) = test_state([]);
        let (status, _) = send(
            build_router(state),
            request(
                Method::POST,
                "/api/v1/preview",
                None,
                Some(json!({ "data": {}, "templateId": "nope" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_resume_requires_owner() {
        let owner = Uuid::new_v4();
        let resume = stored(owner);
        let uri = format!("/api/v1/resumes/{}", resume.id);
        let (state, _) = test_state([resume]);
        let router = build_router(state);

        let (status, _) = send(router.clone(), request(Method::GET, &uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(router.clone(), request(Method::GET, &uri, Some(Uuid::new_v4()), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(router, request(Method::GET, &uri, Some(owner), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section_order"], json!(["experiences", "personalInfo", "summary"]));
    }

    #[tokio::test]
    async fn test_put_resume_recomputes_order() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let (state, store) = test_state([]);
        let uri = format!("/api/v1/resumes/{id}");
        let body = json!({
            "title": "Draft",
            "data": { "summary": "Hi", "skills": [] },
            "sectionOrder": ["skills", "summary", "interests"]
        });

        let (status, _) = send(
            build_router(state.clone()),
            request(Method::PUT, &uri, None, Some(body.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(store.is_empty());

        let (status, body) = send(build_router(state), request(Method::PUT, &uri, Some(owner), Some(body))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["section_order"], json!(["summary"]));
        let saved = store.load_resume(id).await.unwrap().unwrap();
        assert_eq!(saved.title, "Draft");
        assert_eq!(saved.user_id, owner);
    }

    #[tokio::test]
    async fn test_put_over_someone_elses_resume_is_not_found() {
        let resume = stored(Uuid::new_v4());
        let uri = format!("/api/v1/resumes/{}", resume.id);
        let (state, _) = test_state([resume]);
        let (status, _) = send(
            build_router(state),
            request(Method::PUT, &uri, Some(Uuid::new_v4()), Some(json!({ "data": {} }))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_apply_edits_saves_and_previews() {
        let owner = Uuid::new_v4();
        let resume = stored(owner);
        let id = resume.id;
        let (state, store) = test_state([resume]);
        let body = json!({
            "edits": [
                { "op": "set_summary", "text": "" },
                { "op": "add_entry", "section": "skills", "entry": { "name": "Rust" } },
                { "op": "remove_entry", "section": "experiences", "index": 7 }
            ],
            "newSections": [{ "title": "Volunteer 2024", "content": "Food bank" }],
            "drag": [
                { "type": "start", "section": "skills" },
                { "type": "over", "section": "experiences" },
                { "type": "drop" }
            ]
        });
        let (status, body) = send(
            build_router(state),
            request(Method::POST, &format!("/api/v1/resumes/{id}/edits"), Some(owner), Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], "saved");
        assert_eq!(body["applied"], 2);
        assert_eq!(body["preview"]["template_id"], "classic-01");
        assert_eq!(body["created"], json!(["volunteer-2024"]));
        assert_eq!(
            body["preview"]["order"],
            json!(["skills", "experiences", "personalInfo", "volunteer-2024"])
        );
        let drawn: Vec<&str> = body["preview"]["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(drawn, vec!["skills", "experiences", "personalInfo", "volunteer-2024"]);

        let saved = store.load_resume(id).await.unwrap().unwrap();
        assert_eq!(
            saved.section_order,
            vec![
                SectionId::from("skills"),
                SectionId::from("experiences"),
                SectionId::from("personalInfo"),
                SectionId::from("volunteer-2024")
            ]
        );
        assert!(saved.data.summary.is_empty());
        assert!(saved.data.custom_section("volunteer-2024").is_some());
    }

    #[tokio::test]
    async fn test_unfinished_drag_leaves_order_alone() {
        let owner = Uuid::new_v4();
        let resume = stored(owner);
        let id = resume.id;
        let (state, _) = test_state([resume]);
        let body = json!({
            "drag": [
                { "type": "start", "section": "summary" },
                { "type": "over", "section": "experiences" }
            ]
        });
        let (status, body) = send(
            build_router(state),
            request(Method::POST, &format!("/api/v1/resumes/{id}/edits"), Some(owner), Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], 0);
        assert_eq!(body["preview"]["order"], json!(["experiences", "personalInfo", "summary"]));
    }

    #[tokio::test]
    async fn test_apply_edits_requires_auth() {
        let resume = stored(Uuid::new_v4());
        let uri = format!("/api/v1/resumes/{}/edits", resume.id);
        let (state, _) = test_state([resume]);
        let (status, body) = send(
            build_router(state),
            request(Method::POST, &uri, None, Some(json!({ "edits": [] }))),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["retryable"], false);
    }

    #[tokio::test]
    async fn test_storage_outage_is_retryable() {
        let (mut state, _) = test_state([]);
        state.resumes = Arc::new(FailingResumeStore);
        let router = build_router(state);
        let user = Uuid::new_v4();
        let id = Uuid::new_v4();

        let (status, body) = send(
            router.clone(),
            request(Method::GET, &format!("/api/v1/resumes/{id}"), Some(user), None),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");
        assert_eq!(body["error"]["retryable"], true);

        let (status, body) = send(
            router,
            request(
                Method::POST,
                &format!("/api/v1/resumes/{id}/edits"),
                Some(user),
                Some(json!({ "edits": [] })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["retryable"], true);
    }
}
