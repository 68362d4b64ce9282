//! Transport behavior against a local mock server: header attachment,
//! session expiry, content negotiation, and error mapping.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use {
    obra_client::{ApiClient, Error, Payload, RegisterUser, RequestOptions},
    obra_session::{MemoryStore, SessionStore},
    reqwest::Method,
    serde_json::{Map, Value, json},
    wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    },
};

fn sample_user() -> Map<String, Value> {
    let Value::Object(user) = json!({"id": 1, "nome": "Rui", "cargo": "engenheiro"}) else {
        unreachable!()
    };
    user
}

fn anonymous_client(server: &MockServer) -> ApiClient {
    ApiClient::with_store(server.uri(), Arc::new(MemoryStore::new()))
}

fn logged_in_client(server: &MockServer, token: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::with_store(server.uri(), store.clone());
    client.set_session(token, sample_user()).unwrap();
    (client, store)
}

#[tokio::test]
async fn stored_token_travels_as_exact_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metricas"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projetos": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = logged_in_client(&server, "tok-123");
    client.metrics().await.unwrap();
}

#[tokio::test]
async fn skip_auth_omits_authorization_even_when_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let (client, _) = logged_in_client(&server, "tok-123");
    client.health().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn unauthorized_clears_session_and_notifies_observer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let (client, store) = logged_in_client(&server, "tok-stale");
    let fired = Arc::new(AtomicBool::new(false));
    let observer = fired.clone();
    client.on_session_expired(move || observer.store(true, Ordering::SeqCst));

    let err = client.list_projects(None, None).await.unwrap_err();
    match err {
        Error::AuthExpired { message } => {
            assert_eq!(message, "Sessão expirada. Faça login novamente.");
        },
        other => panic!("expected AuthExpired, got {other:?}"),
    }

    assert!(!client.is_authenticated());
    assert!(client.current_user().is_empty());
    assert!(store.load().unwrap().is_none());
    assert!(fired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn json_responses_come_back_parsed() {
    let server = MockServer::start().await;
    let body = json!([{"id": 1, "nome": "Sede"}, {"id": 2, "nome": "Anexo"}]);
    Mock::given(method("GET"))
        .and(path("/projetos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let (client, _) = logged_in_client(&server, "tok");
    let payload = client.list_projects(None, None).await.unwrap();
    assert_eq!(payload, Payload::Json(body));
}

#[tokio::test]
async fn non_json_responses_stay_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("pong")
                .insert_header("content-type", "text/plain; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let payload = client.health().await.unwrap();
    assert_eq!(payload, Payload::Text("pong".into()));
}

#[tokio::test]
async fn api_error_carries_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email já cadastrado"})),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let err = client
        .register(&RegisterUser {
            nome: "Ana".into(),
            email: "ana@obra.dev".into(),
            senha: "s3nh4".into(),
            telefone: None,
            cargo: None,
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Email já cadastrado");
        },
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn error_fallback_chain_detail_then_message_then_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Backend caiu"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("Service Unavailable")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);

    let Error::Api { message, .. } = client.get("/a").await.unwrap_err() else {
        panic!("expected Api error");
    };
    assert_eq!(message, "Backend caiu");

    let Error::Api { message, .. } = client.get("/b").await.unwrap_err() else {
        panic!("expected Api error");
    };
    assert_eq!(message, "Erro na requisição");

    let Error::Api { message, .. } = client.get("/c").await.unwrap_err() else {
        panic!("expected Api error");
    };
    assert_eq!(message, "Erro na requisição");
}

#[tokio::test]
async fn set_session_makes_the_client_authenticated() {
    let server = MockServer::start().await;
    let client = anonymous_client(&server);
    assert!(!client.is_authenticated());

    client.set_session("tok-9", sample_user()).unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.current_user(), sample_user());
}

#[tokio::test]
async fn upload_is_multipart_with_auth_and_no_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documentos/7/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 41})))
        .mount(&server)
        .await;

    let (client, _) = logged_in_client(&server, "tok-up");
    let payload = client
        .upload_document(7, "plano.pdf", b"%PDF-1.4 conteudo".to_vec())
        .await
        .unwrap();
    assert_eq!(payload, Payload::Json(json!({"id": 41})));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert_eq!(request.headers.get("authorization").unwrap(), "Bearer tok-up");

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"plano.pdf\""));
    assert!(body.contains("%PDF-1.4 conteudo"));
}

#[tokio::test]
async fn upload_failures_use_the_upload_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documentos/7/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (client, _) = logged_in_client(&server, "tok");
    let Error::Api { message, .. } = client
        .upload_document(7, "plano.pdf", vec![1, 2, 3])
        .await
        .unwrap_err()
    else {
        panic!("expected Api error");
    };
    assert_eq!(message, "Erro ao fazer upload");
}

#[tokio::test]
async fn unauthorized_upload_also_expires_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    let (client, store) = logged_in_client(&server, "tok-old");
    let err = client.upload_document(3, "foto.png", vec![9]).await.unwrap_err();

    assert!(matches!(err, Error::AuthExpired { .. }));
    assert!(!client.is_authenticated());
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn body_is_attached_for_post_put_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eco"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/eco"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let body = Some(json!({"x": 1}));

    client
        .request(Method::GET, "/eco", body.clone(), RequestOptions::default())
        .await
        .unwrap();
    client
        .request(Method::POST, "/eco", body, RequestOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].body.is_empty());
    assert_eq!(requests[1].body, br#"{"x":1}"#);
}

#[tokio::test]
async fn every_request_carries_the_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metricas"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    client.metrics().await.unwrap();
}

#[tokio::test]
async fn malformed_json_with_json_content_type_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"nem json".to_vec(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let err = client.metrics().await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::with_store(uri, Arc::new(MemoryStore::new()));
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
