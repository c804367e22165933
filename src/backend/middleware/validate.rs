/**
 * Request Validation Middleware
 *
 * Guards the credential endpoints (signup, signin). The JSON body is
 * buffered and checked for the required fields before the handler runs.
 * Requests that pass carry the parsed `CredentialsRequest` as an extension,
 * read by handlers through the `Credentials` extractor, so the body is
 * parsed exactly once and every rejection uses the error envelope.
 */

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::backend::auth::handlers::types::CredentialsRequest;
use crate::backend::error::AuthError;

/// Fields every credential request must carry
pub const CREDENTIAL_FIELDS: [&str; 2] = ["email", "password"];

/// Client-facing reason for a rejected credential request
pub const REQUIRED_FIELDS_MESSAGE: &str = "Email and password are required";

/// Largest credential body we are willing to buffer
const BODY_LIMIT: usize = 64 * 1024;

/// Return the required fields absent from `payload`
///
/// A field counts as absent unless it holds a non-empty string.
/// A payload that is not a JSON object is missing every field.
pub fn missing_fields<'a>(payload: &Value, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| match payload.get(*field) {
            Some(Value::String(s)) => s.is_empty(),
            _ => true,
        })
        .collect()
}

/// Reject credential requests without an email or password
///
/// Responds `400` with `err: "Email and password are required"` and never
/// calls the handler. Bodies that are not valid JSON are rejected the same way.
/// The `Content-Type` header is not consulted.
pub async fn validate_user_auth(request: Request, next: Next) -> Result<Response, AuthError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, BODY_LIMIT).await.map_err(|e| {
        tracing::warn!("Failed to buffer request body: {}", e);
        AuthError::missing_field(REQUIRED_FIELDS_MESSAGE)
    })?;

    let payload = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
    let missing = missing_fields(&payload, &CREDENTIAL_FIELDS);
    if !missing.is_empty() {
        tracing::debug!("Rejecting {} request, missing {:?}", parts.uri.path(), missing);
        return Err(AuthError::missing_field(REQUIRED_FIELDS_MESSAGE));
    }

    let credentials = serde_json::from_value::<CredentialsRequest>(payload).map_err(|e| {
        tracing::warn!("Credential body did not match the request shape: {}", e);
        AuthError::missing_field(REQUIRED_FIELDS_MESSAGE)
    })?;

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(credentials);

    Ok(next.run(request).await)
}

/// Axum extractor for validated credentials
///
/// Reads the `CredentialsRequest` attached by `validate_user_auth`.
#[derive(Clone, Debug)]
pub struct Credentials(pub CredentialsRequest);

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .extensions
            .get::<CredentialsRequest>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CredentialsRequest not found in request extensions");
                AuthError::missing_field(REQUIRED_FIELDS_MESSAGE)
            })?;

        Ok(Credentials(credentials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware::from_fn, routing::post, Router};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use tower::ServiceExt;

    #[test]
    fn test_missing_fields_complete() {
        let payload = json!({"email": "a@b.c", "password": "secret"});
        assert!(missing_fields(&payload, &CREDENTIAL_FIELDS).is_empty());
    }

    #[test]
    fn test_missing_fields_null_and_empty() {
        let payload = json!({"email": null, "password": ""});
        assert_eq!(missing_fields(&payload, &CREDENTIAL_FIELDS), vec!["email", "password"]);

        let payload = json!({"email": "a@b.c"});
        assert_eq!(missing_fields(&payload, &CREDENTIAL_FIELDS), vec!["password"]);
    }

    #[test]
    fn test_missing_fields_non_string() {
        let payload = json!({"email": 5, "password": false});
        assert_eq!(missing_fields(&payload, &CREDENTIAL_FIELDS), vec!["email", "password"]);

        let payload = json!({"email": "a@b.c", "password": 0});
        assert_eq!(missing_fields(&payload, &CREDENTIAL_FIELDS), vec!["password"]);
    }

    #[test]
    fn test_missing_fields_not_an_object() {
        assert_eq!(missing_fields(&Value::Null, &CREDENTIAL_FIELDS).len(), 2);
        assert_eq!(missing_fields(&json!(["email"]), &CREDENTIAL_FIELDS).len(), 2);
    }

    fn guarded() -> Router {
        Router::new()
            .route("/", post(|body: String| async move { body }))
            .route(
                "/email",
                post(|Credentials(credentials): Credentials| async move { credentials.email }),
            )
            .route_layer(from_fn(validate_user_auth))
    }

    async fn send_to(uri: &str, content_type: &str, body: &'static str) -> Response {
        guarded()
            .oneshot(
                axum::http::Request::post(uri)
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn send(body: &'static str) -> Response {
        send_to("/", "application/json", body).await
    }

    #[tokio::test]
    async fn test_validate_user_auth_forwards_body() {
        let body = r#"{"email":"a@b.c","password":"secret"}"#;
        let response = send(body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], body.as_bytes());
    }

    #[tokio::test]
    async fn test_validate_user_auth_rejects_missing_password() {
        let response = send(r#"{"email":"a@b.c"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["err"], json!(REQUIRED_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_validate_user_auth_rejects_garbage() {
        let response = send("not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_user_auth_rejects_non_string_fields() {
        let response = send(r#"{"email":5,"password":"secret"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["err"], json!(REQUIRED_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_credentials_extractor_ignores_content_type() {
        let body = r#"{"email":"a@b.c","password":"secret"}"#;
        let response = send_to("/email", "text/plain", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"a@b.c");
    }

    #[tokio::test]
    async fn test_credentials_extractor_without_middleware() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let result = Credentials::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::MissingField { .. })));
    }

    fn field_value() -> impl Strategy<Value = Option<Value>> {
        prop_oneof![
            Just(None),
            Just(Some(Value::Null)),
            Just(Some(json!(""))),
            "[a-z@.]{1,12}".prop_map(|s| Some(json!(s))),
            any::<i64>().prop_map(|n| Some(json!(n))),
            any::<bool>().prop_map(|b| Some(json!(b))),
        ]
    }

    proptest! {
        #[test]
        fn prop_field_missing_unless_non_empty_string(
            email in field_value(),
            password in field_value(),
        ) {
            let mut payload = serde_json::Map::new();
            if let Some(v) = &email {
                payload.insert("email".to_string(), v.clone());
            }
            if let Some(v) = &password {
                payload.insert("password".to_string(), v.clone());
            }
            let missing = missing_fields(&Value::Object(payload), &CREDENTIAL_FIELDS);

            let absent = |v: &Option<Value>| {
                v.as_ref().and_then(Value::as_str).map_or(true, str::is_empty)
            };
            prop_assert_eq!(missing.contains(&"email"), absent(&email));
            prop_assert_eq!(missing.contains(&"password"), absent(&password));
        }
    }
}
