//! Request body extraction
//!
//! Create endpoints accept JSON and urlencoded form bodies. Either way the
//! handler sees a JSON object; any other content type (or none) yields an
//! empty object so the required-field check reports the first field.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use publications_common::errors::AppError;
use serde_json::{Map, Value};

/// Loosely typed request body
#[derive(Debug, Clone, Default)]
pub struct RequestBody(pub Map<String, Value>);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::InvalidBody {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    })?;

                // Arrays and scalars carry no named fields
                match value {
                    Value::Object(map) => Ok(Self(map)),
                    _ => Ok(Self::default()),
                }
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::InvalidBody {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    })?;

                let map = pairs
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                Ok(Self(map))
            }
            BodyKind::Other => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[test]
    fn test_body_kind_detection() {
        assert_eq!(body_kind(&request(Some("application/json"), "")), BodyKind::Json);
        assert_eq!(
            body_kind(&request(Some("application/json; charset=utf-8"), "")),
            BodyKind::Json
        );
        assert_eq!(
            body_kind(&request(Some("application/x-www-form-urlencoded"), "")),
            BodyKind::Form
        );
        assert_eq!(body_kind(&request(Some("text/plain"), "")), BodyKind::Other);
        assert_eq!(body_kind(&request(None, "")), BodyKind::Other);
    }

    #[tokio::test]
    async fn test_json_object_body() {
        let req = request(Some("application/json"), r#"{"title":"Blarg","author":"Poop"}"#);
        let RequestBody(map) = RequestBody::from_request(req, &()).await.unwrap();
        assert_eq!(map.get("title"), Some(&Value::String("Blarg".into())));
        assert_eq!(map.get("author"), Some(&Value::String("Poop".into())));
    }

    #[tokio::test]
    async fn test_json_array_body_is_empty() {
        let req = request(Some("application/json"), r#"["title"]"#);
        let RequestBody(map) = RequestBody::from_request(req, &()).await.unwrap();
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_form_body_values_are_strings() {
        let req = request(
            Some("application/x-www-form-urlencoded"),
            "note=Meus+Culpam&paper_id=2",
        );
        let RequestBody(map) = RequestBody::from_request(req, &()).await.unwrap();
        assert_eq!(map.get("note"), Some(&Value::String("Meus Culpam".into())));
        assert_eq!(map.get("paper_id"), Some(&Value::String("2".into())));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let req = request(Some("application/json"), "{not json");
        let err = RequestBody::from_request(req, &()).await.unwrap_err();
        assert!(err.is_client_error());
    }
}
