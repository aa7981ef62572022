//! Normalization of external API response shapes.
//!
//! The two HTTP services the pipeline talks to (the generative image API
//! and the upload/scheduling API) have both changed their response shapes
//! over time, and different deployments still answer with different ones.
//! Rather than probing keys ad hoc at every call site, each boundary gets
//! exactly one normalization function over an enumerated set of recognized
//! shapes; anything else fails loudly with [ResponseShapeError] instead of
//! leaking a raw payload downstream. No HTTP happens here—callers hand in
//! the already-parsed JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The response payload did not match any recognized shape
#[derive(Error, Debug)]
pub enum ResponseShapeError {
    #[error("unrecognized media upload response shape: {0}")]
    Upload(Value),

    #[error("unrecognized image generation response shape: {0}")]
    Image(Value),
}

/// Canonical result of a media upload: the id the scheduling API knows the
/// asset by, and the path or URL it reported storing it at, when present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: String,
    pub path: Option<String>,
}

/// Canonical result of an image generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    /// The image is available for download at this URL
    Url(String),
    /// The image bytes were returned inline, base64-encoded
    Base64(String),
}

/// Accept a string id or a numeric id; ids arrive as both across API versions
fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize a media upload response into a [MediaRef].
///
/// Recognized shapes:
/// * `{"media_id": id, ...}`
/// * `{"id": id, ...}`
/// * `{"result": {"id": id, ...}, ...}`
/// * `{"data": {"id": id, ...}, ...}`
///
/// with the stored location read from a `path` or `url` key beside the id
/// (or at the top level), when one exists.
pub fn normalize_upload_response(value: &Value) -> Result<MediaRef, ResponseShapeError> {
    let containers = [Some(value), value.get("result"), value.get("data")];

    for container in containers.into_iter().flatten() {
        let id = container
            .get("media_id")
            .or_else(|| container.get("id"))
            .and_then(id_of);
        let Some(id) = id else {
            continue;
        };

        let path = container
            .get("path")
            .or_else(|| container.get("url"))
            .or_else(|| value.get("path"))
            .or_else(|| value.get("url"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        return Ok(MediaRef { id, path });
    }

    Err(ResponseShapeError::Upload(value.clone()))
}

/// Normalize an image generation response into an [ImageRef].
///
/// Recognized shapes:
/// * `{"data": [{"url": url, ...}, ...], ...}`
/// * `{"data": [{"b64_json": bytes, ...}, ...], ...}`
///
/// Only the first element of `data` is consulted; the pipeline requests
/// one image per call.
pub fn normalize_image_response(value: &Value) -> Result<ImageRef, ResponseShapeError> {
    let first = value
        .get("data")
        .and_then(Value::as_array)
        .and_then(|data| data.first());

    if let Some(item) = first {
        if let Some(url) = item.get("url").and_then(Value::as_str) {
            return Ok(ImageRef::Url(url.to_owned()));
        }
        if let Some(b64) = item.get("b64_json").and_then(Value::as_str) {
            return Ok(ImageRef::Base64(b64.to_owned()));
        }
    }

    Err(ResponseShapeError::Image(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_flat_media_id() {
        let r = normalize_upload_response(&json!({"media_id": "abc", "path": "/m/abc.png"}));
        assert_eq!(
            r.unwrap(),
            MediaRef {
                id: "abc".into(),
                path: Some("/m/abc.png".into())
            }
        );
    }

    #[test]
    fn upload_flat_id_with_url() {
        let r = normalize_upload_response(&json!({"id": "xyz", "url": "https://cdn/x.png"}));
        assert_eq!(
            r.unwrap(),
            MediaRef {
                id: "xyz".into(),
                path: Some("https://cdn/x.png".into())
            }
        );
    }

    #[test]
    fn upload_nested_result() {
        let r = normalize_upload_response(&json!({"result": {"id": 42}}));
        assert_eq!(
            r.unwrap(),
            MediaRef {
                id: "42".into(),
                path: None
            }
        );
    }

    #[test]
    fn upload_nested_data() {
        let r = normalize_upload_response(&json!({"data": {"id": "d1", "path": "/d1"}}));
        assert_eq!(
            r.unwrap(),
            MediaRef {
                id: "d1".into(),
                path: Some("/d1".into())
            }
        );
    }

    #[test]
    fn upload_prefers_media_id_over_id() {
        let r = normalize_upload_response(&json!({"media_id": "m", "id": "i"}));
        assert_eq!(r.unwrap().id, "m");
    }

    #[test]
    fn upload_unrecognized_shape_fails() {
        for payload in [json!({}), json!({"status": "ok"}), json!({"id": null}), json!([1, 2])] {
            let r = normalize_upload_response(&payload);
            assert!(
                matches!(r, Err(ResponseShapeError::Upload(_))),
                "accepted {payload}"
            );
        }
    }

    #[test]
    fn image_url_shape() {
        let r = normalize_image_response(&json!({"data": [{"url": "https://img/1.png"}]}));
        assert_eq!(r.unwrap(), ImageRef::Url("https://img/1.png".into()));
    }

    #[test]
    fn image_b64_shape() {
        let r = normalize_image_response(&json!({"data": [{"b64_json": "aGk="}]}));
        assert_eq!(r.unwrap(), ImageRef::Base64("aGk=".into()));
    }

    #[test]
    fn image_unrecognized_shape_fails() {
        for payload in [json!({}), json!({"data": []}), json!({"data": [{"revised_prompt": "x"}]})] {
            let r = normalize_image_response(&payload);
            assert!(
                matches!(r, Err(ResponseShapeError::Image(_))),
                "accepted {payload}"
            );
        }
    }
}
