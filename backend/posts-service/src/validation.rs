//! Request payload validation.
//!
//! Pure checks run before any store call. A payload either yields the
//! validated record or the single validation message for its resource.

use crate::error::{messages, AppError, Result};
use crate::models::{CommentDraft, CommentPayload, NewPost, PostPayload};
use validator::Validate;

/// Require a non-empty `title` and `contents`
pub fn validate_post_payload(payload: &PostPayload) -> Result<NewPost> {
    payload
        .validate()
        .map_err(|_| AppError::Validation(messages::POST_PAYLOAD_INVALID))?;

    match (&payload.title, &payload.contents) {
        (Some(title), Some(contents)) => Ok(NewPost {
            title: title.clone(),
            contents: contents.clone(),
        }),
        _ => Err(AppError::Validation(messages::POST_PAYLOAD_INVALID)),
    }
}

/// Require a non-empty `text`
pub fn validate_comment_payload(payload: &CommentPayload) -> Result<CommentDraft> {
    payload
        .validate()
        .map_err(|_| AppError::Validation(messages::COMMENT_PAYLOAD_INVALID))?;

    payload
        .text
        .clone()
        .map(|text| CommentDraft { text })
        .ok_or(AppError::Validation(messages::COMMENT_PAYLOAD_INVALID))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: Option<&str>, contents: Option<&str>) -> PostPayload {
        PostPayload {
            title: title.map(String::from),
            contents: contents.map(String::from),
        }
    }

    #[test]
    fn accepts_complete_post() {
        let new_post = validate_post_payload(&post(Some("Hi"), Some("World"))).unwrap();
        assert_eq!(new_post.title, "Hi");
        assert_eq!(new_post.contents, "World");
    }

    #[test]
    fn rejects_post_missing_either_field() {
        let cases = [
            post(None, Some("World")),
            post(Some("Hi"), None),
            post(Some(""), Some("World")),
            post(Some("Hi"), Some("")),
            post(None, None),
        ];

        for payload in cases {
            let err = validate_post_payload(&payload).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(msg) if msg == messages::POST_PAYLOAD_INVALID),
                "unexpected result for {:?}",
                payload
            );
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(validate_post_payload(&post(Some(" "), Some(" "))).is_ok());
    }

    #[test]
    fn comment_requires_text() {
        let ok = validate_comment_payload(&CommentPayload {
            text: Some("nice".into()),
        })
        .unwrap();
        assert_eq!(ok.text, "nice");

        for text in [None, Some(String::new())] {
            let err = validate_comment_payload(&CommentPayload { text }).unwrap_err();
            assert_eq!(err.to_string(), messages::COMMENT_PAYLOAD_INVALID);
        }
    }
}
