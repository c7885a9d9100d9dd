//! Response classification.
//!
//! Resolves a heterogeneous model reply into exactly one outcome. The
//! rules form an explicit ordered list evaluated top to bottom; the
//! first rule that matches decides the call. A response can satisfy
//! several rules at once (e.g. blocked *and* carrying an image part),
//! so the ordering is part of the contract.

use crate::error::{Error, Result};
use crate::types::{finish_reason, GenerateContentResponse, InlineImage, PredictResponse};

type Rule = fn(&GenerateContentResponse, &str) -> Option<Result<InlineImage>>;

/// Priority order: block > first image > abnormal stop > text fallback.
const IMAGE_RULES: [Rule; 4] = [blocked, first_image, abnormal_stop, text_fallback];

/// Resolves an image-producing call's response.
pub(crate) fn resolve_image(
    response: &GenerateContentResponse,
    context: &str,
) -> Result<InlineImage> {
    for rule in IMAGE_RULES {
        if let Some(outcome) = rule(response, context) {
            return outcome;
        }
    }
    // text_fallback always matches; this arm is unreachable.
    Err(Error::NoImageReturned {
        detail: "empty response".to_string(),
        context: context.to_string(),
    })
}

/// Rule 1: a block indicator wins over everything else in the response.
fn blocked(response: &GenerateContentResponse, context: &str) -> Option<Result<InlineImage>> {
    let feedback = response.prompt_feedback.as_ref()?;
    let reason = feedback.block_reason.as_ref()?;
    Some(Err(Error::Blocked {
        reason: reason.clone(),
        message: feedback.block_reason_message.clone(),
        context: context.to_string(),
    }))
}

/// Rule 2: the first part carrying inline image data wins; later parts
/// are ignored.
fn first_image(response: &GenerateContentResponse, _context: &str) -> Option<Result<InlineImage>> {
    response
        .parts()
        .find_map(|part| part.inline_data.clone())
        .map(Ok)
}

/// Rule 3: no image and a non-nominal finish reason.
fn abnormal_stop(response: &GenerateContentResponse, context: &str) -> Option<Result<InlineImage>> {
    let reason = response.finish_reason()?;
    if reason == finish_reason::STOP {
        return None;
    }
    Some(Err(Error::GenerationStopped {
        reason: reason.to_string(),
        context: context.to_string(),
    }))
}

/// Rule 4: surface whatever text the model did return as a diagnostic.
fn text_fallback(response: &GenerateContentResponse, context: &str) -> Option<Result<InlineImage>> {
    let detail = match response.text() {
        Some(text) => format!("the model replied with text instead: \"{text}\""),
        None => "the model returned no image data".to_string(),
    };
    Some(Err(Error::NoImageReturned {
        detail,
        context: context.to_string(),
    }))
}

/// Resolves a description call's response: a block indicator still takes
/// precedence, otherwise non-empty trimmed text succeeds.
pub(crate) fn resolve_text(response: &GenerateContentResponse, context: &str) -> Result<String> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(Error::Blocked {
                reason: reason.clone(),
                message: feedback.block_reason_message.clone(),
                context: context.to_string(),
            });
        }
    }
    match response.text() {
        Some(text) => Ok(text),
        None => Err(Error::NoDescription {
            finish_reason: response.finish_reason().map(str::to_string),
        }),
    }
}

/// Resolves an image-synthesis call's response: the first generated
/// entry succeeds, an empty collection fails.
pub(crate) fn resolve_predictions(
    response: &PredictResponse,
    context: &str,
) -> Result<InlineImage> {
    match response.predictions.first() {
        Some(prediction) => Ok(InlineImage::new(
            prediction
                .mime_type
                .clone()
                .unwrap_or_else(|| "image/png".to_string()),
            prediction.bytes_base64_encoded.clone(),
        )),
        None => Err(Error::NoImageReturned {
            detail: "the service returned zero generated images".to_string(),
            context: context.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, Content, Part, Prediction, PromptFeedback};

    fn response(
        block_reason: Option<&str>,
        parts: Vec<Part>,
        finish: Option<&str>,
    ) -> GenerateContentResponse {
        GenerateContentResponse {
            prompt_feedback: block_reason.map(|reason| PromptFeedback {
                block_reason: Some(reason.to_string()),
                block_reason_message: None,
            }),
            candidates: vec![Candidate {
                content: Some(Content { parts }),
                finish_reason: finish.map(str::to_string),
            }],
        }
    }

    #[test]
    fn block_takes_precedence_over_image() {
        let resp = response(
            Some("SAFETY"),
            vec![Part::image(InlineImage::new("image/png", "QUJD"))],
            Some("STOP"),
        );
        let err = resolve_image(&resp, "filter").unwrap_err();
        match err {
            Error::Blocked { reason, context, .. } => {
                assert_eq!(reason, "SAFETY");
                assert_eq!(context, "filter");
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn first_image_wins_over_later_parts() {
        let resp = response(
            None,
            vec![
                Part::text("here you go"),
                Part::image(InlineImage::new("image/png", "Zmlyc3Q=")),
                Part::image(InlineImage::new("image/jpeg", "c2Vjb25k")),
            ],
            Some("STOP"),
        );
        let image = resolve_image(&resp, "localized edit").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "Zmlyc3Q=");
    }

    #[test]
    fn abnormal_finish_without_image_is_generation_stopped() {
        let resp = response(None, vec![], Some("SAFETY"));
        let err = resolve_image(&resp, "adjustment").unwrap_err();
        match err {
            Error::GenerationStopped { reason, context } => {
                assert_eq!(reason, "SAFETY");
                assert_eq!(context, "adjustment");
            }
            other => panic!("expected GenerationStopped, got {other:?}"),
        }
    }

    #[test]
    fn nominal_stop_with_text_surfaces_the_text_verbatim() {
        let resp = response(
            None,
            vec![Part::text("I cannot edit this image.")],
            Some("STOP"),
        );
        let err = resolve_image(&resp, "background removal").unwrap_err();
        match err {
            Error::NoImageReturned { detail, context } => {
                assert!(detail.contains("I cannot edit this image."));
                assert_eq!(context, "background removal");
            }
            other => panic!("expected NoImageReturned, got {other:?}"),
        }
    }

    #[test]
    fn empty_response_gets_a_generic_explanation() {
        let resp = GenerateContentResponse::default();
        let err = resolve_image(&resp, "filter").unwrap_err();
        match err {
            Error::NoImageReturned { detail, .. } => {
                assert_eq!(detail, "the model returned no image data");
            }
            other => panic!("expected NoImageReturned, got {other:?}"),
        }
    }

    #[test]
    fn block_message_is_carried_through() {
        let resp = GenerateContentResponse {
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("PROHIBITED_CONTENT".to_string()),
                block_reason_message: Some("request violates policy".to_string()),
            }),
            candidates: vec![],
        };
        let err = resolve_image(&resp, "filter").unwrap_err();
        assert!(err.is_blocked());
        assert!(err.to_string().contains("request violates policy"));
    }

    #[test]
    fn describe_returns_trimmed_text() {
        let resp = response(None, vec![Part::text("  A quiet street.  ")], Some("STOP"));
        assert_eq!(resolve_text(&resp, "description").unwrap(), "A quiet street.");
    }

    #[test]
    fn describe_block_takes_precedence() {
        let resp = response(Some("OTHER"), vec![Part::text("text")], Some("STOP"));
        assert!(resolve_text(&resp, "description").unwrap_err().is_blocked());
    }

    #[test]
    fn describe_without_text_carries_finish_reason() {
        let resp = response(None, vec![], Some("MAX_TOKENS"));
        match resolve_text(&resp, "description").unwrap_err() {
            Error::NoDescription { finish_reason } => {
                assert_eq!(finish_reason.as_deref(), Some("MAX_TOKENS"));
            }
            other => panic!("expected NoDescription, got {other:?}"),
        }
    }

    #[test]
    fn first_prediction_wins() {
        let resp = PredictResponse {
            predictions: vec![
                Prediction {
                    bytes_base64_encoded: "Zmlyc3Q=".to_string(),
                    mime_type: Some("image/png".to_string()),
                },
                Prediction {
                    bytes_base64_encoded: "c2Vjb25k".to_string(),
                    mime_type: None,
                },
            ],
        };
        let image = resolve_predictions(&resp, "image generation").unwrap();
        assert_eq!(image.data, "Zmlyc3Q=");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn zero_predictions_is_no_image_returned() {
        let err = resolve_predictions(&PredictResponse::default(), "image generation").unwrap_err();
        assert!(matches!(err, Error::NoImageReturned { .. }));
    }
}
