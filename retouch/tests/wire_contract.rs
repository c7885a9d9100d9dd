//! Contract tests for the JSON wire format.
//!
//! These pin the exact request shape the service expects and the
//! response shapes the SDK consumes, so a refactor cannot silently
//! change the wire contract.

use retouch::{
    prompt, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Hotspot,
    ImageResource, InlineImage, Part, PredictInstance, PredictParameters, PredictRequest,
    ResponseModality, TextStyle,
};

fn edit_request(image: InlineImage, instruction: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part::image(image), Part::text(instruction)],
        }],
        generation_config: Some(GenerationConfig {
            response_modalities: vec![ResponseModality::Image, ResponseModality::Text],
        }),
    }
}

#[tokio::test]
async fn edit_request_orders_image_before_instruction() {
    let image = ImageResource::from_bytes("image/jpeg", b"fake-jpeg".to_vec())
        .encode()
        .await
        .unwrap();
    let request = edit_request(image, prompt::remove_background());
    let value = serde_json::to_value(&request).unwrap();

    let parts = value["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
    assert!(parts[0].get("text").is_none());
    assert!(parts[1].get("inlineData").is_none());
    assert!(parts[1]["text"]
        .as_str()
        .unwrap()
        .contains("transparent background"));
}

#[test]
fn edit_request_asks_for_both_modalities() {
    let request = edit_request(
        InlineImage::new("image/png", "QUJD"),
        prompt::localized_edit("remove the scratch", Hotspot::new(10, 20)),
    );
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value["generationConfig"]["responseModalities"],
        serde_json::json!(["IMAGE", "TEXT"])
    );
}

#[test]
fn text_to_image_request_matches_the_fixed_configuration() {
    let request = PredictRequest {
        instances: vec![PredictInstance {
            prompt: "a red bicycle".to_string(),
        }],
        parameters: PredictParameters::default(),
    };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["instances"][0]["prompt"], "a red bicycle");
    assert_eq!(value["parameters"]["sampleCount"], 1);
    assert_eq!(value["parameters"]["outputMimeType"], "image/png");
    assert_eq!(value["parameters"]["aspectRatio"], "1:1");
}

#[test]
fn response_with_inline_png_decodes() {
    let response: GenerateContentResponse = serde_json::from_str(
        r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "cGF5bG9hZA=="}}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#,
    )
    .unwrap();

    let part = response.parts().next().unwrap();
    let image = part.inline_data.as_ref().unwrap();
    assert_eq!(image.to_data_uri(), "data:image/png;base64,cGF5bG9hZA==");
}

#[test]
fn blocked_response_decodes_feedback_fields() {
    let response: GenerateContentResponse = serde_json::from_str(
        r#"{
            "promptFeedback": {
                "blockReason": "PROHIBITED_CONTENT",
                "blockReasonMessage": "request violates policy"
            }
        }"#,
    )
    .unwrap();

    let feedback = response.prompt_feedback.unwrap();
    assert_eq!(feedback.block_reason.as_deref(), Some("PROHIBITED_CONTENT"));
    assert_eq!(
        feedback.block_reason_message.as_deref(),
        Some("request violates policy")
    );
}

#[test]
fn style_branches_change_the_instruction_not_the_envelope() {
    let strict = prompt::text_replacement("SALE", "SOLD", &TextStyle::default());
    let styled = prompt::text_replacement(
        "SALE",
        "SOLD",
        &TextStyle::default().with_font("serif"),
    );
    assert!(strict.contains("analyze the original text"));
    assert!(styled.contains("Font: render the replacement text in a serif font."));

    for instruction in [strict, styled] {
        let request = edit_request(InlineImage::new("image/png", "QUJD"), instruction);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
    }
}
