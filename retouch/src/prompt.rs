//! Instruction compilation for edit operations.
//!
//! Each operation kind maps to a deterministic natural-language
//! instruction built from typed parameters. Instructions quote the
//! user's request verbatim so it stays distinguishable from policy
//! text, and every image-producing instruction ends with an explicit
//! image-only output constraint.

use crate::types::{Hotspot, TextStyle};

/// Accumulates instruction clauses and joins them in insertion order.
///
/// Conditional prompt assembly goes through this builder so that adding
/// a clause later cannot reorder existing ones.
#[derive(Debug, Default)]
struct InstructionBuilder {
    clauses: Vec<String>,
}

impl InstructionBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn clause(mut self, text: impl Into<String>) -> Self {
        self.clauses.push(text.into());
        self
    }

    fn build(self) -> String {
        self.clauses.join("\n")
    }
}

/// Safety directives embedded in every edit instruction.
///
/// Skin-tone adjustments are ordinary enhancements and must be honored;
/// changing a subject's fundamental race or ethnicity must be refused,
/// with ambiguous requests resolved toward refusal.
const SAFETY_POLICY: &str = "Safety & Ethics Policy:\n\
- You MUST fulfill requests to adjust skin tone, such as 'give me a tan', \
'make my skin darker', or 'lighten my skin'. These are standard photo enhancements.\n\
- You MUST REFUSE any request to change a person's fundamental race or ethnicity. \
If a request is ambiguous, err on the side of refusal and do not change racial characteristics.";

const FILTER_SAFETY_EXTRA: &str = "- Filters may shift colors and style, \
but they MUST NOT alter a person's fundamental race or ethnicity.";

const IMAGE_ONLY_OUTPUT: &str =
    "Output: Return ONLY the final edited image. Do not return any text.";

/// Compiles the instruction for a localized edit centered on a hotspot.
pub fn localized_edit(user_prompt: &str, hotspot: Hotspot) -> String {
    InstructionBuilder::new()
        .clause(
            "You are an expert photo editor AI. Perform a natural, localized edit \
             on the provided image.",
        )
        .clause(format!("User request: \"{user_prompt}\""))
        .clause(format!(
            "Edit location: focus on the area around pixel coordinates (x: {}, y: {}).",
            hotspot.x, hotspot.y
        ))
        .clause(
            "The edit must blend seamlessly into the surrounding area. The rest of \
             the image must remain identical to the original.",
        )
        .clause(SAFETY_POLICY)
        .clause(IMAGE_ONLY_OUTPUT)
        .build()
}

/// Compiles the instruction for a stylistic filter over the whole image.
pub fn filter(user_prompt: &str) -> String {
    InstructionBuilder::new()
        .clause(
            "You are an expert photo editor AI. Apply a stylistic filter to the \
             entire provided image.",
        )
        .clause(format!("Filter request: \"{user_prompt}\""))
        .clause(format!("{SAFETY_POLICY}\n{FILTER_SAFETY_EXTRA}"))
        .clause(IMAGE_ONLY_OUTPUT)
        .build()
}

/// Compiles the instruction for a global, photorealistic adjustment.
pub fn adjustment(user_prompt: &str) -> String {
    InstructionBuilder::new()
        .clause(
            "You are an expert photo editor AI. Perform a natural, global adjustment \
             to the provided image.",
        )
        .clause(format!("User request: \"{user_prompt}\""))
        .clause(
            "The adjustment must be applied uniformly across the whole frame. \
             The result must be photorealistic.",
        )
        .clause(SAFETY_POLICY)
        .clause(IMAGE_ONLY_OUTPUT)
        .build()
}

/// Compiles the instruction for a background removal cutout.
pub fn remove_background() -> String {
    InstructionBuilder::new()
        .clause(
            "You are an expert photo editor AI. Remove the background of the \
             provided image entirely.",
        )
        .clause(
            "Identify the main subject and produce a precise cutout, preserving \
             fine edge detail such as individual hairs and fur.",
        )
        .clause(
            "The result must have a fully transparent background (alpha channel) \
             and must be returned as a PNG.",
        )
        .clause(
            "Do not add shadows, outlines, or borders. Do not alter the subject \
             itself in any way.",
        )
        .clause(IMAGE_ONLY_OUTPUT)
        .build()
}

/// Compiles the instruction for replacing text found in the image.
///
/// With an empty [`TextStyle`] the instruction demands strict matching
/// of the original text's appearance; with any field set it emits one
/// line per provided field and lets the model infer the rest.
pub fn text_replacement(find: &str, replace: &str, style: &TextStyle) -> String {
    let mut builder = InstructionBuilder::new()
        .clause(
            "You are an expert photo editor AI. Replace text that appears in the \
             provided image.",
        )
        .clause(format!(
            "Find the text \"{find}\" and replace it with \"{replace}\"."
        ))
        .clause("If the text appears more than once, edit the most prominent instance.");

    if style.is_empty() {
        builder = builder.clause(
            "Carefully analyze the original text: its font, its color, its size and \
             scale, any perspective or warp, and how lighting and shadows interact \
             with it. Reproduce those exact attributes on the replacement text.",
        );
    } else {
        if let Some(font) = &style.font {
            builder = builder.clause(format!("Font: render the replacement text in a {font} font."));
        }
        if let Some(size) = &style.size {
            builder = builder.clause(format!("Size: render the replacement text at {size} size."));
        }
        if let Some(color) = &style.color {
            builder = builder.clause(format!("Color: render the replacement text in {color}."));
        }
        if let Some(bold) = style.bold {
            builder = builder.clause(if bold {
                "Weight: render the replacement text in bold."
            } else {
                "Weight: render the replacement text at regular weight, not bold."
            });
        }
        if let Some(italic) = style.italic {
            builder = builder.clause(if italic {
                "Style: render the replacement text in italics."
            } else {
                "Style: render the replacement text upright, not italic."
            });
        }
        builder = builder.clause(
            "For any attribute not specified above, infer it from the original \
             text's appearance, or from the surrounding scene if no original text \
             existed.",
        );
    }

    builder
        .clause("Reconstruct the background behind the removed text before placing the new text.")
        .clause("Everything else in the image must remain pixel-identical to the original.")
        .clause(IMAGE_ONLY_OUTPUT)
        .build()
}

/// Compiles the instruction for describing the image.
pub fn describe() -> String {
    InstructionBuilder::new()
        .clause(
            "Describe this image as a single descriptive paragraph covering the \
             subject, composition, setting, lighting, artistic style, and dominant \
             colors.",
        )
        .clause("The paragraph must be directly usable as a prompt for an image generation model.")
        .clause("Return only the paragraph. Do not include any preamble or explanation.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_is_deterministic() {
        let hotspot = Hotspot::new(420, 310);
        assert_eq!(
            localized_edit("remove the lamp post", hotspot),
            localized_edit("remove the lamp post", hotspot)
        );
        assert_eq!(filter("1970s film look"), filter("1970s film look"));
    }

    #[test]
    fn localized_edit_embeds_hotspot_and_quoted_request() {
        let instruction = localized_edit("remove the lamp post", Hotspot::new(12, 34));
        assert!(instruction.contains("(x: 12, y: 34)"));
        assert!(instruction.contains("\"remove the lamp post\""));
        assert!(instruction.contains("blend seamlessly"));
        assert!(instruction.contains("remain identical"));
        assert!(instruction.ends_with(IMAGE_ONLY_OUTPUT));
    }

    #[test]
    fn edit_instructions_carry_the_safety_policy() {
        for instruction in [
            localized_edit("tan my skin", Hotspot::new(1, 1)),
            filter("make it noir"),
            adjustment("brighten the shadows"),
        ] {
            assert!(instruction.contains("standard photo enhancements"));
            assert!(instruction.contains("MUST REFUSE"));
            assert!(instruction.contains("err on the side of refusal"));
        }
        // Only filters carry the color-shift directive.
        assert!(filter("sepia").contains("MUST NOT alter"));
        assert!(!adjustment("sepia").contains("MUST NOT alter"));
    }

    #[test]
    fn adjustment_is_uniform_and_photorealistic() {
        let instruction = adjustment("warmer tones");
        assert!(instruction.contains("uniformly across the whole frame"));
        assert!(instruction.contains("photorealistic"));
    }

    #[test]
    fn background_removal_demands_transparency_and_png() {
        let instruction = remove_background();
        assert!(instruction.contains("transparent background"));
        assert!(instruction.contains("PNG"));
        assert!(instruction.contains("hairs and fur"));
        assert!(instruction.contains("Do not add shadows"));
        assert!(instruction.ends_with(IMAGE_ONLY_OUTPUT));
    }

    #[test]
    fn empty_style_takes_the_strict_matching_branch() {
        let instruction = text_replacement("OPEN", "CLOSED", &TextStyle::default());
        assert!(instruction.contains("analyze the original text"));
        assert!(instruction.contains("perspective or warp"));
        assert!(!instruction.contains("Font:"));
        assert!(!instruction.contains("infer it from the original"));
    }

    #[test]
    fn provided_style_fields_emit_exactly_their_lines() {
        let style = TextStyle::default().with_font("serif").with_color("#ff0000");
        let instruction = text_replacement("OPEN", "CLOSED", &style);
        assert!(instruction.contains("Font: render the replacement text in a serif font."));
        assert!(instruction.contains("Color: render the replacement text in #ff0000."));
        assert!(!instruction.contains("Size:"));
        assert!(!instruction.contains("Weight:"));
        assert!(!instruction.contains("Style: render"));
        assert!(instruction.contains("infer it from the original"));
        assert!(!instruction.contains("analyze the original text"));
    }

    #[test]
    fn explicit_false_flags_still_emit_lines() {
        let style = TextStyle::default().with_bold(false).with_italic(false);
        let instruction = text_replacement("a", "b", &style);
        assert!(instruction.contains("regular weight, not bold"));
        assert!(instruction.contains("upright, not italic"));
    }

    #[test]
    fn replacement_always_demands_reconstruction_and_prominence() {
        for style in [TextStyle::default(), TextStyle::default().with_size("large")] {
            let instruction = text_replacement("OPEN", "CLOSED", &style);
            assert!(instruction.contains("most prominent instance"));
            assert!(instruction.contains("Reconstruct the background"));
            assert!(instruction.contains("pixel-identical"));
        }
    }

    #[test]
    fn describe_forbids_preamble_and_requests_one_paragraph() {
        let instruction = describe();
        assert!(instruction.contains("single descriptive paragraph"));
        assert!(instruction.contains("dominant"));
        assert!(instruction.contains("Do not include any preamble"));
        assert!(!instruction.contains(IMAGE_ONLY_OUTPUT));
    }
}
