use serde::{Deserialize, Serialize};

/// Source photograph used for every transformation.
pub const INPUT_IMAGE_URL: &str = "https://i.ibb.co/GQy3R6qx/cluttered-living-room-JPWJRX.jpg";

const REDESIGN_PROMPT: &str = "Keep the walls and windows similar to the original. Transform the room with beautiful, functional furniture and thoughtful design. Add stylish, comfortable seating, elegant storage solutions, and practical furniture pieces that make the space usable and inviting. Incorporate warm ambient lighting, tasteful decor accents, and a cohesive color scheme. Arrange furniture to create clear pathways and functional zones. Include cozy textiles, plants, and personal touches that make the room feel lived-in and welcoming. Remove any watermarks, logos, or text overlays that may be present in the original image. The result should be a gorgeous, highly functional space that's both aesthetically pleasing and comfortable for everyday living.";

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub response_format: String,
    pub image_url: String,
}

impl ImageGenerationRequest {
    /// The fixed room-redesign request; only the model varies between calls.
    pub fn room_redesign(model_id: &str) -> Self {
        Self {
            model: model_id.to_string(),
            prompt: REDESIGN_PROMPT.to_string(),
            width: 1024,
            height: 1024,
            response_format: "base64".to_string(),
            image_url: INPUT_IMAGE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageGenerationResponse {
    /// `data:image/jpeg;base64,<payload>` string holding the generated image.
    pub image_data: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct TogetherImageResponse {
    pub data: Vec<TogetherImageData>,
}

#[derive(Debug, Deserialize)]
pub struct TogetherImageData {
    pub b64_json: Option<String>,
}
