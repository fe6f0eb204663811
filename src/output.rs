use crate::error::{Result, TogetherError};
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

/// Derive a filename-safe slug from a model identifier: the last
/// path segment, lowercased, with anything outside `[a-z0-9]` mapped to `_`.
pub fn slugify_model(model: &str) -> String {
    let last = model.rsplit('/').next().unwrap_or(model);
    let name = if last.is_empty() { model } else { last };
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// `<slug>_transformed.jpg`. Models that collapse to the same slug share a
/// filename; the later write wins.
pub fn output_filename(model: &str) -> String {
    format!("{}_transformed.jpg", slugify_model(model))
}

/// Decode a `data:<mime>;base64,<payload>` string and write the bytes to
/// `dir/filename`, overwriting any existing file. Validation happens before
/// anything touches the filesystem.
pub fn save_data_url(data_url: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    let (header, payload) = data_url.split_once(',').ok_or_else(|| {
        TogetherError::DecodeError("Invalid image data format: no comma separator".into())
    })?;

    if header.is_empty() {
        return Err(TogetherError::DecodeError(
            "Invalid image data format: empty data URL header".into(),
        ));
    }
    if payload.is_empty() {
        return Err(TogetherError::DecodeError(
            "Invalid image data format: missing base64 payload".into(),
        ));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| TogetherError::DecodeError(e.to_string()))?;

    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|e| TogetherError::IoError(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir() -> PathBuf {
        let dir = env::temp_dir().join(format!("roomstyle-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_slug_for_flux_dev() {
        assert_eq!(
            output_filename("black-forest-labs/FLUX.1-dev"),
            "flux_1_dev_transformed.jpg"
        );
    }

    #[test]
    fn test_slug_is_deterministic_and_idempotent() {
        let model = "stabilityai/stable-diffusion-xl-base-1.0";
        let first = slugify_model(model);
        let second = slugify_model(model);
        assert_eq!(first, second);
        assert_eq!(slugify_model(&first), first);
    }

    #[test]
    fn test_slug_alphabet() {
        for model in [
            "black-forest-labs/FLUX.1.1-pro",
            "runwayml/Stable Diffusion v1.5",
            "no-separator",
        ] {
            let slug = slugify_model(model);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in slug {:?}",
                slug
            );
        }
    }

    #[test]
    fn test_slug_falls_back_on_trailing_separator() {
        assert_eq!(slugify_model("vendor/"), "vendor_");
    }

    #[test]
    fn test_save_data_url_reproduces_bytes() {
        let dir = temp_dir();
        let bytes = [0xffu8, 0xd8, 0xff, 0xe0, 0x00, 0x10];
        let data_url = format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(bytes)
        );

        let path = save_data_url(&data_url, &dir, "out.jpg").unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_data_url_overwrites() {
        let dir = temp_dir();
        let encode = |b: &[u8]| {
            format!(
                "data:image/jpeg;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(b)
            )
        };

        save_data_url(&encode(b"first"), &dir, "out.jpg").unwrap();
        let path = save_data_url(&encode(b"second"), &dir, "out.jpg").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_data_url_rejects_missing_comma() {
        let dir = temp_dir();
        let err = save_data_url("data:image/jpeg;base64", &dir, "out.jpg").unwrap_err();

        assert!(err.to_string().contains("no comma separator"), "{}", err);
        assert!(!dir.join("out.jpg").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_data_url_rejects_empty_payload() {
        let dir = temp_dir();
        let err = save_data_url("data:image/jpeg;base64,", &dir, "out.jpg").unwrap_err();

        assert!(err.to_string().contains("missing base64 payload"), "{}", err);
        assert!(!dir.join("out.jpg").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_data_url_rejects_empty_header() {
        let dir = temp_dir();
        let err = save_data_url(",aGVsbG8=", &dir, "out.jpg").unwrap_err();

        assert!(err.to_string().contains("empty data URL header"), "{}", err);
        assert!(!dir.join("out.jpg").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_data_url_rejects_invalid_base64() {
        let dir = temp_dir();
        let result = save_data_url("data:image/jpeg;base64,not base64!!", &dir, "out.jpg");

        assert!(matches!(result, Err(TogetherError::DecodeError(_))));
        assert!(!dir.join("out.jpg").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
