use crate::{
    error::Result,
    models::ImageGenerationRequest,
    output::{output_filename, save_data_url},
    together::ImageGenerator,
};
use std::path::Path;

/// Outcome of one model in a batch run: the saved filename, or the error
/// message that stopped that model. Kept only long enough to print the
/// summary.
#[derive(Debug)]
pub struct BatchRecord {
    pub model_id: String,
    pub outcome: std::result::Result<String, String>,
}

impl BatchRecord {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Generate, decode and save one model's transformation. Returns the
/// filename the image was written to.
pub async fn process_model(
    generator: &dyn ImageGenerator,
    model_id: &str,
    out_dir: &Path,
) -> Result<String> {
    let request = ImageGenerationRequest::room_redesign(model_id);
    let response = generator.generate(request).await?;

    let filename = output_filename(model_id);
    save_data_url(&response.image_data, out_dir, &filename)?;
    Ok(filename)
}

/// Run every model in order, one network call at a time. A model's failure
/// is recorded and the loop moves on; nothing short of the driver itself
/// failing stops the run.
pub async fn run_batch(
    generator: &dyn ImageGenerator,
    model_ids: &[&str],
    out_dir: &Path,
) -> Vec<BatchRecord> {
    let mut records = Vec::with_capacity(model_ids.len());

    for (index, model_id) in model_ids.iter().enumerate() {
        log::info!("[{}/{}] Processing {}", index + 1, model_ids.len(), model_id);

        let outcome = match process_model(generator, model_id, out_dir).await {
            Ok(filename) => {
                log::info!("📁 Saved to: {}", filename);
                Ok(filename)
            }
            Err(e) => {
                log::error!("Failed to process {}: {}", model_id, e);
                Err(e.to_string())
            }
        };

        records.push(BatchRecord {
            model_id: model_id.to_string(),
            outcome,
        });
    }

    records
}

/// Summary in batch order: counts first, then one line per model.
pub fn print_summary(records: &[BatchRecord]) {
    let successes = records.iter().filter(|r| r.succeeded()).count();
    let failures = records.len() - successes;

    log::info!("Batch complete: {} succeeded, {} failed", successes, failures);
    for record in records {
        match &record.outcome {
            Ok(filename) => log::info!("  ✅ {} -> {}", record.model_id, filename),
            Err(message) => log::info!("  ❌ {} -> {}", record.model_id, message),
        }
    }
}
