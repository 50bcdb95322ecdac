//! Image decoding and tensor preprocessing for the leaf classifier.

use anyhow::Context;
use image::imageops::FilterType;

/// Input edge length the disease model was trained on.
pub const INPUT_SIZE: u32 = 256;

/// Decode uploaded bytes, resize to the model input size, and lay out RGB
/// values as a flat CHW tensor scaled to `[0, 1]`.
///
/// The training pipeline used a plain resize + to-tensor transform with no
/// mean/std normalization, so none is applied here. Bilinear resampling
/// matches the transform's default filter.
pub fn image_to_tensor(bytes: &[u8]) -> anyhow::Result<Vec<f32>> {
    let img = image::load_from_memory(bytes).context("decode uploaded image")?;
    let rgb = img
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();
    let num_pixels = (INPUT_SIZE * INPUT_SIZE) as usize;

    // CHW layout: all R values, then all G, then all B.
    let mut tensor = vec![0.0f32; 3 * num_pixels];
    for (i, pixel) in rgb.pixels().enumerate() {
        tensor[i] = pixel[0] as f32 / 255.0;
        tensor[num_pixels + i] = pixel[1] as f32 / 255.0;
        tensor[2 * num_pixels + i] = pixel[2] as f32 / 255.0;
    }
    Ok(tensor)
}

/// Best-effort mime type of uploaded image bytes, used for the remote vision
/// payload. Unrecognized formats fall back to JPEG.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("image/jpeg")
}
