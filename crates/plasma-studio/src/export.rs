use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use plasma_field::{FieldState, PixelBuffer};

/// Writes `buffer` to `path` as an RGBA8 PNG, creating parent directories.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if buffer.is_empty() {
        bail!("refusing to write empty {}x{} image", buffer.width(), buffer.height());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    log::info!("wrote {}", path.display());
    Ok(())
}

/// File name for a viewer snapshot; encodes size and seeds.
pub fn snapshot_path(dir: &Path, buffer: &PixelBuffer, field: &FieldState) -> PathBuf {
    let [c0, c1, c2, c3] = field.corners();
    dir.join(format!(
        "plasma-{}x{}-{:.4}-{:.4}-{:.4}-{:.4}.png",
        buffer.width(),
        buffer.height(),
        c0,
        c1,
        c2,
        c3
    ))
}
