//! # PNG 输出模块
//!
//! 先在内存中完成编码，编码成功后才写文件：编码失败不会留下半个 PNG，
//! 也不会破坏上一次运行留下的输出。

use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

use super::ViewError;
use super::source::ImageHandle;

/// 将图像编码为 PNG 字节。
pub(crate) fn encode_png(handle: &ImageHandle, target: &Path) -> Result<Vec<u8>, ViewError> {
    let mut cursor = Cursor::new(Vec::new());
    handle
        .image()
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| ViewError::save(target, format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

/// 编码并写入 `target`，已存在的同名文件会被覆盖。
pub(crate) fn save_png(handle: &ImageHandle, target: &Path) -> Result<(), ViewError> {
    let bytes = encode_png(handle, target)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ViewError::save(target, format!("创建输出目录 '{}' 失败：{}", parent.display(), e))
            })?;
            log::debug!("已创建输出目录: {}", parent.display());
        }
    }

    std::fs::write(target, &bytes)
        .map_err(|e| ViewError::save(target, format!("写入文件失败：{}", e)))?;

    log::info!("💾 PNG 已写入 - {} ({} 字节)", target.display(), bytes.len());
    Ok(())
}
