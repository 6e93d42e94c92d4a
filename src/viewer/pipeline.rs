//! # 解码流水线模块
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限 / 内存上限快速拒绝
//! 3. 完整解码
//! 4. 再次校验实际尺寸，封装为 `ImageHandle`

use image::{GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

use super::source::{ImageHandle, RawImageData};
use super::{PpmViewer, ViewError, ViewerConfig};

impl PpmViewer {
    /// 将原始字节解码为图像句柄。
    pub(super) fn decode(
        raw: RawImageData,
        config: &ViewerConfig,
    ) -> Result<ImageHandle, ViewError> {
        let path = raw.path.as_path();

        let format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| ViewError::decode(path, format!("不支持的图片格式：{}", e)))?;
        if format != ImageFormat::Pnm {
            log::debug!("输入不是 PNM，按 {:?} 解码: {}", format, path.display());
        }

        let (header_width, header_height) = Self::inspect_dimensions(path, &raw.bytes)?;
        Self::validate_pixel_limits(path, config, header_width, header_height)?;
        Self::validate_decoded_memory_limits(path, config, header_width, header_height)?;

        let decoded = image::load_from_memory_with_format(&raw.bytes, format)
            .map_err(|e| ViewError::decode(path, format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        Self::validate_pixel_limits(path, config, width, height)?;

        log::info!(
            "✅ 图片解码成功 - 格式: {:?} 尺寸: {}x{} 颜色: {:?}",
            format,
            width,
            height,
            decoded.color()
        );

        Ok(ImageHandle::new(decoded, raw.path))
    }

    /// 仅通过图片头读取宽高，用于完整解码前的上限检查。
    fn inspect_dimensions(path: &Path, bytes: &[u8]) -> Result<(u32, u32), ViewError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ViewError::decode(path, format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ViewError::decode(path, format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        path: &Path,
        config: &ViewerConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ViewError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ViewError::decode(path, "图片像素数溢出"))?;

        if pixels == 0 {
            return Err(ViewError::decode(path, "图片尺寸为 0"));
        }

        if pixels > config.max_decoded_pixels {
            return Err(ViewError::decode(
                path,
                format!(
                    "图片像素过大：{} 像素（限制：{} 像素）",
                    pixels, config.max_decoded_pixels
                ),
            ));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        path: &Path,
        config: &ViewerConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ViewError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ViewError::decode(path, "图片解码内存估算溢出"))?;

        if estimated > config.max_decoded_bytes {
            return Err(ViewError::decode(
                path,
                format!(
                    "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                    estimated as f64 / 1024.0 / 1024.0,
                    config.max_decoded_bytes as f64 / 1024.0 / 1024.0
                ),
            ));
        }

        Ok(())
    }
}
