//! # 加载与校验模块
//!
//! 存在性检查必须先于任何读取：不存在的路径直接返回 `NotFound`，不会触碰解码器。
//! 读取失败与体积超限都归为解码阶段错误。

use std::path::Path;

use super::source::RawImageData;
use super::{PpmViewer, ViewError, ViewerConfig};

impl PpmViewer {
    /// 存在性检查。
    pub(super) fn ensure_exists(path: &Path) -> Result<(), ViewError> {
        if !path.exists() {
            log::debug!("输入文件不存在: {}", path.display());
            return Err(ViewError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// 从本地路径加载原始字节。
    pub(super) fn load_from_file(
        path: &Path,
        config: &ViewerConfig,
    ) -> Result<RawImageData, ViewError> {
        log::info!("📁 开始读取图片 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path)
            .map_err(|e| ViewError::decode(path, format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(ViewError::decode(path, "路径不是普通文件"));
        }

        if metadata.len() > config.max_file_size {
            return Err(ViewError::decode(
                path,
                format!(
                    "文件过大：{:.2} MB（限制：{:.2} MB）",
                    metadata.len() as f64 / 1024.0 / 1024.0,
                    config.max_file_size as f64 / 1024.0 / 1024.0
                ),
            ));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ViewError::decode(path, format!("无法读取图片文件：{}", e)))?;

        if bytes.is_empty() {
            return Err(ViewError::decode(path, "图片内容为空"));
        }

        Ok(RawImageData {
            bytes,
            path: path.to_path_buf(),
        })
    }
}
