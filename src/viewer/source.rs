//! # 数据模型
//!
//! - `RawImageData`：已读取但未解码的字节
//! - `ImageHandle`：解码后的图像，只读地交给显示与保存两个阶段
//! - `ViewOutcome`：一次成功调用的结构化结果

use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::Serialize;

/// 加载阶段输出。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    pub(crate) path: PathBuf,
}

/// 解码后的图像句柄。
///
/// 只提供借用访问，显示与保存之间无法修改像素。
#[derive(Debug, Clone)]
pub struct ImageHandle {
    image: DynamicImage,
    source: PathBuf,
}

impl ImageHandle {
    pub(crate) fn new(image: DynamicImage, source: PathBuf) -> Self {
        Self { image, source }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn color(&self) -> image::ColorType {
        self.image.color()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// 解码来源文件路径。
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// 显示阶段结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum DisplayStatus {
    /// 已交给系统查看器（不等待其关闭）。
    Shown,
    /// 配置关闭了显示。
    Skipped,
    /// 查看器启动失败，保存仍会继续。
    Failed(String),
}

/// 一次成功调用的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub display: DisplayStatus,
}
