//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 单一枚举承载查看流程中的所有失败来源，每个阶段一个分支，调用侧可以精确区分
//! 是解码、显示还是保存出了问题。对外仍保留“未找到 / 操作失败”两类语义，见 [`ErrorKind`]。

use std::path::{Path, PathBuf};

/// 查看流程统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("文件不存在：{}", path.display())]
    NotFound { path: PathBuf },

    #[error("解码失败（{}）：{detail}", path.display())]
    Decode { path: PathBuf, detail: String },

    #[error("显示失败：{0}")]
    Display(String),

    #[error("保存失败（{}）：{detail}", path.display())]
    Save { path: PathBuf, detail: String },
}

/// 面向用户的错误分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入路径在检查时不存在。
    NotFound,
    /// 解码 / 显示 / 保存任一阶段失败。
    Operation,
}

impl ViewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decode { .. } | Self::Display(_) | Self::Save { .. } => ErrorKind::Operation,
        }
    }

    /// 底层协作者给出的细节信息（未找到时为空）。
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NotFound { .. } => None,
            Self::Decode { detail, .. } | Self::Save { detail, .. } => Some(detail),
            Self::Display(detail) => Some(detail),
        }
    }

    pub(crate) fn decode(path: &Path, detail: impl Into<String>) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }

    pub(crate) fn save(path: &Path, detail: impl Into<String>) -> Self {
        Self::Save {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }
}
