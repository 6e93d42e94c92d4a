//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 库内部各阶段使用 `ViewError`；程序入口还会遇到配置文件、环境变量等问题，
//! 统一收敛到 `AppError`，入口只需处理一种错误。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ViewError` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，便于嵌入方输出结构化结果。

use serde::Serialize;

use crate::viewer::ViewError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 查看流程错误（未找到 / 解码 / 显示 / 保存）
    #[error("{0}")]
    Viewer(#[from] ViewError),

    /// 配置文件或环境变量无效
    #[error("配置错误: {0}")]
    Config(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
