//! # PPM 查看模块（viewer）
//!
//! ## 设计思路
//!
//! 将“存在性检查 → 加载 → 解码 → 显示 → 保存 PNG”按职责拆分为多个子模块。
//!
//! - `handler`：编排整条流程，记录阶段耗时
//! - `loader`：存在性检查、体积限制、读取字节
//! - `pipeline`：格式识别、尺寸上限、解码
//! - `display`：系统查看器（可替换的显示协作者）
//! - `writer`：PNG 编码与写入
//! - `config/error/source`：配置、错误、数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（参数 + 日志）
//!    ↓
//! settings.rs（默认值 ← 配置文件 ← 环境变量 ← 命令行）
//!    ↓
//! handler.rs（PpmViewer::view）
//!    ├─ loader.rs
//!    ├─ pipeline.rs
//!    ├─ display.rs（失败只降级为 DisplayStatus::Failed）
//!    └─ writer.rs
//!    ↓
//! report.rs（控制台输出 + 退出码）
//! ```

mod config;
mod display;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, OUTPUT_FILE_NAME, ViewerConfig};
pub(crate) use config::ConfigOverrides;
pub use display::{ImageDisplay, PREVIEW_FILE_NAME, SystemViewer};
pub use error::{ErrorKind, ViewError};
pub use handler::PpmViewer;
pub use source::{DisplayStatus, ImageHandle, ViewOutcome};
