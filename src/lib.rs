//! # PPM 查看工具 — 库入口
//!
//! 打开渲染器输出的 PPM 图像，交给系统默认查看器显示，并另存一份 PNG。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`viewer`] | 存在性检查、解码、显示、PNG 保存的完整流程 |
//! | [`cli`] | 命令行参数与环境变量（clap） |
//! | [`settings`] | 默认值 / 配置文件 / 命令行覆盖项的合并 |
//! | [`report`] | 控制台文案与退出码 |
//! | [`error`] | 应用级统一错误类型 `AppError` |

pub mod cli;
pub mod error;
pub mod report;
pub mod settings;
pub mod viewer;
