//! # 配置模块
//!
//! ## 设计思路
//!
//! 所有可调参数集中在 `ViewerConfig`：输入默认路径、输出位置、是否弹出系统查看器，
//! 以及解码前的资源上限。`Default` 即生产可用配置，其他来源（配置文件 / 环境变量 /
//! 命令行）只做覆盖，见 `crate::settings`。

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// 未指定输入时使用的相对路径。
pub const DEFAULT_INPUT: &str = "output/output.ppm";
/// 默认输出目录（相对当前工作目录）。
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// 输出文件名。
pub const OUTPUT_FILE_NAME: &str = "render_output.png";

/// 查看流程配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// 未传入路径时使用的输入文件。
    pub default_input: PathBuf,
    /// PNG 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 是否调用系统查看器。无界面环境下应关闭。
    pub display: bool,
    /// 输入文件体积上限（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段预计内存上限（按 RGBA 估算，字节）。
    ///
    /// 默认值小于 `max_decoded_pixels * 4`，大图通常先触发这一项。
    pub max_decoded_bytes: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            display: true,
            max_file_size: 512 * 1024 * 1024,
            max_decoded_pixels: 100_000_000,
            max_decoded_bytes: 256 * 1024 * 1024,
        }
    }
}

impl ViewerConfig {
    /// 输出文件完整路径：`output_dir/render_output.png`，文件名固定。
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }

    /// 解析本次调用的输入路径，缺省时回退到 `default_input`。
    pub fn resolve_input<'a>(&'a self, input: Option<&'a Path>) -> &'a Path {
        input.unwrap_or(&self.default_input)
    }

    /// 用配置文件中出现的字段覆盖当前值。
    pub(crate) fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.default_input {
            self.default_input = v;
        }
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.display {
            self.display = v;
        }
        if let Some(v) = overrides.max_file_size {
            self.max_file_size = v;
        }
        if let Some(v) = overrides.max_decoded_pixels {
            self.max_decoded_pixels = v;
        }
        if let Some(v) = overrides.max_decoded_bytes {
            self.max_decoded_bytes = v;
        }
    }
}

/// 配置文件内容，所有字段均可省略。
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigOverrides {
    pub(crate) default_input: Option<PathBuf>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) display: Option<bool>,
    pub(crate) max_file_size: Option<u64>,
    pub(crate) max_decoded_pixels: Option<u64>,
    pub(crate) max_decoded_bytes: Option<u64>,
}
