//! 配置加载
//!
//! 优先级从低到高：`ViewerConfig::default()` → JSON 配置文件 → 环境变量 / 命令行参数。
//! 环境变量与命令行之间的优先级由 clap 处理，见 `crate::cli`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::viewer::{ConfigOverrides, ViewerConfig};

pub const ENV_CONFIG: &str = "PPM_VIEWER_CONFIG";
pub const ENV_OUTPUT_DIR: &str = "PPM_VIEWER_OUTPUT_DIR";
pub const ENV_NO_DISPLAY: &str = "PPM_VIEWER_NO_DISPLAY";

/// 命令行（含环境变量）层面的覆盖项。
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub no_display: Option<bool>,
}

pub fn load(cli: &CliOverrides) -> Result<ViewerConfig, AppError> {
    let mut config = ViewerConfig::default();

    if let Some(path) = &cli.config_file {
        config.apply_overrides(read_config_file(path)?);
        log::debug!("已加载配置文件: {}", path.display());
    }

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(no_display) = cli.no_display {
        config.display = !no_display;
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ConfigOverrides, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("读取配置文件 '{}' 失败: {}", path.display(), e))
    })?;

    serde_json::from_str::<ConfigOverrides>(&content).map_err(|e| {
        AppError::Config(format!("解析配置文件 '{}' 失败: {}", path.display(), e))
    })
}
