//! 命令行参数
//!
//! 环境变量由 clap 直接合并：命令行参数优先于环境变量，两者都覆盖配置文件。

use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;

use crate::settings::{CliOverrides, ENV_CONFIG, ENV_NO_DISPLAY, ENV_OUTPUT_DIR};

#[derive(Debug, Parser)]
#[command(version, about = "Muestra una imagen PPM y guarda una copia PNG")]
pub struct Args {
    /// PPM file to open (default: output/output.ppm)
    pub input: Option<PathBuf>,
    /// Directory receiving render_output.png
    #[arg(long, env = ENV_OUTPUT_DIR)]
    pub output_dir: Option<PathBuf>,
    /// Do not open the system image viewer
    #[arg(
        long,
        env = ENV_NO_DISPLAY,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub no_display: Option<bool>,
    /// JSON configuration file
    #[arg(long, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            output_dir: self.output_dir.clone(),
            no_display: self.no_display,
        }
    }
}
