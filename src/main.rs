//! # PPM 查看工具 — 程序入口
//!
//! 本文件仅负责日志初始化、参数解析与结果输出，业务逻辑见 `lib.rs`。

use std::process::ExitCode;

use clap::Parser;
use ppm_viewer::cli::Args;
use ppm_viewer::report::Report;
use ppm_viewer::settings;
use ppm_viewer::viewer::PpmViewer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match settings::load(&args.overrides()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("配置加载失败: {err}");
            return Report::from_app_error(&err).emit();
        }
    };

    let input = config.resolve_input(args.input.as_deref()).to_path_buf();
    let viewer = PpmViewer::new(config);
    let result = viewer.view(Some(&input));

    Report::from_view(&input, &result).emit()
}
