//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `PpmViewer` 只负责流程编排，处理链路固定为：
//! 1. 存在性检查
//! 2. 读取并解码
//! 3. 交给显示协作者（失败只记录，不中断）
//! 4. 编码 PNG 并写入输出路径
//!
//! 每次调用互相独立：处理器只持有不可变配置与显示协作者，不缓存任何图像或路径。
//! 记录 `load/decode/display/save/total` 阶段耗时，便于诊断。

use std::path::Path;
use std::time::Instant;

use super::display::{ImageDisplay, SystemViewer};
use super::source::{DisplayStatus, ImageHandle, ViewOutcome};
use super::{ViewError, ViewerConfig, writer};

/// PPM 查看器。
pub struct PpmViewer {
    config: ViewerConfig,
    display: Box<dyn ImageDisplay>,
}

impl PpmViewer {
    /// 使用系统默认查看器创建处理器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use ppm_viewer::viewer::{PpmViewer, ViewerConfig};
    ///
    /// let viewer = PpmViewer::new(ViewerConfig::default());
    /// let outcome = viewer.view(None)?;
    /// println!("{}", outcome.output.display());
    /// # Ok::<(), ppm_viewer::viewer::ViewError>(())
    /// ```
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_display(config, SystemViewer::new())
    }

    /// 注入自定义显示协作者。
    pub fn with_display(config: ViewerConfig, display: impl ImageDisplay + 'static) -> Self {
        Self {
            config,
            display: Box::new(display),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// 处理主入口：检查、解码、显示、保存。
    ///
    /// `input` 为 `None` 时使用 `config.default_input`，与显式传入该路径完全等价。
    pub fn view(&self, input: Option<&Path>) -> Result<ViewOutcome, ViewError> {
        let config = &self.config;
        let input = config.resolve_input(input);
        let total_start = Instant::now();

        Self::ensure_exists(input)?;

        let load_start = Instant::now();
        let raw = Self::load_from_file(input, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let handle = Self::decode(raw, config)?;
        let decode_elapsed = decode_start.elapsed();

        let display_start = Instant::now();
        let display = self.display_best_effort(&handle);
        let display_elapsed = display_start.elapsed();

        let output = config.output_path();
        let save_start = Instant::now();
        writer::save_png(&handle, &output)?;
        let save_elapsed = save_start.elapsed();

        log::info!(
            "✅ 处理完成 - load={}ms decode={}ms display={}ms save={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            display_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(ViewOutcome {
            input: input.to_path_buf(),
            output,
            width: handle.width(),
            height: handle.height(),
            display,
        })
    }

    fn display_best_effort(&self, handle: &ImageHandle) -> DisplayStatus {
        if !self.config.display {
            log::debug!("显示已关闭，跳过查看器");
            return DisplayStatus::Skipped;
        }

        match self.display.show(handle) {
            Ok(()) => DisplayStatus::Shown,
            Err(err) => {
                log::warn!("⚠️ 显示失败，继续保存: {}", err);
                DisplayStatus::Failed(err.to_string())
            }
        }
    }
}
