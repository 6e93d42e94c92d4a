//! # 显示模块
//!
//! ## 设计思路
//!
//! 显示是“尽力而为”的旁路调用：把图像交给操作系统默认查看器后立即返回，
//! 既不等待窗口关闭，也不观察查看器自身的失败。
//!
//! ## 实现思路
//!
//! - `ImageDisplay` 是查看流程对显示能力的唯一依赖，测试中替换为记录型实现。
//! - `SystemViewer` 先把图像编码为临时 PNG，再按平台调用默认程序打开：
//!   Windows 走 `ShellExecuteW("open")`，macOS 走 `open`，Linux 走 `xdg-open`。
//! - 预览文件使用固定文件名，每次运行覆盖上一次的预览，不随运行次数增长；
//!   也不在返回前删除：查看器进程可能在本进程退出后才读取它。

use std::path::{Path, PathBuf};

use super::ViewError;
use super::source::ImageHandle;
use super::writer;

/// 交给系统查看器的预览文件名。
pub const PREVIEW_FILE_NAME: &str = "ppm-viewer-preview.png";

/// 显示能力抽象。
pub trait ImageDisplay {
    /// 展示图像。返回时查看器可能仍在运行。
    fn show(&self, image: &ImageHandle) -> Result<(), ViewError>;
}

/// 使用系统默认图片查看器。
#[derive(Debug, Clone)]
pub struct SystemViewer {
    temp_dir: PathBuf,
}

impl Default for SystemViewer {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl SystemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定临时 PNG 的存放目录。
    pub fn with_temp_dir(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
        }
    }

    /// 预览文件路径，每次显示都覆盖同一个文件。
    pub fn preview_path(&self) -> PathBuf {
        self.temp_dir.join(PREVIEW_FILE_NAME)
    }

    fn write_temp_png(&self, image: &ImageHandle) -> Result<PathBuf, ViewError> {
        let path = self.preview_path();
        let bytes = writer::encode_png(image, &path)
            .map_err(|e| ViewError::Display(e.to_string()))?;
        std::fs::write(&path, bytes)
            .map_err(|e| ViewError::Display(format!("写入临时文件失败：{}", e)))?;
        Ok(path)
    }
}

impl ImageDisplay for SystemViewer {
    fn show(&self, image: &ImageHandle) -> Result<(), ViewError> {
        let temp = self.write_temp_png(image)?;
        log::debug!("临时预览文件: {}", temp.display());
        open_with_default_app(&temp)?;
        log::info!("🖼️ 已交给系统查看器: {}", image.source().display());
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn to_wide(s: &std::ffi::OsStr) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;

    s.encode_wide().chain(std::iter::once(0)).collect()
}

#[cfg(target_os = "windows")]
fn open_with_default_app(path: &Path) -> Result<(), ViewError> {
    use windows::Win32::UI::Shell::ShellExecuteW;
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
    use windows::core::PCWSTR;

    let op = to_wide(std::ffi::OsStr::new("open"));
    let path_wide = to_wide(path.as_os_str());

    let result = unsafe {
        ShellExecuteW(
            None,
            PCWSTR(op.as_ptr()),
            PCWSTR(path_wide.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // 返回值不大于 32 表示失败
    if result.0 as isize <= 32 {
        return Err(ViewError::Display(format!(
            "打开查看器失败: ShellExecuteW 返回 {}",
            result.0 as isize
        )));
    }

    Ok(())
}

#[cfg(target_os = "macos")]
fn open_with_default_app(path: &Path) -> Result<(), ViewError> {
    std::process::Command::new("open")
        .arg(path)
        .spawn()
        .map_err(|e| ViewError::Display(format!("打开查看器失败: {}", e)))?;
    Ok(())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_with_default_app(path: &Path) -> Result<(), ViewError> {
    std::process::Command::new("xdg-open")
        .arg(path)
        .spawn()
        .map_err(|e| ViewError::Display(format!("打开查看器失败: {}", e)))?;
    Ok(())
}
