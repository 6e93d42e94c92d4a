//! 控制台输出
//!
//! 库只返回结构化结果，面向用户的文案与退出码都在这里决定：
//! 成功写 stdout 并返回 0，任何失败写 stderr 并返回 1。

use std::path::Path;
use std::process::ExitCode;

use crate::error::AppError;
use crate::viewer::{DisplayStatus, ViewError, ViewOutcome};

/// 一次运行需要打印的内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: u8,
}

impl Report {
    pub fn from_view(input: &Path, result: &Result<ViewOutcome, ViewError>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome),
            Err(err) => Self::failure(input, err),
        }
    }

    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: vec![format!("Error: {}", err)],
            exit_code: 1,
        }
    }

    fn success(outcome: &ViewOutcome) -> Self {
        let mut stderr = Vec::new();
        if let DisplayStatus::Failed(detail) = &outcome.display {
            stderr.push(format!(
                "Advertencia: no se pudo mostrar la imagen. Detalles: {}",
                detail
            ));
        }

        Self {
            stdout: vec![format!("Imagen guardada como {}", outcome.output.display())],
            stderr,
            exit_code: 0,
        }
    }

    fn failure(input: &Path, err: &ViewError) -> Self {
        let detail = err.detail().unwrap_or_default();
        let line = match err {
            ViewError::NotFound { .. } => format!(
                "Error: No se encontró el archivo {}. \
                 Asegúrate de que el archivo se haya generado correctamente.",
                input.display()
            ),
            ViewError::Decode { .. } => format!(
                "Error: No se pudo abrir el archivo {}. Detalles: {}",
                input.display(),
                detail
            ),
            ViewError::Save { path, .. } => format!(
                "Error: No se pudo guardar la imagen en {}. Detalles: {}",
                path.display(),
                detail
            ),
            ViewError::Display(_) => {
                format!("Error: No se pudo mostrar la imagen. Detalles: {}", detail)
            }
        };

        Self {
            stdout: Vec::new(),
            stderr: vec![line],
            exit_code: 1,
        }
    }

    /// 打印并转换为进程退出码。
    pub fn emit(&self) -> ExitCode {
        for line in &self.stdout {
            println!("{}", line);
        }
        for line in &self.stderr {
            eprintln!("{}", line);
        }
        ExitCode::from(self.exit_code)
    }
}
