//! 应用层错误定义
//!
//! 统一的命令/查询错误类型
//!
//! 注意：资源不存在、名称非法等情况不是错误，handler 以 `Ok(None)` / `Ok(false)` 表达

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
