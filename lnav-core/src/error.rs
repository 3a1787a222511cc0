//! 导航电文解码错误定义

use thiserror::Error;

/// 解码操作的结果类型
pub type NavResult<T> = Result<T, NavError>;

/// 错误分类
///
/// 调用方据此决定丢弃子帧（Format/Parity）、保留旧值（Range）
/// 还是修正自身代码（Precondition）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 接收数据格式错误
    Format,
    /// 周数消歧超出容差
    Range,
    /// 奇偶校验失败
    Parity,
    /// 调用方违反前置条件
    Precondition,
    /// 配置错误
    Config,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    /// 无法识别的子帧ID
    #[error("Invalid subframe ID: {0}")]
    InvalidSubframeId(u32),

    /// 无效或保留的SV/Page ID
    #[error("Invalid SV/Page ID: {0}")]
    InvalidSvPageId(u32),

    /// 无效的子帧/页面组合
    #[error("Invalid subframe/page pair: subframe {subframe}, page {page}")]
    InvalidPage { subframe: u8, page: u8 },

    /// 无效的Z计数
    #[error("Invalid z-count: {0}")]
    InvalidZCount(u32),

    /// 周数无法在容差内消歧
    #[error(
        "{bits}-bit week {truncated} cannot be resolved within {limit} weeks of week {reference}"
    )]
    WeekOutOfRange {
        reference: i32,
        truncated: i32,
        bits: u32,
        limit: i32,
    },

    /// 奇偶校验失败（word为从0开始的字索引）
    #[error("Parity mismatch in word {word}")]
    ParityMismatch { word: usize },

    /// 调用方违反前置条件
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NavError {
    /// 获取错误分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            NavError::InvalidSubframeId(_)
            | NavError::InvalidSvPageId(_)
            | NavError::InvalidPage { .. }
            | NavError::InvalidZCount(_) => ErrorKind::Format,
            NavError::WeekOutOfRange { .. } => ErrorKind::Range,
            NavError::ParityMismatch { .. } => ErrorKind::Parity,
            NavError::PreconditionViolation(_) => ErrorKind::Precondition,
            NavError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Config(err.to_string())
    }
}
