//! 游戏错误处理模块
//!
//! 处理物品目录加载、解析等过程中可能出现的各种错误。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 目录文件解析错误
    #[error("Catalog parse error: {0}")]
    CatalogParseError(#[from] serde_json::Error),

    /// 目录条目无效
    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(String),

    /// 目录文件不含任何条目
    #[error("Empty catalog")]
    EmptyCatalog,
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::CatalogParseError(e) => format!("物品目录解析失败: {}", e),
        GameError::InvalidEntry(entry) => format!("无效的目录条目: {}", entry),
        GameError::EmptyCatalog => "物品目录为空".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "物品目录文件不存在".to_string(),
            std::io::ErrorKind::PermissionDenied => "没有权限访问物品目录文件".to_string(),
            _ => format!("IO错误: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_friendly_message() {
        let err = GameError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(handle_error(&err), "物品目录文件不存在");
    }

    #[test]
    fn invalid_entry_carries_detail() {
        let err = GameError::InvalidEntry("max_stack = 0".to_string());
        assert!(handle_error(&err).contains("max_stack = 0"));
    }
}
