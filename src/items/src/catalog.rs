//src/items/src/catalog.rs
//! 物品目录：静态条目定义与启动时加载。
//!
//! 目录文件为 JSON 格式，进程启动时读取一次；条目创建后不可变，
//! 只能通过显式的重新配置接口调整堆叠参数。

use std::fs;
use std::io::Write;
use std::path::Path;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use error::GameError;

use crate::ItemCategory;
use crate::usage::UseStrategy;

/// 目录条目（一种物品的静态描述数据）
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String, // 唯一名称，同时是堆叠匹配键
    #[serde(default)]
    pub icon: String, // 图标资源键
    pub category: ItemCategory,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    #[serde(default)]
    pub world_prefab: String, // 场景预制体资源键
    #[serde(default)]
    pub use_strategy: Option<UseStrategy>,
}

fn default_max_stack() -> u32 {
    1
}

fn default_stackable() -> bool {
    true
}

impl CatalogEntry {
    /// 调整堆叠开关；关闭堆叠时上限同步重置为1
    pub fn configure_stackable(&mut self, stackable: bool) {
        self.stackable = stackable;
        if !stackable {
            self.max_stack = 1;
        }
    }

    /// 调整堆叠上限，最低为1
    pub fn configure_max_stack(&mut self, max_stack: u32) {
        self.max_stack = max_stack.max(1);
    }

    /// 校验条目自身的一致性
    pub fn validate(&self) -> Result<(), GameError> {
        if self.name.is_empty() {
            return Err(GameError::InvalidEntry("name 为空".to_string()));
        }
        if self.max_stack == 0 {
            return Err(GameError::InvalidEntry(format!(
                "`{}` 的 max_stack 为 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// 目录文件（启动时加载的全部条目，保持文件内顺序）
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<CatalogEntry>,
}

impl CatalogFile {
    /// 从磁盘加载目录
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// 从 JSON 文本解析目录（内嵌演示数据也走这里）
    pub fn from_json(data: &str) -> Result<Self, GameError> {
        let file: CatalogFile = serde_json::from_str(data)?;
        if file.entries.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for entry in &file.entries {
            entry.validate()?;
        }
        Ok(file)
    }

    /// 原子写回：先写同目录临时文件再替换，中断不会留下半个目录
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| GameError::IoError(e.error))?;
        Ok(())
    }
}
