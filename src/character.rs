//src/character.rs
//! 角色状态：生命值与世界坐标。

use serde::{Deserialize, Serialize};

use items::UseTarget;

/// 角色核心数据结构
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Character {
    // 基础属性
    pub name: String,
    pub health: u32,
    pub max_health: u32,

    // 世界坐标（掉落点跟随角色位置）
    pub x: i32,
    pub y: i32,
}

impl Character {
    /// 创建新角色，初始生命 20/100
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            health: 20,
            max_health: 100,
            x: 0,
            y: 0,
        }
    }

    /// 移动到指定坐标
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }
}

impl UseTarget for Character {
    /// 恢复生命，封顶于上限，返回实际恢复量
    fn restore_health(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_character_starts_at_twenty_of_hundred() {
        let hero = Character::new("冒险者");
        assert_eq!(hero.health, 20);
        assert_eq!(hero.max_health, 100);
        assert!(!hero.is_full_health());
    }

    #[test]
    fn restore_health_clamps_at_max() {
        let mut hero = Character::new("冒险者");
        hero.health = 95;

        assert_eq!(hero.restore_health(20), 5);
        assert_eq!(hero.health, 100);
        assert_eq!(hero.restore_health(20), 0); // 满血后恢复量为0
    }
}
