//! Sticker Context - Aggregate Root

use super::{StickerId, StickerName};

/// Sticker 实体
///
/// 不变量:
/// - id 由存储层分配，创建后不可变
/// - name 始终满足 [`StickerName`] 的长度约束
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sticker {
    id: StickerId,
    name: StickerName,
}

impl Sticker {
    pub fn new(id: StickerId, name: StickerName) -> Self {
        Self { id, name }
    }

    // Getters
    pub fn id(&self) -> StickerId {
        self.id
    }

    pub fn name(&self) -> &StickerName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_creation() {
        let sticker = Sticker::new(StickerId::new(7), StickerName::new("cat").unwrap());

        assert_eq!(sticker.id(), StickerId::new(7));
        assert_eq!(sticker.id().value(), 7);
        assert_eq!(sticker.name().as_str(), "cat");
    }
}
