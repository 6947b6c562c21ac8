//! Sticker Context - Value Objects

use serde::{Deserialize, Serialize};

use super::StickerError;

/// 贴纸唯一标识（由存储层分配的自增主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StickerId(i64);

impl StickerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 贴纸名称
///
/// 不变量:
/// - 长度在 [`StickerName::MIN_LEN`, `StickerName::MAX_LEN`] 之间（按字符计）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerName(String);

impl StickerName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 32;

    pub fn new(name: impl Into<String>) -> Result<Self, StickerError> {
        let name = name.into();
        let len = name.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(StickerError::InvalidName(format!(
                "名称长度必须在 {} 到 {} 之间，实际为 {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                len
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StickerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(StickerName::new("a").is_err());
        assert!(StickerName::new("ab").is_ok());
        assert!(StickerName::new("x".repeat(32)).is_ok());
        assert!(StickerName::new("x".repeat(33)).is_err());
    }

    #[test]
    fn test_name_counts_chars_not_bytes() {
        // 两个汉字占 6 字节，但只算 2 个字符
        let name = StickerName::new("贴纸").unwrap();
        assert_eq!(name.as_str(), "贴纸");
        assert!(StickerName::new("贴".repeat(32)).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            StickerName::new(""),
            Err(StickerError::InvalidName(_))
        ));
    }
}
