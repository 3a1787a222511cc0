//! LNAV Core Library
//!
//! This crate provides the core data structures, error types and bit-level
//! utilities for decoding the GPS legacy navigation message (ICD-GPS-200).

pub mod config;
pub mod error;
pub mod nav_meta;
pub mod utils;

pub use config::DecodeConfig;

// 导出错误类型
pub use error::{ErrorKind, NavError, NavResult};

// 导出导航电文元数据类型，便于其他模块使用
pub use nav_meta::*;

/// 每个子帧的字数
pub const SUBFRAME_WORDS: usize = 10;

/// 工程单位输出数组长度
pub const OUTPUT_SIZE: usize = 60;

/// 30位导航字的有效位掩码
pub const WORD_MASK: u32 = 0x3FFF_FFFF;

/// 一个子帧（10个30位字，已归一化为u32）
pub type Subframe = [u32; SUBFRAME_WORDS];

/// 导航字整数容器接口
///
/// 子帧字可能以不同宽度的整数保存（32位或传统的64位long），
/// 所有解码逻辑只处理归一化后的30位`u32`字。
pub trait NavWordSource: Copy {
    /// 取出低30位作为导航字
    fn to_nav_word(self) -> u32;
}

impl NavWordSource for u32 {
    fn to_nav_word(self) -> u32 {
        self & WORD_MASK
    }
}

impl NavWordSource for i64 {
    fn to_nav_word(self) -> u32 {
        (self as u64 & WORD_MASK as u64) as u32
    }
}

/// 将任意宽度的子帧归一化为30位`u32`字数组
pub fn normalize_subframe<W: NavWordSource>(words: &[W; SUBFRAME_WORDS]) -> Subframe {
    let mut out = [0u32; SUBFRAME_WORDS];
    for (dst, src) in out.iter_mut().zip(words.iter()) {
        *dst = src.to_nav_word();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_upper_bits() {
        let narrow: [u32; 10] = [0xC000_0001; 10];
        let wide: [i64; 10] = [-1; 10];

        assert_eq!(normalize_subframe(&narrow), [1; 10]);
        assert_eq!(normalize_subframe(&wide), [WORD_MASK; 10]);
    }
}
