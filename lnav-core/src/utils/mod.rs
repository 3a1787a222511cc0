//! 工具模块
//!
//! 提供30位导航字的位操作与HOW（交接字）访问函数

/// 从HOW中获取子帧ID（比特20-22）
pub fn get_sfid(word2: u32) -> u32 {
    (word2 >> 8) & 0x07
}

/// 从HOW中获取截断的TOW计数（比特1-17，单位6秒）
pub fn get_tow(word2: u32) -> u32 {
    (word2 >> 13) & 0x1_FFFF
}

/// 从HOW中获取下一子帧起始的周内秒
pub fn get_how_time(word2: u32) -> u32 {
    get_tow(word2) * 6
}

/// 获取字的第29位（D29）
pub fn get_d29(word: u32) -> u32 {
    (word >> 1) & 0x01
}

/// 获取字的第30位（D30）
pub fn get_d30(word: u32) -> u32 {
    word & 0x01
}

/// 从子帧4/5的第3字中获取SV/Page ID（比特3-8）
pub fn get_svpage_id(word3: u32) -> u32 {
    (word3 >> 22) & 0x3F
}

/// 位操作工具
pub mod bit_ops {
    use crate::nav_meta::BitRange;
    use crate::WORD_MASK;

    /// 24个数据位（d1-d24）在30位字中的掩码
    pub const DATA_MASK: u32 = 0x3FFF_FFC0;

    /// 6个奇偶校验位（D25-D30）的掩码
    pub const PARITY_MASK: u32 = 0x0000_003F;

    /// 从30位字中提取比特
    ///
    /// # 参数
    /// - `word`: 导航字（低30位有效）
    /// - `start`: 起始比特号（1为MSB）
    /// - `len`: 比特长度
    ///
    /// # 返回
    /// 右对齐的比特值；调用方需保证`start + len - 1 <= 30`
    pub fn extract_word_bits(word: u32, start: u8, len: u8) -> u32 {
        let shift = 30 - (start as u32 + len as u32 - 1);
        let mask = if len >= 32 { u32::MAX } else { (1u32 << len) - 1 };
        ((word & WORD_MASK) >> shift) & mask
    }

    /// 按比特段从子帧中提取原始值
    pub fn extract_range(words: &[u32; 10], range: &BitRange) -> u64 {
        let word = words[(range.word - 1) as usize];
        extract_word_bits(word, range.start, range.len) as u64
    }

    /// 将值写入30位字的指定比特段
    pub fn set_word_bits(word: u32, start: u8, len: u8, value: u32) -> u32 {
        let shift = 30 - (start as u32 + len as u32 - 1);
        let mask = ((1u32 << len) - 1) << shift;
        (word & !mask) | ((value << shift) & mask)
    }

    /// 二进制补码符号扩展
    pub fn sign_extend(raw: u64, bits: u32) -> i64 {
        if bits == 0 || bits >= 64 {
            return raw as i64;
        }
        let shift = 64 - bits;
        ((raw << shift) as i64) >> shift
    }

    /// 掩码后各位的异或（偶数个1为0）
    pub fn xor_parity(value: u32) -> u32 {
        value.count_ones() & 1
    }
}
