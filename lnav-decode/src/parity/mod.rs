//! 奇偶校验模块
//!
//! 按ICD-GPS-200第20.3.5节计算、校验与修正30位导航字的奇偶校验位：
//! - 6个校验位各为24个数据位中固定子集与上一字进位比特（D29*/D30*）的异或
//! - D30*为1时数据位在发送前被反相
//! - 第2、10字的第23、24位（t比特）用于使D29、D30为0

use lnav_core::utils::bit_ops::{xor_parity, DATA_MASK, PARITY_MASK};
use lnav_core::utils::{get_d29, get_d30};
use lnav_core::{normalize_subframe, NavWordSource, Subframe, SUBFRAME_WORDS, WORD_MASK};
use tracing::debug;

/// 校验位计算掩码（ICD-GPS-200 表20-XIV），依次对应D25..D30
pub const PARITY_MASKS: [u32; 6] = [
    0x3B1F_3480,
    0x1D8F_9A40,
    0x2EC7_CD00,
    0x1763_E680,
    0x2BB1_F340,
    0x0B7A_89C0,
];

/// 各校验位使用的上一字进位比特：true为D29*，false为D30*
const USES_D29: [bool; 6] = [true, false, true, false, false, true];

/// t比特（第23、24位）在30位字中的掩码
const T_BITS_MASK: u32 = 0x0000_00C0;

/// 含非信息位的字索引（第2、10字）
const NIB_WORDS: [usize; 2] = [1, 9];

/// 将字恢复为未反相的源数据位
fn source_data(word: u32, prev: u32, known_upright: bool) -> u32 {
    let data = word & DATA_MASK;
    if !known_upright && get_d30(prev) == 1 {
        data ^ DATA_MASK
    } else {
        data
    }
}

/// 对源数据位计算6位校验
fn parity_of_source(data: u32, prev: u32) -> u32 {
    let d29 = get_d29(prev);
    let d30 = get_d30(prev);

    PARITY_MASKS
        .iter()
        .zip(USES_D29.iter())
        .fold(0u32, |acc, (mask, uses_d29)| {
            let carry = if *uses_d29 { d29 } else { d30 };
            (acc << 1) | (carry ^ xor_parity(data & mask))
        })
}

/// 求解t比特，使D29 = D30 = 0
fn solve_tbits(data: u32, prev: u32) -> u32 {
    let mut data = data & !T_BITS_MASK;
    let d24 = get_d30(prev) ^ xor_parity(data & PARITY_MASKS[4]);
    data |= d24 << 6;
    let d23 = get_d29(prev) ^ xor_parity(data & PARITY_MASKS[5]);
    data | (d23 << 7)
}

/// 计算导航字的6位奇偶校验
///
/// # 参数
/// - `word`: 待计算的导航字
/// - `prev`: 同一子帧中的上一字（第1字使用0）
/// - `known_upright`: 为true时不做D30*反相处理
///
/// # 返回
/// D25..D30（D25为最高位）
pub fn compute_parity(word: u32, prev: u32, known_upright: bool) -> u32 {
    parity_of_source(source_data(word, prev, known_upright), prev)
}

/// 计算含t比特的8位值
///
/// 高两位为使D29、D30归零的t比特（d23、d24），低六位为对应的奇偶校验。
pub fn compute_parity_with_tbits(word: u32, prev: u32, known_upright: bool) -> u32 {
    let data = solve_tbits(source_data(word, prev, known_upright), prev);
    (data & T_BITS_MASK) | parity_of_source(data, prev)
}

/// 写入正确的奇偶校验位
///
/// # 参数
/// - `word`: 导航字（校验位将被覆盖）
/// - `prev`: 上一字
/// - `nib`: 是否为含非信息位的字（第2、10字），此时先求解t比特
/// - `known_upright`: 为true时不做D30*反相处理
///
/// # 返回
/// 带正确校验位的字；未知极性且D30*为1时数据位保持发送（反相）极性
pub fn fix_parity(word: u32, prev: u32, nib: bool, known_upright: bool) -> u32 {
    let invert = !known_upright && get_d30(prev) == 1;
    let mut data = source_data(word, prev, known_upright);
    if nib {
        data = solve_tbits(data, prev);
    }
    let parity = parity_of_source(data, prev);
    let data = if invert { data ^ DATA_MASK } else { data };
    data | parity
}

/// 依次修正整个子帧的奇偶校验
pub fn fix_subframe_parity(words: &Subframe, known_upright: bool) -> Subframe {
    let mut out = [0u32; SUBFRAME_WORDS];
    let mut prev = 0u32;
    for (i, word) in words.iter().enumerate() {
        let fixed = fix_parity(*word & WORD_MASK, prev, NIB_WORDS.contains(&i), known_upright);
        out[i] = fixed;
        prev = fixed;
    }
    out
}

/// 查找第一个奇偶校验失败的字
///
/// # 返回
/// - `Some(index)`: 失败字的索引（从0开始）
/// - `None`: 全部通过
pub fn find_parity_error(words: &Subframe, known_upright: bool) -> Option<usize> {
    let mut prev = 0u32;
    for (i, word) in words.iter().enumerate() {
        let word = *word & WORD_MASK;
        let expected = compute_parity(word, prev, known_upright);
        if expected != word & PARITY_MASK {
            debug!(
                word = i,
                expected = expected,
                actual = word & PARITY_MASK,
                "parity mismatch"
            );
            return Some(i);
        }
        prev = word;
    }
    None
}

/// 子帧奇偶校验
pub fn check_parity(words: &Subframe, known_upright: bool) -> bool {
    find_parity_error(words, known_upright).is_none()
}

/// 宽整数容器的子帧奇偶校验
pub fn check_parity_wide(words: &[i64; SUBFRAME_WORDS], known_upright: bool) -> bool {
    check_parity(&normalize_subframe(words), known_upright)
}

/// 任意容器宽度的子帧奇偶校验
pub fn check_parity_of<W: NavWordSource>(words: &[W; SUBFRAME_WORDS], known_upright: bool) -> bool {
    check_parity(&normalize_subframe(words), known_upright)
}

/// 去除D30*反相，得到数据位朝上的子帧
pub fn make_upright(words: &Subframe) -> Subframe {
    let mut out = [0u32; SUBFRAME_WORDS];
    let mut prev = 0u32;
    for (i, word) in words.iter().enumerate() {
        let word = *word & WORD_MASK;
        out[i] = if get_d30(prev) == 1 { word ^ DATA_MASK } else { word };
        prev = word;
    }
    out
}
