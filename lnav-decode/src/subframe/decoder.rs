//! 子帧解码器核心实现
//!
//! 选择格式模式，按字段表提取比特、符号扩展、按比例换算并写入60元输出数组

use lnav_core::utils::bit_ops::{extract_range, sign_extend};
use lnav_core::utils::{get_sfid, get_svpage_id};
use lnav_core::{
    normalize_subframe, FieldSpec, NavError, NavResult, Pattern, Subframe, OUTPUT_SIZE,
    SUBFRAME_WORDS,
};
use tracing::{debug, warn};

use super::field_tables::{fields_for, COMMON_FIELDS};
use crate::page_map::classify_svpage;
use crate::week::convert_x_bit;

/// 工程单位输出数组
pub type EngOutput = [f64; OUTPUT_SIZE];

/// 获取子帧的格式模式
///
/// 子帧1-3直接对应模式1-3；子帧4/5由第3字中的SV/Page ID查分类表确定。
///
/// # 返回
/// - `Ok(Pattern)`: 格式模式
/// - `Err(NavError)`: 子帧ID或SV/Page ID无效
pub fn get_subframe_pattern(words: &Subframe) -> NavResult<Pattern> {
    let sfid = get_sfid(words[1]);
    let pattern = match sfid {
        1 => Ok(Pattern::Clock),
        2 => Ok(Pattern::EphemerisOne),
        3 => Ok(Pattern::EphemerisTwo),
        4 | 5 => classify_svpage(get_svpage_id(words[2])),
        _ => Err(NavError::InvalidSubframeId(sfid)),
    };
    if let Err(err) = &pattern {
        debug!(subframe_id = sfid, %err, "pattern lookup failed");
    }
    pattern
}

/// 宽整数容器版本
pub fn get_subframe_pattern_wide(words: &[i64; SUBFRAME_WORDS]) -> NavResult<Pattern> {
    get_subframe_pattern(&normalize_subframe(words))
}

/// 提取单个字段的原始值（两段时按先后拼接）
pub fn extract_raw(words: &Subframe, spec: &FieldSpec) -> u64 {
    let mut raw = extract_range(words, &spec.first);
    if let Some(second) = &spec.second {
        raw = (raw << second.len) | extract_range(words, second);
    }
    raw
}

/// 按字段描述换算一个量并写入输出数组
///
/// 周数字段保留截断值，由调用方决定如何消歧。
pub fn convert_quant(words: &Subframe, spec: &FieldSpec, output: &mut EngOutput) {
    let raw = extract_raw(words, spec);
    let value = if spec.signed {
        sign_extend(raw, spec.total_bits()) as f64
    } else {
        raw as f64
    };
    output[spec.out_index] = value * 2f64.powi(spec.scale) * spec.factor;
}

/// 将10个字的子帧换算为60个工程单位值
///
/// # 参数
/// - `words`: 子帧（每字低30位有效，数据位朝上）
/// - `reference_week`: 用于截断周数消歧的完整GPS周
///
/// # 返回
/// - `Ok(output)`: 各字段按字段表写入的输出数组，未用索引为0
/// - `Err(NavError)`: 模式查找失败，或周数字段无法在容差内消歧（不返回部分输出）
pub fn subframe_convert(words: &Subframe, reference_week: i32) -> NavResult<EngOutput> {
    let words = normalize_subframe(words);
    let pattern = get_subframe_pattern(&words)?;
    let mut output = [0.0; OUTPUT_SIZE];

    for spec in COMMON_FIELDS {
        convert_quant(&words, spec, &mut output);
    }

    for spec in fields_for(pattern) {
        convert_quant(&words, spec, &mut output);

        if let Some(bits) = spec.week {
            let truncated = output[spec.out_index] as i32;
            let week = convert_x_bit(reference_week, truncated, bits).map_err(|err| {
                warn!(field = spec.name, %pattern, %err, "week field unresolved");
                err
            })?;
            output[spec.out_index] = week as f64;
        }
    }

    Ok(output)
}

/// 宽整数容器版本
pub fn subframe_convert_wide(
    words: &[i64; SUBFRAME_WORDS],
    reference_week: i32,
) -> NavResult<EngOutput> {
    subframe_convert(&normalize_subframe(words), reference_week)
}
