//! 周数消歧模块
//!
//! 利用已知的完整GPS周，将8位或10位截断周数恢复为完整周数

use lnav_core::{NavError, NavResult, WeekBits};

/// 将截断周数恢复为完整周数
///
/// # 参数
/// - `full_week`: 参考的完整GPS周
/// - `truncated`: 截断周数
/// - `bits`: 截断位宽
///
/// # 返回
/// - `Ok(week)`: 距参考周不超过半个截断周期（127/511周）的完整周数
/// - `Err(NavError::WeekOutOfRange)`: 参考周过旧或错误
pub fn convert_x_bit(full_week: i32, truncated: i32, bits: WeekBits) -> NavResult<i32> {
    let out_of_range = || NavError::WeekOutOfRange {
        reference: full_week,
        truncated,
        bits: bits.width(),
        limit: bits.tolerance(),
    };

    // 在i64中计算，任意i32输入都不会溢出
    let full = i64::from(full_week);
    let modulus = i64::from(bits.modulus());
    // 截断取余（符号随被除数），不大于参考周的截断值按原值参与比较
    let candidate = full - (full - i64::from(truncated)) % modulus;
    let upper = candidate + modulus;

    let resolved = if (full - candidate).abs() <= (upper - full).abs() {
        candidate
    } else {
        upper
    };

    if (resolved - full).abs() > i64::from(bits.tolerance()) {
        return Err(out_of_range());
    }

    i32::try_from(resolved).map_err(|_| out_of_range())
}

fn convert_in_place(full_week: i32, week: &mut f64, bits: WeekBits) -> NavResult<()> {
    let resolved = convert_x_bit(full_week, *week as i32, bits)?;
    *week = resolved as f64;
    Ok(())
}

/// 8位周数消歧，仅在成功时改写`week`
pub fn convert_8bit(full_week: i32, week: &mut f64) -> NavResult<()> {
    convert_in_place(full_week, week, WeekBits::Bits8)
}

/// 10位周数消歧，仅在成功时改写`week`
pub fn convert_10bit(full_week: i32, week: &mut f64) -> NavResult<()> {
    convert_in_place(full_week, week, WeekBits::Bits10)
}
