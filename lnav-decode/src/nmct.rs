//! NMCT有效期模块
//!
//! 从子帧2的AODO字段推导导航电文改正表（NMCT）的有效起始时刻，
//! 参见IS-GPS-200第20.3.3.4.4节。

use lnav_core::utils::get_sfid;
use lnav_core::{
    normalize_subframe, GpsWeekSecond, NavError, NavResult, NmctMeta, Pattern, Subframe, HALF_WEEK,
    OUTPUT_SIZE,
};

use crate::subframe::{convert_quant, find_field};

/// AODO无效标志值（5位字段最大值 × 900秒）
pub const AODO_INVALID: u32 = 27_900;

/// 子帧发送起点相对HOW时间的偏移（秒）
const SUBFRAME_SECONDS: f64 = 6.0;

/// 按名称解码子帧2的单个字段
fn decode_sf2_field(words: &Subframe, name: &str) -> NavResult<f64> {
    let spec = find_field(Pattern::EphemerisOne, name)
        .ok_or_else(|| NavError::PreconditionViolation(format!("no subframe 2 field {name}")))?;
    let mut output = [0.0; OUTPUT_SIZE];
    convert_quant(words, spec, &mut output);
    Ok(output[spec.out_index])
}

/// 获取NMCT有效期
///
/// # 参数
/// - `sf2`: 子帧2的10个字（数据位朝上）
/// - `how_week`: 子帧2中HOW时间对应的完整GPS周
///
/// # 返回
/// - `Ok(meta)`: `meta.tnmct`在AODO为27900时为None，此时toe/tot仍然有效
/// - `Err(NavError::PreconditionViolation)`: 输入不是子帧2
pub fn get_nmct_validity(sf2: &Subframe, how_week: u32) -> NavResult<NmctMeta> {
    let words = normalize_subframe(sf2);
    let sfid = get_sfid(words[1]);
    if sfid != 2 {
        return Err(NavError::PreconditionViolation(format!(
            "NMCT validity requires subframe 2, got subframe {sfid}"
        )));
    }

    let how_time = decode_sf2_field(&words, "how_time")?;
    let toe_sow = decode_sf2_field(&words, "toe")?;
    let aodo = decode_sf2_field(&words, "aodo")? as u32;

    // HOW指向下一子帧起点
    let tot = GpsWeekSecond::new(how_week as i32, how_time).sub_seconds(SUBFRAME_SECONDS);

    let mut toe = GpsWeekSecond::new(tot.week, toe_sow);
    let offset = toe.diff_seconds(&tot);
    if offset > HALF_WEEK {
        toe.week -= 1;
    } else if offset < -HALF_WEEK {
        toe.week += 1;
    }

    let tnmct = if aodo == AODO_INVALID {
        None
    } else {
        Some(toe.sub_seconds(aodo as f64))
    };

    Ok(NmctMeta {
        aodo,
        tnmct,
        toe,
        tot,
    })
}
