//! SV/Page ID映射模块
//!
//! 子帧4/5页面与SV/Page ID之间的双向映射（ICD-GPS-200 表20-V），
//! 以及由SV/Page ID确定子帧格式模式的分类表。

use lnav_core::{NavError, NavResult, Pattern};
use once_cell::sync::Lazy;

/// 每个子帧的页面数
pub const PAGES_PER_SUBFRAME: u8 = 25;

/// 一周内的HOW TOW计数个数（合法计数为0..100800）
const TOW_COUNTS_PER_WEEK: u32 = 100_800;

/// 子帧4第1..25页的SV/Page ID
const SUBFRAME4_PAGES: [u8; 25] = [
    57, 25, 26, 27, 28, 57, 29, 30, 31, 32, 57, 62, 52, 53, 54, 57, 55, 56, 58, 59, 57, 60, 61,
    62, 63,
];

/// 子帧5第1..25页的SV/Page ID
const SUBFRAME5_PAGES: [u8; 25] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 51,
];

/// SV/Page ID到（子帧，页面）的映射，冗余ID取页号最小者
static SV_PAGE_TABLE: Lazy<[Option<(u8, u8)>; 64]> = Lazy::new(|| {
    let mut table = [None; 64];
    for (subframe, pages) in [(4u8, &SUBFRAME4_PAGES), (5u8, &SUBFRAME5_PAGES)] {
        for (i, svpgid) in pages.iter().enumerate() {
            let slot = &mut table[*svpgid as usize];
            if slot.is_none() {
                *slot = Some((subframe, i as u8 + 1));
            }
        }
    }
    table
});

/// SV/Page ID到格式模式的分类表
static PATTERN_TABLE: Lazy<[Option<Pattern>; 64]> = Lazy::new(|| {
    let mut table = [None; 64];
    for (svpgid, slot) in table.iter_mut().enumerate() {
        *slot = match svpgid {
            1..=32 => Some(Pattern::Almanac),
            51 => Some(Pattern::AlmanacHealth),
            52..=55 => Some(Pattern::SpecialPages),
            56 => Some(Pattern::IonoUtc),
            57 => Some(Pattern::ReservedPage),
            58..=62 => Some(Pattern::ReservedPageGroup),
            63 => Some(Pattern::SvConfig),
            _ => None,
        };
    }
    table
});

/// SV/Page ID转换为（子帧，页面）
///
/// # 参数
/// - `svpgid`: SV/Page ID（通常取自子帧4/5第3字的比特3-8）
///
/// # 返回
/// - `Ok((subframe, page))`: 子帧为4或5，页面为1..=25
/// - `Err(NavError::InvalidSvPageId)`: 超出1..=63或为保留值
///
/// 冗余ID（57、62）返回其冗余组中页号最小的页面。
pub fn sv2page(svpgid: u32) -> NavResult<(u8, u8)> {
    SV_PAGE_TABLE
        .get(svpgid as usize)
        .copied()
        .flatten()
        .ok_or(NavError::InvalidSvPageId(svpgid))
}

/// （子帧，页面）转换为SV/Page ID
///
/// 返回值与`sv2page`、`classify_svpage`的参数同为`u32`，可直接回代。
pub fn sfpage2svid(subframe: u8, page: u8) -> NavResult<u32> {
    let pages = match subframe {
        4 => &SUBFRAME4_PAGES,
        5 => &SUBFRAME5_PAGES,
        _ => return Err(NavError::InvalidPage { subframe, page }),
    };
    if page == 0 || page > PAGES_PER_SUBFRAME {
        return Err(NavError::InvalidPage { subframe, page });
    }
    Ok(u32::from(pages[(page - 1) as usize]))
}

/// 某个SV/Page ID对应的全部页面（冗余组）
pub fn pages_for_svpage(svpgid: u32) -> Vec<(u8, u8)> {
    let mut pages = Vec::new();
    for (subframe, table) in [(4u8, &SUBFRAME4_PAGES), (5u8, &SUBFRAME5_PAGES)] {
        for (i, id) in table.iter().enumerate() {
            if *id as u32 == svpgid {
                pages.push((subframe, i as u8 + 1));
            }
        }
    }
    pages
}

/// SV/Page ID对应的子帧格式模式
pub fn classify_svpage(svpgid: u32) -> NavResult<Pattern> {
    PATTERN_TABLE
        .get(svpgid as usize)
        .copied()
        .flatten()
        .ok_or(NavError::InvalidSvPageId(svpgid))
}

/// 由HOW的Z计数（TOW计数×4）推算子帧与页面
///
/// HOW中的TOW计数指向下一子帧起点，因此所描述的子帧为周内第`tow - 1`个子帧；
/// 计数0对应上一周的最后一个子帧。页面序列在每周起点从第1页重新开始。
pub fn zcount2page(zcount: u32) -> NavResult<(u8, u8)> {
    let tow = zcount / 4;
    if tow >= TOW_COUNTS_PER_WEEK {
        return Err(NavError::InvalidZCount(zcount));
    }
    let index = (tow + TOW_COUNTS_PER_WEEK - 1) % TOW_COUNTS_PER_WEEK;
    let subframe = (index % 5 + 1) as u8;
    let page = ((index / 5) % PAGES_PER_SUBFRAME as u32 + 1) as u8;
    Ok((subframe, page))
}
