//! 子帧解码集成测试
//!
//! 参考子帧为自行生成的向量（独立编码器按ICD逐位公式计算校验），
//! 覆盖模式选择、字段换算与周数消歧

use lnav_core::utils::bit_ops::set_word_bits;
use lnav_core::{Pattern, Subframe, SUBFRAME_WORDS};
use lnav_decode::page_map::PAGES_PER_SUBFRAME;
use lnav_decode::parity::fix_subframe_parity;
use lnav_decode::{
    get_subframe_pattern, get_subframe_pattern_wide, sfpage2svid, subframe_convert,
    subframe_convert_wide,
};

/// 子帧1：WN=2200，TOW计数16801，IODC=0x1A5
const SF1: Subframe = [
    0x22D2_3434, 0x0834_21FC, 0x0984_8062, 0x2000_0003, 0x0000_003F, 0x0000_003F, 0x0000_3EFE,
    0x2940_70BD, 0x003F_FF46, 0x0003_E804,
];

/// 子帧2：IODE=77，toe=115200，AODO=1800
const SF2: Subframe = [
    0x22C0_0012, 0x0834_42E0, 0x137E_CB81, 0x03E8_3E18, 0x290C_BADD, 0x3FE7_004F, 0x0000_003F,
    0x0032_284A, 0x03B1_8837, 0x0708_021C,
];

fn page(subframe: u32, svpgid: u32) -> Subframe {
    let mut words = [0u32; SUBFRAME_WORDS];
    words[0] = set_word_bits(0, 1, 8, 0x8B);
    words[1] = set_word_bits(set_word_bits(0, 1, 17, 1_000), 20, 3, subframe);
    words[2] = set_word_bits(0, 1, 2, 1) | set_word_bits(0, 3, 6, svpgid);
    words
}

#[test]
fn test_subframe1_fields() {
    assert_eq!(get_subframe_pattern(&SF1), Ok(Pattern::Clock));

    let out = subframe_convert(&SF1, 2210).unwrap();
    assert_eq!(out[0], 139.0);
    assert_eq!(out[1], 4_660.0);
    assert_eq!(out[2], 100_806.0);
    assert_eq!(out[3], 0.0);
    assert_eq!(out[4], 1.0);
    assert_eq!(out[5], 2_200.0);
    assert_eq!(out[6], 1.0);
    assert_eq!(out[7], 2.0);
    assert_eq!(out[8], 0.0);
    assert_eq!(out[9], 421.0);
    assert_eq!(out[10], 1.0);
    assert_eq!(out[11], -5.0 * 2f64.powi(-31));
    assert_eq!(out[12], 7_200.0);
    assert_eq!(out[13], 0.0);
    assert_eq!(out[14], -3.0 * 2f64.powi(-43));
    assert_eq!(out[15], 1_000.0 * 2f64.powi(-31));

    // 未使用的输出为0
    assert!(out[16..].iter().all(|v| *v == 0.0));
}

#[test]
fn test_subframe2_fields() {
    assert_eq!(get_subframe_pattern(&SF2), Ok(Pattern::EphemerisOne));

    let out = subframe_convert(&SF2, 2200).unwrap();
    assert_eq!(out[2], 100_812.0);
    assert_eq!(out[4], 2.0);
    assert_eq!(out[5], 77.0);
    assert_eq!(out[6], -38.5625);
    assert_eq!(out[7], 4_000.0 * 2f64.powi(-43));
    assert_eq!(out[8], -123_456_789.0 * 2f64.powi(-31));
    assert_eq!(out[9], -100.0 * 2f64.powi(-29));
    assert_eq!(out[10], 0.001_953_125);
    assert_eq!(out[11], 200.0 * 2f64.powi(-29));
    assert_eq!(out[12], 2_702_100_000.0 * 2f64.powi(-19));
    assert_eq!(out[13], 115_200.0);
    assert_eq!(out[14], 0.0);
    assert_eq!(out[15], 1_800.0);
}

#[test]
fn test_every_page_pattern() {
    let expected = |svpgid: u32| match svpgid {
        1..=32 => 4,
        51 => 5,
        57 => 6,
        58..=62 => 7,
        56 => 8,
        63 => 9,
        52..=55 => 10,
        _ => 0,
    };

    for subframe in [4u8, 5] {
        for p in 1..=PAGES_PER_SUBFRAME {
            let svpgid = sfpage2svid(subframe, p).unwrap();
            let words = page(subframe as u32, svpgid);
            let pattern = get_subframe_pattern(&words).unwrap();
            assert_eq!(pattern.number(), expected(svpgid), "subframe {subframe} page {p}");
            assert!(subframe_convert(&words, 2200).is_ok());
        }
    }
}

#[test]
fn test_reserved_ids_rejected() {
    for svpgid in [0u32, 33, 41, 50] {
        let words = page(4, svpgid);
        assert!(get_subframe_pattern(&words).is_err());
        assert!(subframe_convert(&words, 2200).is_err());
    }
}

#[test]
fn test_iono_utc_weeks() {
    let mut words = page(4, 56);
    words[7] = set_word_bits(0, 17, 8, 152);
    words[8] = set_word_bits(set_word_bits(0, 1, 8, 18), 9, 8, 252);
    words[9] = set_word_bits(0, 1, 8, 18);
    let words = fix_subframe_parity(&words, true);

    let out = subframe_convert(&words, 2200).unwrap();
    assert_eq!(out[18], 2_200.0);
    assert_eq!(out[19], 18.0);
    assert_eq!(out[20], 2_300.0);
    assert_eq!(out[22], 18.0);
}

#[test]
fn test_almanac_health_week() {
    let mut words = page(5, 51);
    words[2] |= set_word_bits(0, 9, 8, 147) | set_word_bits(0, 17, 8, 2190 % 256);
    words[3] = set_word_bits(0, 1, 6, 0x3F);

    let out = subframe_convert(&words, 2200).unwrap();
    assert_eq!(out[7], 147.0 * 4096.0);
    assert_eq!(out[8], 2_190.0);
    assert_eq!(out[9], 63.0);
}

#[test]
fn test_wide_entry_points() {
    for words in [SF1, SF2, page(4, 63), page(5, 51)] {
        let wide: [i64; SUBFRAME_WORDS] = words.map(|w| i64::from(w) - (1 << 40));
        assert_eq!(get_subframe_pattern_wide(&wide), get_subframe_pattern(&words));
        assert_eq!(
            subframe_convert_wide(&wide, 2200),
            subframe_convert(&words, 2200)
        );
    }
}
