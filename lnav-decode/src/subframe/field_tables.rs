//! 子帧字段表
//!
//! 每种格式模式的字段描述（比特位置、符号、比例因子、输出索引），
//! 比特位置按ICD-GPS-200图20-1，字与比特号均从1开始。

use lnav_core::{BitRange, FieldSpec, Pattern, WeekBits};

const fn bits(word: u8, start: u8, len: u8) -> BitRange {
    BitRange::new(word, start, len)
}

/// 所有子帧共有的TLM/HOW字段
pub static COMMON_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("preamble", 0, bits(1, 1, 8)),
    FieldSpec::new("tlm_message", 1, bits(1, 9, 14)),
    FieldSpec::new("how_time", 2, bits(2, 1, 17)).factor(6.0),
    FieldSpec::new("alert_as_flags", 3, bits(2, 18, 2)),
    FieldSpec::new("subframe_id", 4, bits(2, 20, 3)),
];

/// 模式1：子帧1
pub static CLOCK_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("week", 5, bits(3, 1, 10)).week(WeekBits::Bits10),
    FieldSpec::new("l2_codes", 6, bits(3, 11, 2)),
    FieldSpec::new("ura_index", 7, bits(3, 13, 4)),
    FieldSpec::new("sv_health", 8, bits(3, 17, 6)),
    FieldSpec::new("iodc", 9, bits(3, 23, 2)).then(bits(8, 1, 8)),
    FieldSpec::new("l2_p_flag", 10, bits(4, 1, 1)),
    FieldSpec::new("tgd", 11, bits(7, 17, 8)).signed().scale(-31),
    FieldSpec::new("toc", 12, bits(8, 9, 16)).scale(4),
    FieldSpec::new("af2", 13, bits(9, 1, 8)).signed().scale(-55),
    FieldSpec::new("af1", 14, bits(9, 9, 16)).signed().scale(-43),
    FieldSpec::new("af0", 15, bits(10, 1, 22)).signed().scale(-31),
];

/// 模式2：子帧2
pub static EPHEMERIS_ONE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("iode", 5, bits(3, 1, 8)),
    FieldSpec::new("crs", 6, bits(3, 9, 16)).signed().scale(-5),
    FieldSpec::new("delta_n", 7, bits(4, 1, 16)).signed().scale(-43),
    FieldSpec::new("m0", 8, bits(4, 17, 8))
        .then(bits(5, 1, 24))
        .signed()
        .scale(-31),
    FieldSpec::new("cuc", 9, bits(6, 1, 16)).signed().scale(-29),
    FieldSpec::new("ecc", 10, bits(6, 17, 8)).then(bits(7, 1, 24)).scale(-33),
    FieldSpec::new("cus", 11, bits(8, 1, 16)).signed().scale(-29),
    FieldSpec::new("sqrt_a", 12, bits(8, 17, 8)).then(bits(9, 1, 24)).scale(-19),
    FieldSpec::new("toe", 13, bits(10, 1, 16)).scale(4),
    FieldSpec::new("fit_interval", 14, bits(10, 17, 1)),
    FieldSpec::new("aodo", 15, bits(10, 18, 5)).factor(900.0),
];

/// 模式3：子帧3
pub static EPHEMERIS_TWO_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("cic", 5, bits(3, 1, 16)).signed().scale(-29),
    FieldSpec::new("omega0", 6, bits(3, 17, 8))
        .then(bits(4, 1, 24))
        .signed()
        .scale(-31),
    FieldSpec::new("cis", 7, bits(5, 1, 16)).signed().scale(-29),
    FieldSpec::new("i0", 8, bits(5, 17, 8))
        .then(bits(6, 1, 24))
        .signed()
        .scale(-31),
    FieldSpec::new("crc", 9, bits(7, 1, 16)).signed().scale(-5),
    FieldSpec::new("omega", 10, bits(7, 17, 8))
        .then(bits(8, 1, 24))
        .signed()
        .scale(-31),
    FieldSpec::new("omega_dot", 11, bits(9, 1, 24)).signed().scale(-43),
    FieldSpec::new("iode", 12, bits(10, 1, 8)),
    FieldSpec::new("idot", 13, bits(10, 9, 14)).signed().scale(-43),
];

/// 模式4：历书
pub static ALMANAC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("data_id", 5, bits(3, 1, 2)),
    FieldSpec::new("sv_id", 6, bits(3, 3, 6)),
    FieldSpec::new("ecc", 7, bits(3, 9, 16)).scale(-21),
    FieldSpec::new("toa", 8, bits(4, 1, 8)).scale(12),
    FieldSpec::new("delta_i", 9, bits(4, 9, 16)).signed().scale(-19),
    FieldSpec::new("omega_dot", 10, bits(5, 1, 16)).signed().scale(-38),
    FieldSpec::new("sv_health", 11, bits(5, 17, 8)),
    FieldSpec::new("sqrt_a", 12, bits(6, 1, 24)).scale(-11),
    FieldSpec::new("omega0", 13, bits(7, 1, 24)).signed().scale(-23),
    FieldSpec::new("omega", 14, bits(8, 1, 24)).signed().scale(-23),
    FieldSpec::new("m0", 15, bits(9, 1, 24)).signed().scale(-23),
    FieldSpec::new("af0", 16, bits(10, 1, 8))
        .then(bits(10, 20, 3))
        .signed()
        .scale(-20),
    FieldSpec::new("af1", 17, bits(10, 9, 11)).signed().scale(-38),
];

/// 模式5：子帧5第25页
pub static ALMANAC_HEALTH_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("data_id", 5, bits(3, 1, 2)),
    FieldSpec::new("sv_id", 6, bits(3, 3, 6)),
    FieldSpec::new("toa", 7, bits(3, 9, 8)).scale(12),
    FieldSpec::new("wna", 8, bits(3, 17, 8)).week(WeekBits::Bits8),
    FieldSpec::new("health_sv1", 9, bits(4, 1, 6)),
    FieldSpec::new("health_sv2", 10, bits(4, 7, 6)),
    FieldSpec::new("health_sv3", 11, bits(4, 13, 6)),
    FieldSpec::new("health_sv4", 12, bits(4, 19, 6)),
    FieldSpec::new("health_sv5", 13, bits(5, 1, 6)),
    FieldSpec::new("health_sv6", 14, bits(5, 7, 6)),
    FieldSpec::new("health_sv7", 15, bits(5, 13, 6)),
    FieldSpec::new("health_sv8", 16, bits(5, 19, 6)),
    FieldSpec::new("health_sv9", 17, bits(6, 1, 6)),
    FieldSpec::new("health_sv10", 18, bits(6, 7, 6)),
    FieldSpec::new("health_sv11", 19, bits(6, 13, 6)),
    FieldSpec::new("health_sv12", 20, bits(6, 19, 6)),
    FieldSpec::new("health_sv13", 21, bits(7, 1, 6)),
    FieldSpec::new("health_sv14", 22, bits(7, 7, 6)),
    FieldSpec::new("health_sv15", 23, bits(7, 13, 6)),
    FieldSpec::new("health_sv16", 24, bits(7, 19, 6)),
    FieldSpec::new("health_sv17", 25, bits(8, 1, 6)),
    FieldSpec::new("health_sv18", 26, bits(8, 7, 6)),
    FieldSpec::new("health_sv19", 27, bits(8, 13, 6)),
    FieldSpec::new("health_sv20", 28, bits(8, 19, 6)),
    FieldSpec::new("health_sv21", 29, bits(9, 1, 6)),
    FieldSpec::new("health_sv22", 30, bits(9, 7, 6)),
    FieldSpec::new("health_sv23", 31, bits(9, 13, 6)),
    FieldSpec::new("health_sv24", 32, bits(9, 19, 6)),
];

/// 模式6、7、10：保留/特殊页面，按原始比特输出
pub static RAW_PAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("data_id", 5, bits(3, 1, 2)),
    FieldSpec::new("sv_id", 6, bits(3, 3, 6)),
    FieldSpec::new("word3_data", 7, bits(3, 9, 16)),
    FieldSpec::new("word4_data", 8, bits(4, 1, 24)),
    FieldSpec::new("word5_data", 9, bits(5, 1, 24)),
    FieldSpec::new("word6_data", 10, bits(6, 1, 24)),
    FieldSpec::new("word7_data", 11, bits(7, 1, 24)),
    FieldSpec::new("word8_data", 12, bits(8, 1, 24)),
    FieldSpec::new("word9_data", 13, bits(9, 1, 24)),
    FieldSpec::new("word10_data", 14, bits(10, 1, 22)),
];

/// 模式8：电离层与UTC参数
pub static IONO_UTC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("data_id", 5, bits(3, 1, 2)),
    FieldSpec::new("sv_id", 6, bits(3, 3, 6)),
    FieldSpec::new("alpha0", 7, bits(3, 9, 8)).signed().scale(-30),
    FieldSpec::new("alpha1", 8, bits(3, 17, 8)).signed().scale(-27),
    FieldSpec::new("alpha2", 9, bits(4, 1, 8)).signed().scale(-24),
    FieldSpec::new("alpha3", 10, bits(4, 9, 8)).signed().scale(-24),
    FieldSpec::new("beta0", 11, bits(4, 17, 8)).signed().scale(11),
    FieldSpec::new("beta1", 12, bits(5, 1, 8)).signed().scale(14),
    FieldSpec::new("beta2", 13, bits(5, 9, 8)).signed().scale(16),
    FieldSpec::new("beta3", 14, bits(5, 17, 8)).signed().scale(16),
    FieldSpec::new("a1", 15, bits(6, 1, 24)).signed().scale(-50),
    FieldSpec::new("a0", 16, bits(7, 1, 24))
        .then(bits(8, 1, 8))
        .signed()
        .scale(-30),
    FieldSpec::new("tot", 17, bits(8, 9, 8)).scale(12),
    FieldSpec::new("wnt", 18, bits(8, 17, 8)).week(WeekBits::Bits8),
    FieldSpec::new("delta_t_ls", 19, bits(9, 1, 8)).signed(),
    FieldSpec::new("wn_lsf", 20, bits(9, 9, 8)).week(WeekBits::Bits8),
    FieldSpec::new("dn", 21, bits(9, 17, 8)),
    FieldSpec::new("delta_t_lsf", 22, bits(10, 1, 8)).signed(),
];

/// 模式9：A-S标志/卫星配置与SV 25-32健康状态
pub static SV_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("data_id", 5, bits(3, 1, 2)),
    FieldSpec::new("sv_id", 6, bits(3, 3, 6)),
    FieldSpec::new("config_sv1", 7, bits(3, 9, 4)),
    FieldSpec::new("config_sv2", 8, bits(3, 13, 4)),
    FieldSpec::new("config_sv3", 9, bits(3, 17, 4)),
    FieldSpec::new("config_sv4", 10, bits(3, 21, 4)),
    FieldSpec::new("config_sv5", 11, bits(4, 1, 4)),
    FieldSpec::new("config_sv6", 12, bits(4, 5, 4)),
    FieldSpec::new("config_sv7", 13, bits(4, 9, 4)),
    FieldSpec::new("config_sv8", 14, bits(4, 13, 4)),
    FieldSpec::new("config_sv9", 15, bits(4, 17, 4)),
    FieldSpec::new("config_sv10", 16, bits(4, 21, 4)),
    FieldSpec::new("config_sv11", 17, bits(5, 1, 4)),
    FieldSpec::new("config_sv12", 18, bits(5, 5, 4)),
    FieldSpec::new("config_sv13", 19, bits(5, 9, 4)),
    FieldSpec::new("config_sv14", 20, bits(5, 13, 4)),
    FieldSpec::new("config_sv15", 21, bits(5, 17, 4)),
    FieldSpec::new("config_sv16", 22, bits(5, 21, 4)),
    FieldSpec::new("config_sv17", 23, bits(6, 1, 4)),
    FieldSpec::new("config_sv18", 24, bits(6, 5, 4)),
    FieldSpec::new("config_sv19", 25, bits(6, 9, 4)),
    FieldSpec::new("config_sv20", 26, bits(6, 13, 4)),
    FieldSpec::new("config_sv21", 27, bits(6, 17, 4)),
    FieldSpec::new("config_sv22", 28, bits(6, 21, 4)),
    FieldSpec::new("config_sv23", 29, bits(7, 1, 4)),
    FieldSpec::new("config_sv24", 30, bits(7, 5, 4)),
    FieldSpec::new("config_sv25", 31, bits(7, 9, 4)),
    FieldSpec::new("config_sv26", 32, bits(7, 13, 4)),
    FieldSpec::new("config_sv27", 33, bits(7, 17, 4)),
    FieldSpec::new("config_sv28", 34, bits(7, 21, 4)),
    FieldSpec::new("config_sv29", 35, bits(8, 1, 4)),
    FieldSpec::new("config_sv30", 36, bits(8, 5, 4)),
    FieldSpec::new("config_sv31", 37, bits(8, 9, 4)),
    FieldSpec::new("config_sv32", 38, bits(8, 13, 4)),
    FieldSpec::new("health_sv25", 39, bits(8, 19, 6)),
    FieldSpec::new("health_sv26", 40, bits(9, 1, 6)),
    FieldSpec::new("health_sv27", 41, bits(9, 7, 6)),
    FieldSpec::new("health_sv28", 42, bits(9, 13, 6)),
    FieldSpec::new("health_sv29", 43, bits(9, 19, 6)),
    FieldSpec::new("health_sv30", 44, bits(10, 1, 6)),
    FieldSpec::new("health_sv31", 45, bits(10, 7, 6)),
    FieldSpec::new("health_sv32", 46, bits(10, 13, 6)),
];

/// 模式对应的字段表（不含公共字段）
pub fn fields_for(pattern: Pattern) -> &'static [FieldSpec] {
    match pattern {
        Pattern::Clock => CLOCK_FIELDS,
        Pattern::EphemerisOne => EPHEMERIS_ONE_FIELDS,
        Pattern::EphemerisTwo => EPHEMERIS_TWO_FIELDS,
        Pattern::Almanac => ALMANAC_FIELDS,
        Pattern::AlmanacHealth => ALMANAC_HEALTH_FIELDS,
        Pattern::ReservedPage | Pattern::ReservedPageGroup | Pattern::SpecialPages => {
            RAW_PAGE_FIELDS
        }
        Pattern::IonoUtc => IONO_UTC_FIELDS,
        Pattern::SvConfig => SV_CONFIG_FIELDS,
    }
}

/// 按名称查找某模式中的字段（含公共字段）
pub fn find_field(pattern: Pattern, name: &str) -> Option<&'static FieldSpec> {
    COMMON_FIELDS
        .iter()
        .chain(fields_for(pattern).iter())
        .find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnav_core::OUTPUT_SIZE;
    use std::collections::HashSet;

    #[test]
    fn test_ranges_within_subframe() {
        for pattern in Pattern::ALL {
            for spec in COMMON_FIELDS.iter().chain(fields_for(pattern).iter()) {
                assert!(spec.first.is_within_subframe(), "{pattern}: {}", spec.name);
                if let Some(second) = spec.second {
                    assert!(second.is_within_subframe(), "{pattern}: {}", spec.name);
                }
                // 只使用数据位
                assert!(spec.first.end() <= 24, "{pattern}: {}", spec.name);
                assert!(spec.total_bits() <= 32, "{pattern}: {}", spec.name);
            }
        }
    }

    #[test]
    fn test_output_indices_unique() {
        for pattern in Pattern::ALL {
            let mut seen = HashSet::new();
            for spec in COMMON_FIELDS.iter().chain(fields_for(pattern).iter()) {
                assert!(spec.out_index < OUTPUT_SIZE, "{pattern}: {}", spec.name);
                assert!(seen.insert(spec.out_index), "{pattern}: {}", spec.name);
            }
        }
    }

    #[test]
    fn test_find_field() {
        let aodo = find_field(Pattern::EphemerisOne, "aodo").unwrap();
        assert_eq!(aodo.out_index, 15);
        assert_eq!(aodo.factor, 900.0);

        let how = find_field(Pattern::SvConfig, "how_time").unwrap();
        assert_eq!(how.out_index, 2);

        assert!(find_field(Pattern::Clock, "aodo").is_none());
    }

    #[test]
    fn test_week_fields() {
        let weeks: Vec<_> = Pattern::ALL
            .iter()
            .flat_map(|p| fields_for(*p).iter().map(move |s| (*p, s)))
            .filter(|(_, s)| s.week.is_some())
            .map(|(p, s)| (p.number(), s.out_index))
            .collect();
        assert_eq!(weeks, vec![(1, 5), (5, 8), (8, 18), (8, 20)]);
    }
}
