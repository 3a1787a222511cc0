//! 导航电文元数据模块
//!
//! 定义字段描述、子帧格式模式和时间相关的元数据结构

use serde::{Deserialize, Serialize};
use std::fmt;

/// 一周的秒数
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// 半周的秒数
pub const HALF_WEEK: f64 = 302_400.0;

/// 字段在子帧中的一段连续比特
///
/// `word`从1开始计数（1..=10），`start`为字内比特号（1为MSB，1..=30）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitRange {
    pub word: u8,
    pub start: u8,
    pub len: u8,
}

impl BitRange {
    pub const fn new(word: u8, start: u8, len: u8) -> Self {
        Self { word, start, len }
    }

    /// 最后一个比特号
    pub const fn end(&self) -> u16 {
        self.start as u16 + self.len as u16 - 1
    }

    /// 是否完全落在子帧的某个30位字之内
    pub const fn is_within_subframe(&self) -> bool {
        self.word >= 1 && self.word <= 10 && self.start >= 1 && self.len >= 1 && self.end() <= 30
    }
}

/// 截断周数的位宽
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekBits {
    Bits8,
    Bits10,
}

impl WeekBits {
    /// 位宽
    pub const fn width(self) -> u32 {
        match self {
            WeekBits::Bits8 => 8,
            WeekBits::Bits10 => 10,
        }
    }

    /// 截断周期（2^width）
    pub const fn modulus(self) -> i32 {
        1 << self.width()
    }

    /// 允许的最大偏差（半周期减一）
    pub const fn tolerance(self) -> i32 {
        (self.modulus() / 2) - 1
    }
}

/// 单个解码量的字段描述
///
/// 字段可以由两段比特拼接而成（先`first`后`second`），
/// 解码值为 `raw × 2^scale × factor`，写入输出数组的`out_index`处。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub out_index: usize,
    pub first: BitRange,
    pub second: Option<BitRange>,
    pub signed: bool,
    pub scale: i32,
    pub factor: f64,
    pub week: Option<WeekBits>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, out_index: usize, first: BitRange) -> Self {
        Self {
            name,
            out_index,
            first,
            second: None,
            signed: false,
            scale: 0,
            factor: 1.0,
            week: None,
        }
    }

    /// 追加第二段比特（作为低位拼接）
    pub const fn then(mut self, second: BitRange) -> Self {
        self.second = Some(second);
        self
    }

    /// 二进制补码有符号字段
    pub const fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    /// 2的幂比例因子
    pub const fn scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// 额外的单位乘数（如HOW计数的6秒）
    pub const fn factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// 截断周数字段
    pub const fn week(mut self, bits: WeekBits) -> Self {
        self.week = Some(bits);
        self
    }

    /// 总比特数
    pub const fn total_bits(&self) -> u32 {
        let second = match self.second {
            Some(range) => range.len as u32,
            None => 0,
        };
        self.first.len as u32 + second
    }
}

/// 子帧格式模式（1..=10）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// 子帧1：时钟、周数、健康状态
    Clock,
    /// 子帧2：星历第一部分
    EphemerisOne,
    /// 子帧3：星历第二部分
    EphemerisTwo,
    /// SV/Page ID 1-32：历书
    Almanac,
    /// SV/Page ID 51：历书参考时间与SV 1-24健康状态
    AlmanacHealth,
    /// SV/Page ID 57：保留页
    ReservedPage,
    /// SV/Page ID 58-62：保留页
    ReservedPageGroup,
    /// SV/Page ID 56：电离层与UTC参数
    IonoUtc,
    /// SV/Page ID 63：A-S标志/卫星配置与SV 25-32健康状态
    SvConfig,
    /// SV/Page ID 52-55：NMCT、特殊电文与系统保留页
    SpecialPages,
}

impl Pattern {
    pub const ALL: [Pattern; 10] = [
        Pattern::Clock,
        Pattern::EphemerisOne,
        Pattern::EphemerisTwo,
        Pattern::Almanac,
        Pattern::AlmanacHealth,
        Pattern::ReservedPage,
        Pattern::ReservedPageGroup,
        Pattern::IonoUtc,
        Pattern::SvConfig,
        Pattern::SpecialPages,
    ];

    /// 模式编号（1..=10）
    pub const fn number(self) -> u8 {
        match self {
            Pattern::Clock => 1,
            Pattern::EphemerisOne => 2,
            Pattern::EphemerisTwo => 3,
            Pattern::Almanac => 4,
            Pattern::AlmanacHealth => 5,
            Pattern::ReservedPage => 6,
            Pattern::ReservedPageGroup => 7,
            Pattern::IonoUtc => 8,
            Pattern::SvConfig => 9,
            Pattern::SpecialPages => 10,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.number() == number)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern {} ({:?})", self.number(), self)
    }
}

/// GPS周 + 周内秒
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GpsWeekSecond {
    pub week: i32,
    pub sow: f64,
}

impl GpsWeekSecond {
    /// 创建并归一化（周内秒落在[0, 604800)）
    pub fn new(week: i32, sow: f64) -> Self {
        let carry = (sow / SECONDS_PER_WEEK).floor();
        Self {
            week: week + carry as i32,
            sow: sow - carry * SECONDS_PER_WEEK,
        }
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        Self::new(self.week, self.sow + seconds)
    }

    pub fn sub_seconds(self, seconds: f64) -> Self {
        Self::new(self.week, self.sow - seconds)
    }

    /// 与另一时刻的秒差（self - other）
    pub fn diff_seconds(&self, other: &GpsWeekSecond) -> f64 {
        (self.week - other.week) as f64 * SECONDS_PER_WEEK + (self.sow - other.sow)
    }
}

impl fmt::Display for GpsWeekSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.3}", self.week, self.sow)
    }
}

/// NMCT有效性元数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NmctMeta {
    /// 数据龄期偏移（秒）
    pub aodo: u32,
    /// NMCT有效起始时刻；AODO为无效标志时为None
    pub tnmct: Option<GpsWeekSecond>,
    /// 星历参考时刻
    pub toe: GpsWeekSecond,
    /// 子帧发送时刻
    pub tot: GpsWeekSecond,
}

impl NmctMeta {
    pub fn is_valid(&self) -> bool {
        self.tnmct.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_bits() {
        assert_eq!(WeekBits::Bits8.modulus(), 256);
        assert_eq!(WeekBits::Bits8.tolerance(), 127);
        assert_eq!(WeekBits::Bits10.modulus(), 1024);
        assert_eq!(WeekBits::Bits10.tolerance(), 511);
    }

    #[test]
    fn test_field_spec_builder() {
        let spec = FieldSpec::new("m0", 8, BitRange::new(4, 17, 8))
            .then(BitRange::new(5, 1, 24))
            .signed()
            .scale(-31);

        assert_eq!(spec.total_bits(), 32);
        assert!(spec.signed);
        assert_eq!(spec.scale, -31);
        assert_eq!(spec.factor, 1.0);
        assert!(spec.week.is_none());
    }

    #[test]
    fn test_bit_range_bounds() {
        assert!(BitRange::new(1, 1, 30).is_within_subframe());
        assert!(!BitRange::new(1, 20, 12).is_within_subframe());
        assert!(!BitRange::new(11, 1, 8).is_within_subframe());
        assert!(!BitRange::new(0, 1, 8).is_within_subframe());
    }

    #[test]
    fn test_pattern_numbers() {
        for (i, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.number() as usize, i + 1);
            assert_eq!(Pattern::from_number(pattern.number()), Some(*pattern));
        }
        assert_eq!(Pattern::from_number(0), None);
        assert_eq!(Pattern::from_number(11), None);
    }

    #[test]
    fn test_gps_week_second_normalize() {
        let t = GpsWeekSecond::new(2000, -6.0);
        assert_eq!(t.week, 1999);
        assert_eq!(t.sow, 604_794.0);

        let t = GpsWeekSecond::new(2000, 604_800.0);
        assert_eq!(t.week, 2001);
        assert_eq!(t.sow, 0.0);

        let a = GpsWeekSecond::new(2001, 100.0);
        let b = GpsWeekSecond::new(2000, 604_700.0);
        assert_eq!(a.diff_seconds(&b), 200.0);
        assert_eq!(b.add_seconds(200.0), a);
    }
}
