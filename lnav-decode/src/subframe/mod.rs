//! 子帧解码模块
//!
//! 提供按格式模式从10字子帧中提取工程单位量的功能，支持：
//! - 由子帧ID与SV/Page ID选择格式模式
//! - 跨字的比特字段拼接
//! - 二进制补码符号扩展与2的幂比例换算
//! - 截断周数字段的消歧

pub mod decoder;
pub mod field_tables;

pub use decoder::{
    convert_quant, extract_raw, get_subframe_pattern, get_subframe_pattern_wide,
    subframe_convert, subframe_convert_wide, EngOutput,
};
pub use field_tables::{fields_for, find_field, COMMON_FIELDS};
