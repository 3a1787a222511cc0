//! LNAV Decode Kernel
//!
//! This crate provides the decoding kernel for the GPS legacy navigation
//! message: parity coding, week number resolution, subframe 4/5 page mapping,
//! subframe pattern selection and engineering-unit conversion.

pub mod nmct;
pub mod page_map;
pub mod parity;
pub mod pipeline;
pub mod subframe;
pub mod week;

pub use nmct::{get_nmct_validity, AODO_INVALID};
pub use page_map::{sfpage2svid, sv2page, zcount2page};
pub use parity::{
    check_parity, check_parity_wide, compute_parity, fix_parity, fix_subframe_parity,
    make_upright,
};
pub use pipeline::{DecodedSubframe, NavDecoder};
pub use subframe::{
    get_subframe_pattern, get_subframe_pattern_wide, subframe_convert, subframe_convert_wide,
    EngOutput,
};
pub use week::{convert_10bit, convert_8bit, convert_x_bit};
