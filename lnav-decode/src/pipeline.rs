//! 子帧解码流水线
//!
//! 按配置依次执行：奇偶校验 → 去反相 → 模式选择 → 工程单位换算

use lnav_core::utils::{get_how_time, get_sfid, get_svpage_id};
use lnav_core::{
    normalize_subframe, DecodeConfig, NavError, NavResult, NmctMeta, Pattern, Subframe,
    SUBFRAME_WORDS,
};
use serde::Serialize;
use tracing::{trace, warn};

use crate::nmct::get_nmct_validity;
use crate::page_map::sv2page;
use crate::parity::{find_parity_error, make_upright};
use crate::subframe::{get_subframe_pattern, subframe_convert};

/// 单个子帧的解码结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedSubframe {
    /// 子帧ID（1..=5）
    pub subframe_id: u8,
    /// 格式模式
    pub pattern: Pattern,
    /// HOW时间（下一子帧起点的周内秒）
    pub tow_seconds: u32,
    /// 子帧4/5的（子帧，页面），冗余ID取最小页号
    pub sv_page: Option<(u8, u8)>,
    /// 60个工程单位值
    pub values: Vec<f64>,
}

impl DecodedSubframe {
    pub fn to_json(&self) -> NavResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 子帧解码器
///
/// 持有解码配置，对每个子帧执行完整的解码流程
#[derive(Debug, Clone, Default)]
pub struct NavDecoder {
    pub config: DecodeConfig,
}

impl NavDecoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// 校验并去反相，得到数据位朝上的子帧
    fn prepare(&self, words: &Subframe) -> NavResult<Subframe> {
        let words = normalize_subframe(words);
        if self.config.check_parity {
            if let Some(word) = find_parity_error(&words, self.config.known_upright) {
                warn!(word, "subframe rejected");
                return Err(NavError::ParityMismatch { word });
            }
        }
        if self.config.known_upright {
            Ok(words)
        } else {
            Ok(make_upright(&words))
        }
    }

    /// 解码一个子帧
    ///
    /// # 参数
    /// - `words`: 子帧的10个字
    ///
    /// # 返回
    /// - `Ok(DecodedSubframe)`: 解码结果
    /// - `Err(NavError)`: 奇偶校验失败、子帧格式无效或周数无法消歧
    pub fn decode(&self, words: &Subframe) -> NavResult<DecodedSubframe> {
        let words = self.prepare(words)?;
        let pattern = get_subframe_pattern(&words)?;
        let values = subframe_convert(&words, self.config.reference_week)?;

        let subframe_id = get_sfid(words[1]) as u8;
        let sv_page = match subframe_id {
            4 | 5 => Some(sv2page(get_svpage_id(words[2]))?),
            _ => None,
        };
        let tow_seconds = get_how_time(words[1]);

        trace!(subframe_id, %pattern, tow_seconds, ?sv_page, "subframe decoded");

        Ok(DecodedSubframe {
            subframe_id,
            pattern,
            tow_seconds,
            sv_page,
            values: values.to_vec(),
        })
    }

    /// 宽整数容器版本
    pub fn decode_wide(&self, words: &[i64; SUBFRAME_WORDS]) -> NavResult<DecodedSubframe> {
        self.decode(&normalize_subframe(words))
    }

    /// 经过同样的预处理后获取子帧2的NMCT有效期
    pub fn nmct_validity(&self, words: &Subframe, how_week: u32) -> NavResult<NmctMeta> {
        let words = self.prepare(words)?;
        get_nmct_validity(&words, how_week)
    }
}
