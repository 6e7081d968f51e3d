//! Area vocabulary, keyword classification, and map identity.

/// Courier-station area.
pub const AREA_CAINIAO: &str = "菜鸟驿站";
/// Combined Yunda/JD area.
pub const AREA_YUNDA_JD: &str = "韵达京东";
/// SF and affiliated couriers area.
pub const AREA_SHUNFENG: &str = "顺丰快递";
/// Open fallback bucket for anything the keyword table does not place.
pub const AREA_OTHER: &str = "其他";

/// Areas offered in the staging card editor.
pub const EXPRESS_AREAS: [&str; 3] = [AREA_CAINIAO, AREA_YUNDA_JD, AREA_SHUNFENG];

/// Default-order categories with their containment keywords. A courier name
/// implies its area, so matching is substring containment, never equality.
const DEFAULT_ORDER: [(&str, &[&str]); 4] = [
    (AREA_CAINIAO, &["菜鸟", "蜂鸟"]),
    (AREA_YUNDA_JD, &["韵达", "京东"]),
    (AREA_SHUNFENG, &["顺丰", "圆通", "中通"]),
    (AREA_OTHER, &["其他"]),
];

pub(crate) const DEFAULT_ORDER_LEN: usize = DEFAULT_ORDER.len();

/// Index of the first default-order category whose keyword set hits `area`.
pub(crate) fn category_index(area: &str) -> Option<usize> {
    DEFAULT_ORDER
        .iter()
        .position(|(_, keywords)| keywords.iter().any(|keyword| area.contains(keyword)))
}

/// Maps free text to a canonical area name, falling back to [`AREA_OTHER`].
pub fn classify_area(text: &str) -> &'static str {
    match category_index(text) {
        Some(index) => DEFAULT_ORDER[index].0,
        None => AREA_OTHER,
    }
}

/// The map the operator is currently viewing. The overview identity is this
/// enum's variant, never the underlying asset file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapView {
    /// Depot-wide overview map.
    #[default]
    Overview,
    /// 菜鸟驿站 sub-area map.
    Cainiao,
    /// 韵达京东 sub-area map.
    YundaJd,
    /// 顺丰快递 sub-area map.
    Shunfeng,
}

impl MapView {
    /// All selectable maps, overview first.
    pub const ALL: [MapView; 4] = [
        MapView::Overview,
        MapView::Cainiao,
        MapView::YundaJd,
        MapView::Shunfeng,
    ];

    /// SVG asset file backing this map.
    pub fn asset(self) -> &'static str {
        match self {
            MapView::Overview => "demo-map.svg",
            MapView::Cainiao => "cainiao.svg",
            MapView::YundaJd => "yunda-jd.svg",
            MapView::Shunfeng => "sf.svg",
        }
    }

    /// Display label shown in the map selector.
    pub fn label(self) -> &'static str {
        match self {
            MapView::Overview => "总图-快递中心",
            MapView::Cainiao => "分区-菜鸟驿站",
            MapView::YundaJd => "分区-韵达京东",
            MapView::Shunfeng => "分区-顺丰快递",
        }
    }

    /// The sub-area this map focuses on; `None` for the overview.
    pub fn sub_area(self) -> Option<&'static str> {
        match self {
            MapView::Overview => None,
            MapView::Cainiao => Some(AREA_CAINIAO),
            MapView::YundaJd => Some(AREA_YUNDA_JD),
            MapView::Shunfeng => Some(AREA_SHUNFENG),
        }
    }
}
