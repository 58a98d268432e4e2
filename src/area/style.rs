use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::area::geometry::{Rect, Side};
use crate::area::model::Area;

pub const TIP_OFFSET: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
    pub display: Display,
}

impl AreaStyle {
    pub fn inline(&self) -> String {
        format!(
            "left: {}; top: {}; width: {}; height: {}; display: {};",
            self.left,
            self.top,
            self.width,
            self.height,
            self.display.as_str()
        )
    }
}

pub fn rect_to_style(rect: &Rect) -> AreaStyle {
    AreaStyle {
        left: px(rect.left),
        top: px(rect.top),
        width: px(rect.width),
        height: px(rect.height),
        display: if rect.is_empty() {
            Display::None
        } else {
            Display::Block
        },
    }
}

pub fn area_to_style(area: &Area) -> AreaStyle {
    rect_to_style(&area.coord.rect)
}

fn px(value: f64) -> String {
    format!("{value}px")
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl TipStyle {
    pub fn inline(&self) -> String {
        [
            ("left", &self.left),
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|value| format!("{name}: {value};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Value bubble shown next to the fill handle while dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaTip {
    pub style: TipStyle,
    pub value: Value,
}

/// Places the tip at the extension's growing corner and shows the value
/// filled nearest the pointer. When that corner lies past the row group's
/// extent the tip is pinned to the opposite edge instead.
pub fn pure_extension_tip(
    extension: &Area,
    values: &[Vec<Value>],
    group: Option<Rect>,
    offset: f64,
) -> Option<AreaTip> {
    if values.is_empty() || !extension.drag.dragging {
        return None;
    }
    let rect = extension.coord.rect;
    let orientation = extension.coord.orientation;

    let (top, row) = if orientation.contains(Side::Top) {
        (rect.top, values.first()?)
    } else {
        (rect.bottom(), values.last()?)
    };
    let (left, value) = if orientation.contains(Side::Left) {
        (rect.left, row.first()?)
    } else {
        (rect.right(), row.last()?)
    };

    let mut style = TipStyle::default();
    match group {
        Some(bounds) if top >= bounds.height => style.bottom = Some(px(offset)),
        _ => style.top = Some(px(top + offset)),
    }
    match group {
        Some(bounds) if left >= bounds.width => style.right = Some(px(offset)),
        _ => style.left = Some(px(left + offset)),
    }

    Some(AreaTip {
        style,
        value: value.clone(),
    })
}
