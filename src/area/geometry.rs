use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Zero-sized rects are the deselected state and are not drawn.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Top,
    Bottom,
}

impl Horizontal {
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Vertical {
    pub fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Sides a rectangle grew toward, at most one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub horizontal: Option<Horizontal>,
    pub vertical: Option<Vertical>,
}

impl Orientation {
    pub fn new(horizontal: Option<Horizontal>, vertical: Option<Vertical>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::Left => self.horizontal == Some(Horizontal::Left),
            Side::Right => self.horizontal == Some(Horizontal::Right),
            Side::Top => self.vertical == Some(Vertical::Top),
            Side::Bottom => self.vertical == Some(Vertical::Bottom),
        }
    }

    pub fn sides(&self) -> Vec<Side> {
        let horizontal = self.horizontal.map(|h| match h {
            Horizontal::Left => Side::Left,
            Horizontal::Right => Side::Right,
        });
        let vertical = self.vertical.map(|v| match v {
            Vertical::Top => Side::Top,
            Vertical::Bottom => Side::Bottom,
        });
        horizontal.into_iter().chain(vertical).collect()
    }

    pub fn mirrored(&self) -> Self {
        Self {
            horizontal: self.horizontal.map(Horizontal::mirrored),
            vertical: self.vertical.map(Vertical::mirrored),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub rect: Rect,
    pub orientation: Orientation,
}

impl Coord {
    pub fn at(rect: Rect) -> Self {
        Self {
            rect,
            orientation: Orientation::default(),
        }
    }
}

/// Grows `anchor` toward `end` independently on each axis.
pub fn compute_coord(anchor: Rect, end: Option<Rect>) -> Coord {
    let Some(end) = end else {
        return Coord::at(anchor);
    };

    let mut rect = anchor;
    let mut orientation = Orientation::default();

    if end.left >= anchor.left {
        rect.width = end.left - anchor.left + end.width;
        orientation.horizontal = Some(Horizontal::Right);
    } else {
        rect.left = end.left;
        rect.width = anchor.left - end.left + anchor.width;
        orientation.horizontal = Some(Horizontal::Left);
    }

    if end.top >= anchor.top {
        rect.height = end.top - anchor.top + end.height;
        orientation.vertical = Some(Vertical::Bottom);
    } else {
        rect.top = end.top;
        rect.height = anchor.top - end.top + anchor.height;
        orientation.vertical = Some(Vertical::Top);
    }

    Coord { rect, orientation }
}

/// Grows the main rectangle toward `end` for a fill-handle drag.
///
/// Only one axis grows at a time. With no established orientation the
/// horizontal axis is tried first. Once an axis is established, only that
/// axis is considered, and a pointer that lands on the opposite side of the
/// main rectangle yields no growth instead of flipping sides.
pub fn extension_coord(main: &Coord, end: Rect, previous: &Orientation) -> Coord {
    let main_rect = main.rect;
    let mut rect = main_rect;
    let mut orientation = Orientation::default();

    let horizontal = if end.left < main_rect.left {
        Some(Horizontal::Left)
    } else if end.right() > main_rect.right() {
        Some(Horizontal::Right)
    } else {
        None
    };
    let vertical = if end.top < main_rect.top {
        Some(Vertical::Top)
    } else if end.bottom() > main_rect.bottom() {
        Some(Vertical::Bottom)
    } else {
        None
    };

    let horizontal = match previous.horizontal {
        Some(locked) => horizontal.filter(|side| *side == locked),
        None if previous.vertical.is_some() => None,
        None => horizontal,
    };
    let vertical = match previous.vertical {
        Some(locked) => vertical.filter(|side| *side == locked),
        None if previous.horizontal.is_some() => None,
        None => vertical,
    };

    match (horizontal, vertical) {
        (Some(side), _) => {
            match side {
                Horizontal::Left => {
                    rect.left = end.left;
                    rect.width = main_rect.left - end.left + main_rect.width;
                }
                Horizontal::Right => {
                    rect.width = end.left - main_rect.left + end.width;
                }
            }
            orientation.horizontal = Some(side);
        }
        (None, Some(side)) => {
            match side {
                Vertical::Top => {
                    rect.top = end.top;
                    rect.height = main_rect.top - end.top + main_rect.height;
                }
                Vertical::Bottom => {
                    rect.height = end.top - main_rect.top + end.height;
                }
            }
            orientation.vertical = Some(side);
        }
        (None, None) => {}
    }

    Coord { rect, orientation }
}
