//! Directed edges and their derived visual styling.

/// Stroke used when the edge's target node is overloaded.
pub const ALERT_RED: &str = "#ef4444";

/// Stroke used when the edge's target node is healthy or idle.
pub const NEUTRAL_DARK: &str = "#444";

/// Derived visual attributes of an edge.
///
/// Fully recomputed on every reconciliation; never edited piecemeal.
/// `animated` is always true: it reflects directional traffic flow,
/// not load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub stroke_color: &'static str,
    pub stroke_width: f32,
    pub opacity: f32,
    pub animated: bool,
}

impl EdgeStyle {
    /// Style for an edge feeding an overloaded node.
    pub fn hot() -> Self {
        Self {
            stroke_color: ALERT_RED,
            stroke_width: 3.0,
            opacity: 1.0,
            animated: true,
        }
    }

    /// Style for an edge feeding a healthy (or unknown) node.
    pub fn cool() -> Self {
        Self {
            stroke_color: NEUTRAL_DARK,
            stroke_width: 2.0,
            opacity: 0.5,
            animated: true,
        }
    }

    /// Whether this is the alert styling.
    pub fn is_hot(&self) -> bool {
        self.stroke_color == ALERT_RED
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::cool()
    }
}

/// A directed relation `source -> target` between two node ids.
///
/// Both endpoints must exist in the node set; the store validates
/// this at initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub style: EdgeStyle,
}

impl Edge {
    /// Create an edge with the default (cool) styling.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            style: EdgeStyle::default(),
        }
    }
}
