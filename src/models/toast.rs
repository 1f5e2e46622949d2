// ABOUTME: Toast request data model with placement and severity styling
// A request is immutable once presented and drives exactly one rendered toast

use clap::ValueEnum;
use ratatui::{layout::Rect, style::Color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/// Lifetime applied when a request does not name one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Cells kept free between a toast and the edge of the frame.
const EDGE_MARGIN: u16 = 1;

/// Identity of one mount point on a [`crate::surface::Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Corner of the frame a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Next corner in clockwise order, used by the demo app to cycle placement.
    pub fn next(&self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
        }
    }

    /// Rectangle of `width` x `height` anchored at this corner of `area`.
    ///
    /// The size is clamped to the area, and the edge margin shrinks when the
    /// toast would not otherwise fit.
    pub fn placement(&self, area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        let margin_x = EDGE_MARGIN.min(area.width - width);
        let margin_y = EDGE_MARGIN.min(area.height - height);

        let x = if self.is_left() {
            area.x + margin_x
        } else {
            area.x + area.width - width - margin_x
        };
        let y = if self.is_top() {
            area.y + margin_y
        } else {
            area.y + area.height - height - margin_y
        };

        Rect::new(x, y, width, height)
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown toast position: {s}"))
    }
}

/// Severity of a toast. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown toast type: {s}"))
    }
}

/// Everything needed to show one toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    pub message: String,
    #[serde(default = "default_duration", with = "duration_ms")]
    pub duration: Duration,
    #[serde(default)]
    pub position: ToastPosition,
    #[serde(default, rename = "type")]
    pub kind: ToastKind,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_DURATION,
            position: ToastPosition::default(),
            kind: ToastKind::default(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Error)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }
}

fn default_duration() -> Duration {
    DEFAULT_DURATION
}

/// Durations travel as integer milliseconds.
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_defaults() {
        let request = ToastRequest::new("Saved");
        assert_eq!(request.duration, Duration::from_millis(3000));
        assert_eq!(request.position, ToastPosition::BottomRight);
        assert_eq!(request.kind, ToastKind::Info);
    }

    #[test]
    fn test_request_from_json_applies_defaults() {
        let request: ToastRequest = serde_json::from_str(r#"{"message":"Saved"}"#).unwrap();
        assert_eq!(request, ToastRequest::new("Saved"));
    }

    #[test]
    fn test_request_from_json_overrides() {
        let json = r#"{"message":"Oops","duration":500,"position":"top-left","type":"error"}"#;
        let request: ToastRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            ToastRequest::error("Oops")
                .with_duration(Duration::from_millis(500))
                .with_position(ToastPosition::TopLeft)
        );
    }

    #[test]
    fn test_request_json_uses_type_field() {
        let json = serde_json::to_value(ToastRequest::warning("Disk low")).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["duration"], 3000);
        assert_eq!(json["position"], "bottom-right");
    }

    #[test]
    fn test_request_without_message_is_rejected() {
        assert!(serde_json::from_str::<ToastRequest>(r#"{"duration":100}"#).is_err());
    }

    #[test]
    fn test_position_names() {
        for position in ToastPosition::ALL {
            assert_eq!(position.to_string().parse::<ToastPosition>(), Ok(position));
        }
        assert!("middle".parse::<ToastPosition>().is_err());
    }

    #[test]
    fn test_kind_names() {
        for kind in ToastKind::ALL {
            assert_eq!(kind.to_string().parse::<ToastKind>(), Ok(kind));
        }
        assert!("fatal".parse::<ToastKind>().is_err());
    }

    #[test]
    fn test_position_cycle_visits_every_corner() {
        let mut position = ToastPosition::TopLeft;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(position);
            position = position.next();
        }
        assert_eq!(position, ToastPosition::TopLeft);
        for corner in ToastPosition::ALL {
            assert!(seen.contains(&corner));
        }
    }

    #[test]
    fn test_placement_corners() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(
            ToastPosition::TopLeft.placement(area, 30, 3),
            Rect::new(1, 1, 30, 3)
        );
        assert_eq!(
            ToastPosition::TopRight.placement(area, 30, 3),
            Rect::new(49, 1, 30, 3)
        );
        assert_eq!(
            ToastPosition::BottomLeft.placement(area, 30, 3),
            Rect::new(1, 20, 30, 3)
        );
        assert_eq!(
            ToastPosition::BottomRight.placement(area, 30, 3),
            Rect::new(49, 20, 30, 3)
        );
    }

    #[test]
    fn test_placement_clamps_to_small_area() {
        let area = Rect::new(5, 2, 10, 2);
        let rect = ToastPosition::BottomRight.placement(area, 40, 3);
        assert_eq!(rect, Rect::new(5, 2, 10, 2));
    }
}
