// Hover tooltip state machine
use crate::domain::record::RaceRecord;

/// Markers from this year on anchor the panel beside the pointer
/// instead of above it
pub const ANCHOR_FLIP_YEAR: i32 = 2012;

/// Pointer page coordinates at the time of the hover event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPanel {
    pub top: f64,
    pub left: f64,
    pub transform: &'static str,
    pub class: &'static str,
    pub year: i32,
    pub html: String,
}

impl TooltipPanel {
    /// Place the panel relative to the pointer: level with it and
    /// right-aligned against it from ANCHOR_FLIP_YEAR on, above it and
    /// bottom-aligned otherwise
    pub fn anchored(record: &RaceRecord, pointer: PointerEvent) -> Self {
        let flipped = record.year >= ANCHOR_FLIP_YEAR;
        let (top, left, transform, class) = if flipped {
            (
                pointer.page_y,
                pointer.page_x - 5.0,
                "translate(-100%, -50%)",
                "tooltip-left",
            )
        } else {
            (
                pointer.page_y - 5.0,
                pointer.page_x,
                "translate(-50%, -100%)",
                "tooltip-top",
            )
        };

        Self {
            top,
            left,
            transform,
            class,
            year: record.year,
            html: panel_html(record),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tooltip {
    #[default]
    Hidden,
    Visible(TooltipPanel),
}

impl Tooltip {
    pub fn pointer_enter(self, record: &RaceRecord, pointer: PointerEvent) -> Self {
        Tooltip::Visible(TooltipPanel::anchored(record, pointer))
    }

    pub fn pointer_leave(self) -> Self {
        Tooltip::Hidden
    }
}

fn panel_html(record: &RaceRecord) -> String {
    let mut html = format!(
        "<dl>\
         <dt>Name:</dt> <dd>{}</dd><br />\
         <dt>Country:</dt> <dd>{}</dd><br />\
         <dt>Year:</dt> <dd>{}</dd><br />\
         <dt>Time:</dt> <dd>{}</dd>\
         </dl>",
        escape_html(&record.name),
        escape_html(&record.nationality),
        record.year,
        record.time_label(),
    );
    // An empty doping note means no paragraph at all
    if record.doping_flagged() {
        html.push_str(&format!(
            "<p style=\"margin-top: 0.5rem;\">{}</p>",
            escape_html(&record.doping)
        ));
    }
    html
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
