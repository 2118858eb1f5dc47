use ratatui::layout::Rect;

/// Columns between two adjacent labels.
pub const BUTTON_GAP: u16 = 1;

/// Width of a label drawn with one column of padding on each side.
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Lays labels out left to right on the first line of `row`.
///
/// Labels that would overflow the row are left out, so the result may be
/// shorter than `labels`.
pub fn button_rects(labels: &[String], row: Rect) -> Vec<Rect> {
    let right = row.x.saturating_add(row.width);
    let mut x = row.x;
    let mut rects = Vec::with_capacity(labels.len());

    if row.height == 0 {
        return rects;
    }

    for label in labels {
        let width = button_width(label);
        if x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, row.y, width, 1));
        x = x.saturating_add(width + BUTTON_GAP);
    }

    rects
}
