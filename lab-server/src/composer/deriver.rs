//! Code Deriver
//!
//! Collapses a skin selection into its canonical five-letter code. The
//! letters are joined by [`SkinMark::PRECEDENCE`], never by the order in
//! which the operator clicked them.

use shared::models::{SkinMark, SkinSelection, SkinTypeCode};

/// `None` until every axis has a selection
pub fn derive_code(selection: &SkinSelection) -> Option<SkinTypeCode> {
    if !selection.is_complete() {
        return None;
    }
    let mut marks: Vec<SkinMark> = selection.selected().collect();
    marks.sort_by_key(SkinMark::rank);
    let ordered: [SkinMark; 5] = marks.try_into().ok()?;
    SkinTypeCode::from_ordered(ordered).ok()
}
