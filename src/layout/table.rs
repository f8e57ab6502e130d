//! Observation table: one header band, then five timing rows per session.

use crate::foundation::core::{Point, Rect};
use crate::group::grouper::DateGroup;
use crate::layout::config::LayoutConfig;
use crate::render::plan::{DrawPlan, Stroke};
use crate::scene::model::{Action, Timing};

/// Maximum number of action marks printed in one row.
pub const MAX_ACTION_MARKS: usize = 2;

/// One checkbox in the hand-hygiene column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMark {
    pub action: Action,
    pub checked: bool,
}

/// Derived state of one (session, timing) row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingRow {
    pub session_number: usize,
    pub timing: Timing,
    /// At least one record in the session has this timing.
    pub applicable: bool,
    /// Known actions seen at this timing, first-seen order, deduplicated, at most
    /// [`MAX_ACTION_MARKS`].
    pub actions: Vec<Action>,
}

impl TimingRow {
    pub fn derive(group: &DateGroup<'_>, timing: Timing) -> Self {
        let mut applicable = false;
        let mut actions = Vec::new();
        for record in &group.records {
            if record.known_timing() != Some(timing) {
                continue;
            }
            applicable = true;
            if let Some(action) = record.known_action()
                && !actions.contains(&action)
            {
                actions.push(action);
            }
        }
        actions.truncate(MAX_ACTION_MARKS);

        Self {
            session_number: group.session_number,
            timing,
            applicable,
            actions,
        }
    }

    /// First-column label, e.g. `"1. 患者接触前"`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.session_number, self.timing.display_name())
    }

    /// Checkboxes shown in the hand-hygiene column.
    ///
    /// With no recognised action all three kinds are shown unchecked; otherwise only the
    /// recognised actions are shown, checked.
    pub fn action_marks(&self) -> Vec<ActionMark> {
        if self.actions.is_empty() {
            return Action::ALL
                .into_iter()
                .map(|action| ActionMark {
                    action,
                    checked: false,
                })
                .collect();
        }
        self.actions
            .iter()
            .map(|&action| ActionMark {
                action,
                checked: true,
            })
            .collect()
    }
}

/// Rows for every session, five per session in timing order.
pub fn timing_rows(groups: &[DateGroup<'_>]) -> Vec<TimingRow> {
    groups
        .iter()
        .flat_map(|g| Timing::ALL.into_iter().map(move |t| TimingRow::derive(g, t)))
        .collect()
}

pub struct TableLayoutEngine<'c> {
    cfg: &'c LayoutConfig,
}

impl<'c> TableLayoutEngine<'c> {
    pub fn new(cfg: &'c LayoutConfig) -> Self {
        Self { cfg }
    }

    /// Draw the header band and all session rows from `start_y` downward; return the final cursor.
    pub fn layout(&self, plan: &mut DrawPlan, groups: &[DateGroup<'_>], start_y: f64) -> f64 {
        self.layout_rows(plan, &timing_rows(groups), start_y)
    }

    /// Like [`Self::layout`], drawing rows already derived with [`timing_rows`].
    #[tracing::instrument(skip(self, plan, rows), fields(rows = rows.len()))]
    pub fn layout_rows(&self, plan: &mut DrawPlan, rows: &[TimingRow], start_y: f64) -> f64 {
        let cfg = self.cfg;
        let grid = Stroke {
            color: cfg.grid_stroke,
            width: cfg.grid_line_width,
        };

        let mut y = start_y;
        plan.rect(self.row_rect(y), Some(cfg.header_band_tint), Some(grid));
        for (i, title) in cfg.column_titles.iter().enumerate() {
            plan.text(self.cell_origin(i, y), cfg.table_font_size, *title);
        }
        y -= cfg.table_row_height;

        for row in rows {
            self.draw_row(plan, row, y, grid);
            y -= cfg.table_row_height;
        }

        tracing::debug!(final_y = y, "table laid out");
        y
    }

    fn draw_row(&self, plan: &mut DrawPlan, row: &TimingRow, y: f64, grid: Stroke) {
        let cfg = self.cfg;
        let size = cfg.table_font_size;

        plan.rect(self.row_rect(y), Some(cfg.row_tint), None);
        plan.text(self.cell_origin(0, y), size, row.label());
        plan.text(
            self.cell_origin(1, y),
            size,
            cfg.glyph(row.applicable).to_string(),
        );
        plan.text(self.cell_origin(2, y), size, self.marks_text(row));
        plan.rect(self.row_rect(y), None, Some(grid));
    }

    fn marks_text(&self, row: &TimingRow) -> String {
        row.action_marks()
            .iter()
            .map(|m| format!("{}{}", self.cfg.glyph(m.checked), m.action.display_name()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full-width band whose top edge is `y`.
    fn row_rect(&self, y: f64) -> Rect {
        let cfg = self.cfg;
        Rect::new(
            cfg.margin,
            y - cfg.table_row_height,
            cfg.margin + cfg.table_width(),
            y,
        )
    }

    fn cell_origin(&self, column: usize, y: f64) -> Point {
        let cfg = self.cfg;
        Point::new(
            cfg.column_x(column) + cfg.cell_inset_x,
            y - cfg.table_row_height + cfg.cell_inset_y,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
