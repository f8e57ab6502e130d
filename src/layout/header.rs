//! Facility metadata grid: ten labelled answer lines in two columns.

use crate::foundation::core::{Line, Point};
use crate::layout::config::LayoutConfig;
use crate::render::plan::{DrawPlan, Stroke};
use crate::scene::model::FacilityInfo;

/// Resolved geometry of one header field.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell<'a> {
    pub label: &'static str,
    pub value: Option<&'a str>,
    /// Baseline start of the label (the column origin).
    pub label_origin: Point,
    /// The answer line.
    pub rule: Line,
    /// Baseline start of the value text, present only when a value is set.
    pub value_origin: Option<Point>,
}

pub struct HeaderLayoutEngine<'c> {
    cfg: &'c LayoutConfig,
}

impl<'c> HeaderLayoutEngine<'c> {
    pub fn new(cfg: &'c LayoutConfig) -> Self {
        Self { cfg }
    }

    /// Compute the ten cells, row-major: even indices left column, odd indices right column.
    pub fn cells<'a>(&self, info: &'a FacilityInfo, start_y: f64) -> Vec<HeaderCell<'a>> {
        let cfg = self.cfg;
        info.fields()
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let x = if i % 2 == 0 {
                    cfg.left_column_x()
                } else {
                    cfg.right_column_x()
                };
                let y = start_y - (i / 2) as f64 * cfg.header_row_pitch;
                let rule_y = y - cfg.rule_drop;
                HeaderCell {
                    label,
                    value,
                    label_origin: Point::new(x, y),
                    rule: Line::new(
                        (x + cfg.rule_start_dx, rule_y),
                        (x + cfg.rule_end_dx, rule_y),
                    ),
                    value_origin: value
                        .map(|_| Point::new(x + cfg.value_dx, rule_y + cfg.value_lift)),
                }
            })
            .collect()
    }

    /// Draw the grid and return the cursor below it.
    #[tracing::instrument(skip(self, plan, info))]
    pub fn layout(&self, plan: &mut DrawPlan, info: &FacilityInfo, start_y: f64) -> f64 {
        let size = self.cfg.header_font_size;
        let stroke = Stroke {
            color: self.cfg.rule_stroke,
            width: self.cfg.rule_line_width,
        };

        for cell in self.cells(info, start_y) {
            plan.text(cell.label_origin, size, cell.label);
            plan.line(cell.rule, stroke);
            if let (Some(value), Some(origin)) = (cell.value, cell.value_origin) {
                plan.text(origin, size, value);
            }
        }

        let reserved = f64::from(self.cfg.header_reserved_rows);
        let next_y = start_y - reserved * self.cfg.header_row_pitch;
        tracing::debug!(next_y, "header grid laid out");
        next_y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/header.rs"]
mod tests;
