use std::path::{Path, PathBuf};

use crate::foundation::error::FormResult;
use crate::group::grouper::{DayBoundary, group_records};
use crate::layout::config::LayoutConfig;
use crate::layout::header::HeaderLayoutEngine;
use crate::layout::table::{TableLayoutEngine, TimingRow, timing_rows};
use crate::output::sink::{DocumentSink, FileSink};
use crate::render::pdf::{PdfBackend, PdfBackendOpts};
use crate::render::plan::DrawPlan;
use crate::scene::model::{FacilityInfo, ObservationRecord};

/// Options for [`DocumentAssembler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AssembleOpts {
    /// Time zone whose calendar days split records into sessions.
    pub day_boundary: DayBoundary,
}

/// Laid-out form before serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct FormLayout {
    /// Every draw op on the page.
    pub plan: DrawPlan,
    /// Table rows in draw order, five per session.
    pub rows: Vec<TimingRow>,
    /// Cursor below the last table row.
    pub final_y: f64,
}

impl FormLayout {
    /// Number of sessions printed in the table.
    pub fn session_count(&self) -> usize {
        self.rows.last().map_or(0, |r| r.session_number)
    }
}

/// Renders one observation form per call.
#[derive(Clone, Debug, Default)]
pub struct DocumentAssembler {
    cfg: LayoutConfig,
    opts: AssembleOpts,
}

impl DocumentAssembler {
    pub fn new(opts: AssembleOpts) -> Self {
        Self::with_config(LayoutConfig::A4_FORM, opts)
    }

    pub fn with_config(cfg: LayoutConfig, opts: AssembleOpts) -> Self {
        Self { cfg, opts }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Lay out the whole page: title, header grid, observation table, footer.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn layout(
        &self,
        info: &FacilityInfo,
        records: &[ObservationRecord],
    ) -> FormResult<FormLayout> {
        let cfg = &self.cfg;
        let page = cfg.page;
        let mut plan = DrawPlan::new(page);

        let center_x = page.width / 2.0;
        plan.text_centered(
            center_x,
            page.height - cfg.title_from_top,
            cfg.title_size,
            cfg.title,
        );
        plan.text_centered(
            center_x,
            page.height - cfg.subtitle_from_top,
            cfg.subtitle_size,
            cfg.subtitle,
        );

        let y = HeaderLayoutEngine::new(cfg).layout(&mut plan, info, cfg.header_start_y());

        let groups = group_records(records, self.opts.day_boundary)?;
        let rows = timing_rows(&groups);
        let table = TableLayoutEngine::new(cfg);
        let final_y = table.layout_rows(&mut plan, &rows, y - cfg.table_gap);
        if final_y < cfg.margin {
            tracing::warn!(final_y, "table runs past the bottom margin");
        }

        plan.text_right(
            page.width - cfg.footer_inset_x,
            cfg.footer_y,
            cfg.footer_size,
            cfg.footer,
        );

        Ok(FormLayout {
            plan,
            rows,
            final_y,
        })
    }

    /// Lay out, serialize and hand the document to `sink`.
    pub fn assemble_into(
        &self,
        info: &FacilityInfo,
        records: &[ObservationRecord],
        sink: &mut dyn DocumentSink,
    ) -> FormResult<FormLayout> {
        let layout = self.layout(info, records)?;
        let backend = PdfBackend::new(PdfBackendOpts {
            title: self.cfg.title.to_string(),
            ..PdfBackendOpts::default()
        });
        let bytes = backend.render(&layout.plan)?;
        sink.write_document(&bytes)?;
        Ok(layout)
    }

    /// Render the form to `out` and return the path written.
    ///
    /// On error the file at `out` may exist with partial contents and must not be trusted.
    #[tracing::instrument(skip_all, fields(out = %out.as_ref().display()))]
    pub fn assemble(
        &self,
        info: &FacilityInfo,
        records: &[ObservationRecord],
        out: impl AsRef<Path>,
    ) -> FormResult<PathBuf> {
        let out = out.as_ref();
        let mut sink = FileSink::new(out);
        let layout = self.assemble_into(info, records, &mut sink)?;
        tracing::info!(sessions = layout.session_count(), "observation form written");
        Ok(out.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/assembler.rs"]
mod tests;
