//! Renderer for the hand-hygiene direct observation form.
//!
//! Observation records are grouped into dated sessions, laid out on a fixed A4 form together with
//! the facility header, and written as a single-page PDF:
//!
//! - Decode a [`FormInput`] from JSON
//! - Build a [`DocumentAssembler`] (optionally with a fixed [`DayBoundary`])
//! - Call [`DocumentAssembler::assemble`] with an output path, or
//!   [`DocumentAssembler::layout`] to inspect the page without writing it
#![forbid(unsafe_code)]

mod foundation;

pub mod document;
pub mod group;
pub mod layout;
pub mod output;
pub mod render;
pub mod response;
pub mod scene;

pub use crate::foundation::core::{Line, PageSize, Point, Rect, Rgb, mm};
pub use crate::foundation::error::{FormError, FormResult};

pub use crate::document::assembler::{AssembleOpts, DocumentAssembler, FormLayout};
pub use crate::group::grouper::{DateGroup, DayBoundary, MAX_SESSIONS, group_records};
pub use crate::layout::config::LayoutConfig;
pub use crate::layout::table::{ActionMark, MAX_ACTION_MARKS, TimingRow};
pub use crate::output::sink::{DocumentSink, FileSink, InMemorySink};
pub use crate::render::plan::{DrawOp, DrawPlan};
pub use crate::response::RunResponse;
pub use crate::scene::model::{Action, FacilityInfo, FormInput, ObservationRecord, Timing};
