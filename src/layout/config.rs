use crate::foundation::core::{PageSize, Rgb, mm};

/// Geometry and fixed text of the observation form.
///
/// All lengths are PDF points with the origin at the bottom-left of the page. Offsets named
/// `*_from_top` are measured downward from the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub page: PageSize,
    /// Margin on all four sides.
    pub margin: f64,

    pub title: &'static str,
    pub title_size: f64,
    pub title_from_top: f64,
    pub subtitle: &'static str,
    pub subtitle_size: f64,
    pub subtitle_from_top: f64,

    /// Baseline of the first header grid row.
    pub header_from_top: f64,
    pub header_font_size: f64,
    /// Vertical step between header grid rows.
    pub header_row_pitch: f64,
    /// Rows consumed by the header grid, including one blank margin row.
    pub header_reserved_rows: u32,
    /// Right column origin, measured from the horizontal page centre.
    pub header_right_column_offset: f64,
    /// Answer rule start, relative to the column origin.
    pub rule_start_dx: f64,
    /// Answer rule end, relative to the column origin.
    pub rule_end_dx: f64,
    /// Answer rule position below the label baseline.
    pub rule_drop: f64,
    pub rule_stroke: Rgb,
    pub rule_line_width: f64,
    /// Value text start, relative to the column origin.
    pub value_dx: f64,
    /// Value baseline height above the answer rule.
    pub value_lift: f64,

    /// Space between the header grid and the table.
    pub table_gap: f64,
    pub table_columns: usize,
    pub table_row_height: f64,
    pub table_font_size: f64,
    pub cell_inset_x: f64,
    pub cell_inset_y: f64,
    pub column_titles: [&'static str; 4],
    pub header_band_tint: Rgb,
    pub row_tint: Rgb,
    pub grid_stroke: Rgb,
    pub grid_line_width: f64,

    pub footer: &'static str,
    pub footer_size: f64,
    /// Right edge of the footer text, measured from the right page edge.
    pub footer_inset_x: f64,
    pub footer_y: f64,

    pub checked_glyph: char,
    pub unchecked_glyph: char,
}

impl LayoutConfig {
    /// The hand-hygiene direct observation form on A4 paper.
    pub const A4_FORM: Self = Self {
        page: PageSize::A4,
        margin: mm(10.0),

        title: "泉州感染防止ネットワーク手指衛生直接観察用フォーム",
        title_size: 16.0,
        title_from_top: mm(20.0),
        subtitle: "観察フォーム",
        subtitle_size: 10.0,
        subtitle_from_top: mm(28.0),

        header_from_top: mm(35.0),
        header_font_size: 9.0,
        header_row_pitch: mm(5.0),
        header_reserved_rows: 6,
        header_right_column_offset: mm(5.0),
        rule_start_dx: mm(25.0),
        rule_end_dx: mm(60.0),
        rule_drop: mm(1.0),
        rule_stroke: Rgb::BLACK,
        rule_line_width: 1.0,
        value_dx: mm(26.0),
        value_lift: mm(0.5),

        table_gap: mm(10.0),
        table_columns: 4,
        table_row_height: mm(8.0),
        table_font_size: 7.0,
        cell_inset_x: mm(2.0),
        cell_inset_y: mm(2.0),
        column_titles: ["機会", "適応", "手指衛生", "機会"],
        header_band_tint: Rgb::new(0.93, 0.84, 0.75),
        row_tint: Rgb::new(1.0, 0.96, 0.94),
        grid_stroke: Rgb::new(0.7, 0.7, 0.7),
        grid_line_width: 1.0,

        footer: "WHO観察フォーム一部変換",
        footer_size: 8.0,
        footer_inset_x: mm(10.0),
        footer_y: mm(10.0),

        checked_glyph: '☑',
        unchecked_glyph: '☐',
    };

    pub fn header_start_y(&self) -> f64 {
        self.page.height - self.header_from_top
    }

    pub fn left_column_x(&self) -> f64 {
        self.margin
    }

    pub fn right_column_x(&self) -> f64 {
        self.page.width / 2.0 + self.header_right_column_offset
    }

    pub fn table_width(&self) -> f64 {
        self.page.width - 2.0 * self.margin
    }

    pub fn column_width(&self) -> f64 {
        self.table_width() / self.table_columns as f64
    }

    /// Left edge of table column `index` (0-based).
    pub fn column_x(&self, index: usize) -> f64 {
        self.margin + index as f64 * self.column_width()
    }

    pub fn glyph(&self, checked: bool) -> char {
        if checked {
            self.checked_glyph
        } else {
            self.unchecked_glyph
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::A4_FORM
    }
}
