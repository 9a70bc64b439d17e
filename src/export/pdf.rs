//! Table report writer on top of `pdf-writer`.
//!
//! Layout runs first and renders each page into its own content stream.
//! Object ids are only handed out when the document is saved.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

/// A captioned table inside a report.
pub struct ReportTable {
    pub caption: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Page geometry in points.
struct Geometry {
    width: f32,
    height: f32,
    margin: f32,
    row_h: f32,
}

const A4: Geometry = Geometry {
    width: 595.0,
    height: 842.0,
    margin: 50.0,
    row_h: 20.0,
};

const FONT: Name<'static> = Name(b"F1");
const BODY_SIZE: f32 = 10.0;
const HEAD_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 14.0;

const HEADER_GRAY: f32 = 0.85;
const STRIPE_GRAY: f32 = 0.96;

/// Helvetica (WinAnsi) cannot show arbitrary Unicode; keep printable ASCII.
fn pdf_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

fn text(content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
    let s = pdf_text(s);
    content.begin_text();
    content.set_font(FONT, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(s.as_bytes()));
    content.end_text();
}

fn shade(content: &mut Content, y: f32, width: f32, gray: f32) {
    content.save_state();
    content.set_fill_rgb(gray, gray, gray + 0.03);
    content.rect(A4.margin, y, width, A4.row_h);
    content.fill_nonzero();
    content.restore_state();
}

fn border(content: &mut Content, x: f32, y: f32, w: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, A4.row_h);
    content.stroke();
    content.restore_state();
}

/// Widths from the longest cell of each column, scaled down to the printable width.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = w.max(cell.len() as f32 * 6.2);
        }
    }

    let printable = A4.width - 2.0 * A4.margin;
    let total: f32 = widths.iter().sum();
    if total > printable {
        let scale = printable / total;
        widths.iter_mut().for_each(|w| *w *= scale);
    }

    widths
}

/// Fresh page with the title on top and the page number at the bottom.
fn fresh_page(title: &str, number: usize) -> Content {
    let mut page = Content::new();
    text(
        &mut page,
        A4.margin,
        A4.height - A4.margin + 15.0,
        TITLE_SIZE,
        title,
    );
    text(
        &mut page,
        A4.width - A4.margin - 60.0,
        A4.margin - 35.0,
        BODY_SIZE,
        &format!("Page {number}"),
    );
    page
}

const TOP: f32 = A4.height - A4.margin - 30.0;

pub struct PdfReport {
    title: String,
    done: Vec<Vec<u8>>,
    page: Content,
    y: f32,
}

impl PdfReport {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            done: Vec::new(),
            page: fresh_page(title, 1),
            y: TOP,
        }
    }

    fn break_page(&mut self) {
        let next = fresh_page(&self.title, self.done.len() + 2);
        let full = std::mem::replace(&mut self.page, next);
        self.done.push(full.finish().to_vec());
        self.y = TOP;
    }

    fn row<S: AsRef<str>>(&mut self, widths: &[f32], cells: &[S], size: f32) {
        let mut x = A4.margin;
        for (cell, w) in cells.iter().zip(widths) {
            text(&mut self.page, x + 4.0, self.y + 5.0, size, cell.as_ref());
            border(&mut self.page, x, self.y, *w);
            x += w;
        }
        self.y -= A4.row_h;
    }

    fn header_row(&mut self, widths: &[f32], headers: &[&str]) {
        shade(&mut self.page, self.y, widths.iter().sum(), HEADER_GRAY);
        self.row(widths, headers, HEAD_SIZE);
    }

    /// Append a table below the previous one. A table continued on a new
    /// page repeats its header row.
    pub fn add_table(&mut self, table: &ReportTable) {
        let widths = column_widths(&table.headers, &table.rows);

        // caption, header and one row stay together
        if self.y - 3.0 * A4.row_h < A4.margin {
            self.break_page();
        }

        text(
            &mut self.page,
            A4.margin,
            self.y + 5.0,
            HEAD_SIZE,
            &table.caption,
        );
        self.y -= A4.row_h;
        self.header_row(&widths, &table.headers);

        if table.rows.is_empty() {
            text(&mut self.page, A4.margin + 4.0, self.y + 5.0, BODY_SIZE, "None");
            self.y -= A4.row_h;
        }

        for (i, cells) in table.rows.iter().enumerate() {
            if self.y < A4.margin {
                self.break_page();
                self.header_row(&widths, &table.headers);
            }
            if i % 2 == 0 {
                shade(&mut self.page, self.y, widths.iter().sum(), STRIPE_GRAY);
            }
            self.row(&widths, cells.as_slice(), BODY_SIZE);
        }

        self.y -= A4.row_h;
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let mut streams = self.done;
        streams.push(self.page.finish().to_vec());

        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let font_id = Ref::new(3);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let mut kids = Vec::with_capacity(streams.len());
        for (i, stream) in streams.iter().enumerate() {
            let page_id = Ref::new(4 + 2 * i as i32);
            let content_id = Ref::new(5 + 2 * i as i32);
            kids.push(page_id);

            {
                let mut page = pdf.page(page_id);
                page.parent(tree_id)
                    .media_box(Rect::new(0.0, 0.0, A4.width, A4.height))
                    .contents(content_id);
                page.resources().fonts().pair(FONT, font_id);
            }
            pdf.stream(content_id, stream);
        }

        let mut tree = pdf.pages(tree_id);
        tree.count(kids.len() as i32);
        tree.kids(kids);
        drop(tree);

        fs::write(path, pdf.finish())
    }
}
