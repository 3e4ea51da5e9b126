//! Minimal single-page PDF writer
//!
//! Produces a PDF 1.4 file with five objects: catalog, page tree, one
//! US Letter page, a resource dictionary with Helvetica and
//! Helvetica-Bold, and the page's content stream. Drawing operations are
//! collected on a `PdfDocument` value and serialized once by `finish`.

use std::fmt;

/// Page size in points (US Letter)
pub const PAGE_WIDTH: u32 = 612;
pub const PAGE_HEIGHT: u32 = 792;

/// The two fonts registered in the resource dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum DrawOp {
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        font: Font,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                font,
            } => write!(
                f,
                "BT\n/{} {} Tf\n{} {} Td\n({}) Tj\nET\n",
                font.resource_name(),
                size,
                x,
                y,
                escape_text(text)
            ),
            DrawOp::Line { x1, y1, x2, y2 } => write!(f, "{} {} m\n{} {} l\nS\n", x1, y1, x2, y2),
        }
    }
}

/// Escape a string for a PDF literal string in a standard 14 font
///
/// Backslash and parentheses are escaped, line breaks become spaces, and
/// anything outside printable ASCII becomes `?`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' | '\r' => out.push(' '),
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// A page being drawn
///
/// Coordinates are in points from the bottom-left corner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDocument {
    ops: Vec<DrawOp>,
}

impl PdfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line of text with its baseline starting at (x, y)
    pub fn text(mut self, text: impl Into<String>, x: f64, y: f64, size: f64, font: Font) -> Self {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            font,
        });
        self
    }

    /// Queue a stroked straight line
    pub fn line(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
        self
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The page's content stream
    pub fn content_stream(&self) -> String {
        self.ops.iter().map(DrawOp::to_string).collect()
    }

    /// Serialize the complete file
    pub fn finish(self) -> Vec<u8> {
        let content = self.content_stream();

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /Resources 4 0 R /MediaBox [0 0 {} {}] /Contents 5 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT
            ),
            "<< /Font << /F1 << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> \
/F2 << /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());

        for (index, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str("xref\n");
        pdf.push_str(&format!("0 {}\n", offsets.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }

        pdf.push_str("trailer\n");
        pdf.push_str(&format!("<< /Size {} /Root 1 0 R >>\n", offsets.len() + 1));
        pdf.push_str("startxref\n");
        pdf.push_str(&format!("{}\n", xref_offset));
        pdf.push_str("%%EOF\n");

        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(bytes: &[u8]) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text(r"a\b"), r"a\\b");
        assert_eq!(escape_text("(x)"), r"\(x\)");
        assert_eq!(escape_text("one\ntwo\rthree"), "one two three");
        assert_eq!(escape_text("₹100 café"), "?100 caf?");
    }

    #[test]
    fn test_content_stream_operators() {
        let doc = PdfDocument::new()
            .text("Hello (world)", 50.0, 750.0, 18.0, Font::Bold)
            .line(50.0, 700.0, 562.0, 700.0);

        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.content_stream(),
            "BT\n/F2 18 Tf\n50 750 Td\n(Hello \\(world\\)) Tj\nET\n50 700 m\n562 700 l\nS\n"
        );
    }

    #[test]
    fn test_fractional_coordinates() {
        let doc = PdfDocument::new().text("x", 12.5, 10.0, 9.0, Font::Regular);
        assert!(doc.content_stream().contains("/F1 9 Tf\n12.5 10 Td\n"));
    }

    #[test]
    fn test_file_structure_and_offsets() {
        let bytes = PdfDocument::new()
            .text("Statement", 200.0, 750.0, 18.0, Font::Bold)
            .finish();
        let pdf = as_text(&bytes);

        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.ends_with("%%EOF\n"));
        assert!(pdf.contains("/MediaBox [0 0 612 792]"));
        assert!(pdf.contains("trailer\n<< /Size 6 /Root 1 0 R >>\n"));

        // Every xref entry points at the start of its object
        let xref_start = pdf.find("xref\n").unwrap();
        let entries: Vec<&str> = pdf[xref_start..].lines().skip(3).take(5).collect();
        for (index, line) in entries.iter().enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            assert!(line.ends_with(" 00000 n "));
            assert!(pdf[offset..].starts_with(&format!("{} 0 obj\n", index + 1)));
        }

        // startxref points at the xref keyword
        let tail = &pdf[pdf.rfind("startxref\n").unwrap() + "startxref\n".len()..];
        let startxref: usize = tail.lines().next().unwrap().parse().unwrap();
        assert_eq!(startxref, xref_start);
    }

    #[test]
    fn test_stream_length_matches_content() {
        let doc = PdfDocument::new().text("abc", 1.0, 2.0, 3.0, Font::Regular);
        let content = doc.content_stream();
        let pdf = String::from_utf8(doc.finish()).unwrap();

        assert!(pdf.contains(&format!("<< /Length {} >>\nstream\n{}endstream\nendobj\n", content.len(), content)));
    }

    #[test]
    fn test_empty_document_is_still_valid() {
        let pdf = String::from_utf8(PdfDocument::new().finish()).unwrap();
        assert!(pdf.contains("<< /Length 0 >>\nstream\nendstream"));
    }
}
