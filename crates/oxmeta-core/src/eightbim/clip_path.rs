//! Clipping paths stored in Photoshop path resources
//!
//! # Path records
//!
//! A path resource is a sequence of 26-byte records: a 2-byte selector followed by
//! 24 bytes of payload. Knot records hold three points (preceding control point,
//! anchor, leaving control point), each as a pair of big-endian signed 8.24 fixed
//! numbers in (vertical, horizontal) order, relative to the image size.
//!
//! | Selector | Meaning |
//! |----------|---------|
//! | 0, 3     | Subpath length record |
//! | 1, 2, 4, 5 | Bezier knot |
//! | 6, 7, 8  | Fill rule, clipboard, initial fill (ignored) |

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::config::ImageSize;
use crate::error::Result;

/// Size of one path record
pub const RECORD_SIZE: usize = 26;

const FIXED_ONE: f64 = 16_777_216.0;

/// A named clipping path rendered as SVG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipPath {
    /// Name of the path resource
    pub name: String,
    /// SVG document with a single `<path>` element
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Point {
    x: f64,
    y: f64,
}

type Knot = [Point; 3];

/// Build the SVG path data (`d` attribute) for a path resource
pub fn path_data(data: &[u8], size: ImageSize) -> String {
    let mut builder = PathBuilder::default();

    for record in data.chunks_exact(RECORD_SIZE) {
        let selector = u16::from_be_bytes([record[0], record[1]]);
        let payload = &record[2..];

        match selector {
            0 | 3 => builder.start_subpath(u16::from_be_bytes([payload[0], payload[1]])),
            1 | 2 | 4 | 5 => builder.add_knot(read_knot(payload, size)),
            _ => {}
        }
    }

    builder.path
}

/// Render a path resource as an SVG document sized to the image
pub fn render(data: &[u8], size: ImageSize) -> Result<Option<String>> {
    let d = path_data(data, size);
    if d.is_empty() {
        return Ok(None);
    }

    let width = size.width.to_string();
    let height = size.height.to_string();

    let mut writer = Writer::new(Vec::new());

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    writer.write_event(Event::Start(svg))?;
    writer.write_event(Event::Start(BytesStart::new("g")))?;

    let mut path = BytesStart::new("path");
    path.push_attribute(("fill", "#00FF00"));
    path.push_attribute(("stroke", "#00FF00"));
    path.push_attribute(("stroke-width", "0"));
    path.push_attribute(("stroke-antialiasing", "false"));
    path.push_attribute(("d", d.as_str()));
    writer.write_event(Event::Empty(path))?;

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    Ok(Some(String::from_utf8_lossy(&writer.into_inner()).into_owned()))
}

fn read_knot(payload: &[u8], size: ImageSize) -> Knot {
    let mut knot = Knot::default();
    for (point, raw) in knot.iter_mut().zip(payload.chunks_exact(8)) {
        let y = i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let x = i32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]]);
        *point = Point {
            x: f64::from(x) / FIXED_ONE * f64::from(size.width),
            y: f64::from(y) / FIXED_ONE * f64::from(size.height),
        };
    }
    knot
}

#[derive(Default)]
struct PathBuilder {
    path: String,
    knot_count: u16,
    in_subpath: bool,
    first: Knot,
    last: Knot,
}

impl PathBuilder {
    fn start_subpath(&mut self, length: u16) {
        if self.in_subpath {
            self.close();
        }
        self.knot_count = length;
    }

    fn add_knot(&mut self, knot: Knot) {
        if self.knot_count == 0 {
            return;
        }

        if self.in_subpath {
            self.segment(self.last, knot, "");
        } else {
            self.path.push_str(&format!(
                "M {} {}\n",
                format_number(knot[1].x),
                format_number(knot[1].y)
            ));
            self.first = knot;
            self.in_subpath = true;
        }
        self.last = knot;

        self.knot_count -= 1;
        if self.knot_count == 0 {
            self.close();
        }
    }

    fn close(&mut self) {
        self.segment(self.last, self.first, " Z");
        self.in_subpath = false;
    }

    fn segment(&mut self, from: Knot, to: Knot, suffix: &str) {
        if from[1] == from[2] && to[0] == to[1] {
            self.path.push_str(&format!(
                "L {} {}{suffix}\n",
                format_number(to[1].x),
                format_number(to[1].y)
            ));
        } else {
            self.path.push_str(&format!(
                "C {} {} {} {} {} {}{suffix}\n",
                format_number(from[2].x),
                format_number(from[2].y),
                format_number(to[0].x),
                format_number(to[0].y),
                format_number(to[1].x),
                format_number(to[1].y)
            ));
        }
    }
}

/// At most three decimals, no trailing zeros
fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn fixed(v: f64) -> [u8; 4] {
        ((v * FIXED_ONE) as i32).to_be_bytes()
    }

    pub(crate) fn length_record(count: u16) -> Vec<u8> {
        let mut record = vec![0, 0];
        record.extend_from_slice(&count.to_be_bytes());
        record.resize(RECORD_SIZE, 0);
        record
    }

    /// Knot whose control points coincide with the anchor
    pub(crate) fn corner_record(x: f64, y: f64) -> Vec<u8> {
        let mut record = vec![0, 1];
        for _ in 0..3 {
            record.extend_from_slice(&fixed(y));
            record.extend_from_slice(&fixed(x));
        }
        record
    }

    /// Closed unit square covering the middle of the image
    pub(crate) fn square_path() -> Vec<u8> {
        let mut data = vec![0u8, 6];
        data.resize(RECORD_SIZE, 0);
        data.extend(length_record(4));
        data.extend(corner_record(0.25, 0.25));
        data.extend(corner_record(0.75, 0.25));
        data.extend(corner_record(0.75, 0.75));
        data.extend(corner_record(0.25, 0.75));
        data
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_square_path_data() {
        let d = path_data(&square_path(), ImageSize::new(100, 200));
        assert_eq!(d, "M 25 50\nL 75 50\nL 75 150\nL 25 150\nL 25 50 Z\n");
    }

    #[test]
    fn test_curve_segment() {
        let mut data = length_record(2);
        data.extend(corner_record(0.0, 0.0));

        let mut curved = vec![0u8, 2];
        for (x, y) in [(0.5, 0.0), (1.0, 0.0), (1.0, 0.5)] {
            curved.extend_from_slice(&fixed(y));
            curved.extend_from_slice(&fixed(x));
        }
        data.extend(curved);

        let d = path_data(&data, ImageSize::new(10, 10));
        assert_eq!(d, "M 0 0\nC 0 0 5 0 10 0\nC 10 5 0 0 0 0 Z\n");
    }

    #[test]
    fn test_render_svg() {
        let svg = render(&square_path(), ImageSize::new(100, 100))
            .expect("writes to memory")
            .expect("non-empty path");

        assert!(svg.starts_with(r##"<svg width="100" height="100"><g><path fill="#00FF00""##));
        assert!(svg.contains(r#"stroke-antialiasing="false""#));
        assert!(svg.ends_with("/></g></svg>"));
    }

    #[test]
    fn test_empty_path_renders_nothing() {
        let result = render(&length_record(0), ImageSize::new(10, 10)).expect("writes to memory");
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_record_ignored() {
        let mut data = square_path();
        data.extend_from_slice(&[0, 1, 0, 0]);
        assert_eq!(
            path_data(&data, ImageSize::new(100, 200)),
            path_data(&square_path(), ImageSize::new(100, 200))
        );
    }
}
