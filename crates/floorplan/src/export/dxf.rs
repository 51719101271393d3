//! DXF export for floor plans.
//!
//! Writes an AutoCAD 2000 (AC1015) ASCII drawing in meters with one layer
//! per [`Layer`], each carrying its color. Supports:
//! - LINE, LWPOLYLINE, ARC and CIRCLE with per-entity lineweight
//! - TEXT with alignment
//! - linear dimensions, written as plain geometry (extension lines,
//!   dimension line, oblique ticks and the measured value) so any viewer
//!   renders them without dimension-style blocks

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use floorplan_drafting::{
    Drawing, DrawingSink, Entity, Layer, LineWeight, LinearDimension, Point2D, TextAlign,
};
use tracing::info;

use super::ExportError;

/// Dimension tick length relative to the dimension text height.
const TICK_FACTOR: f64 = 0.5;
/// Gap between the dimension line and its text, relative to text height.
const TEXT_GAP_FACTOR: f64 = 0.25;

/// DXF document builder.
///
/// Implements [`DrawingSink`], so the drafting pass writes straight into it.
/// Entities are kept in emission order and written on [`export`](Self::export).
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    drawing: Drawing,
}

impl DxfDocument {
    /// Create a new empty DXF document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded primitives.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Number of recorded primitives (dimensions count once).
    pub fn num_entities(&self) -> usize {
        self.drawing.len()
    }

    /// Export to a DXF file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export_to_writer(&mut writer)?;
        writer.flush()?;
        info!(
            path = %path.display(),
            entities = self.num_entities(),
            "wrote DXF drawing"
        );
        Ok(())
    }

    /// Export to a writer.
    pub fn export_to_writer(&self, mut writer: impl Write) -> std::io::Result<()> {
        self.write_header(&mut writer)?;
        self.write_tables(&mut writer)?;
        self.write_entities(&mut writer)?;

        writeln!(writer, "0")?;
        writeln!(writer, "EOF")?;

        Ok(())
    }

    /// Render the whole document to a string.
    pub fn to_dxf_string(&self) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.export_to_writer(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_header(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "SECTION")?;
        writeln!(writer, "2")?;
        writeln!(writer, "HEADER")?;

        // AutoCAD version
        writeln!(writer, "9")?;
        writeln!(writer, "$ACADVER")?;
        writeln!(writer, "1")?;
        writeln!(writer, "AC1015")?; // AutoCAD 2000

        writeln!(writer, "9")?;
        writeln!(writer, "$DWGCODEPAGE")?;
        writeln!(writer, "3")?;
        writeln!(writer, "ANSI_1252")?;

        // Units = meters
        writeln!(writer, "9")?;
        writeln!(writer, "$INSUNITS")?;
        writeln!(writer, "70")?;
        writeln!(writer, "6")?;

        // Metric
        writeln!(writer, "9")?;
        writeln!(writer, "$MEASUREMENT")?;
        writeln!(writer, "70")?;
        writeln!(writer, "1")?;

        // Show lineweights
        writeln!(writer, "9")?;
        writeln!(writer, "$LWDISPLAY")?;
        writeln!(writer, "290")?;
        writeln!(writer, "1")?;

        let bounds = self.drawing.bounds();
        if bounds.is_valid() {
            writeln!(writer, "9")?;
            writeln!(writer, "$EXTMIN")?;
            write_point(writer, 10, Point2D::new(bounds.min_x, bounds.min_y))?;
            writeln!(writer, "9")?;
            writeln!(writer, "$EXTMAX")?;
            write_point(writer, 10, Point2D::new(bounds.max_x, bounds.max_y))?;
        }

        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        Ok(())
    }

    fn write_tables(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "SECTION")?;
        writeln!(writer, "2")?;
        writeln!(writer, "TABLES")?;

        self.write_ltype_table(writer)?;
        self.write_layer_table(writer)?;

        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        Ok(())
    }

    fn write_ltype_table(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "TABLE")?;
        writeln!(writer, "2")?;
        writeln!(writer, "LTYPE")?;
        writeln!(writer, "70")?;
        writeln!(writer, "1")?;

        writeln!(writer, "0")?;
        writeln!(writer, "LTYPE")?;
        writeln!(writer, "2")?;
        writeln!(writer, "CONTINUOUS")?;
        writeln!(writer, "70")?;
        writeln!(writer, "0")?;
        writeln!(writer, "3")?;
        writeln!(writer, "Solid line")?;
        writeln!(writer, "72")?;
        writeln!(writer, "65")?;
        writeln!(writer, "73")?;
        writeln!(writer, "0")?;
        writeln!(writer, "40")?;
        writeln!(writer, "0.0")?;

        writeln!(writer, "0")?;
        writeln!(writer, "ENDTAB")?;

        Ok(())
    }

    fn write_layer_table(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "TABLE")?;
        writeln!(writer, "2")?;
        writeln!(writer, "LAYER")?;
        writeln!(writer, "70")?;
        writeln!(writer, "{}", Layer::ALL.len())?;

        for layer in Layer::ALL {
            writeln!(writer, "0")?;
            writeln!(writer, "LAYER")?;
            writeln!(writer, "2")?;
            writeln!(writer, "{}", layer.name())?;
            writeln!(writer, "70")?;
            writeln!(writer, "0")?;
            writeln!(writer, "62")?;
            writeln!(writer, "{}", layer.color())?;
            writeln!(writer, "6")?;
            writeln!(writer, "CONTINUOUS")?;
        }

        writeln!(writer, "0")?;
        writeln!(writer, "ENDTAB")?;

        Ok(())
    }

    fn write_entities(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "0")?;
        writeln!(writer, "SECTION")?;
        writeln!(writer, "2")?;
        writeln!(writer, "ENTITIES")?;

        for entity in &self.drawing.entities {
            match entity {
                Entity::Line {
                    start,
                    end,
                    layer,
                    weight,
                } => write_line(writer, *start, *end, *layer, *weight)?,
                Entity::Polyline {
                    points,
                    layer,
                    weight,
                } => write_polyline(writer, points, *layer, *weight)?,
                Entity::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    layer,
                    weight,
                } => write_arc(
                    writer,
                    *center,
                    *radius,
                    *start_angle,
                    *end_angle,
                    *layer,
                    *weight,
                )?,
                Entity::Circle {
                    center,
                    radius,
                    layer,
                } => write_circle(writer, *center, *radius, *layer)?,
                Entity::Text {
                    content,
                    layer,
                    height,
                    anchor,
                    align,
                } => write_text(writer, content, *layer, *height, *anchor, *align, 0.0)?,
                Entity::Dimension { dimension, layer } => {
                    write_dimension(writer, dimension, *layer)?
                }
            }
        }

        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        Ok(())
    }
}

impl DrawingSink for DxfDocument {
    fn add_line(&mut self, start: Point2D, end: Point2D, layer: Layer, weight: LineWeight) {
        self.drawing.add_line(start, end, layer, weight);
    }

    fn add_polyline(&mut self, points: &[Point2D], layer: Layer, weight: LineWeight) {
        self.drawing.add_polyline(points, layer, weight);
    }

    fn add_arc(
        &mut self,
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        layer: Layer,
        weight: LineWeight,
    ) {
        self.drawing
            .add_arc(center, radius, start_angle, end_angle, layer, weight);
    }

    fn add_circle(&mut self, center: Point2D, radius: f64, layer: Layer) {
        self.drawing.add_circle(center, radius, layer);
    }

    fn add_text(
        &mut self,
        content: &str,
        layer: Layer,
        height: f64,
        anchor: Point2D,
        align: TextAlign,
    ) {
        self.drawing.add_text(content, layer, height, anchor, align);
    }

    fn add_linear_dimension(&mut self, dimension: LinearDimension, layer: Layer) {
        self.drawing.add_linear_dimension(dimension, layer);
    }
}

/// Write a point as `code`/`code + 10` coordinate pairs.
fn write_point(writer: &mut impl Write, code: u16, p: Point2D) -> std::io::Result<()> {
    writeln!(writer, "{}", code)?;
    writeln!(writer, "{:.6}", p.x)?;
    writeln!(writer, "{}", code + 10)?;
    writeln!(writer, "{:.6}", p.y)?;
    Ok(())
}

fn write_common(
    writer: &mut impl Write,
    kind: &str,
    layer: Layer,
    weight: Option<LineWeight>,
) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "{}", kind)?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", layer.name())?;
    if let Some(weight) = weight {
        writeln!(writer, "370")?;
        writeln!(writer, "{}", weight.0)?;
    }
    Ok(())
}

fn write_line(
    writer: &mut impl Write,
    start: Point2D,
    end: Point2D,
    layer: Layer,
    weight: LineWeight,
) -> std::io::Result<()> {
    write_common(writer, "LINE", layer, Some(weight))?;
    write_point(writer, 10, start)?;
    write_point(writer, 11, end)?;
    Ok(())
}

fn write_polyline(
    writer: &mut impl Write,
    points: &[Point2D],
    layer: Layer,
    weight: LineWeight,
) -> std::io::Result<()> {
    if points.is_empty() {
        return Ok(());
    }

    write_common(writer, "LWPOLYLINE", layer, Some(weight))?;
    writeln!(writer, "90")?;
    writeln!(writer, "{}", points.len())?;
    writeln!(writer, "70")?;
    writeln!(writer, "0")?; // Open; closed outlines repeat their first vertex

    for point in points {
        write_point(writer, 10, *point)?;
    }

    Ok(())
}

fn write_arc(
    writer: &mut impl Write,
    center: Point2D,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    layer: Layer,
    weight: LineWeight,
) -> std::io::Result<()> {
    write_common(writer, "ARC", layer, Some(weight))?;
    write_point(writer, 10, center)?;
    writeln!(writer, "40")?;
    writeln!(writer, "{:.6}", radius)?;
    writeln!(writer, "50")?;
    writeln!(writer, "{:.6}", start_angle)?;
    writeln!(writer, "51")?;
    writeln!(writer, "{:.6}", end_angle)?;
    Ok(())
}

fn write_circle(
    writer: &mut impl Write,
    center: Point2D,
    radius: f64,
    layer: Layer,
) -> std::io::Result<()> {
    write_common(writer, "CIRCLE", layer, None)?;
    write_point(writer, 10, center)?;
    writeln!(writer, "40")?;
    writeln!(writer, "{:.6}", radius)?;
    Ok(())
}

/// Horizontal (72) and vertical (73) justification codes.
fn justification(align: TextAlign) -> (u8, u8) {
    match align {
        TextAlign::MiddleCenter => (1, 2),
        TextAlign::BottomCenter => (1, 1),
        TextAlign::TopCenter => (1, 3),
        TextAlign::MiddleLeft => (0, 2),
        TextAlign::MiddleRight => (2, 2),
    }
}

/// Escape characters outside ASCII as `\U+XXXX`.
fn encode_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            out.push_str(&format!("\\U+{:04X}", c as u32));
        }
    }
    out
}

fn write_text(
    writer: &mut impl Write,
    content: &str,
    layer: Layer,
    height: f64,
    anchor: Point2D,
    align: TextAlign,
    rotation: f64,
) -> std::io::Result<()> {
    let (horizontal, vertical) = justification(align);

    write_common(writer, "TEXT", layer, None)?;
    write_point(writer, 10, anchor)?;
    writeln!(writer, "40")?;
    writeln!(writer, "{:.6}", height)?;
    writeln!(writer, "1")?;
    writeln!(writer, "{}", encode_text(content))?;
    if rotation != 0.0 {
        writeln!(writer, "50")?;
        writeln!(writer, "{:.6}", rotation)?;
    }
    writeln!(writer, "72")?;
    writeln!(writer, "{}", horizontal)?;
    // Aligned text is placed by its second alignment point.
    write_point(writer, 11, anchor)?;
    writeln!(writer, "73")?;
    writeln!(writer, "{}", vertical)?;
    Ok(())
}

/// Measured value as printed on a dimension.
pub fn dimension_text(dimension: &LinearDimension) -> String {
    format!("{:.2}", dimension.measurement())
}

fn write_dimension(
    writer: &mut impl Write,
    dimension: &LinearDimension,
    layer: Layer,
) -> std::io::Result<()> {
    let (a, b) = dimension.dimension_line();
    let weight = LineWeight::BY_LAYER;

    // Extension lines from the measured points to the dimension line.
    for (from, to) in [(dimension.p1, a), (dimension.p2, b)] {
        if from.distance(&to) > 1e-9 {
            write_line(writer, from, to, layer, weight)?;
        }
    }
    write_line(writer, a, b, layer, weight)?;

    // Architectural ticks at 45 degrees to the dimension line.
    let tick = dimension.text_height * TICK_FACTOR;
    for end in [a, b] {
        let from = end.polar(tick / 2.0, dimension.angle + 225.0);
        let to = end.polar(tick / 2.0, dimension.angle + 45.0);
        write_line(writer, from, to, layer, weight)?;
    }

    // Text sits on the side of the dimension line away from the building.
    let mid = Point2D::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let measured_mid = Point2D::new(
        (dimension.p1.x + dimension.p2.x) / 2.0,
        (dimension.p1.y + dimension.p2.y) / 2.0,
    );
    let (dx, dy) = dimension.direction();
    let mut normal = (-dy, dx);
    if (mid.x - measured_mid.x) * normal.0 + (mid.y - measured_mid.y) * normal.1 < 0.0 {
        normal = (dy, -dx);
    }
    let gap = dimension.text_height * TEXT_GAP_FACTOR;
    let anchor = Point2D::new(mid.x + normal.0 * gap, mid.y + normal.1 * gap);
    // Text reads along the dimension line; flip the vertical alignment when
    // the text sits on the line's clockwise side.
    let align = if normal == (-dy, dx) {
        TextAlign::BottomCenter
    } else {
        TextAlign::TopCenter
    };
    write_text(
        writer,
        &dimension_text(dimension),
        layer,
        dimension.text_height,
        anchor,
        align,
        dimension.angle,
    )
}
