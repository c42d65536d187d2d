//! Standalone SVG document framed around the exported content.

use std::{fmt, fs::File, io::Write, path::Path};

use log::{error, info};
use svg::{Document, node::element as svg_element};

use floorplan_core::{color::Color, draw::LayeredOutput, geometry::Bounds};

use crate::export;

/// File name used when the caller does not choose one.
pub const DEFAULT_FILE_NAME: &str = "floor-plan.svg";

const CLICKABLE_STYLE: &str =
    ".clickable { cursor: pointer; } .clickable:hover { opacity: 0.8; }";

/// A serialized SVG document with its numeric frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgExport {
    svg: String,
    width: f32,
    height: f32,
    bounds: Bounds,
}

impl SvgExport {
    /// Serializes `output` into a document whose viewport is exactly `bounds`.
    pub(crate) fn emit(output: LayeredOutput, bounds: Bounds, background: Color) -> Self {
        let width = bounds.width();
        let height = bounds.height();

        let mut floor_plan = svg_element::Group::new().set("class", "floor-plan");
        for node in output.render() {
            floor_plan = floor_plan.add(node);
        }

        let defs = svg_element::Definitions::new().add(svg_element::Style::new(CLICKABLE_STYLE));

        let document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", width)
            .set("height", height)
            .set(
                "viewBox",
                format!("{} {} {} {}", bounds.min_x(), bounds.min_y(), width, height),
            )
            .set("style", format!("background: {background}"))
            .add(defs)
            .add(floor_plan);

        Self {
            svg: document.to_string(),
            width,
            height,
            bounds,
        }
    }

    /// The serialized document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Frame of the document: content bounds plus margin.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), export::Error> {
        let path = path.as_ref();
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = file.write_all(self.svg.as_bytes()) {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl fmt::Display for SvgExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.svg)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use floorplan_core::{
        draw::{Primitive, RenderLayer},
        geometry::{Point, Size},
    };

    fn export() -> SvgExport {
        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Items,
            Primitive::rect(Point::default(), Size::new(20.0, 10.0)),
        );
        SvgExport::emit(
            output,
            Bounds::new(-60.0, -55.0, 60.0, 55.0),
            Color::new("white").unwrap(),
        )
    }

    #[test]
    fn test_document_frame() {
        let export = export();
        assert_approx_eq!(f32, export.width(), 120.0);
        assert_approx_eq!(f32, export.height(), 110.0);

        let svg = export.svg();
        assert!(svg.contains(r#"viewBox="-60 -55 120 110""#));
        assert!(svg.contains(r#"width="120""#));
        assert!(svg.contains(r#"height="110""#));
        assert!(svg.contains(r#"class="floor-plan""#));
        assert!(svg.contains(".clickable"));
        assert!(svg.contains("background: #ffffff"));
    }

    #[test]
    fn test_save_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let export = export();
        export.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export.svg());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);
        assert!(matches!(export().save(&path), Err(export::Error::Io(_))));
    }
}
