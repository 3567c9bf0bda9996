/// Receives contour events in emission order.
///
/// Every method has a no-op default, so a sink only implements the events it
/// cares about. For one traced region the sequence is exactly one `begin`,
/// one `line_to` per turn of the boundary, then one `end`.
pub trait ContourSink {
    /// First vertex of a region contour, with the region's label.
    fn begin(&mut self, _x: i32, _y: i32, _area: i32) {}

    /// One vertex per boundary turn; straight runs emit nothing.
    fn line_to(&mut self, _x: i32, _y: i32) {}

    /// The contour is closed back to its `begin` vertex.
    fn end(&mut self) {}
}

/// A closed contour: the `begin` vertex followed by every `line_to` vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub area: i32,
    pub points: Vec<(i32, i32)>,
}

/// Sink that materializes the event stream into [`Contour`] values.
#[derive(Debug, Clone, Default)]
pub struct PathCollector {
    contours: Vec<Contour>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn into_contours(self) -> Vec<Contour> {
        self.contours
    }
}

impl ContourSink for PathCollector {
    fn begin(&mut self, x: i32, y: i32, area: i32) {
        self.contours.push(Contour {
            area,
            points: vec![(x, y)],
        });
    }

    fn line_to(&mut self, x: i32, y: i32) {
        if let Some(contour) = self.contours.last_mut() {
            contour.points.push((x, y));
        }
    }
}
