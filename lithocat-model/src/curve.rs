use lithocat_types::{CurveGroupId, CurveId};
use serde::{Deserialize, Serialize};

/// One `(x, y)` sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named piecewise function. Point order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub id: CurveId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub read_only: bool,
    pub petrel_template_x: String,
    pub petrel_template_y: String,
    pub petromod_unit_x: String,
    pub petromod_unit_y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petromod_id: Option<String>,
    #[serde(default)]
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Creates an empty, modifiable curve with blank template descriptors.
    pub fn new(id: CurveId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            creator: None,
            read_only: false,
            petrel_template_x: String::new(),
            petrel_template_y: String::new(),
            petromod_unit_x: String::new(),
            petromod_unit_y: String::new(),
            petromod_id: None,
            points: Vec::new(),
        }
    }

    /// Builder-style point list.
    pub fn with_points(mut self, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.replace_points(points);
        self
    }

    /// Returns the point table as `(x, y)` pairs, in curve order.
    pub fn points_table(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Replaces every point with the given table.
    ///
    /// The new list is fully built before it is swapped in; the curve never
    /// holds a partially replaced table.
    pub fn replace_points(&mut self, table: impl IntoIterator<Item = (f64, f64)>) {
        let points: Vec<CurvePoint> = table.into_iter().map(CurvePoint::from).collect();
        self.points = points;
    }
}

/// A flat, named collection of curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGroup {
    pub id: CurveGroupId,
    pub name: String,
    pub read_only: bool,
    #[serde(default)]
    pub curves: Vec<Curve>,
}

impl CurveGroup {
    pub fn new(id: CurveGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            read_only: false,
            curves: Vec::new(),
        }
    }

    /// Builder-style curve list.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }
}
