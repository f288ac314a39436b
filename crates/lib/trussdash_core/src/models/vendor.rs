//! Truss-design API payloads.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! vendor responses is ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryPoint, member_length};

/// A project in the vendor system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub component_design_guids: Vec<String>,
}

/// Envelope returned by `/api/ComponentDesigns/{guid}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentDesignResponse {
    pub component_design: Option<ComponentDesign>,
}

impl ComponentDesignResponse {
    /// Recompute every member length from its geometry.
    pub fn resolve_member_lengths(&mut self) {
        if let Some(component) = self
            .component_design
            .as_mut()
            .and_then(|d| d.component.as_mut())
        {
            component.resolve_member_lengths();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentDesign {
    pub component: Option<Component>,
}

/// A truss component: its members and connector plates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    pub name: Option<String>,
    pub members: Vec<Member>,
    pub plate_pairs: Vec<PlatePair>,
    pub number_of_plies: i32,
}

impl Component {
    pub fn resolve_member_lengths(&mut self) {
        for member in &mut self.members {
            member.resolve_length();
        }
    }
}

/// A lumber member of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub lumber: Option<Lumber>,
    #[serde(rename = "overallLength")]
    pub length: f64,
    pub geometry: Vec<GeometryPoint>,
}

impl Member {
    /// Replace the reported length with the geometric span when the member
    /// carries at least two points.
    pub fn resolve_length(&mut self) {
        if self.geometry.len() >= 2 {
            self.length = member_length(&self.geometry);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lumber {
    pub species: String,
    pub grade: String,
    pub nominal_thickness: String,
    pub nominal_width: String,
    pub actual_thickness: f64,
    pub actual_width: f64,
    pub structure: String,
    pub treatment_type: String,
}

/// A connector plate pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatePair {
    pub plate_type: String,
    pub width: f64,
    pub length: f64,
}

/// Physical properties of a plate type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlateTypeProperties {
    pub plate_type: String,
    pub thickness: f64,
    pub gauge: Option<String>,
}

/// Body of the lumber price lookup. The vendor expects the nominal sizes in
/// PascalCase while everything else is camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LumberPriceRequest {
    pub actual_thickness: String,
    pub actual_width: String,
    pub grade: String,
    pub species: String,
    pub structure: String,
    pub treatment_type: String,
    #[serde(rename = "NominalWidth")]
    pub nominal_width: String,
    #[serde(rename = "NominalThickness")]
    pub nominal_thickness: String,
}

impl From<&Lumber> for LumberPriceRequest {
    fn from(lumber: &Lumber) -> Self {
        Self {
            actual_thickness: lumber.actual_thickness.to_string(),
            actual_width: lumber.actual_width.to_string(),
            grade: lumber.grade.clone(),
            species: lumber.species.clone(),
            structure: lumber.structure.clone(),
            treatment_type: lumber.treatment_type.clone(),
            nominal_width: lumber.nominal_width.clone(),
            nominal_thickness: lumber.nominal_thickness.clone(),
        }
    }
}

/// Price of one stock length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LumberPriceResponse {
    pub length: f64,
    pub cost: f64,
}
