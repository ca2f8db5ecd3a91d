mod common;

use common::*;
use lithocat_model::{Catalogue, CurvePoint, Literal, ParameterValue};
use lithocat_types::{CurveId, LithologyId};
use lithocat_xml::{
    DocumentError, from_xml_str, read_catalogue_file, to_xml_string, write_catalogue_file,
};
use pretty_assertions::assert_eq;

fn sample() -> Catalogue {
    from_xml_str(SAMPLE).unwrap()
}

// ── Load ─────────────────────────────────────────────────────────

#[test]
fn loads_scalar_fields_and_attributes() {
    let c = sample();
    assert_eq!(c.name, "Test Catalogue");
    assert_eq!(c.version, "2");
    assert!(!c.read_only);
    assert_eq!(c.attributes.len(), 2);
    assert_eq!(c.attributes[0].name, "xmlns:xsd");
    assert_eq!(c.attributes[1].value, "http://www.w3.org/2001/XMLSchema-instance");
}

#[test]
fn loads_recursive_meta_tree() {
    let c = sample();
    assert_eq!(c.meta.groups.len(), 1);
    let root = &c.meta.groups[0];
    assert_eq!(root.read_only, Some(true));
    assert_eq!(root.parameters[0].name, "Porosity");
    assert_eq!(root.parameters[0].default_value.as_deref(), Some("0.2"));

    let flow = &root.groups[0];
    assert_eq!(flow.read_only, None);
    assert_eq!(flow.parameters[0].petromod_unit.as_deref(), Some("mD"));
}

#[test]
fn loads_curves_in_point_order() {
    let c = sample();
    let curve = &c.curve_groups[0].curves[0];
    assert_eq!(curve.id, CurveId::new(TC1_ID));
    assert_eq!(curve.creator.as_deref(), Some("tester"));
    assert_eq!(
        curve.points,
        vec![CurvePoint::new(0.0, 10.0), CurvePoint::new(100.0, 50.0)]
    );
}

#[test]
fn loads_nested_lithology_groups() {
    let c = sample();
    let main = &c.main_lithology_groups[0];
    assert_eq!(main.name, "Clastics");
    assert!(main.read_only);
    assert_eq!(main.petromod_id.as_deref(), Some("1"));

    let shale = &main.groups[0];
    assert_eq!(shale.lithologies[0].name, "Shale1");
    assert_eq!(shale.groups[0].name, "Sandy");
    assert_eq!(c.lithology_count(), 3);
}

#[test]
fn child_order_and_unknown_elements_do_not_matter() {
    let c = sample();
    let sandstone = &c.main_lithology_groups[0].groups[0].groups[0].lithologies[0];
    assert_eq!(sandstone.id, LithologyId::new(SANDSTONE_ID));
    assert_eq!(sandstone.pattern, "401");
    assert_eq!(sandstone.color, "#ffff00");
    assert!(sandstone.parameter_groups.is_empty());
}

#[test]
fn mixing_accepts_both_component_spellings() {
    let c = sample();
    let mixed = &c.main_lithology_groups[0].groups[0].groups[0].lithologies[1];
    let mixing = mixed.mixing.as_ref().unwrap();
    assert_eq!(mixing.capillary_entry_pressure, None);
    assert_eq!(mixing.components.len(), 2);
    assert_eq!(mixing.components[0].lithology_id, LithologyId::new(SHALE1_ID));
    assert_eq!(mixing.components[1].fraction, 0.75);
}

#[test]
fn parameter_values_classify_by_shape() {
    let c = sample();
    let shale1 = &c.main_lithology_groups[0].groups[0].lithologies[0];
    let params: Vec<_> = shale1.parameters().collect();
    assert_eq!(params[0].value_kind(), ParameterValue::Literal("0.3"));
    assert_eq!(Literal::parse("0.3"), Literal::Float(0.3));
    assert_eq!(params[1].value_kind(), ParameterValue::CurveRef(CurveId::new(TC1_ID)));
}

// ── Load errors ──────────────────────────────────────────────────

#[test]
fn missing_required_element_is_an_error() {
    let xml = SAMPLE.replace("<Pattern>601</Pattern>", "");
    let err = from_xml_str(&xml).unwrap_err();
    match err {
        DocumentError::MissingElement { path } => {
            assert_eq!(path, "Catalogue/LithologyGroup/LithologyGroup/Lithology/Pattern");
        }
        other => panic!("expected MissingElement, got {other:?}"),
    }
}

#[test]
fn missing_meta_is_an_error() {
    let xml = "<Catalogue><Name>x</Name><Version>1</Version><ReadOnly>false</ReadOnly></Catalogue>";
    assert!(matches!(
        from_xml_str(xml),
        Err(DocumentError::MissingElement { path }) if path == "Catalogue/Meta"
    ));
}

#[test]
fn invalid_boolean_is_an_error() {
    let xml = SAMPLE.replacen("<ReadOnly>false</ReadOnly>", "<ReadOnly>maybe</ReadOnly>", 1);
    let err = from_xml_str(&xml).unwrap_err();
    match err {
        DocumentError::InvalidValue { path, value, expected } => {
            assert_eq!(path, "Catalogue/ReadOnly");
            assert_eq!(value, "maybe");
            assert_eq!(expected, "boolean");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn invalid_number_is_an_error() {
    let xml = SAMPLE.replace("<X>100</X>", "<X>hundred</X>");
    let err = from_xml_str(&xml).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Catalogue/CurveGroup/Curve/CurvePoint/X has invalid number value \"hundred\""
    );
}

#[test]
fn wrong_root_is_an_error() {
    assert!(matches!(
        from_xml_str("<Model><Name>x</Name></Model>"),
        Err(DocumentError::UnexpectedRoot(name)) if name == "Model"
    ));
}

#[test]
fn truncated_document_is_an_error() {
    let cut = &SAMPLE[..SAMPLE.len() / 2];
    assert!(from_xml_str(cut).is_err());
}

#[test]
fn empty_document_is_an_error() {
    assert!(from_xml_str("").is_err());
}

#[test]
fn byte_order_mark_is_tolerated() {
    let with_bom = format!("\u{feff}{SAMPLE}");
    assert_eq!(from_xml_str(&with_bom).unwrap().name, "Test Catalogue");
}

// ── Save ─────────────────────────────────────────────────────────

#[test]
fn save_then_load_is_semantically_identical() {
    let original = sample();
    let xml = to_xml_string(&original).unwrap();
    let reloaded = from_xml_str(&xml).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn save_omits_absent_optionals_and_empty_collections() {
    let xml = to_xml_string(&sample()).unwrap();
    assert!(!xml.contains("<CapillaryEntryPressure"));
    // Sandstone has no mixing and no parameter groups.
    let start = xml.find("<Name>Sandstone</Name>").unwrap();
    let end = start + xml[start..].find("</Lithology>").unwrap();
    let sandstone = &xml[start..end];
    assert!(!sandstone.contains("<Mixing"));
    assert!(!sandstone.contains("<ParameterGroup"));
    assert!(!sandstone.contains("<Creator"));
}

#[test]
fn save_writes_declaration_and_root_attributes() {
    let xml = to_xml_string(&sample()).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(xml.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
}

#[test]
fn save_normalizes_mixing_component_spelling() {
    let xml = to_xml_string(&sample()).unwrap();
    assert!(!xml.contains("<LithologyComponents>"));
    assert_eq!(xml.matches("<LithologyComponent>").count(), 2);
}

#[test]
fn save_decodes_angle_bracket_escapes() {
    let mut c = sample();
    c.main_lithology_groups[0].groups[0].lithologies[0].pattern = "a > b".into();
    c.name = "R&D <draft>".into();
    let xml = to_xml_string(&c).unwrap();
    assert!(xml.contains("<Pattern>a > b</Pattern>"));
    assert!(xml.contains("<Name>R&amp;D <draft></Name>"));
}

#[test]
fn greater_than_survives_round_trip() {
    let mut c = sample();
    c.curve_groups[0].curves[0].petromod_unit_y = "W/m/K (T>0)".into();
    let reloaded = from_xml_str(&to_xml_string(&c).unwrap()).unwrap();
    assert_eq!(reloaded.curve_groups[0].curves[0].petromod_unit_y, "W/m/K (T>0)");
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalogue.xml");
    let original = sample();
    write_catalogue_file(&original, &path).unwrap();
    let reloaded = read_catalogue_file(&path).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn reading_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_catalogue_file(&dir.path().join("nope.xml")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}
