use lithocat_model::{
    Catalogue, Curve, CurveGroup, Lithology, LithologyGroup, MainLithologyGroup, Parameter,
    ParameterGroup,
};
use lithocat_types::{
    CurveGroupId, CurveId, LithologyGroupId, LithologyId, MainLithologyGroupId,
    MetaParameterGroupId, MetaParameterId,
};
use pretty_assertions::assert_eq;

fn lithology(id: &str, name: &str) -> Lithology {
    Lithology::new(LithologyId::new(id), name, "101", "#ffcc00")
}

fn nested_catalogue() -> Catalogue {
    let inner = LithologyGroup::new(LithologyGroupId::new("g2"), "Inner")
        .with_lithology(lithology("l2", "Two"))
        .with_lithology(lithology("l3", "Three"));
    let outer = LithologyGroup::new(LithologyGroupId::new("g1"), "Outer")
        .with_lithology(lithology("l1", "One"))
        .with_group(inner);

    let mut catalogue = Catalogue::new("Test", "1.0");
    catalogue
        .main_lithology_groups
        .push(MainLithologyGroup::new(MainLithologyGroupId::new("m1"), "Main").with_group(outer));
    catalogue.curve_groups.push(
        CurveGroup::new(CurveGroupId::new("cg1"), "Curves")
            .with_curve(Curve::new(CurveId::new("c1"), "C1"))
            .with_curve(Curve::new(CurveId::new("c2"), "C2")),
    );
    catalogue
}

#[test]
fn counts_walk_nested_groups() {
    let catalogue = nested_catalogue();
    assert_eq!(catalogue.lithology_count(), 3);
    assert_eq!(catalogue.curve_count(), 2);
}

#[test]
fn clone_is_a_deep_copy() {
    let original = nested_catalogue();
    let mut copy = original.clone();
    copy.main_lithology_groups[0].groups[0].lithologies[0].name = "Changed".into();
    assert_eq!(original.main_lithology_groups[0].groups[0].lithologies[0].name, "One");
}

#[test]
fn parameter_lookup_by_meta_id() {
    let porosity = MetaParameterId::new("bbbbbbbb-0000-0000-0000-000000000001");
    let mut lith = lithology("l1", "One").with_parameter_group(
        ParameterGroup::new(MetaParameterGroupId::new("pg"))
            .with_parameter(Parameter::new(porosity.clone(), "0.3")),
    );

    assert_eq!(lith.parameter(&porosity).and_then(|p| p.value.as_deref()), Some("0.3"));
    assert!(lith.parameter(&MetaParameterId::new("other")).is_none());

    lith.parameter_mut(&porosity).unwrap().value = Some("0.4".into());
    assert_eq!(lith.parameters().count(), 1);
    assert_eq!(lith.parameter(&porosity).unwrap().value.as_deref(), Some("0.4"));
}

#[test]
fn replace_points_swaps_whole_table() {
    let mut curve = Curve::new(CurveId::new("c1"), "C1").with_points([(0.0, 10.0), (100.0, 50.0)]);
    assert_eq!(curve.points_table(), vec![(0.0, 10.0), (100.0, 50.0)]);

    curve.replace_points([(1.0, 2.0)]);
    assert_eq!(curve.points_table(), vec![(1.0, 2.0)]);

    curve.replace_points(Vec::<(f64, f64)>::new());
    assert!(curve.points.is_empty());
}

#[test]
fn json_export_omits_absent_optionals() {
    let json = serde_json::to_value(lithology("l1", "One")).unwrap();
    assert!(json.get("creator").is_none());
    assert!(json.get("mixing").is_none());
    assert_eq!(json["name"], "One");
}
