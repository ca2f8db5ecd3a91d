//! Shared catalogue fixture for engine tests.

#![allow(dead_code)]

use lithocat_catalogue::{CatalogueConfig, CatalogueSession};
use lithocat_model::{
    Catalogue, Curve, CurveGroup, Lithology, LithologyComponent, LithologyGroup,
    MainLithologyGroup, MetaParameter, MetaParameterGroup, Mixing, Parameter, ParameterGroup,
};
use lithocat_types::{
    CurveGroupId, CurveId, LithologyGroupId, LithologyId, MainLithologyGroupId,
    MetaParameterGroupId, MetaParameterId,
};

pub const SHALE1_ID: &str = "aaaaaaaa-0000-0000-0000-000000000001";
pub const SANDSTONE_ID: &str = "aaaaaaaa-0000-0000-0000-000000000002";
pub const MIXED_ID: &str = "aaaaaaaa-0000-0000-0000-000000000003";
pub const LIMESTONE_ID: &str = "aaaaaaaa-0000-0000-0000-000000000004";

pub const POROSITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000001";
pub const PERMEABILITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000002";
pub const DENSITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000003";
/// Two meta parameters share the name "Conductivity": one in "Thermal"
/// (carried by Shale1), one in "Petrophysics".
pub const THERMAL_CONDUCTIVITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000004";
pub const MATRIX_CONDUCTIVITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000005";

pub const TC1_ID: &str = "cccccccc-0000-0000-0000-000000000001";
pub const TC2_ID: &str = "cccccccc-0000-0000-0000-000000000002";

pub const PETROPHYSICS_ID: &str = "dddddddd-0000-0000-0000-000000000001";
pub const FLOW_ID: &str = "dddddddd-0000-0000-0000-000000000002";
pub const THERMAL_ID: &str = "dddddddd-0000-0000-0000-000000000003";

pub const THERMAL_CURVES_ID: &str = "eeeeeeee-0000-0000-0000-000000000001";
pub const SPARE_CURVES_ID: &str = "eeeeeeee-0000-0000-0000-000000000002";

pub const CLASTICS_ID: &str = "11111111-0000-0000-0000-000000000001";
pub const CARBONATES_ID: &str = "11111111-0000-0000-0000-000000000002";

pub const SHALE_GROUP_ID: &str = "22222222-0000-0000-0000-000000000001";
pub const SANDY_GROUP_ID: &str = "22222222-0000-0000-0000-000000000002";
pub const LIMESTONES_GROUP_ID: &str = "22222222-0000-0000-0000-000000000003";
/// Second lithology group named "Shale", under "Carbonates".
pub const CARBONATE_SHALE_GROUP_ID: &str = "22222222-0000-0000-0000-000000000004";

fn meta() -> Vec<MetaParameterGroup> {
    vec![
        MetaParameterGroup::new(MetaParameterGroupId::new(PETROPHYSICS_ID), "Petrophysics")
            .with_parameter(MetaParameter::new(
                MetaParameterId::new(POROSITY_ID),
                "Porosity",
                "Double",
            ))
            .with_parameter(MetaParameter::new(
                MetaParameterId::new(DENSITY_ID),
                "Density",
                "Double",
            ))
            .with_parameter(MetaParameter::new(
                MetaParameterId::new(MATRIX_CONDUCTIVITY_ID),
                "Conductivity",
                "Double",
            ))
            .with_group(
                MetaParameterGroup::new(MetaParameterGroupId::new(FLOW_ID), "Flow").with_parameter(
                    MetaParameter::new(
                        MetaParameterId::new(PERMEABILITY_ID),
                        "Permeability",
                        "Curve",
                    ),
                ),
            ),
        MetaParameterGroup::new(MetaParameterGroupId::new(THERMAL_ID), "Thermal").with_parameter(
            MetaParameter::new(
                MetaParameterId::new(THERMAL_CONDUCTIVITY_ID),
                "Conductivity",
                "Double",
            ),
        ),
    ]
}

fn curve_groups() -> Vec<CurveGroup> {
    vec![
        CurveGroup::new(CurveGroupId::new(THERMAL_CURVES_ID), "ThermalCurves")
            .with_curve(
                Curve::new(CurveId::new(TC1_ID), "TC1")
                    .with_points([(0.0, 10.0), (100.0, 50.0)]),
            )
            .with_curve(
                Curve::new(CurveId::new(TC2_ID), "TC2")
                    .with_points([(0.0, 2.5), (50.0, 3.0), (200.0, 3.5)]),
            ),
        CurveGroup::new(CurveGroupId::new(SPARE_CURVES_ID), "Spare"),
    ]
}

fn shale1() -> Lithology {
    Lithology::new(LithologyId::new(SHALE1_ID), "Shale1", "601", "#808080")
        .with_parameter_group(
            ParameterGroup::new(MetaParameterGroupId::new(PETROPHYSICS_ID))
                .with_parameter(Parameter::new(MetaParameterId::new(POROSITY_ID), "0.3"))
                .with_parameter(Parameter::new(MetaParameterId::new(PERMEABILITY_ID), TC1_ID)),
        )
        .with_parameter_group(
            ParameterGroup::new(MetaParameterGroupId::new(THERMAL_ID)).with_parameter(
                Parameter::new(MetaParameterId::new(THERMAL_CONDUCTIVITY_ID), "2.1"),
            ),
        )
}

fn mixed() -> Lithology {
    let mut mixed = Lithology::new(LithologyId::new(MIXED_ID), "Mixed", "501", "#aa8800");
    mixed.mixing = Some(Mixing {
        thermal_conductivity: "Geometric".into(),
        permeability: "Harmonic".into(),
        capillary_entry_pressure: None,
        read_only: false,
        components: vec![
            LithologyComponent {
                lithology_id: LithologyId::new(SHALE1_ID),
                fraction: 0.25,
            },
            LithologyComponent {
                lithology_id: LithologyId::new(SANDSTONE_ID),
                fraction: 0.75,
            },
        ],
    });
    mixed
}

/// Clastics → Shale → (Shale1, Sandy → (Sandstone, Mixed));
/// Carbonates → (Limestones → Limestone, Shale).
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new("Test Catalogue", "2");
    catalogue.meta.groups = meta();
    catalogue.curve_groups = curve_groups();

    let mut clastics = MainLithologyGroup::new(MainLithologyGroupId::new(CLASTICS_ID), "Clastics")
        .with_group(
            LithologyGroup::new(LithologyGroupId::new(SHALE_GROUP_ID), "Shale")
                .with_lithology(shale1())
                .with_group(
                    LithologyGroup::new(LithologyGroupId::new(SANDY_GROUP_ID), "Sandy")
                        .with_lithology(Lithology::new(
                            LithologyId::new(SANDSTONE_ID),
                            "Sandstone",
                            "401",
                            "#ffff00",
                        ))
                        .with_lithology(mixed()),
                ),
        );
    clastics.read_only = true;
    clastics.petromod_id = Some("1".into());

    let carbonates =
        MainLithologyGroup::new(MainLithologyGroupId::new(CARBONATES_ID), "Carbonates")
            .with_group(
                LithologyGroup::new(LithologyGroupId::new(LIMESTONES_GROUP_ID), "Limestones")
                    .with_lithology(Lithology::new(
                        LithologyId::new(LIMESTONE_ID),
                        "Limestone",
                        "301",
                        "#0000ff",
                    )),
            )
            .with_group(LithologyGroup::new(
                LithologyGroupId::new(CARBONATE_SHALE_GROUP_ID),
                "Shale",
            ));

    catalogue.main_lithology_groups = vec![clastics, carbonates];
    catalogue
}

pub fn session() -> CatalogueSession {
    CatalogueSession::from_catalogue(catalogue()).unwrap()
}

pub fn session_with(config: CatalogueConfig) -> CatalogueSession {
    CatalogueSession::new(catalogue(), config).unwrap()
}
