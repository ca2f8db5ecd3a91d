//! Document → model mapping.

use crate::tree::Element;
use crate::{DocumentError, DocumentResult};
use lithocat_model::{
    Catalogue, Curve, CurveGroup, CurvePoint, DocumentAttribute, Lithology, LithologyComponent,
    LithologyGroup, MainLithologyGroup, Meta, MetaParameter, MetaParameterGroup, Mixing,
    Parameter, ParameterGroup,
};
use lithocat_types::{
    CurveGroupId, CurveId, LithologyGroupId, LithologyId, MainLithologyGroupId,
    MetaParameterGroupId, MetaParameterId,
};
use std::path::Path;
use tracing::{debug, info};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a catalogue document.
pub fn from_xml_str(xml: &str) -> DocumentResult<Catalogue> {
    let root = Element::parse(xml.trim_start_matches(BYTE_ORDER_MARK))?;
    if root.name != "Catalogue" {
        return Err(DocumentError::UnexpectedRoot(root.name));
    }
    let catalogue = catalogue(&root)?;
    debug!(
        main_groups = catalogue.main_lithology_groups.len(),
        lithologies = catalogue.lithology_count(),
        curves = catalogue.curve_count(),
        "Parsed catalogue document"
    );
    Ok(catalogue)
}

/// Reads and parses a catalogue file.
pub fn read_catalogue_file(path: &Path) -> DocumentResult<Catalogue> {
    let xml = std::fs::read_to_string(path)?;
    let catalogue = from_xml_str(&xml)?;
    info!("Loaded catalogue {:?} from {:?}", catalogue.name, path);
    Ok(catalogue)
}

fn catalogue(e: &Element) -> DocumentResult<Catalogue> {
    Ok(Catalogue {
        name: e.required_text("Name")?,
        version: e.required_text("Version")?,
        read_only: e.required_bool("ReadOnly")?,
        attributes: e
            .attributes
            .iter()
            .map(|(name, value)| DocumentAttribute {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
        meta: meta(e.required("Meta")?)?,
        curve_groups: e
            .children_named("CurveGroup")
            .map(curve_group)
            .collect::<DocumentResult<_>>()?,
        main_lithology_groups: e
            .children_named("LithologyGroup")
            .map(main_lithology_group)
            .collect::<DocumentResult<_>>()?,
    })
}

// ── Meta schema ──────────────────────────────────────────────────

fn meta(e: &Element) -> DocumentResult<Meta> {
    Ok(Meta {
        groups: e
            .children_named("MetaParameterGroup")
            .map(meta_parameter_group)
            .collect::<DocumentResult<_>>()?,
    })
}

fn meta_parameter_group(e: &Element) -> DocumentResult<MetaParameterGroup> {
    Ok(MetaParameterGroup {
        id: MetaParameterGroupId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        read_only: e.optional_bool("ReadOnly")?,
        parameters: e
            .children_named("MetaParameter")
            .map(meta_parameter)
            .collect::<DocumentResult<_>>()?,
        groups: e
            .children_named("MetaParameterGroup")
            .map(meta_parameter_group)
            .collect::<DocumentResult<_>>()?,
    })
}

fn meta_parameter(e: &Element) -> DocumentResult<MetaParameter> {
    Ok(MetaParameter {
        id: MetaParameterId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        value_type: e.required_text("ValueType")?,
        default_value: e.optional_text("DefaultValue"),
        petrel_template: e.optional_text("PetrelTemplate"),
        petromod_unit: e.optional_text("PetroModUnit"),
        read_only: e.required_bool("ReadOnly")?,
    })
}

// ── Curves ───────────────────────────────────────────────────────

fn curve_group(e: &Element) -> DocumentResult<CurveGroup> {
    Ok(CurveGroup {
        id: CurveGroupId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        read_only: e.required_bool("ReadOnly")?,
        curves: e
            .children_named("Curve")
            .map(curve)
            .collect::<DocumentResult<_>>()?,
    })
}

fn curve(e: &Element) -> DocumentResult<Curve> {
    Ok(Curve {
        id: CurveId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        creator: e.optional_text("Creator"),
        read_only: e.required_bool("ReadOnly")?,
        petrel_template_x: e.required_text("PetrelTemplateX")?,
        petrel_template_y: e.required_text("PetrelTemplateY")?,
        petromod_unit_x: e.required_text("PetroModUnitX")?,
        petromod_unit_y: e.required_text("PetroModUnitY")?,
        petromod_id: e.optional_text("PetroModId"),
        points: e
            .children_named("CurvePoint")
            .map(|p| -> DocumentResult<CurvePoint> {
                Ok(CurvePoint::new(p.required_f64("X")?, p.required_f64("Y")?))
            })
            .collect::<DocumentResult<_>>()?,
    })
}

// ── Lithologies ──────────────────────────────────────────────────

fn main_lithology_group(e: &Element) -> DocumentResult<MainLithologyGroup> {
    Ok(MainLithologyGroup {
        id: MainLithologyGroupId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        creator: e.optional_text("Creator"),
        read_only: e.required_bool("ReadOnly")?,
        petromod_id: e.optional_text("PetroModId"),
        groups: e
            .children_named("LithologyGroup")
            .map(lithology_group)
            .collect::<DocumentResult<_>>()?,
    })
}

fn lithology_group(e: &Element) -> DocumentResult<LithologyGroup> {
    Ok(LithologyGroup {
        id: LithologyGroupId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        creator: e.optional_text("Creator"),
        read_only: e.required_bool("ReadOnly")?,
        petromod_id: e.optional_text("PetroModId"),
        groups: e
            .children_named("LithologyGroup")
            .map(lithology_group)
            .collect::<DocumentResult<_>>()?,
        lithologies: e
            .children_named("Lithology")
            .map(lithology)
            .collect::<DocumentResult<_>>()?,
    })
}

fn lithology(e: &Element) -> DocumentResult<Lithology> {
    Ok(Lithology {
        id: LithologyId::new(e.required_text("Id")?),
        name: e.required_text("Name")?,
        creator: e.optional_text("Creator"),
        read_only: e.required_bool("ReadOnly")?,
        petromod_id: e.optional_text("PetroModId"),
        pattern: e.required_text("Pattern")?,
        color: e.required_text("Color")?,
        mixing: e.child("Mixing").map(mixing).transpose()?,
        parameter_groups: e
            .children_named("ParameterGroup")
            .map(parameter_group)
            .collect::<DocumentResult<_>>()?,
    })
}

fn mixing(e: &Element) -> DocumentResult<Mixing> {
    // Older catalogues spell the component element in the plural.
    let components = e
        .children
        .iter()
        .filter(|c| c.name == "LithologyComponent" || c.name == "LithologyComponents")
        .map(|c| -> DocumentResult<LithologyComponent> {
            Ok(LithologyComponent {
                lithology_id: LithologyId::new(c.required_text("LithologyId")?),
                fraction: c.required_f64("Fraction")?,
            })
        })
        .collect::<DocumentResult<_>>()?;

    Ok(Mixing {
        thermal_conductivity: e.required_text("ThermalConductivity")?,
        permeability: e.required_text("Permeability")?,
        capillary_entry_pressure: e.optional_text("CapillaryEntryPressure"),
        read_only: e.required_bool("ReadOnly")?,
        components,
    })
}

fn parameter_group(e: &Element) -> DocumentResult<ParameterGroup> {
    Ok(ParameterGroup {
        meta_parameter_group_id: MetaParameterGroupId::new(
            e.required_text("MetaParameterGroupId")?,
        ),
        parameters: e
            .children_named("Parameter")
            .map(|p| -> DocumentResult<Parameter> {
                Ok(Parameter {
                    meta_parameter_id: MetaParameterId::new(p.required_text("MetaParameterId")?),
                    value: p.optional_text("Value"),
                })
            })
            .collect::<DocumentResult<_>>()?,
    })
}
