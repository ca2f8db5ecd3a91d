//! Model → document serialization.

use crate::DocumentResult;
use lithocat_model::{
    Catalogue, Curve, CurveGroup, Lithology, LithologyGroup, MainLithologyGroup, MetaParameter,
    MetaParameterGroup, Mixing, ParameterGroup,
};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;
use tracing::{debug, info};

const INDENT: usize = 2;

/// Serializes a catalogue to document text.
///
/// Text is escaped as usual, then `&gt;` and `&lt;` are turned back into
/// literal `>` and `<`. Catalogue files carry those characters unescaped.
pub fn to_xml_string(catalogue: &Catalogue) -> DocumentResult<String> {
    let mut out = DocumentWriter::new();
    out.catalogue(catalogue)?;
    let xml = String::from_utf8(out.into_inner())?;
    let xml = xml.replace("&gt;", ">").replace("&lt;", "<");
    debug!(bytes = xml.len(), "Serialized catalogue document");
    Ok(xml)
}

/// Serializes a catalogue and writes it to `path`.
pub fn write_catalogue_file(catalogue: &Catalogue, path: &Path) -> DocumentResult<()> {
    let xml = to_xml_string(catalogue)?;
    std::fs::write(path, xml)?;
    info!("Wrote catalogue {:?} to {:?}", catalogue.name, path);
    Ok(())
}

struct DocumentWriter {
    inner: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', INDENT),
        }
    }

    fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    fn open(&mut self, name: &str) -> DocumentResult<()> {
        self.inner.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> DocumentResult<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, name: &str, value: &str) -> DocumentResult<()> {
        self.inner
            .create_element(name)
            .write_text_content(BytesText::new(value))?;
        Ok(())
    }

    fn optional_text(&mut self, name: &str, value: Option<&str>) -> DocumentResult<()> {
        match value {
            Some(value) => self.text(name, value),
            None => Ok(()),
        }
    }

    fn boolean(&mut self, name: &str, value: bool) -> DocumentResult<()> {
        self.text(name, if value { "true" } else { "false" })
    }

    fn number(&mut self, name: &str, value: f64) -> DocumentResult<()> {
        self.text(name, &value.to_string())
    }

    fn catalogue(&mut self, catalogue: &Catalogue) -> DocumentResult<()> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root = BytesStart::new("Catalogue");
        for attr in &catalogue.attributes {
            root.push_attribute((attr.name.as_str(), attr.value.as_str()));
        }
        self.inner.write_event(Event::Start(root))?;

        self.text("Name", &catalogue.name)?;
        self.text("Version", &catalogue.version)?;
        self.boolean("ReadOnly", catalogue.read_only)?;

        self.open("Meta")?;
        for group in &catalogue.meta.groups {
            self.meta_parameter_group(group)?;
        }
        self.close("Meta")?;

        for group in &catalogue.curve_groups {
            self.curve_group(group)?;
        }
        for group in &catalogue.main_lithology_groups {
            self.main_lithology_group(group)?;
        }
        self.close("Catalogue")
    }

    fn meta_parameter_group(&mut self, group: &MetaParameterGroup) -> DocumentResult<()> {
        self.open("MetaParameterGroup")?;
        self.text("Id", group.id.as_str())?;
        self.text("Name", &group.name)?;
        if let Some(read_only) = group.read_only {
            self.boolean("ReadOnly", read_only)?;
        }
        for parameter in &group.parameters {
            self.meta_parameter(parameter)?;
        }
        for child in &group.groups {
            self.meta_parameter_group(child)?;
        }
        self.close("MetaParameterGroup")
    }

    fn meta_parameter(&mut self, parameter: &MetaParameter) -> DocumentResult<()> {
        self.open("MetaParameter")?;
        self.text("Id", parameter.id.as_str())?;
        self.text("Name", &parameter.name)?;
        self.text("ValueType", &parameter.value_type)?;
        self.optional_text("DefaultValue", parameter.default_value.as_deref())?;
        self.optional_text("PetrelTemplate", parameter.petrel_template.as_deref())?;
        self.optional_text("PetroModUnit", parameter.petromod_unit.as_deref())?;
        self.boolean("ReadOnly", parameter.read_only)?;
        self.close("MetaParameter")
    }

    fn curve_group(&mut self, group: &CurveGroup) -> DocumentResult<()> {
        self.open("CurveGroup")?;
        self.text("Id", group.id.as_str())?;
        self.text("Name", &group.name)?;
        self.boolean("ReadOnly", group.read_only)?;
        for curve in &group.curves {
            self.curve(curve)?;
        }
        self.close("CurveGroup")
    }

    fn curve(&mut self, curve: &Curve) -> DocumentResult<()> {
        self.open("Curve")?;
        self.text("Id", curve.id.as_str())?;
        self.text("Name", &curve.name)?;
        self.optional_text("Creator", curve.creator.as_deref())?;
        self.boolean("ReadOnly", curve.read_only)?;
        self.text("PetrelTemplateX", &curve.petrel_template_x)?;
        self.text("PetrelTemplateY", &curve.petrel_template_y)?;
        self.text("PetroModUnitX", &curve.petromod_unit_x)?;
        self.text("PetroModUnitY", &curve.petromod_unit_y)?;
        self.optional_text("PetroModId", curve.petromod_id.as_deref())?;
        for point in &curve.points {
            self.open("CurvePoint")?;
            self.number("X", point.x)?;
            self.number("Y", point.y)?;
            self.close("CurvePoint")?;
        }
        self.close("Curve")
    }

    fn main_lithology_group(&mut self, group: &MainLithologyGroup) -> DocumentResult<()> {
        self.open("LithologyGroup")?;
        self.text("Id", group.id.as_str())?;
        self.text("Name", &group.name)?;
        self.optional_text("Creator", group.creator.as_deref())?;
        self.boolean("ReadOnly", group.read_only)?;
        self.optional_text("PetroModId", group.petromod_id.as_deref())?;
        for child in &group.groups {
            self.lithology_group(child)?;
        }
        self.close("LithologyGroup")
    }

    fn lithology_group(&mut self, group: &LithologyGroup) -> DocumentResult<()> {
        self.open("LithologyGroup")?;
        self.text("Id", group.id.as_str())?;
        self.text("Name", &group.name)?;
        self.optional_text("Creator", group.creator.as_deref())?;
        self.boolean("ReadOnly", group.read_only)?;
        self.optional_text("PetroModId", group.petromod_id.as_deref())?;
        for child in &group.groups {
            self.lithology_group(child)?;
        }
        for lithology in &group.lithologies {
            self.lithology(lithology)?;
        }
        self.close("LithologyGroup")
    }

    fn lithology(&mut self, lithology: &Lithology) -> DocumentResult<()> {
        self.open("Lithology")?;
        self.text("Id", lithology.id.as_str())?;
        self.text("Name", &lithology.name)?;
        self.optional_text("Creator", lithology.creator.as_deref())?;
        self.boolean("ReadOnly", lithology.read_only)?;
        self.optional_text("PetroModId", lithology.petromod_id.as_deref())?;
        self.text("Pattern", &lithology.pattern)?;
        self.text("Color", &lithology.color)?;
        if let Some(mixing) = &lithology.mixing {
            self.mixing(mixing)?;
        }
        for group in &lithology.parameter_groups {
            self.parameter_group(group)?;
        }
        self.close("Lithology")
    }

    fn mixing(&mut self, mixing: &Mixing) -> DocumentResult<()> {
        self.open("Mixing")?;
        self.text("ThermalConductivity", &mixing.thermal_conductivity)?;
        self.text("Permeability", &mixing.permeability)?;
        self.optional_text(
            "CapillaryEntryPressure",
            mixing.capillary_entry_pressure.as_deref(),
        )?;
        self.boolean("ReadOnly", mixing.read_only)?;
        for component in &mixing.components {
            self.open("LithologyComponent")?;
            self.text("LithologyId", component.lithology_id.as_str())?;
            self.number("Fraction", component.fraction)?;
            self.close("LithologyComponent")?;
        }
        self.close("Mixing")
    }

    fn parameter_group(&mut self, group: &ParameterGroup) -> DocumentResult<()> {
        self.open("ParameterGroup")?;
        self.text("MetaParameterGroupId", group.meta_parameter_group_id.as_str())?;
        for parameter in &group.parameters {
            self.open("Parameter")?;
            self.text("MetaParameterId", parameter.meta_parameter_id.as_str())?;
            self.optional_text("Value", parameter.value.as_deref())?;
            self.close("Parameter")?;
        }
        self.close("ParameterGroup")
    }
}
