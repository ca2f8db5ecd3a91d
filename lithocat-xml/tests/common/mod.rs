//! Shared catalogue document for codec tests.

#![allow(dead_code)]

pub const SHALE1_ID: &str = "aaaaaaaa-0000-0000-0000-000000000001";
pub const SANDSTONE_ID: &str = "aaaaaaaa-0000-0000-0000-000000000002";
pub const MIXED_ID: &str = "aaaaaaaa-0000-0000-0000-000000000003";
pub const POROSITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000001";
pub const PERMEABILITY_ID: &str = "bbbbbbbb-0000-0000-0000-000000000002";
pub const TC1_ID: &str = "cccccccc-0000-0000-0000-000000000001";

/// A small but complete catalogue: nested meta groups, one curve group,
/// one main group with a nested lithology group and a mixed lithology.
pub const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Catalogue xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Name>Test Catalogue</Name>
  <Version>2</Version>
  <ReadOnly>false</ReadOnly>
  <Meta>
    <MetaParameterGroup>
      <Id>dddddddd-0000-0000-0000-000000000001</Id>
      <Name>Petrophysics</Name>
      <ReadOnly>true</ReadOnly>
      <MetaParameter>
        <Id>bbbbbbbb-0000-0000-0000-000000000001</Id>
        <Name>Porosity</Name>
        <ValueType>Double</ValueType>
        <DefaultValue>0.2</DefaultValue>
        <ReadOnly>false</ReadOnly>
      </MetaParameter>
      <MetaParameterGroup>
        <Id>dddddddd-0000-0000-0000-000000000002</Id>
        <Name>Flow</Name>
        <MetaParameter>
          <Id>bbbbbbbb-0000-0000-0000-000000000002</Id>
          <Name>Permeability</Name>
          <ValueType>Curve</ValueType>
          <PetrelTemplate>Permeability</PetrelTemplate>
          <PetroModUnit>mD</PetroModUnit>
          <ReadOnly>false</ReadOnly>
        </MetaParameter>
      </MetaParameterGroup>
    </MetaParameterGroup>
  </Meta>
  <CurveGroup>
    <Id>eeeeeeee-0000-0000-0000-000000000001</Id>
    <Name>ThermalCurves</Name>
    <ReadOnly>false</ReadOnly>
    <Curve>
      <Id>cccccccc-0000-0000-0000-000000000001</Id>
      <Name>TC1</Name>
      <Creator>tester</Creator>
      <ReadOnly>false</ReadOnly>
      <PetrelTemplateX>Temperature</PetrelTemplateX>
      <PetrelTemplateY>Conductivity</PetrelTemplateY>
      <PetroModUnitX>C</PetroModUnitX>
      <PetroModUnitY>W/m/K</PetroModUnitY>
      <CurvePoint>
        <X>0</X>
        <Y>10</Y>
      </CurvePoint>
      <CurvePoint>
        <X>100</X>
        <Y>50</Y>
      </CurvePoint>
    </Curve>
  </CurveGroup>
  <LithologyGroup>
    <Id>11111111-0000-0000-0000-000000000001</Id>
    <Name>Clastics</Name>
    <ReadOnly>true</ReadOnly>
    <PetroModId>1</PetroModId>
    <LithologyGroup>
      <Id>22222222-0000-0000-0000-000000000001</Id>
      <Name>Shale</Name>
      <ReadOnly>false</ReadOnly>
      <Lithology>
        <Id>aaaaaaaa-0000-0000-0000-000000000001</Id>
        <Name>Shale1</Name>
        <ReadOnly>false</ReadOnly>
        <PetroModId>2001</PetroModId>
        <Pattern>601</Pattern>
        <Color>#808080</Color>
        <ParameterGroup>
          <MetaParameterGroupId>dddddddd-0000-0000-0000-000000000001</MetaParameterGroupId>
          <Parameter>
            <MetaParameterId>bbbbbbbb-0000-0000-0000-000000000001</MetaParameterId>
            <Value>0.3</Value>
          </Parameter>
          <Parameter>
            <MetaParameterId>bbbbbbbb-0000-0000-0000-000000000002</MetaParameterId>
            <Value>cccccccc-0000-0000-0000-000000000001</Value>
          </Parameter>
        </ParameterGroup>
      </Lithology>
      <LithologyGroup>
        <Id>22222222-0000-0000-0000-000000000002</Id>
        <Name>Sandy</Name>
        <ReadOnly>false</ReadOnly>
        <Lithology>
          <Color>#ffff00</Color>
          <Pattern>401</Pattern>
          <Name>Sandstone</Name>
          <Id>aaaaaaaa-0000-0000-0000-000000000002</Id>
          <ReadOnly>false</ReadOnly>
          <UnknownField>ignored</UnknownField>
        </Lithology>
        <Lithology>
          <Id>aaaaaaaa-0000-0000-0000-000000000003</Id>
          <Name>Mixed</Name>
          <Creator>tester</Creator>
          <ReadOnly>false</ReadOnly>
          <Pattern>501</Pattern>
          <Color>#aa8800</Color>
          <Mixing>
            <ThermalConductivity>Geometric</ThermalConductivity>
            <Permeability>Harmonic</Permeability>
            <ReadOnly>false</ReadOnly>
            <LithologyComponents>
              <LithologyId>aaaaaaaa-0000-0000-0000-000000000001</LithologyId>
              <Fraction>0.25</Fraction>
            </LithologyComponents>
            <LithologyComponent>
              <LithologyId>aaaaaaaa-0000-0000-0000-000000000002</LithologyId>
              <Fraction>0.75</Fraction>
            </LithologyComponent>
          </Mixing>
        </Lithology>
      </LithologyGroup>
    </LithologyGroup>
  </LithologyGroup>
</Catalogue>
"#;
