//! Commands behind the `lithocat` binary.
//!
//! Every command opens one catalogue session, runs a query or a mutation
//! through it and renders the result as an aligned text table or as JSON.
//! Mutating commands write the catalogue back, to `--output` when given.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lithocat_catalogue::{CatalogueConfig, CatalogueSession, ParameterUpdate, ResolvedValue};
use lithocat_model::{CurvePoint, Literal};
use lithocat_types::Lookup;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lithocat")]
#[command(about = "Inspect and edit lithology catalogues")]
pub struct Cli {
    /// Catalogue document to open
    #[arg(short, long)]
    pub catalogue: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where mutating commands write the catalogue (default: the input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every lithology with its group path
    Lithologies,
    /// List every curve
    Curves,
    /// List the meta parameter schema
    Meta,
    /// List the parameters of one lithology
    Parameters { lithology: String },
    /// Print the resolved value of one lithology parameter
    Value { lithology: String, parameter: String },
    /// Check that every weak reference resolves
    Check,
    /// Copy a lithology under a new name
    DuplicateLithology {
        source: String,
        name: String,
        /// Lithology group receiving the copy
        #[arg(long)]
        group: Option<String>,
        /// Mark the copy read-only
        #[arg(long)]
        read_only: bool,
    },
    /// Copy a curve under a new name
    DuplicateCurve {
        source: String,
        name: String,
        /// Curve group receiving the copy
        #[arg(long)]
        group: Option<String>,
    },
    /// Set lithology parameters: NAME=VALUE, where VALUE is a literal or
    /// a point table `x:y,x:y,...`
    Set {
        lithology: String,
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<Assignment>,
    },
    /// Delete a lithology
    DeleteLithology { target: String },
    /// Create an empty lithology group modelled on an existing one
    CreateGroup {
        source: String,
        name: String,
        /// Main group receiving the new group
        #[arg(long)]
        main_group: Option<String>,
    },
    /// Delete a lithology group and everything in it
    DeleteGroup { target: String },
    /// Create an empty main lithology group modelled on an existing one
    CreateMainGroup { source: String, name: String },
    /// Delete a main lithology group and everything in it
    DeleteMainGroup { target: String },
}

impl Command {
    /// True for commands that change the catalogue.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateLithology { .. }
                | Self::DuplicateCurve { .. }
                | Self::Set { .. }
                | Self::DeleteLithology { .. }
                | Self::CreateGroup { .. }
                | Self::DeleteGroup { .. }
                | Self::CreateMainGroup { .. }
                | Self::DeleteMainGroup { .. }
        )
    }
}

/// One `NAME=VALUE` argument of `set`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: ParameterUpdate,
}

pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in {raw:?}"));
    }
    Ok(Assignment {
        name: name.to_owned(),
        value: parse_value(value),
    })
}

/// Comma-separated `x:y` pairs form a point table, anything else is a
/// literal.
pub fn parse_value(raw: &str) -> ParameterUpdate {
    match parse_table(raw) {
        Some(points) => ParameterUpdate::Table(points),
        None => ParameterUpdate::Literal(raw.to_owned()),
    }
}

fn parse_table(raw: &str) -> Option<Vec<CurvePoint>> {
    if !raw.contains(':') {
        return None;
    }
    raw.split(',')
        .map(|pair| {
            let (x, y) = pair.split_once(':')?;
            Some(CurvePoint::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

/// Opens the catalogue, runs the command and saves if it mutated.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => CatalogueConfig::load_from(path),
        None => CatalogueConfig::default(),
    };
    let mut session = CatalogueSession::load(&cli.catalogue, config)
        .with_context(|| format!("Failed to open catalogue {:?}", cli.catalogue))?;

    let output = run(&mut session, &cli.command, cli.json)?;

    if cli.command.is_mutation() {
        let target = cli.output.as_ref().unwrap_or(&cli.catalogue);
        session
            .save(target)
            .with_context(|| format!("Failed to write catalogue {target:?}"))?;
        info!("Saved catalogue to {:?}", target);
    }
    Ok(output)
}

/// Runs one command against an open session.
pub fn run(session: &mut CatalogueSession, command: &Command, json: bool) -> Result<String> {
    match command {
        Command::Lithologies => {
            let rows = session.lithology_table()?;
            if json {
                return to_json(&rows);
            }
            Ok(render_table(
                &["ID", "NAME", "GROUP", "READ-ONLY"],
                rows.into_iter()
                    .map(|r| vec![r.id, r.name, r.group, r.read_only.to_string()])
                    .collect(),
            ))
        }
        Command::Curves => {
            let rows = session.curve_table()?;
            if json {
                return to_json(&rows);
            }
            Ok(render_table(
                &["ID", "NAME", "GROUP", "POINTS", "READ-ONLY"],
                rows.into_iter()
                    .map(|r| {
                        vec![r.id, r.name, r.group, r.points.to_string(), r.read_only.to_string()]
                    })
                    .collect(),
            ))
        }
        Command::Meta => {
            let rows = session.meta_parameter_table()?;
            if json {
                return to_json(&rows);
            }
            Ok(render_table(
                &["ID", "NAME", "TYPE", "DEFAULT", "GROUP"],
                rows.into_iter()
                    .map(|r| {
                        vec![
                            r.id,
                            r.name,
                            r.value_type,
                            r.default_value.unwrap_or_default(),
                            r.group,
                        ]
                    })
                    .collect(),
            ))
        }
        Command::Parameters { lithology } => {
            let rows = session
                .lithology_parameters_table(lithology.as_str())
                .with_context(|| format!("Cannot list parameters of {lithology:?}"))?;
            if json {
                return to_json(&rows);
            }
            Ok(render_table(
                &["META ID", "NAME", "VALUE", "CURVE"],
                rows.into_iter()
                    .map(|r| {
                        vec![
                            r.meta_parameter_id,
                            r.name.unwrap_or_else(|| "?".to_owned()),
                            r.value.unwrap_or_default(),
                            r.is_curve.to_string(),
                        ]
                    })
                    .collect(),
            ))
        }
        Command::Value {
            lithology,
            parameter,
        } => {
            let value = session
                .lithology_parameter_value(lithology.as_str(), parameter)
                .with_context(|| format!("Cannot resolve {parameter:?} of {lithology:?}"))?;
            render_value(&value, json)
        }
        Command::Check => {
            session
                .verify_references()
                .context("Catalogue has a dangling reference")?;
            Ok("All references resolve".to_owned())
        }
        Command::DuplicateLithology {
            source,
            name,
            group,
            read_only,
        } => {
            let lithology = session.duplicate_lithology(
                source.as_str(),
                name,
                group.as_deref().map(Lookup::Token),
                !read_only,
            )?;
            Ok(format!("Created lithology {:?} ({})", lithology.name, lithology.id))
        }
        Command::DuplicateCurve {
            source,
            name,
            group,
        } => {
            let group = group.as_deref().map(Lookup::Token);
            let curve = session.duplicate_curve(source.as_str(), name, group)?;
            Ok(format!("Created curve {:?} ({})", curve.name, curve.id))
        }
        Command::Set {
            lithology,
            assignments,
        } => {
            session
                .update_lithology_parameter(
                    lithology.as_str(),
                    assignments.iter().map(|a| (a.name.as_str(), a.value.clone())),
                )
                .with_context(|| format!("Failed to update {lithology:?}"))?;
            Ok(format!(
                "Updated {} parameter(s) of {lithology:?}",
                assignments.len()
            ))
        }
        Command::DeleteLithology { target } => {
            let removed = session.delete_lithology(target.as_str())?;
            Ok(format!("Deleted lithology {:?} ({})", removed.name, removed.id))
        }
        Command::CreateGroup {
            source,
            name,
            main_group,
        } => {
            let group = session.create_lithology_group(
                source.as_str(),
                name,
                main_group.as_deref().map(Lookup::Token),
            )?;
            Ok(format!("Created lithology group {:?} ({})", group.name, group.id))
        }
        Command::DeleteGroup { target } => {
            let removed = session.delete_lithology_group(target.as_str())?;
            Ok(format!(
                "Deleted lithology group {:?} ({})",
                removed.name, removed.id
            ))
        }
        Command::CreateMainGroup { source, name } => {
            let group = session.create_main_lithology_group(source.as_str(), name)?;
            Ok(format!(
                "Created main lithology group {:?} ({})",
                group.name, group.id
            ))
        }
        Command::DeleteMainGroup { target } => {
            let removed = session.delete_main_lithology_group(target.as_str())?;
            Ok(format!(
                "Deleted main lithology group {:?} ({})",
                removed.name, removed.id
            ))
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ValueReport<'a> {
    Literal(&'a Literal),
    Curve {
        id: &'a str,
        name: &'a str,
        points: &'a [CurvePoint],
    },
}

fn render_value(value: &ResolvedValue<'_>, json: bool) -> Result<String> {
    let report = match value {
        ResolvedValue::Literal(literal) => ValueReport::Literal(literal),
        ResolvedValue::Curve(curve) => ValueReport::Curve {
            id: curve.id.as_str(),
            name: &curve.name,
            points: &curve.points,
        },
    };
    if json {
        return to_json(&report);
    }
    Ok(match report {
        ValueReport::Literal(literal) => literal.to_string(),
        ValueReport::Curve { id, name, points } => {
            let table = render_table(
                &["X", "Y"],
                points
                    .iter()
                    .map(|p| vec![p.x.to_string(), p.y.to_string()])
                    .collect(),
            );
            format!("curve {name:?} ({id})\n{table}")
        }
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to encode JSON")
}

/// Left-aligned columns separated by two spaces.
pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut lines = vec![line(headers.to_vec())];
    lines.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    lines.join("\n")
}
