//! Compute a takeoff or landing distance from a performance table document.

#![cfg_attr(feature = "precommit-checks", deny(warnings, unused, clippy::pedantic))]
#![cfg_attr(feature = "precommit-checks", deny(clippy::dbg_macro))]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::log::debug;
use clap::Parser;
use perf::correction::{self, RunwayConditions};
use perf::{EngineConfig, PerformanceQuery, PerformanceResult, TableKind, isa};
use serde::Serialize;
use store::PerformanceFile;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "flightprep-perfcalc", version)]
#[command(about = "Compute takeoff and landing distances from performance tables")]
struct Cli {
    /// Performance table document (JSON)
    file: PathBuf,

    /// Quantity to compute, e.g. `takeoff-15m` or `landing-ground-roll`
    #[arg(long)]
    kind: TableKind,

    /// Aircraft mass in kg
    #[arg(long)]
    mass: f32,

    /// Pressure altitude in ft
    #[arg(long, allow_negative_numbers = true)]
    altitude: f32,

    /// Outside air temperature in °C
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "isa_deviation",
        conflicts_with = "isa_deviation"
    )]
    temperature: Option<f32>,

    /// Outside air temperature as a deviation from ISA in °C
    #[arg(long, allow_negative_numbers = true)]
    isa_deviation: Option<f32>,

    /// Table group to use; defaults to the first group with a table of the requested kind
    #[arg(long)]
    group: Option<String>,

    /// Engine configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// The runway is wet
    #[arg(long)]
    wet: bool,

    /// The runway is grass
    #[arg(long)]
    grass: bool,

    /// Runway slope in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    slope: f32,

    /// Headwind component in kt
    #[arg(long, conflicts_with = "tailwind")]
    headwind: Option<f32>,

    /// Tailwind component in kt
    #[arg(long)]
    tailwind: Option<f32>,

    /// Add the recommended safety margin
    #[arg(long)]
    margin: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn query(&self) -> PerformanceQuery {
        match (self.temperature, self.isa_deviation) {
            (Some(temperature), _) => {
                PerformanceQuery::new(self.kind, self.mass, self.altitude, temperature)
            }
            (None, deviation) => PerformanceQuery::at_isa(
                self.kind,
                self.mass,
                self.altitude,
                deviation.unwrap_or_default(),
            ),
        }
    }

    fn conditions(&self) -> RunwayConditions {
        let headwind = match (self.headwind, self.tailwind) {
            (Some(headwind), _) => headwind,
            (None, Some(tailwind)) => -tailwind,
            (None, None) => 0.0,
        };
        RunwayConditions { wet: self.wet, grass: self.grass, slope: self.slope, headwind }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    group:              &'a str,
    query:              PerformanceQuery,
    isa_deviation:      f32,
    result:             PerformanceResult,
    conditions:         RunwayConditions,
    correction_factor:  f32,
    corrected_distance: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_distance:    Option<f32>,
}

impl Report<'_> {
    fn print_text(&self, mut out: impl Write) -> io::Result<()> {
        let query = &self.query;
        writeln!(
            out,
            "{} ({}) at {} kg, {} ft, {:.1} °C (ISA {:+.1} °C)",
            query.kind,
            self.group,
            query.mass,
            query.altitude,
            query.temperature,
            self.isa_deviation,
        )?;

        let breakpoints = self
            .result
            .used_mass_breakpoints
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "Tabulated distance: {:.0} m (mass breakpoints: {breakpoints} kg)",
            self.result.value
        )?;

        if (self.result.effective_mass - query.mass).abs() > f32::EPSILON {
            writeln!(
                out,
                "Effective mass: {} kg (mass extrapolation clamped or limited)",
                self.result.effective_mass
            )?;
        }

        let factor = self.correction_factor;
        if (factor - 1.0).abs() > f32::EPSILON {
            writeln!(
                out,
                "Corrected distance: {:.0} m (factor {factor:.3})",
                self.corrected_distance
            )?;
        }
        if let Some(margin) = self.margin_distance {
            writeln!(
                out,
                "With safety margin: {margin:.0} m (factor {:.2})",
                correction::SAFETY_MARGIN_FACTOR
            )?;
        }

        if self.result.extrapolated_mass {
            writeln!(
                out,
                "warning: mass is outside the tabulated masses, the distance is extrapolated"
            )?;
        }
        if self.result.extrapolated_grid {
            writeln!(
                out,
                "warning: altitude or temperature is outside the tabulated range, \
                 the distance is taken at the boundary"
            )?;
        }
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else { return Ok(EngineConfig::default()) };
    let file = fs::File::open(path)
        .with_context(|| format!("open engine config {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("parse engine config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let file = fs::File::open(&cli.file)
        .with_context(|| format!("open performance document {}", cli.file.display()))?;
    let document = PerformanceFile::from_reader(file)
        .with_context(|| format!("parse performance document {}", cli.file.display()))?;
    debug!(
        "Loaded {} tables for {} {}",
        document.tables.len(),
        document.aircraft.model,
        document.aircraft.registration
    );

    let books = document.books().context("validate performance tables")?;
    let book = store::find_book(books, cli.group.as_deref(), cli.kind)
        .context("select performance table")?;

    let query = cli.query();
    let result = book
        .query(&query, &config)
        .with_context(|| format!("compute {} from {:?}", query.kind, book.name))?;

    let conditions = cli.conditions();
    let correction_factor = conditions.factor(query.kind.phase());
    let corrected_distance = result.value * correction_factor;
    let report = Report {
        group: &book.name,
        query,
        isa_deviation: isa::isa_deviation(query.altitude, query.temperature),
        result,
        conditions,
        correction_factor,
        corrected_distance,
        margin_distance: cli.margin.then(|| correction::with_safety_margin(corrected_distance)),
    };

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report).context("write report")?;
        writeln!(stdout).context("write report")?;
    } else {
        report.print_text(stdout).context("write report")?;
    }
    Ok(())
}
