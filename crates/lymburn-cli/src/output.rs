use crate::error::Result;
use lymburn::core::forcefield::evaluator::ProfileSample;
use lymburn::core::models::system::ParticleSystem;
use lymburn::workflows::evaluate::EvaluationReport;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, PartialEq)]
pub struct ForceRow {
    pub index: usize,
    #[serde(rename = "type")]
    pub type_name: String,
    pub fx: f64,
    pub fy: f64,
    pub fz: f64,
    pub energy: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProfileRow {
    pub r: f64,
    pub energy: f64,
    pub force: f64,
}

impl From<&ProfileSample> for ProfileRow {
    fn from(sample: &ProfileSample) -> Self {
        Self {
            r: sample.distance,
            energy: sample.energy,
            force: sample.force,
        }
    }
}

pub fn force_rows(system: &ParticleSystem, report: &EvaluationReport) -> Vec<ForceRow> {
    report
        .forces
        .iter()
        .zip(&report.energies)
        .zip(system.types())
        .enumerate()
        .map(|(index, ((force, &energy), &type_id))| ForceRow {
            index,
            type_name: system.registry().describe(type_id),
            fx: force.x,
            fy: force.y,
            fz: force.z,
            energy,
        })
        .collect()
}

pub fn write_rows<W: Write, S: Serialize>(writer: W, rows: &[S]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `rows` to `path`, or to standard output when no path is given.
pub fn write_table<S: Serialize>(path: Option<&Path>, rows: &[S]) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing {} row(s) to {:?}", rows.len(), path);
            write_rows(std::fs::File::create(path)?, rows)
        }
        None => write_rows(std::io::stdout().lock(), rows),
    }
}
