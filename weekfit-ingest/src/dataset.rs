//! Load the exercise dataset CSV into an activity catalog.
//!
//! Expected header (extra columns are ignored):
//! Activity, Exercise or Sport (1 hour),130 lb,155 lb,180 lb,205 lb,Calories per kg

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use weekfit_core::{ActivityRecord, Catalog};

const NAME_COLUMNS: &[&str] = &["Activity, Exercise or Sport (1 hour)", "activity"];
const COEFFICIENT_COLUMNS: &[&str] = &["Calories per kg", "cpk_per_hour"];

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        candidates.iter().any(|c| h.eq_ignore_ascii_case(c))
    })
}

/// Read a catalog from any CSV source.
/// Rows without a name or a positive numeric coefficient are skipped.
pub fn read_activity_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let Some(name_col) = find_column(&headers, NAME_COLUMNS) else {
        bail!("missing activity name column (expected one of {:?})", NAME_COLUMNS);
    };
    let Some(coef_col) = find_column(&headers, COEFFICIENT_COLUMNS) else {
        bail!("missing coefficient column (expected one of {:?})", COEFFICIENT_COLUMNS);
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading row {}", line + 2))?;

        let name = record.get(name_col).unwrap_or("").trim();
        let coefficient = record
            .get(coef_col)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite() && *c > 0.0);

        match coefficient {
            Some(c) if !name.is_empty() => records.push(ActivityRecord::new(name, c)),
            _ => {
                skipped += 1;
                debug!(row = line + 2, name, "skipping dataset row");
            }
        }
    }

    let parsed = records.len();
    let catalog = Catalog::from_records(records);
    info!(
        activities = catalog.len(),
        duplicates = parsed - catalog.len(),
        skipped,
        "loaded activity catalog"
    );
    Ok(catalog)
}

/// Load a catalog from a dataset file on disk.
pub fn load_activity_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("dataset not found: {}", path.display());
    }
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_activity_catalog(file).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
\"Activity, Exercise or Sport (1 hour)\",130 lb,155 lb,Calories per kg
\"Cycling, mountain bike, bmx\",502,598,8.5
\"Running, 6 mph (10 min mile)\",590,704,9.98
Stretching,148,176,2.5
,200,210,3.0
Broken row,1,1,n/a
\"Cycling, mountain bike, bmx\",1,1,99
Sitting quietly,59,70,0
";

    #[test]
    fn test_reads_names_and_coefficients() {
        let catalog = read_activity_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        let bmx = catalog.get("cycling, mountain bike, bmx").unwrap();
        assert_eq!(bmx.name, "Cycling, mountain bike, bmx");
        assert_eq!(bmx.calorie_coefficient, 8.5);
        assert_eq!(catalog.records()[1].calorie_coefficient, 9.98);
    }

    #[test]
    fn test_short_column_aliases() {
        let csv = "activity,cpk_per_hour\nSwimming laps,7.0\n";
        let catalog = read_activity_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].key, "swimming laps");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "activity,kcal\nSwimming,7.0\n";
        let err = read_activity_catalog(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("coefficient column"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = load_activity_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_activity_catalog("/nonexistent/exercise.csv").unwrap_err();
        assert!(err.to_string().contains("dataset not found"));
    }
}
