//! CSV loader for building records.
//!
//! The input must have a header row containing at least `floor_count`,
//! `population`, `area_residential` and `house_address`. Any other column
//! is carried through untouched in [`House::extra`].

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use housing_report_models::{FloorValue, House};

/// Errors that can occur while loading building records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed (bad quoting, ragged rows, bad UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header or a row.
    #[error("Line {line}: missing required field `{field}`")]
    MissingField {
        /// One-based line number in the input.
        line: u64,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("Line {line}: field `{field}` is not a valid number: {value:?}")]
    InvalidNumber {
        /// One-based line number in the input.
        line: u64,
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
}

const FLOOR_COUNT: &str = "floor_count";
const POPULATION: &str = "population";
const AREA_RESIDENTIAL: &str = "area_residential";
const HOUSE_ADDRESS: &str = "house_address";

/// Header positions of the required columns.
struct Columns {
    floor_count: usize,
    population: usize,
    area_residential: usize,
    house_address: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |field: &'static str| {
            headers
                .iter()
                .position(|h| h == field)
                .ok_or(LoadError::MissingField { line: 1, field })
        };

        Ok(Self {
            floor_count: find(FLOOR_COUNT)?,
            population: find(POPULATION)?,
            area_residential: find(AREA_RESIDENTIAL)?,
            house_address: find(HOUSE_ADDRESS)?,
        })
    }

    const fn is_required(&self, index: usize) -> bool {
        index == self.floor_count
            || index == self.population
            || index == self.area_residential
            || index == self.house_address
    }
}

/// Loads building records from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row is malformed.
pub fn load_path(path: &Path) -> Result<Vec<House>, LoadError> {
    let file = std::fs::File::open(path)?;
    let houses = load_reader(file)?;
    log::info!("Loaded {} house(s) from {}", houses.len(), path.display());
    Ok(houses)
}

/// Loads building records from any CSV byte stream.
///
/// # Errors
///
/// Returns an error on the first malformed row. No defaults are
/// substituted for missing or unparseable values.
pub fn load_reader(reader: impl Read) -> Result<Vec<House>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers)?;

    let mut houses = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        houses.push(parse_row(&headers, &columns, &record, line)?);
    }

    log::debug!("Parsed {} CSV row(s)", houses.len());

    Ok(houses)
}

fn parse_row(
    headers: &csv::StringRecord,
    columns: &Columns,
    record: &csv::StringRecord,
    line: u64,
) -> Result<House, LoadError> {
    let field = |index: usize, name: &'static str| {
        record
            .get(index)
            .ok_or(LoadError::MissingField { line, field: name })
    };
    let invalid = |name: &'static str, value: &str| LoadError::InvalidNumber {
        line,
        field: name,
        value: value.to_owned(),
    };

    let raw_floors = field(columns.floor_count, FLOOR_COUNT)?;
    let floor_count =
        FloorValue::parse(raw_floors).ok_or_else(|| invalid(FLOOR_COUNT, raw_floors))?;

    let raw_population = field(columns.population, POPULATION)?;
    let population = raw_population
        .parse::<i64>()
        .map_err(|_| invalid(POPULATION, raw_population))?;

    let raw_area = field(columns.area_residential, AREA_RESIDENTIAL)?;
    let area_residential = raw_area
        .parse::<f64>()
        .map_err(|_| invalid(AREA_RESIDENTIAL, raw_area))?;

    let house_address = field(columns.house_address, HOUSE_ADDRESS)?.to_owned();

    let extra: BTreeMap<String, String> = headers
        .iter()
        .zip(record.iter())
        .enumerate()
        .filter(|(index, _)| !columns.is_required(*index))
        .map(|(_, (header, value))| (header.to_owned(), value.to_owned()))
        .collect();

    Ok(House {
        floor_count,
        population,
        area_residential,
        house_address,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bundled_fixture() {
        let csv = include_str!("../fixtures/housing_data.csv");
        let houses = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(houses.len(), 6);

        let first = &houses[0];
        assert_eq!(first.floor_count, FloorValue::Integer(5));
        assert_eq!(first.population, 112);
        assert!((first.area_residential - 2630.4).abs() < f64::EPSILON);
        assert_eq!(first.house_address, "ул. Ленина, 12");
        assert_eq!(first.extra["house_number"], "1");
        assert_eq!(first.extra["heating_value"], "1021.5");
        assert!(!first.extra.contains_key("population"));
    }

    #[test]
    fn keeps_real_typed_floor_count() {
        let csv = "floor_count,population,area_residential,house_address\n5.0,10,100,A\n";
        let houses = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(houses[0].floor_count, FloorValue::Real(5.0));
    }

    #[test]
    fn trims_whitespace_around_values() {
        let csv = "floor_count, population ,area_residential,house_address\n 7 , 12 , 60.5 , B \n";
        let houses = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(houses[0].floor_count, FloorValue::Integer(7));
        assert_eq!(houses[0].population, 12);
        assert_eq!(houses[0].house_address, "B");
    }

    #[test]
    fn empty_body_yields_no_houses() {
        let csv = "floor_count,population,area_residential,house_address\n";
        assert!(load_reader(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "floor_count,population,house_address\n5,10,A\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                line: 1,
                field: "area_residential"
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_population() {
        let csv = "floor_count,population,area_residential,house_address\n\
                   5,10,100,A\n\
                   5,many,100,B\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "population");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_floor_count() {
        let csv = "floor_count,population,area_residential,house_address\nnine,10,100,A\n";
        assert!(matches!(
            load_reader(csv.as_bytes()).unwrap_err(),
            LoadError::InvalidNumber {
                field: "floor_count",
                ..
            }
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "floor_count,population,area_residential,house_address\n5,10,100\n";
        assert!(matches!(
            load_reader(csv.as_bytes()).unwrap_err(),
            LoadError::Csv(_)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path(Path::new("/nonexistent/housing_data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
