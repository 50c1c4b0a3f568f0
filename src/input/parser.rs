use crate::domain::{Point, WayPoint};
use crate::error::{ExportError, Result};
use crate::output::is_valid_state_name;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Waypoints grouped by state, each list in input row order
pub type StateGroups = BTreeMap<String, Vec<WayPoint>>;

const FIELD_COUNT: usize = 5;

/// Read a `city,state,latitude,longitude,elevation` table from disk.
pub fn read_csv(path: &Path) -> Result<StateGroups> {
    let file = File::open(path).map_err(|e| ExportError::io(path, e))?;
    parse_rows(BufReader::new(file), path)
}

/// Parse CSV rows into waypoints grouped by state
///
/// # Algorithm
/// 1. Discard the header line
/// 2. Skip lines that are blank after trimming
/// 3. Split the rest on `,` (no quoting) and build a waypoint from the
///    first five fields
/// 4. Append it to the list of its state
///
/// The first bad row aborts the whole parse. `source` is only used in
/// error messages.
pub fn parse_rows<R: BufRead>(reader: R, source: &Path) -> Result<StateGroups> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header.map_err(|e| ExportError::io(source, e))?;
        }
        None => {
            return Err(ExportError::EmptyInput {
                path: source.to_path_buf(),
            });
        }
    }

    let mut groups = StateGroups::new();

    for (index, line) in lines.enumerate() {
        let line = line.map_err(|e| ExportError::io(source, e))?;
        // Header is line 1
        let line_no = index + 2;

        if let Some((state, waypoint)) = parse_row(&line, line_no)? {
            groups.entry(state).or_default().push(waypoint);
        }
    }

    Ok(groups)
}

/// Parse a single data row. Returns `None` for blank lines.
fn parse_row(line: &str, line_no: usize) -> Result<Option<(String, WayPoint)>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(ExportError::MalformedRow {
            line: line_no,
            reason: format!(
                "expected {} fields (city,state,latitude,longitude,elevation), found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let city = fields[0];
    let state = fields[1];
    if !is_valid_state_name(state) {
        return Err(ExportError::MalformedRow {
            line: line_no,
            reason: format!("state {:?} is not usable as a file name", state),
        });
    }
    let lat = parse_coordinate(fields[2], "latitude", line_no)?;
    let lng = parse_coordinate(fields[3], "longitude", line_no)?;
    let ele = parse_coordinate(fields[4], "elevation", line_no)?;

    let waypoint = WayPoint::new(city, Point::with_elevation(lat, lng, ele)).map_err(|e| {
        ExportError::MalformedRow {
            line: line_no,
            reason: e.to_string(),
        }
    })?;

    Ok(Some((state.to_string(), waypoint)))
}

fn parse_coordinate(field: &str, name: &str, line_no: usize) -> Result<f64> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| ExportError::MalformedRow {
            line: line_no,
            reason: format!("invalid {}: {:?}", name, field),
        })?;

    if !value.is_finite() {
        return Err(ExportError::MalformedRow {
            line: line_no,
            reason: format!("{} must be finite, got {:?}", name, field),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<StateGroups> {
        parse_rows(Cursor::new(text), Path::new("test.csv"))
    }

    #[test]
    fn test_parse_rows() {
        let groups = parse(
            "city,state,lat,lng,ele\n\
             Vienna,Vienna,48.2,16.3,171\n\
             Graz,Styria,47.07,15.43,353\n",
        )
        .unwrap();

        assert_eq!(groups.len(), 2);
        let styria = &groups["Styria"];
        assert_eq!(styria.len(), 1);
        assert_eq!(styria[0].name(), "Graz");
        assert_eq!(
            *styria[0].point(),
            Point::with_elevation(47.07, 15.43, 353.0)
        );
    }

    #[test]
    fn test_rows_keep_order_within_state() {
        let groups = parse(
            "city,state,lat,lng,ele\n\
             Graz,Styria,47.07,15.43,353\n\
             Linz,Upper Austria,48.31,14.29,266\n\
             Leoben,Styria,47.38,15.09,541\n\
             Weiz,Styria,47.22,15.62,477\n",
        )
        .unwrap();

        let names: Vec<&str> = groups["Styria"].iter().map(|w| w.name()).collect();
        assert_eq!(names, vec!["Graz", "Leoben", "Weiz"]);
        assert_eq!(groups["Upper Austria"].len(), 1);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let groups = parse(
            "city,state,lat,lng,ele\n\
             Vienna,Vienna,48.2,16.3,171\n\
             \n   \n\
             Graz,Styria,47.07,15.43,353\n",
        )
        .unwrap();

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_crlf_and_padded_numbers() {
        let groups = parse("city,state,lat,lng,ele\r\nGraz,Styria, 47.07 ,15.43,353\r\n").unwrap();
        assert_eq!(groups["Styria"][0].point().elevation(), 353.0);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let groups = parse("city,state,lat,lng,ele\nGraz,Styria,47.07,15.43,353,AT-6\n").unwrap();
        assert_eq!(groups["Styria"][0].name(), "Graz");
    }

    #[test]
    fn test_header_only() {
        let groups = parse("city,state,lat,lng,ele\n").unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, ExportError::EmptyInput { .. }));
    }

    #[test]
    fn test_four_fields() {
        let err = parse(
            "city,state,lat,lng,ele\n\
             Vienna,Vienna,48.2,16.3,171\n\
             Graz,Styria,47.07,15.43\n",
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn test_bad_number() {
        let err = parse("city,state,lat,lng,ele\nGraz,Styria,north,15.43,353\n").unwrap_err();
        match err {
            ExportError::MalformedRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("latitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = parse("city,state,lat,lng,ele\nGraz,Styria,47.07,15.43,NaN\n").unwrap_err();
        assert!(matches!(err, ExportError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_state_must_be_plain_file_name() {
        for state in ["", "..", "../Up", "/tmp/Escaped", "Lower/Upper"] {
            let text = format!("city,state,lat,lng,ele\nGraz,{state},47.07,15.43,353\n");
            let err = parse(&text).unwrap_err();
            assert!(
                matches!(err, ExportError::MalformedRow { line: 2, .. }),
                "state {state:?} accepted"
            );
        }
    }

    #[test]
    fn test_empty_city_rejected() {
        let err = parse("city,state,lat,lng,ele\n,Styria,47.07,15.43,353\n").unwrap_err();
        assert!(matches!(err, ExportError::MalformedRow { line: 2, .. }));
    }
}
