use crate::domain::WayPoint;
use crate::error::{ExportError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

/// One exported state: `{"state": .., "cities": [..]}`
#[derive(Debug, Serialize)]
pub struct StateDocument<'a> {
    pub state: &'a str,
    pub cities: &'a [WayPoint],
}

/// Path of the JSON file for `state` inside `output_dir`
pub fn state_file_path(output_dir: &Path, state: &str) -> PathBuf {
    output_dir.join(format!("{}.json", state))
}

/// Whether `state` can be used as a file stem directly inside the output
/// directory: non-empty, a single plain path component, no separators.
pub fn is_valid_state_name(state: &str) -> bool {
    if state.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(state).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write a state document to `<output_dir>/<state>.json`
///
/// An existing file at that path is overwritten. The directory itself is
/// not created; a missing directory is reported as an IO error.
///
/// # Arguments
/// * `output_dir` - Existing directory to write into
/// * `state` - State name, also used as the file stem
/// * `cities` - Waypoints of the state, written in the given order
/// * `pretty` - Indent the output for human readers
pub fn write_state(
    output_dir: &Path,
    state: &str,
    cities: &[WayPoint],
    pretty: bool,
) -> Result<PathBuf> {
    if !is_valid_state_name(state) {
        return Err(ExportError::InvalidArgument(format!(
            "state {:?} is not usable as a file name",
            state
        )));
    }

    let path = state_file_path(output_dir, state);
    let file = File::create(&path).map_err(|e| ExportError::io(&path, e))?;

    let document = StateDocument { state, cities };
    write_document(BufWriter::new(file), &path, &document, pretty)?;

    Ok(path)
}

/// Serialize `document` and write it out. Failures of `writer` are
/// reported as IO errors on `path`.
fn write_document<W: Write>(
    mut writer: W,
    path: &Path,
    document: &StateDocument<'_>,
    pretty: bool,
) -> Result<()> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    if pretty {
        bytes.push(b'\n');
    }

    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ExportError::io(path, e))
}
