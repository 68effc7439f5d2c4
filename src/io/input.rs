//! Reading analysis input from a file or stdin.

use crate::validation::AnalysisInput;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Marker path meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> crate::Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Read, parse and validate an analysis input document.
pub fn read_analysis_input(path: &Path) -> crate::Result<AnalysisInput> {
    let contents = read_source(path)?;
    let input = AnalysisInput::from_json(&contents)?;
    tracing::info!(
        source = %path.display(),
        bottlenecks = input.bottlenecks.len(),
        "loaded analysis input"
    );
    Ok(input)
}
