pub mod input;
pub mod output;

pub use input::{read_analysis_input, read_source};
pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter};

use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> crate::Result<()> {
    fs::write(path, content)?;
    Ok(())
}
