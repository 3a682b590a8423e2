use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::{errors::AppResult, models::domain::Mcq};

const SEPARATOR_WIDTH: usize = 40;

/// Appends one MCQ block to the output file. Best effort only; the
/// file is the sole persistence this service has.
pub fn append_mcq(path: impl AsRef<Path>, mcq: &Mcq) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    let mut block = mcq.details_text();
    block.push_str(&"-".repeat(SEPARATOR_WIDTH));
    block.push('\n');

    file.write_all(block.as_bytes())?;
    Ok(())
}
