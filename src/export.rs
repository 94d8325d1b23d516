use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{PacelineError, history::Race};

/// Write the race history to `file` as JSON lines, one race per line, in
/// storage order.
pub fn export_history(file: &Path, races: &[Race]) -> Result<(), PacelineError> {
    let export_file = File::create(file).map_err(|e| PacelineError::ExportError { source: e })?;
    let mut export_writer = BufWriter::new(export_file);
    for race in races {
        let line = serde_json::to_string(race)
            .map_err(|e| PacelineError::HistorySerializeError { source: e })?;
        writeln!(export_writer, "{}", line)
            .map_err(|e| PacelineError::ExportError { source: e })?;
    }
    export_writer
        .flush()
        .map_err(|e| PacelineError::ExportError { source: e })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_one_line_per_race() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("history.jsonl");

        let end = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
        let races = vec![
            Race::new(
                end - Duration::from_millis(30_000),
                end,
                30_000,
                vec![30_000],
                "Rider A".to_string(),
            ),
            Race::new(
                end - Duration::from_millis(31_000),
                end,
                31_000,
                vec![15_000, 31_000],
                "Rider B".to_string(),
            ),
        ];

        export_history(&output, &races).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Race = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, races[0]);
    }
}
