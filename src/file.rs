// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};

use crate::config::consts::{HEADERS, TIMESTAMP_FORMAT};
use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::data::DataSet;

/// Source of the timestamp embedded in output filenames.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. For tests and reproducible runs.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `<prefix>_<YYYYMMDD_HHMMSS>.<ext>`
pub fn stamped_filename(prefix: &str, at: NaiveDateTime, ext: &str) -> String {
    let stamp = at.format(TIMESTAMP_FORMAT).to_string();
    join!(prefix, "_", &stamp, ".", ext)
}

pub fn out_path(export: &ExportOptions, at: NaiveDateTime) -> PathBuf {
    export.dir.join(stamped_filename(&export.prefix, at, export.format.ext()))
}

/// Write the whole dataset in one go. The timestamp is read from `clock` here,
/// at save time. Returns the path written to.
pub fn save_dataset(
    export: &ExportOptions,
    ds: &DataSet,
    clock: &dyn Clock,
) -> std::io::Result<PathBuf> {
    ensure_directory(&export.dir)?;
    let path = out_path(export, clock.now());

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, &HEADERS, ds, export.format.delim())?;
    out.flush()?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
    }

    #[test]
    fn filename_embeds_timestamp() {
        assert_eq!(
            stamped_filename("wikipedia_sports_dataset", at(), "csv"),
            "wikipedia_sports_dataset_20240307_090501.csv"
        );
    }

    #[test]
    fn out_path_uses_dir_and_format() {
        let mut export = ExportOptions::default();
        export.dir = PathBuf::from("out");
        export.prefix = s!("run");
        export.format = crate::config::options::ExportFormat::Tsv;
        assert_eq!(out_path(&export, at()), Path::new("out").join("run_20240307_090501.tsv"));
    }

    #[test]
    fn fixed_clock_is_fixed() {
        let c = FixedClock(at());
        assert_eq!(c.now(), c.now());
    }
}
