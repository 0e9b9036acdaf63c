//! Daily data log
//!
//! One file per local day, `sensor_data_YYYY-MM-DD.log`, each line
//! `YYYY-MM-DD HH:MM:SS,<payload>`. Old files are pruned by the date in
//! their name, not by modification time.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::{info, warn};

const FILE_PREFIX: &str = "sensor_data_";
const FILE_SUFFIX: &str = ".log";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Appends payload lines to per-day files in one directory
#[derive(Debug)]
pub struct DailyLog<C = LocalClock> {
    dir: PathBuf,
    retention_days: u32,
    clock: C,
}

impl<C: Clock> DailyLog<C> {
    /// Create the log directory if needed
    pub fn open(dir: impl Into<PathBuf>, retention_days: u32, clock: C) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            info!("Created log directory {}", dir.display());
        }

        Ok(Self {
            dir,
            retention_days,
            clock,
        })
    }

    /// File that holds the lines for `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}{}{}", FILE_PREFIX, date.format(DATE_FORMAT), FILE_SUFFIX))
    }

    /// File that today's lines go to
    pub fn current_path(&self) -> PathBuf {
        self.path_for(self.clock.now().date())
    }

    /// Append one timestamped line to today's file
    pub fn append(&self, payload: &str) -> Result<()> {
        let now = self.clock.now();
        let path = self.path_for(now.date());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;

        writeln!(file, "{},{}", now.format(TIMESTAMP_FORMAT), payload)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Delete files whose day started before the retention window
    ///
    /// Files that do not follow the naming scheme are left alone. Returns
    /// the number of files removed. A window reaching past the earliest
    /// representable date removes nothing.
    pub fn prune(&self) -> Result<usize> {
        let window = Duration::days(i64::from(self.retention_days));
        let Some(cutoff) = self.clock.now().checked_sub_signed(window) else {
            warn!("Log retention of {} days is out of range", self.retention_days);
            return Ok(0);
        };
        let mut removed = 0;

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("listing {}", self.dir.display()))?;

        for entry in entries {
            let entry = entry.with_context(|| format!("listing {}", self.dir.display()))?;
            let name = entry.file_name();
            let Some(date) = name.to_str().and_then(file_date) else {
                continue;
            };

            if date.and_time(NaiveTime::MIN) >= cutoff {
                continue;
            }

            match fs::remove_file(entry.path()) {
                Ok(()) => {
                    info!("Deleted old log {}", entry.path().display());
                    removed += 1;
                }
                Err(e) => warn!("Could not delete {}: {}", entry.path().display(), e),
            }
        }

        Ok(removed)
    }
}

/// Date encoded in a log file name, if it follows the naming scheme
fn file_date(name: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
