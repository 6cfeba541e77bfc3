//! Output writers for simulation results.

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    data_writer: Option<Box<dyn Write + Send>>,
    format: OutputFormat,
    /// Games held back until `finish` when writing a single JSON array.
    pending: Vec<GameMetrics>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    data_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{}.{}", timestamp, extension);
        let (data_writer, data_path) = if compress {
            let gz_path = dir.join(format!("{}.gz", filename));
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            )));
            (writer, gz_path)
        } else {
            let path = dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
            (writer, path)
        };

        // Always create CSV summary
        let csv_filename = format!("simulation_{}_summary.csv", timestamp);
        let csv_path = dir.join(&csv_filename);
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        // Header row comes from `CsvSummaryRow` on the first serialize.
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            data_writer: Some(data_writer),
            format: format.clone(),
            pending: Vec::new(),
            csv_writer: Some(csv_writer),
            data_path: Some(data_path),
            csv_path: Some(csv_path),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                if let Some(ref mut writer) = self.data_writer {
                    let json = serde_json::to_string(metrics)?;
                    writeln!(writer, "{}", json)?;
                    writer.flush()?;
                }
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }

        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
            writer.flush()?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.data_writer {
            if matches!(self.format, OutputFormat::Json) {
                serde_json::to_writer_pretty(&mut *writer, &self.pending)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (self.data_path.as_ref(), self.csv_path.as_ref())
    }
}

