//! CSV emission.
//!
//! The report lifecycle is: create the destination fresh (truncating any
//! prior content), write the header record, append one record per sampled
//! row, flush, close. No partial-row state survives a run, and any I/O
//! failure aborts the run via the returned error — there are no retries.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::generator::RowSampler;
use crate::schema::HEADERS;

/// Rows between progress notices.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Outcome of a completed report run.
#[derive(Clone, Copy, Debug)]
pub struct ReportStats {
    /// Data rows written (excluding the header).
    pub rows: u64,
    /// Final file size in bytes.
    pub bytes: u64,
}

/// Write the header record and `rows` sampled records to `w`.
///
/// Emits a progress notice every [`PROGRESS_INTERVAL`] rows. Returns the
/// number of data rows written.
pub fn write_report<W: Write, R: Rng>(
    w: W,
    sampler: &mut RowSampler<R>,
    rows: u64,
) -> Result<u64> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(w);

    wtr.write_record(HEADERS).context("write header record")?;

    for i in 0..rows {
        let row = sampler.sample_row();
        wtr.serialize(&row).context("serialize row")?;

        let written = i + 1;
        if written % PROGRESS_INTERVAL == 0 {
            info!(rows = written, "generated rows");
        }
    }

    wtr.flush().context("flush csv writer")?;
    Ok(rows)
}

/// Generate a complete report file at `path`.
///
/// Creates (or truncates) the destination, streams `rows` records through a
/// buffered writer, and returns the row count and final file size.
pub fn generate_report<P: AsRef<Path>, R: Rng>(
    path: P,
    sampler: &mut RowSampler<R>,
    rows: u64,
) -> Result<ReportStats> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref)
        .with_context(|| format!("create {}", path_ref.display()))?;
    let mut w = BufWriter::new(f);

    let rows = write_report(&mut w, sampler, rows)?;

    w.flush().context("flush report file")?;
    drop(w);

    let bytes = std::fs::metadata(path_ref)
        .with_context(|| format!("stat {}", path_ref.display()))?
        .len();

    info!(rows, bytes, path = %path_ref.display(), "report complete");
    Ok(ReportStats { rows, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sampler(seed: u64) -> RowSampler<StdRng> {
        RowSampler::new(StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn header_then_one_record_per_row() {
        let mut buf = Vec::new();
        let n = write_report(&mut buf, &mut sampler(3), 3).unwrap();
        assert_eq!(n, 3);

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        assert_eq!(
            rdr.headers().unwrap().iter().collect::<Vec<_>>(),
            HEADERS.to_vec()
        );

        let records: Vec<csv::StringRecord> =
            rdr.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 3);
        for rec in &records {
            assert_eq!(rec.len(), HEADERS.len());
            // Numeric tail of the record parses as typed in the schema.
            assert!(rec[9].parse::<u32>().is_ok());
            assert!(rec[10].parse::<u32>().is_ok());
            assert!(rec[11].parse::<u32>().is_ok());
            assert!(rec[12].parse::<f64>().is_ok());
            assert!(rec[13].parse::<f64>().is_ok());
            assert!(rec[14].parse::<f64>().is_ok());
            assert!(rec[15].parse::<u32>().is_ok());
            assert!(rec[16].parse::<f64>().is_ok());
            assert!(rec[17].parse::<u32>().is_ok());
        }
    }

    #[test]
    fn zero_rows_writes_only_the_header() {
        let mut buf = Vec::new();
        write_report(&mut buf, &mut sampler(0), 0).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn same_seed_same_bytes() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_report(&mut a, &mut sampler(11), 50).unwrap();
        write_report(&mut b, &mut sampler(11), 50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_report_reports_the_final_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let stats = generate_report(&path, &mut sampler(5), 5).unwrap();
        assert_eq!(stats.rows, 5);
        assert_eq!(stats.bytes, std::fs::metadata(&path).unwrap().len());

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn generate_report_truncates_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        generate_report(&path, &mut sampler(5), 20).unwrap();
        let stats = generate_report(&path, &mut sampler(5), 2).unwrap();

        assert_eq!(stats.rows, 2);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
