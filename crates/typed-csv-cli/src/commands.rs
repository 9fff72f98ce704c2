use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use typed_csv_core::{DynamicRecord, open_path, render_fields, schema_records};

use crate::cli::{DecodeArgs, OutputFormatArg};

/// Outcome of a successful decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Records written to the output.
    pub records: usize,
    /// Last row number read, including skipped rows.
    pub rows: usize,
}

/// Decode `args.input` and write one line per record to `out`.
///
/// Stops at the first decoding error; records before it are already written.
pub fn run_decode<W: Write>(args: &DecodeArgs, out: &mut W) -> Result<DecodeSummary> {
    let span = info_span!("decode", input = %args.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let config = args.csv_config();
    let input = open_path(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut records = schema_records(input, &config, args.columns.clone())?;

    while records.advance()? {
        if let Some(record) = records.current() {
            write_record(out, record, args.output).context("write record")?;
        }
    }
    out.flush().context("flush output")?;

    let summary = DecodeSummary {
        records: records.produced(),
        rows: records.row_number(),
    };
    info!(
        records = summary.records,
        rows = summary.rows,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "decoded input"
    );
    Ok(summary)
}

fn write_record<W: Write>(
    out: &mut W,
    record: &DynamicRecord,
    format: OutputFormatArg,
) -> Result<()> {
    match format {
        OutputFormatArg::Text => writeln!(out, "{}", render_fields(&record.to_cells()))?,
        OutputFormatArg::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
