//! Run counters, recorded through the `metrics` facade.
//!
//! Nothing is exported unless the embedding process installs a recorder.

pub fn rows_read(count: usize) {
    ::metrics::counter!("scheme_import_rows_read_total").increment(count as u64);
}

pub fn records_written(count: usize) {
    ::metrics::counter!("scheme_import_records_written_total").increment(count as u64);
}

pub fn run_failed() {
    ::metrics::counter!("scheme_import_runs_failed_total").increment(1);
}

pub fn run_duration(secs: f64) {
    ::metrics::histogram!("scheme_import_run_duration_seconds").record(secs);
}
