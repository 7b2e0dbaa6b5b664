use lazy_static::lazy_static;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

lazy_static! {
    pub(crate) static ref FILES_READ: IntCounter = register_int_counter!(
        "ndjson_files_read_total",
        "Total number of files read"
    )
    .unwrap();
    pub(crate) static ref LINES_PARSED: IntCounter = register_int_counter!(
        "ndjson_lines_parsed_total",
        "Total number of NDJSON lines parsed into values"
    )
    .unwrap();
}

pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
