use std::io::ErrorKind;

use ndjson_file::{read, ReadError};

#[tokio::main]
async fn main() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fixtures/file.ndjson");

    match read(fixture).await {
        Ok(values) => println!("description of record 2: {}", values[2]["description"]),
        Err(err) => eprintln!("read failed: {err}"),
    }

    // A missing file resolves to an error value, not a panic.
    match read("beepboop").await {
        Ok(values) => println!("parsed {} records", values.len()),
        Err(ReadError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            eprintln!("NDJSON file does not exist.");
        }
        Err(err) => eprintln!("read failed: {err}"),
    }
}
