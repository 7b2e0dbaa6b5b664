use ndjson_file::{read_sync, read_sync_with, Encoding, ReadOptions};

fn main() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fixtures/file.ndjson");

    match read_sync_with(fixture, ReadOptions::from(Encoding::Utf8)) {
        Ok(values) => println!("parsed {} records", values.len()),
        Err(err) => eprintln!("read failed: {err}"),
    }

    match read_sync("beepboop") {
        Ok(values) => println!("parsed {} records", values.len()),
        Err(err) => eprintln!("read failed: {err}"),
    }
}
