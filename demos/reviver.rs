use ndjson_file::{read_with, OwnedValue, ReadOptions, Reviver};

#[tokio::main]
async fn main() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fixtures/file.ndjson");

    // Uppercase every string value on every line.
    let reviver: Reviver = Box::new(|_key, value| match value {
        OwnedValue::String(text) => Some(OwnedValue::String(text.to_uppercase())),
        other => Some(other),
    });
    let options = ReadOptions {
        reviver: Some(reviver),
        ..Default::default()
    };

    match read_with(fixture, options).await {
        Ok(values) => {
            for value in &values {
                println!("{value}");
            }
        }
        Err(err) => eprintln!("read failed: {err}"),
    }
}
