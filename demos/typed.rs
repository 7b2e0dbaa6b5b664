use ndjson_file::read_as;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    description: String,
}

#[tokio::main]
async fn main() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fixtures/file.ndjson");

    match read_as::<Record>(fixture).await {
        Ok(records) => {
            for record in &records {
                println!("{}: {}", record.name, record.description);
            }
        }
        Err(err) => eprintln!("read failed: {err}"),
    }
}
