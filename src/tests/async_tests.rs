#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use simd_json::{json, OwnedValue};

    use crate::tests::fixture;
    use crate::{read, read_as, read_with, Encoding, ReadError, ReadOptions, Reviver};

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct LogEntry {
        level: String,
        message: String,
    }

    #[tokio::test]
    async fn reads_every_line_in_file_order() {
        let file = fixture(b"{\"id\":1}\n{\"id\":2}\n{\"id\":3}\n");
        let values = read(file.path()).await.unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["id"], 1);
        assert_eq!(values[2]["id"], 3);
    }

    #[tokio::test]
    async fn skips_blank_lines() {
        let file = fixture(b"\n{\"id\":1}\n\n{\"id\":2}\n\n");
        let values = read(file.path()).await.unwrap();
        assert_eq!(values.len(), 2);
    }

    #[tokio::test]
    async fn a_missing_file_resolves_to_an_error() {
        let err = read("no-such-file.ndjson").await.unwrap_err();
        match err {
            ReadError::Io(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn stops_at_the_first_malformed_line() {
        let file = fixture(b"{\"id\":1}\n{\"id\":2}\n{oops}\n{\"id\":4}\n{\"id\":5}\n");
        let err = read(file.path()).await.unwrap_err();
        match err {
            ReadError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn strips_the_bom_for_utf8_reads() {
        let with_bom = fixture("\u{feff}{\"name\":\"alpha\"}\n".as_bytes());
        let without_bom = fixture(b"{\"name\":\"alpha\"}\n");
        let a = read_with(with_bom.path(), ReadOptions::from(Encoding::Utf8))
            .await
            .unwrap();
        let b = read_with(without_bom.path(), ReadOptions::from(Encoding::Utf8))
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn a_reviver_transforms_every_value() {
        let file = fixture(b"{\"name\":\"alpha\"}\n{\"name\":\"beta\"}\n");
        let reviver: Reviver = Box::new(|_key, value| match value {
            OwnedValue::String(text) => Some(OwnedValue::String(text.to_uppercase())),
            other => Some(other),
        });
        let options = ReadOptions {
            reviver: Some(reviver),
            ..Default::default()
        };
        let values = read_with(file.path(), options).await.unwrap();
        assert_eq!(values[0], OwnedValue::from(json!({"name": "ALPHA"})));
        assert_eq!(values[1], OwnedValue::from(json!({"name": "BETA"})));
    }

    #[tokio::test]
    async fn a_flagged_open_reads_the_file() {
        let file = fixture(b"{\"id\":1}\n");
        let options = ReadOptions {
            flag: Some("r".to_string()),
            ..Default::default()
        };
        let values = read_with(file.path(), options).await.unwrap();
        assert_eq!(values.len(), 1);
    }

    #[tokio::test]
    async fn typed_reads_deserialize_each_line() {
        let file = fixture(
            b"{\"level\":\"info\",\"message\":\"ready\"}\n{\"level\":\"warn\",\"message\":\"slow\"}\n",
        );
        let entries: Vec<LogEntry> = read_as(file.path()).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "info");
    }

    #[tokio::test]
    async fn concurrent_reads_do_not_interfere() {
        let first = fixture(b"{\"name\":\"alpha\"}\n");
        let second = fixture(b"{\"name\":\"beta\"}\n{\"name\":\"gamma\"}\n");
        let (a, b) = tokio::join!(read(first.path()), read(second.path()));
        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert_eq!(a[0]["name"], "alpha");
        assert_eq!(b[1]["name"], "gamma");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn reads_from_an_open_descriptor() {
        use std::os::unix::io::{FromRawFd, IntoRawFd};

        let file = fixture(b"{\"id\":1}\n{\"id\":2}\n");
        let fd = std::fs::File::open(file.path()).unwrap().into_raw_fd();
        let values = read(fd).await.unwrap();
        assert_eq!(values.len(), 2);
        drop(unsafe { std::fs::File::from_raw_fd(fd) });
    }
}
