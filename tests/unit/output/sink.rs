use super::*;

#[test]
fn in_memory_sink_captures_bytes() {
    let mut sink = InMemorySink::new();
    assert!(sink.bytes().is_none());
    sink.write_document(b"%PDF-1.7").unwrap();
    assert_eq!(sink.bytes(), Some(&b"%PDF-1.7"[..]));
}

#[test]
fn file_sink_replaces_existing_contents() {
    let dir = PathBuf::from("target").join("unit_file_sink");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.pdf");
    std::fs::write(&path, b"stale contents that are longer").unwrap();

    let mut sink = FileSink::new(&path);
    sink.write_document(b"fresh").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"fresh");
    assert_eq!(sink.path(), path.as_path());
}

#[test]
fn file_sink_reports_render_error_with_path() {
    let path = PathBuf::from("target")
        .join("unit_file_sink")
        .join("missing_dir")
        .join("out.pdf");
    let err = FileSink::new(&path).write_document(b"x").unwrap_err();
    assert!(matches!(err, FormError::Render(_)));
    assert!(err.to_string().contains("create output"));
    assert!(err.to_string().contains("missing_dir"));
}
