use std::io::Write;

use repo_corpus::archive::read_entries;

fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options: zip::write::FileOptions<'_, ()> =
            zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (path, content) in files {
            writer.start_file(*path, options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

#[test]
fn reads_file_entries_in_archive_order() {
    let bytes = build_zip(&[
        ("repo-master/a.py", b"print('a')\n".as_slice()),
        ("repo-master/src/b.rs", b"fn main() {}\n".as_slice()),
    ]);

    let entries = read_entries(&bytes).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].path, "repo-master/a.py");
    assert_eq!(entries[0].bytes, b"print('a')\n");
    assert_eq!(entries[1].path, "repo-master/src/b.rs");
    assert_eq!(entries[1].bytes, b"fn main() {}\n");
}

#[test]
fn directory_entries_are_skipped() {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options: zip::write::FileOptions<'_, ()> =
            zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.add_directory("repo-master/src/", options).unwrap();
        writer.start_file("repo-master/src/lib.rs", options).unwrap();
        writer.write_all(b"pub fn lib() {}\n").unwrap();
        writer.finish().unwrap();
    }
    let bytes = cursor.into_inner();

    let entries = read_entries(&bytes).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "repo-master/src/lib.rs");
}

#[test]
fn empty_archive_yields_no_entries() {
    let bytes = build_zip(&[]);
    let entries = read_entries(&bytes).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn malformed_bytes_fail_with_format_error() {
    let result = read_entries(b"definitely not a zip container");
    assert!(result.is_err());
}
