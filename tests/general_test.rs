use goast_sexp::{decode_file, encode, encode_with, EncodeOptions};
use miette::Report;
use std::fs;
use std::path::PathBuf;

fn fixtures() -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/ok");
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .expect("Failed to read tests/ok directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sexp"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {dir:?}");
    paths
}

#[test]
fn test_all_fixtures_decode() {
    for path in fixtures() {
        println!("Decoding file: {path:?}");
        let source = fs::read_to_string(&path).expect("Failed to read fixture");
        if let Err(err) = decode_file(&source, &path.display().to_string()) {
            panic!("Failed to decode {path:?}. Error: {:?}", Report::new(err));
        }
    }
}

#[test]
fn test_all_fixtures_round_trip() {
    for path in fixtures() {
        let source = fs::read_to_string(&path).unwrap();
        let file = decode_file(&source, "fixture.sexp").unwrap();

        let compact = encode(&file).unwrap();
        let again = decode_file(&compact, "compact.sexp").unwrap();
        assert_eq!(again, file, "{path:?}: compact form changed the tree");
        assert_eq!(encode(&again).unwrap(), compact, "{path:?}: output is not stable");

        let indented = encode_with(&file, &EncodeOptions::indented(2)).unwrap();
        assert_eq!(
            decode_file(&indented, "indented.sexp").unwrap(),
            file,
            "{path:?}: indented form changed the tree"
        );
    }
}

#[test]
fn test_fixture_layout_is_the_indented_layout() {
    // The fixtures are stored the way `encode_with` indents them, after
    // their leading comment lines.
    for path in fixtures() {
        let source = fs::read_to_string(&path).unwrap();
        let file = decode_file(&source, "fixture.sexp").unwrap();
        let body: String = source
            .lines()
            .skip_while(|line| line.starts_with(';'))
            .collect::<Vec<_>>()
            .join("\n");
        let indented = encode_with(&file, &EncodeOptions::indented(2)).unwrap();
        assert_eq!(indented, body.trim_end(), "{path:?}");
    }
}

#[test]
fn test_trees_and_errors_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<goast_sexp::ast::File>();
    assert_send_sync::<goast_sexp::ast::Node>();
    assert_send_sync::<goast_sexp::sexp::SExp>();
    assert_send_sync::<goast_sexp::CodecError>();
    assert_send_sync::<goast_sexp::EncodeOptions>();

    let handles: Vec<_> = fixtures()
        .into_iter()
        .map(|path| {
            std::thread::spawn(move || {
                let source = fs::read_to_string(&path).unwrap();
                encode(&decode_file(&source, "thread.sexp").unwrap()).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().starts_with("(File "));
    }
}
