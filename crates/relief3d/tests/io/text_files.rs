use std::fs;

use approx::assert_relative_eq;
use relief3d::io::{load, LoadError, LoaderParameters, ParseError, SourceKind};
use relief3d::model::{BuildParameters, Model};

#[test]
fn load_text_grid_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyramid.fdf");
    fs::write(&path, "0 0 0\n0 5 0\n\n0 0 0\n").unwrap();

    let loaded = load(&path, &LoaderParameters::default()).unwrap();
    assert_eq!(loaded.kind, SourceKind::Text);
    assert_eq!(loaded.field.width(), 3);
    assert_eq!(loaded.field.height(), 3);
    assert_eq!(loaded.field.get(1, 1), 5.0);
    assert_eq!(loaded.field.elevation_range(), Some((0.0, 5.0)));
}

#[test]
fn txt_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MAP.TXT");
    fs::write(&path, "1 2\n3 4\n").unwrap();

    let model = Model::load(&path, &BuildParameters::default()).unwrap();
    assert!(!model.is_raster());
    assert_eq!(model.points().len(), 4);
}

#[test]
fn two_by_two_grid_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.fdf");
    fs::write(&path, "0 0\n0 10\n").unwrap();

    let model = Model::load(&path, &BuildParameters::default()).unwrap();
    assert_eq!(model.edges().edges(), &[[0, 1], [2, 3], [0, 2], [1, 3]]);

    // The Z extent dominates: everything is scaled by 2 / 10.
    let pts = model.points();
    assert_relative_eq!(pts[0].x, -0.2, epsilon = 1.0e-6);
    assert_relative_eq!(pts[0].y, 0.2, epsilon = 1.0e-6);
    assert_relative_eq!(pts[3].x, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(pts[3].y, 0.0, epsilon = 1.0e-6);

    // Displayed Z uses the 0.5 / 10 relief scale on the raw heights.
    assert_eq!(pts[0].z, 0.0);
    assert_relative_eq!(pts[3].z, 0.5, epsilon = 1.0e-6);

    let state = model.normalization();
    assert_eq!((state.min_z, state.max_z), (0.0, 10.0));
    assert_relative_eq!(state.norm_min_z, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(state.norm_max_z, 2.0, epsilon = 1.0e-6);
}

#[test]
fn ragged_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.fdf");
    fs::write(&path, "1 2 3\n4 5\n").unwrap();

    match load(&path, &LoaderParameters::default()) {
        Err(LoadError::Parse(ParseError::RaggedRow {
            line,
            expected,
            found,
        })) => assert_eq!((line, expected, found), (2, 3, 2)),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn invalid_tokens_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 2\n3 x\n").unwrap();

    assert!(matches!(
        load(&path, &LoaderParameters::default()),
        Err(LoadError::Parse(ParseError::InvalidToken { line: 2, .. }))
    ));
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.fdf");
    fs::write(&path, "\n\n").unwrap();

    assert!(matches!(
        load(&path, &LoaderParameters::default()),
        Err(LoadError::Parse(ParseError::Empty))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["missing.fdf", "missing.png"] {
        assert!(matches!(
            load(dir.path().join(name), &LoaderParameters::default()),
            Err(LoadError::Io(_))
        ));
    }
}

#[test]
fn unknown_extensions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mesh.obj");
    fs::write(&path, "v 0 0 0\n").unwrap();

    match load(&path, &LoaderParameters::default()) {
        Err(LoadError::UnsupportedFormat { extension }) => {
            assert_eq!(extension.as_deref(), Some("obj"))
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        load(dir.path().join("no_extension"), &LoaderParameters::default()),
        Err(LoadError::UnsupportedFormat { extension: None })
    ));
}
