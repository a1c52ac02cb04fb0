mod common;

use std::fs;

use bmp2text::matrix::read_matrix;
use bmp2text::{Config, Converter, Error, Symbol};
use common::bitmaps::{bmp_from_fn, solid_bmp, status_lines};

fn converter() -> Converter {
    Converter::new(Config::default()).unwrap()
}

#[test]
fn white_and_black_bitmaps_become_ones_and_zeros() {
    let dir = tempfile::tempdir().unwrap();
    solid_bmp(dir.path(), "a.bmp", (28, 28), 255);
    solid_bmp(dir.path(), "b.bmp", (28, 28), 0);

    let mut status = Vec::new();
    let summary = converter().run(dir.path(), &mut status).unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.converted.len(), 2);

    let ones = vec!["1"; 28].join(",") + "\n";
    let zeros = vec!["0"; 28].join(",") + "\n";
    assert_eq!(
        fs::read_to_string(dir.path().join("a.bmp.txt")).unwrap(),
        ones.repeat(28)
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("b.bmp.txt")).unwrap(),
        zeros.repeat(28)
    );

    let lines = status_lines(&status);
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&"Processing a.bmp".to_string()));
    assert!(lines.contains(&"Processing b.bmp".to_string()));
    assert_eq!(lines.last().unwrap(), "Finished.");
}

#[test]
fn intermediate_intensity_leaves_empty_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = solid_bmp(dir.path(), "gray.bmp", (28, 28), 128);

    let output = converter().convert_file(&input).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let expected = ",".repeat(27) + "\n";
    assert_eq!(text, expected.repeat(28));
}

#[test]
fn every_line_has_twenty_eight_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = bmp_from_fn(dir.path(), "mixed.bmp", (28, 28), |x, y| match (x + y) % 3 {
        0 => 0,
        1 => 255,
        _ => 90,
    });

    let output = converter().convert_file(&input).unwrap();
    let text = fs::read_to_string(&output).unwrap();

    assert_eq!(text.lines().count(), 28);
    for line in text.lines() {
        assert_eq!(line.matches(',').count(), 27);
    }
}

#[test]
fn pixel_positions_map_to_row_and_column() {
    let dir = tempfile::tempdir().unwrap();
    // White at column 5 of row 3, black elsewhere
    let input = bmp_from_fn(dir.path(), "dot.bmp", (28, 28), |x, y| {
        if x == 5 && y == 3 {
            255
        } else {
            0
        }
    });

    let output = converter().convert_file(&input).unwrap();
    let matrix = read_matrix(&output).unwrap();

    assert_eq!(matrix.height(), 28);
    assert_eq!(matrix.width(), 28);
    assert_eq!(matrix.rows()[3][5], Symbol::White);
    assert_eq!(matrix.rows()[5][3], Symbol::Black);
    let samples = matrix.samples();
    assert_eq!(samples.len(), 28);
    assert_eq!(samples[3][5], 1);
    assert_eq!(samples.iter().flatten().filter(|&&v| v == 1).count(), 1);
}

#[test]
fn larger_images_encode_top_left_region() {
    let dir = tempfile::tempdir().unwrap();
    let input = bmp_from_fn(dir.path(), "big.bmp", (40, 35), |x, y| {
        if x < 28 && y < 28 {
            0
        } else {
            255
        }
    });

    let output = converter().convert_file(&input).unwrap();
    let matrix = read_matrix(&output).unwrap();

    assert_eq!(matrix.height(), 28);
    assert!(matrix.samples().iter().flatten().all(|&v| v == 0));
}

#[test]
fn rerun_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    bmp_from_fn(dir.path(), "digit.bmp", (28, 28), |x, _| if x % 2 == 0 { 255 } else { 0 });
    let out = dir.path().join("digit.bmp.txt");

    converter().run(dir.path(), &mut Vec::new()).unwrap();
    let first = fs::read(&out).unwrap();
    converter().run(dir.path(), &mut Vec::new()).unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_directory_only_finishes() {
    let dir = tempfile::tempdir().unwrap();

    let mut status = Vec::new();
    let summary = converter().run(dir.path(), &mut status).unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.total(), 0);
    assert_eq!(status_lines(&status), vec!["Finished."]);
}

#[test]
fn undersized_bitmap_aborts_in_fail_fast_mode() {
    let dir = tempfile::tempdir().unwrap();
    solid_bmp(dir.path(), "small.bmp", (20, 20), 255);

    let converter = Converter::new(Config {
        fail_fast: true,
        ..Config::default()
    })
    .unwrap();
    let mut status = Vec::new();
    let err = converter.run(dir.path(), &mut status).unwrap_err();

    match err {
        Error::Aborted { source, .. } => assert!(matches!(
            *source,
            Error::Dimensions {
                ref path,
                width: 20,
                height: 20,
                required: 28
            } if path.ends_with("small.bmp")
        )),
        other => panic!("expected abort, got {other:?}"),
    }
    assert_eq!(status_lines(&status), vec!["Processing small.bmp"]);
    assert!(!dir.path().join("small.bmp.txt").exists());
}

#[test]
fn undersized_bitmap_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = solid_bmp(dir.path(), "small.bmp", (20, 20), 255);

    let err = converter().convert_file(&input).unwrap_err();

    assert!(matches!(err, Error::Dimensions { ref path, .. } if *path == input));
    let message = err.to_string();
    assert!(message.contains("small.bmp"), "message: {message}");
    assert!(message.contains("20x20"), "message: {message}");
}

#[test]
fn failing_files_are_skipped_by_default() {
    let dir = tempfile::tempdir().unwrap();
    solid_bmp(dir.path(), "a.bmp", (28, 28), 255);
    solid_bmp(dir.path(), "b.bmp", (28, 10), 255);
    fs::write(dir.path().join("c.bmp"), b"not a bitmap").unwrap();

    let mut status = Vec::new();
    let summary = converter().run(dir.path(), &mut status).unwrap();

    assert_eq!(summary.converted, vec![dir.path().join("a.bmp.txt")]);
    assert_eq!(summary.failed.len(), 2);
    assert!(summary
        .failed
        .iter()
        .any(|(_, err)| matches!(
            err,
            Error::Dimensions { path, height: 10, .. } if path.ends_with("b.bmp")
        )));
    assert!(summary
        .failed
        .iter()
        .any(|(_, err)| matches!(err, Error::Decode { .. })));
    assert!(!dir.path().join("b.bmp.txt").exists());
    assert!(!dir.path().join("c.bmp.txt").exists());
    assert_eq!(
        status_lines(&status),
        vec![
            "Processing a.bmp",
            "Processing b.bmp",
            "Processing c.bmp",
            "Finished."
        ]
    );
}

#[test]
fn custom_grid_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = solid_bmp(dir.path(), "tiny.bmp", (8, 8), 0);

    let converter = Converter::new(Config {
        grid_size: 8,
        ..Config::default()
    })
    .unwrap();
    let output = converter.convert_file(&input).unwrap();

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "0,0,0,0,0,0,0,0\n".repeat(8)
    );
}
