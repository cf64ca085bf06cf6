//! Structural conformance tests for emitted ASCII STL.
//!
//! Parses what the crate emits the way an external slicer would and checks
//! the record structure line by line.

use braille_translate::to_braille;
use plaque_io::{plaque_stl, save_stl, stl_to_string, SOLID_NAME};
use plaque_mesh::{build_plaque, stud_facets, PlaqueParams, BOX_FACETS};

/// Minimal ASCII STL reader: returns the facet count, validating structure.
///
/// Panics (failing the test) on any line that does not fit the grammar.
fn parse_ascii_stl(text: &str) -> usize {
    let mut lines = text.lines();

    let header = lines.next().expect("empty document");
    assert_eq!(header, format!("solid {SOLID_NAME}"));

    let mut facets = 0;
    loop {
        let line = lines.next().expect("unterminated document").trim_start();

        if let Some(name) = line.strip_prefix("endsolid ") {
            assert_eq!(name, SOLID_NAME, "mismatched endsolid name");
            assert!(lines.next().is_none(), "content after endsolid");
            return facets;
        }

        let normal = line.strip_prefix("facet normal ").expect("expected facet");
        assert_triple(normal);
        assert_eq!(lines.next().map(str::trim), Some("outer loop"));
        for _ in 0..3 {
            let vertex = lines
                .next()
                .expect("truncated loop")
                .trim_start()
                .strip_prefix("vertex ")
                .expect("expected vertex");
            assert_triple(vertex);
        }
        assert_eq!(lines.next().map(str::trim), Some("endloop"));
        assert_eq!(lines.next().map(str::trim), Some("endfacet"));
        facets += 1;
    }
}

/// Assert a whitespace-separated width-3 finite f64 triple.
fn assert_triple(s: &str) {
    let values: Vec<f64> = s
        .split_whitespace()
        .map(|v| v.parse().expect("not a decimal number"))
        .collect();
    assert_eq!(values.len(), 3, "expected 3 coordinates in {s:?}");
    assert!(values.iter().all(|v| v.is_finite()), "non-finite in {s:?}");
}

#[test]
fn empty_plaque_parses() {
    let result = plaque_stl("", &PlaqueParams::default());
    assert_eq!(parse_ascii_stl(&result.stl), BOX_FACETS);
}

#[test]
fn word_plaque_parses_with_expected_facet_count() {
    let params = PlaqueParams::default();
    let braille = to_braille("hello");
    let plaque = build_plaque(&braille, &params);
    let stl = stl_to_string(&plaque.mesh);

    // h + e + l + l + o raise 3+2+3+3+3 = 14 dots
    let expected = BOX_FACETS + 14 * stud_facets(params.segments);
    assert_eq!(parse_ascii_stl(&stl), expected);
    assert_eq!(plaque.mesh.facet_count(), expected);
}

#[test]
fn multiline_numbered_plaque_parses() {
    let braille = to_braille("Room 42\r\nFloor 3");
    let result = plaque_stl(&braille, &PlaqueParams::default());
    let facets = parse_ascii_stl(&result.stl);
    assert!(facets > BOX_FACETS);
    assert!(result.height_mm > 20.0, "two rows expected");
}

#[test]
fn facet_count_scales_with_segments() {
    let braille = to_braille("a"); // one raised dot
    for segments in [8, 24, 64] {
        let params = PlaqueParams::default().with_segments(segments);
        let result = plaque_stl(&braille, &params);
        assert_eq!(
            parse_ascii_stl(&result.stl),
            BOX_FACETS + stud_facets(segments)
        );
    }
}

#[test]
fn repeated_exports_are_byte_identical() {
    let braille = to_braille("Determinism!");
    let params = PlaqueParams::default();
    let first = plaque_stl(&braille, &params);
    let second = plaque_stl(&braille, &params);
    assert_eq!(first.stl, second.stl);
}

#[test]
fn saved_file_matches_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conformance.stl");

    let plaque = build_plaque(&to_braille("xyz"), &PlaqueParams::default());
    save_stl(&plaque.mesh, &path).unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, stl_to_string(&plaque.mesh));
    parse_ascii_stl(&on_disk);
}
