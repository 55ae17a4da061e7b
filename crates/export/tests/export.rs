//! End-to-end exports into a temporary directory.

use std::{fs, path::Path};

use icons_dump_export::{
    Artifact, CharStyle, Error, ExportOptions, RenderOptions, Target, WriteOutcome, export,
};
use icons_dump_glyphs::{Glyph, GlyphSet};
use pretty_assertions::assert_eq;

fn glyphs() -> GlyphSet {
    GlyphSet::new(vec![
        Glyph::new("rook_promoted", Some('♖')),
        Glyph::new("king", Some('♔')),
        Glyph::new("unassigned", None),
    ])
}

fn artifacts(dir: &Path, with_scala: bool) -> Vec<Artifact> {
    let mut artifacts = vec![
        Artifact::new(Target::TypeScript, dir.join("ui/common/src/icons.ts")),
        Artifact::new(Target::Scss, dir.join("ui/common/css/abstract/_icons.scss")),
    ];
    if with_scala {
        artifacts.push(Artifact::new(Target::Scala, dir.join("modules/common/src/main/Icons.scala")));
    }
    artifacts
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_exports_all_targets() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = artifacts(dir.path(), true);

    let reports = export(&glyphs(), &artifacts, &ExportOptions::default()).unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.outcome == WriteOutcome::Written && r.entries == 2));

    assert_eq!(
        read(&artifacts[0].path),
        "// Auto generated file via icons-dump\n\n\
         export const icons = {\n  king: '♔',\n  rookPromoted: '♖',\n} as const;\n"
    );
    assert_eq!(
        read(&artifacts[1].path),
        "// Auto generated file via icons-dump\n\n$king: '♔';\n$rook-promoted: '♖';\n"
    );
    assert_eq!(
        read(&artifacts[2].path),
        "// Auto generated file via icons-dump\npackage lila.common\n// format: off\n\
         object Icons {\n  val king = \"♔\"\n  val rookPromoted = \"♖\"\n}\n"
    );
}

#[test]
fn test_unassigned_glyph_absent_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = artifacts(dir.path(), true);
    export(&glyphs(), &artifacts, &ExportOptions::default()).unwrap();

    for artifact in &artifacts {
        let text = read(&artifact.path);
        assert!(!text.contains("unassigned"), "{}", artifact.target);
    }
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = artifacts(dir.path(), true);

    export(&glyphs(), &artifacts, &ExportOptions::default()).unwrap();
    let first: Vec<_> = artifacts.iter().map(|a| fs::read(&a.path).unwrap()).collect();

    let reports = export(&glyphs(), &artifacts, &ExportOptions::default()).unwrap();
    let second: Vec<_> = artifacts.iter().map(|a| fs::read(&a.path).unwrap()).collect();

    assert_eq!(first, second);
    assert!(reports.iter().all(|r| r.outcome == WriteOutcome::Unchanged));
}

#[test]
fn test_without_scala() {
    let dir = tempfile::tempdir().unwrap();
    let reports = export(&glyphs(), &artifacts(dir.path(), false), &ExportOptions::default()).unwrap();

    let targets: Vec<_> = reports.iter().map(|r| r.target).collect();
    assert_eq!(targets, [Target::TypeScript, Target::Scss]);
    assert!(!dir.path().join("modules").exists());
}

#[test]
fn test_strict_collision_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = artifacts(dir.path(), true);
    let glyphs = GlyphSet::new(vec![
        Glyph::new("king_promoted", Some('a')),
        Glyph::new("king-promoted", Some('b')),
    ]);
    let options = ExportOptions { strict: true, ..ExportOptions::default() };

    let err = export(&glyphs, &artifacts, &options).unwrap_err();
    assert!(matches!(err, Error::Identifiers { target: Target::TypeScript, .. }));
    assert!(artifacts.iter().all(|a| !a.path.exists()));
}

#[test]
fn test_lenient_collision_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = artifacts(dir.path(), false);
    let glyphs = GlyphSet::new(vec![
        Glyph::new("king_promoted", Some('a')),
        Glyph::new("king-promoted", Some('b')),
    ]);

    export(&glyphs, &artifacts, &ExportOptions::default()).unwrap();
    assert_eq!(
        read(&artifacts[1].path),
        "// Auto generated file via icons-dump\n\n$king-promoted: 'b';\n$king-promoted: 'a';\n"
    );
}

#[test]
fn test_escaped_scala_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Icons.scala");
    let glyphs = GlyphSet::new(vec![Glyph::new("rook", Some('♖'))]);
    let options = ExportOptions {
        render: RenderOptions {
            char_style: CharStyle::Escaped,
            comment: "generated".to_owned(),
            package: "shogi.common".to_owned(),
        },
        strict: false,
    };

    export(&glyphs, &[Artifact::new(Target::Scala, &path)], &options).unwrap();
    let expected = format!(
        "// generated\npackage shogi.common\n// format: off\nobject Icons {{\n  val rook = \"{}u2656\"\n}}\n",
        '\\'
    );
    assert_eq!(read(&path), expected);
}
