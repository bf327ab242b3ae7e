use ivie_tools::commands::{
    execute_profile, execute_rename, export_build, validate_args, ExportArgs, ExportOutcome,
    ProfileArgs, RenameArgs, Renamed,
};
use ivie_tools::output::read_model;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use std::path::Path;

const DUMP: &str = r#"<root>
    <thread id="0" name="Main">
        <frame start="0" elapsed="50">
            <event name="A" start="0" elapsed="20"/>
            <event name="B" start="20" elapsed="30"/>
        </frame>
    </thread>
</root>"#;

fn profile_args(dir: &Path, input: &str) -> ProfileArgs {
    ProfileArgs {
        input: dir.join(input),
        output_html: dir.join("report/output.html"),
        output_json: Some(dir.join("report/model.json")),
        ..Default::default()
    }
}

#[test]
fn test_profile_writes_report_and_model() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("profile.xml"), DUMP).unwrap();
    let args = profile_args(temp_dir.path(), "profile.xml");

    validate_args(&args).unwrap();
    execute_profile(args.clone()).unwrap();

    let html = fs::read_to_string(&args.output_html).unwrap();
    assert!(html.contains(">A</div>"));
    assert!(html.contains(">B</div>"));

    let model = read_model(args.output_json.unwrap()).unwrap();
    let names: Vec<_> = model.threads[&0].frames[0].events[&0]
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_profile_missing_input_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = profile_args(temp_dir.path(), "missing.xml");

    let err = execute_profile(args.clone()).unwrap_err();

    assert!(format!("{:#}", err).contains("does not exist"));
    assert!(!args.output_html.exists());
    assert!(!temp_dir.path().join("report").exists());
}

#[test]
fn test_profile_malformed_input_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("broken.xml"), "<root><thread>").unwrap();
    let args = profile_args(temp_dir.path(), "broken.xml");

    assert!(execute_profile(args.clone()).is_err());
    assert!(!args.output_html.exists());
    assert!(!args.output_json.unwrap().exists());
}

#[test]
fn test_rename_replaces_substrings() {
    let temp_dir = tempfile::tempdir().unwrap();
    for name in ["img_001.png", "img_002.png", "notes.txt"] {
        fs::write(temp_dir.path().join(name), name).unwrap();
    }

    let renamed = execute_rename(&RenameArgs {
        folder: temp_dir.path().to_path_buf(),
        search: "img_".to_string(),
        replacement: "photo-".to_string(),
    })
    .unwrap();

    assert_eq!(
        renamed,
        vec![
            Renamed {
                from: "img_001.png".to_string(),
                to: "photo-001.png".to_string()
            },
            Renamed {
                from: "img_002.png".to_string(),
                to: "photo-002.png".to_string()
            },
        ]
    );
    assert!(temp_dir.path().join("photo-001.png").exists());
    assert!(!temp_dir.path().join("img_001.png").exists());
    assert!(temp_dir.path().join("notes.txt").exists());
}

#[test]
fn test_rename_does_not_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

    let renamed = execute_rename(&RenameArgs {
        folder: temp_dir.path().to_path_buf(),
        search: "a".to_string(),
        replacement: "b".to_string(),
    })
    .unwrap();

    assert!(renamed.is_empty());
    assert_eq!(fs::read_to_string(temp_dir.path().join("b.txt")).unwrap(), "b");
}

#[test]
fn test_rename_no_matches() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("keep.txt"), "").unwrap();

    let renamed = execute_rename(&RenameArgs {
        folder: temp_dir.path().to_path_buf(),
        search: "zzz".to_string(),
        replacement: "y".to_string(),
    })
    .unwrap();

    assert!(renamed.is_empty());
}

/// Lay out a repository with every manifest file present
fn create_export_base(base: &Path) {
    let files = [
        "usage_and_keybinds.txt",
        "builds/FinalRelease/Ivie.exe",
        "workdir/shader/area_clip.frag",
        "workdir/shader/background_gradient.frag",
        "workdir/shader/convert_freeimage.frag",
        "workdir/shader/convert_webm.frag",
        "workdir/SourceHanSans-Medium.ttc",
        "workdir/selawk.ttf",
        "workdir/ivie_logo_32.png",
    ];

    for file in files {
        let path = base.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, file).unwrap();
    }
}

fn no_input() -> Cursor<Vec<u8>> {
    Cursor::new(Vec::new())
}

fn export_args(base: &Path, assume_yes: bool) -> ExportArgs {
    ExportArgs {
        base: base.to_path_buf(),
        assume_yes,
        ..Default::default()
    }
}

#[test]
fn test_export_copies_manifest() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_export_base(temp_dir.path());

    let mut output = Vec::new();
    let outcome = export_build(
        &export_args(temp_dir.path(), false),
        &mut no_input(),
        &mut output,
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::Complete { copied: 9 });

    let export = temp_dir.path().join("export/Ivie");
    assert_eq!(
        fs::read_to_string(export.join("Ivie.exe")).unwrap(),
        "builds/FinalRelease/Ivie.exe"
    );
    assert!(export.join("shader/convert_webm.frag").exists());

    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("Export complete!"));
}

#[test]
fn test_export_declined_overwrite_keeps_folder() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_export_base(temp_dir.path());
    let stale = temp_dir.path().join("export/Ivie/stale.txt");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    let outcome = export_build(
        &export_args(temp_dir.path(), false),
        &mut Cursor::new(b"n\n".to_vec()),
        &mut Vec::<u8>::new(),
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::Aborted);
    assert!(stale.exists());
    assert!(!temp_dir.path().join("export/Ivie/Ivie.exe").exists());
}

#[test]
fn test_export_overwrite_with_yes() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_export_base(temp_dir.path());
    let stale = temp_dir.path().join("export/Ivie/stale.txt");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    let outcome = export_build(
        &export_args(temp_dir.path(), true),
        &mut no_input(),
        &mut Vec::<u8>::new(),
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::Complete { copied: 9 });
    assert!(!stale.exists());
}

#[test]
fn test_export_missing_files_is_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    create_export_base(temp_dir.path());
    fs::remove_file(temp_dir.path().join("workdir/selawk.ttf")).unwrap();

    let mut output = Vec::new();
    let result = export_build(
        &export_args(temp_dir.path(), false),
        &mut no_input(),
        &mut output,
    );

    assert!(result.is_err());

    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("File does not exist!"));
    assert!(shown.contains("Export had errors"));
    // The rest of the manifest is still copied
    assert!(temp_dir.path().join("export/Ivie/ivie_logo_32.png").exists());
}
