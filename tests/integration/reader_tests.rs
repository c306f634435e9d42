//! Manifest reader integration tests
//!
//! These tests read fixture install directories from disk.

use appx_visuals::{
    Argb, Config, DirectoryLocation, ManifestError, ManifestReader, ManifestSchema,
    SchemaSelection,
};
use std::path::PathBuf;

/// Get the path to a fixture install directory
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn reader(name: &str) -> ManifestReader<DirectoryLocation> {
    ManifestReader::new(DirectoryLocation::new(fixture(name)))
}

#[tokio::test]
async fn test_read_uap_package() {
    let visual = reader("uap").read_visual_element().await.unwrap();

    assert_eq!(visual.schema(), ManifestSchema::Uap);
    assert_eq!(visual.display_name(), "Contoso Reader");
    assert_eq!(visual.description(), "Read everything, everywhere");
    assert_eq!(visual.logo_path(), r"Assets\Square150x150Logo.png");
    assert_eq!(visual.logo_uri(), "ms-appx:///Assets/Square150x150Logo.png");
    assert_eq!(visual.small_logo_path(), r"Assets\Square44x44Logo.png");
    assert_eq!(visual.small_logo_uri(), "ms-appx:///Assets/Square44x44Logo.png");
    assert_eq!(visual.background_color_raw(), "#0078D7");
    assert_eq!(
        visual.background_color().unwrap(),
        Argb::new(255, 0x00, 0x78, 0xD7)
    );
}

#[tokio::test]
async fn test_read_win81_package() {
    let visual = reader("win81")
        .schema(SchemaSelection::Win81)
        .read_visual_element()
        .await
        .unwrap();

    assert_eq!(visual.schema(), ManifestSchema::Win81);
    assert_eq!(visual.small_logo_uri(), "ms-appx:///Assets/SmallLogo.png");
    assert_eq!(visual.background_color().unwrap(), Argb::new(128, 255, 128, 64));
}

#[tokio::test]
async fn test_auto_reads_win81_package() {
    let visual = reader("win81").read_visual_element().await.unwrap();
    assert_eq!(visual.schema(), ManifestSchema::Win81);
}

#[tokio::test]
async fn test_uap_only_rejects_win81_package() {
    let err = reader("win81")
        .schema(SchemaSelection::Uap)
        .read_visual_element()
        .await
        .unwrap_err();

    assert!(matches!(err, ManifestError::VisualElementsNotFound));
}

#[tokio::test]
async fn test_no_visual_elements() {
    let err = reader("no_visuals").read_visual_element().await.unwrap_err();

    assert!(matches!(err, ManifestError::VisualElementsNotFound));
    assert_eq!(
        err.to_string(),
        "Could not parse the VisualElements from the app manifest."
    );
}

#[tokio::test]
async fn test_missing_small_logo() {
    let err = reader("missing_logo").read_visual_element().await.unwrap_err();

    assert!(matches!(
        err,
        ManifestError::MissingAttribute {
            attribute: "Square44x44Logo"
        }
    ));
}

#[tokio::test]
async fn test_missing_manifest_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ManifestReader::new(DirectoryLocation::new(dir.path()))
        .read_visual_element()
        .await
        .unwrap_err();

    match err {
        ManifestError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_reads_are_equal() {
    let reader = reader("uap");

    let first = reader.read_visual_element().await.unwrap();
    let second = reader.read_visual_element().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_reads_see_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("AppxManifest.xml");
    let original = std::fs::read_to_string(fixture("uap").join("AppxManifest.xml")).unwrap();
    std::fs::write(&manifest, &original).unwrap();

    let reader = ManifestReader::new(DirectoryLocation::new(dir.path()));
    let before = reader.read_visual_element().await.unwrap();

    std::fs::write(&manifest, original.replace("#0078D7", "#107C10")).unwrap();
    let after = reader.read_visual_element().await.unwrap();

    assert_eq!(before.background_color_raw(), "#0078D7");
    assert_eq!(after.background_color_raw(), "#107C10");
}

#[tokio::test]
async fn test_config_overrides_file_name_and_uri_base() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixture("uap").join("AppxManifest.xml"),
        dir.path().join("Package.appxmanifest"),
    )
    .unwrap();

    let config = Config {
        schema: SchemaSelection::Uap,
        manifest_file: "Package.appxmanifest".to_string(),
        uri_base: "file:///opt/contoso/".to_string(),
    };
    let visual = ManifestReader::with_config(DirectoryLocation::new(dir.path()), &config)
        .read_visual_element()
        .await
        .unwrap();

    assert_eq!(visual.logo_uri(), "file:///opt/contoso/Assets/Square150x150Logo.png");
}

#[tokio::test]
async fn test_bad_background_color_surfaces_on_access() {
    let dir = tempfile::tempdir().unwrap();
    let original = std::fs::read_to_string(fixture("uap").join("AppxManifest.xml")).unwrap();
    std::fs::write(
        dir.path().join("AppxManifest.xml"),
        original.replace("#0078D7", "#123"),
    )
    .unwrap();

    let visual = ManifestReader::new(DirectoryLocation::new(dir.path()))
        .read_visual_element()
        .await
        .unwrap();

    assert!(visual.background_color().is_err());
}
