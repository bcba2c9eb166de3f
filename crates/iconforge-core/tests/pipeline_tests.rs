//! End-to-end tests for the generator pipeline against temporary asset
//! directories.

use iconforge_core::{
    render_variant, resize_exact, AssetRole, BackupOutcome, IconGenerator, RunOutcome,
    BACKUP_ORDER, SAVE_ORDER,
};
use iconforge_test_utils::{png_dimensions, AssetsFixture};
use pretty_assertions::assert_eq;
use std::fs;

fn completed(outcome: RunOutcome) -> iconforge_core::RunReport {
    match outcome {
        RunOutcome::Completed(report) => report,
        RunOutcome::SourceMissing { path, .. } => {
            panic!("expected completed run, source missing at {}", path.display())
        }
    }
}

#[test]
fn fresh_directory_generates_all_assets_without_backups() {
    let fixture = AssetsFixture::with_source(2000, 1500);

    let report = completed(fixture.generator().run().unwrap());

    assert_eq!(report.source_dimensions, (2000, 1500));
    assert!(report.backups.iter().all(|b| !b.is_copied()));
    assert_eq!(
        report.saved.iter().map(|s| s.role).collect::<Vec<_>>(),
        SAVE_ORDER.to_vec()
    );
    assert_eq!(
        fixture.listing(),
        vec![
            "adaptive-icon.png".to_string(),
            "favicon.png".to_string(),
            "icon.png".to_string(),
            "splash-icon.png".to_string(),
        ]
    );
}

#[test]
fn generated_assets_have_role_dimensions() {
    let fixture = AssetsFixture::with_source(640, 480);
    fixture.generator().run().unwrap();

    for role in SAVE_ORDER {
        assert_eq!(png_dimensions(&fixture.asset(role)), role.dimensions(), "{role}");
    }
    assert_eq!(png_dimensions(&fixture.asset(AssetRole::Favicon)), (48, 48));
}

#[test]
fn large_roles_are_byte_identical() {
    let fixture = AssetsFixture::with_source(500, 500);
    fixture.generator().run().unwrap();

    let icon = fs::read(fixture.asset(AssetRole::Icon)).unwrap();
    let adaptive = fs::read(fixture.asset(AssetRole::AdaptiveIcon)).unwrap();
    let splash = fs::read(fixture.asset(AssetRole::SplashIcon)).unwrap();

    assert!(icon == adaptive, "adaptive icon differs from icon");
    assert!(icon == splash, "splash icon differs from icon");
}

#[test]
fn favicon_is_resized_from_source_directly() {
    let fixture = AssetsFixture::with_source(1500, 1500);
    fixture.generator().run().unwrap();

    let source = image::open(fixture.source_path()).unwrap();
    let direct = render_variant(&source, AssetRole::Favicon).unwrap();
    let via_large = render_variant(&resize_exact(&source, 1024, 1024), AssetRole::Favicon).unwrap();

    let favicon = fs::read(fixture.asset(AssetRole::Favicon)).unwrap();
    assert!(favicon == direct.png, "favicon does not match direct 48x48 resize");
    assert!(favicon != via_large.png, "favicon was resized from the large variant");
}

#[test]
fn existing_assets_backed_up_before_overwrite() {
    let fixture = AssetsFixture::with_source(300, 300);
    let previous: Vec<_> = SAVE_ORDER
        .iter()
        .map(|&role| (role, fixture.seed_asset(role)))
        .collect();

    let report = completed(fixture.generator().run().unwrap());

    assert!(report.backups.iter().all(BackupOutcome::is_copied));
    for (role, bytes) in previous {
        assert_eq!(fs::read(fixture.backup(role)).unwrap(), bytes, "{role}");
        assert!(fs::read(fixture.asset(role)).unwrap() != bytes, "{role} not overwritten");
    }
}

#[test]
fn only_present_assets_are_backed_up() {
    let fixture = AssetsFixture::with_source(300, 300);
    fixture.seed_asset(AssetRole::SplashIcon);

    let report = completed(fixture.generator().run().unwrap());

    let copied: Vec<_> = report
        .backups
        .iter()
        .filter(|b| b.is_copied())
        .map(BackupOutcome::role)
        .collect();
    assert_eq!(copied, vec![AssetRole::SplashIcon]);

    for role in BACKUP_ORDER {
        assert_eq!(
            fixture.backup(role).exists(),
            role == AssetRole::SplashIcon,
            "{role}"
        );
    }
}

#[test]
fn missing_source_leaves_destinations_untouched() {
    let fixture = AssetsFixture::new();
    fixture.seed_asset(AssetRole::Icon);
    let before = fs::read(fixture.asset(AssetRole::Icon)).unwrap();

    let outcome = fixture.generator().run().unwrap();

    match outcome {
        RunOutcome::SourceMissing { backups, path } => {
            assert_eq!(path, fixture.source_path());
            assert_eq!(backups.len(), 4);
        }
        RunOutcome::Completed(_) => panic!("run completed without a source image"),
    }
    assert_eq!(fs::read(fixture.asset(AssetRole::Icon)).unwrap(), before);
    for role in [AssetRole::AdaptiveIcon, AssetRole::SplashIcon, AssetRole::Favicon] {
        assert!(!fixture.asset(role).exists(), "{role} was created");
    }
}

#[test]
fn missing_source_in_empty_directory_writes_nothing() {
    let fixture = AssetsFixture::new();

    let outcome = fixture.generator().run().unwrap();

    assert!(matches!(outcome, RunOutcome::SourceMissing { .. }));
    assert!(fixture.listing().is_empty());
}

#[test]
fn rerun_backs_up_first_run_and_regenerates_identically() {
    let fixture = AssetsFixture::with_source(800, 600);
    let generator = fixture.generator();

    completed(generator.run().unwrap());
    let first: Vec<_> = SAVE_ORDER
        .iter()
        .map(|&role| fs::read(fixture.asset(role)).unwrap())
        .collect();

    let report = completed(generator.run().unwrap());

    assert_eq!(report.backups.iter().filter(|b| b.is_copied()).count(), 4);
    for (role, bytes) in SAVE_ORDER.iter().zip(&first) {
        assert!(fs::read(fixture.backup(*role)).unwrap() == *bytes, "{role} backup");
        assert!(fs::read(fixture.asset(*role)).unwrap() == *bytes, "{role} regenerated");
    }
    assert_eq!(fixture.listing().len(), 8);
}

#[test]
fn corrupt_source_propagates_decode_error() {
    let fixture = AssetsFixture::new();
    fs::write(fixture.source_path(), b"\x89PNG but not really").unwrap();

    let err = fixture.generator().run().unwrap_err();

    assert!(matches!(err, iconforge_core::GeneratorError::Decode { .. }));
    assert!(fixture.listing().is_empty());
}

#[test]
fn missing_assets_dir_fails_on_write() {
    let fixture = AssetsFixture::with_source(100, 100);
    let config = fixture
        .config()
        .with_assets_dir(fixture.root().join("does-not-exist"));
    let generator = IconGenerator::new(config).unwrap();

    let err = generator.run().unwrap_err();

    assert!(matches!(err, iconforge_core::GeneratorError::Io { .. }));
}
