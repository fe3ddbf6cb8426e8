// Runs in its own process; the profile slot is process-wide.
use configs::{current, install, BrandingError, BrandingOverrides};

#[test]
fn install_once_then_reads_are_stable() {
    let profile = BrandingOverrides {
        app_name: Some("Acme Chat".into()),
        ..Default::default()
    }
    .resolve();

    let installed = install(profile.clone()).expect("first install");
    assert_eq!(*installed, profile);

    let a = current();
    let b = current();
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(a, installed));
    assert_eq!(a.app_name, "Acme Chat");

    let again = install(Default::default());
    assert_eq!(again, Err(BrandingError::AlreadyInstalled));
    assert_eq!(current().app_name, "Acme Chat");
}
