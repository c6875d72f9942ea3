use std::{env, io::Write};

use serveolist::{Error, config};

// Environment mutation is process-global, so each aspect lives in a single
// test function that runs its scenarios sequentially.

#[test]
fn validate_lists_every_missing_variable() {
    unsafe {
        env::remove_var("CLIENT_ID");
        env::remove_var("CLIENT_SECRET");
        env::remove_var("REDIRECT_URI");
    }

    match config::validate() {
        Err(Error::MissingConfig(missing)) => {
            assert!(missing.contains("CLIENT_ID"));
            assert!(missing.contains("CLIENT_SECRET"));
            assert!(missing.contains("REDIRECT_URI"));
        }
        other => panic!("expected MissingConfig, got {other:?}"),
    }

    unsafe {
        env::set_var("CLIENT_ID", "id");
        env::set_var("CLIENT_SECRET", "secret");
        env::set_var("REDIRECT_URI", "https://example.serveo.net/callback");
    }
    config::validate().expect("all variables set");

    // Empty values count as absent.
    unsafe {
        env::set_var("CLIENT_SECRET", "");
    }
    assert!(config::validate().is_err());

    unsafe {
        env::set_var("CLIENT_SECRET", "secret");
    }
}

#[tokio::test]
async fn settings_file_supplies_the_serveo_domain() {
    // Absent file: defaults, no domain, no error.
    unsafe {
        env::set_var("SETTINGS_FILE", "does-not-exist.yaml");
    }
    let settings = config::load_settings().await.expect("absent file is fine");
    assert_eq!(settings.serveo_domain(), None);

    // Present file: the configured domain is exposed.
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "serveo:\n  domain: myapp.serveo.net").expect("write yaml");
    unsafe {
        env::set_var("SETTINGS_FILE", file.path());
    }
    let settings = config::load_settings().await.expect("valid yaml");
    assert_eq!(settings.serveo_domain(), Some("myapp.serveo.net"));

    // Broken file: an error, not a silently tunnel-less run.
    let mut broken = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(broken, "serveo: [not, a, mapping").expect("write yaml");
    unsafe {
        env::set_var("SETTINGS_FILE", broken.path());
    }
    assert!(matches!(
        config::load_settings().await,
        Err(Error::Settings(_))
    ));

    unsafe {
        env::remove_var("SETTINGS_FILE");
    }
}
