//! Command tests driven through the crate error type.

use keylist::{Bindings, Error, commands::CommandError, get};

fn setup() -> Bindings {
    let mut vars = Bindings::new();
    vars.set_paths_args(
        "server",
        &["host", "localhost", "port", "8080", "tls.cert", "/etc/cert.pem"],
    )
    .unwrap();
    vars
}

#[test]
fn test_commands_full_cycle() -> keylist::Result<()> {
    let mut vars = setup();

    assert_eq!(vars.get_keys("server", None)?, "host port tls");
    assert_eq!(vars.get_path("server", Some("tls.cert"), None)?, "/etc/cert.pem");

    vars.set_paths_args("server", &["tls.key", "/etc/key.pem", "port", "8443"])?;
    assert_eq!(vars.get_keys("server", Some("tls"))?, "cert key");
    assert_eq!(vars.get_path("server", Some("port"), None)?, "8443");

    vars.delete_paths("server", &["tls.cert", "tls.key"])?;
    assert_eq!(vars.get_keys("server", None)?, "host port");
    Ok(())
}

#[test]
fn test_variable_copies_are_independent() -> keylist::Result<()> {
    let mut vars = setup();
    let snapshot = vars.get("server").cloned().unwrap_or_default();
    vars.set("backup", snapshot);

    vars.set_paths_args("server", &["tls.cert", "/new.pem"])?;

    let backup = vars.get("backup").cloned().unwrap_or_default();
    assert_eq!(get(&backup, "tls.cert")?, "/etc/cert.pem");
    assert_eq!(vars.get_path("server", Some("tls.cert"), None)?, "/new.pem");
    Ok(())
}

#[test]
fn test_get_path_into_variable_then_address_it() -> keylist::Result<()> {
    let mut vars = setup();
    assert_eq!(vars.get_path("server", Some("tls"), Some("tls"))?, "1");
    assert_eq!(vars.get_path("tls", Some("cert"), None)?, "/etc/cert.pem");
    Ok(())
}

#[test]
fn test_errors_classify_through_crate_error() {
    let mut vars = setup();

    let err: Error = vars.get_path("missing", Some("k"), None).unwrap_err().into();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "commands");

    let err: Error = vars.set_paths_args("server", &["odd"]).unwrap_err().into();
    assert!(err.is_usage_error());

    let err: Error = vars.set_paths_args("server", &["host.x", "1"]).unwrap_err().into();
    assert!(err.is_parse_error());

    let err: Error = vars.delete_paths("server", &["nope"]).unwrap_err().into();
    assert!(matches!(
        err,
        Error::Command(CommandError::KeyNotFound { ref key }) if key == "nope"
    ));
}

#[test]
fn test_bindings_persist_as_text() -> keylist::Result<()> {
    let vars = setup();
    let json = vars.to_json()?;

    let mut restored = Bindings::from_json(&json)?;
    assert_eq!(restored, vars);
    assert_eq!(restored.get_path("server", Some("port"), None)?, "8080");
    Ok(())
}
