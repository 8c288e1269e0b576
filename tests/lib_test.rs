//! Library integration tests.

use mwi_doctor::DoctorError;

#[test]
fn error_types_are_public() {
    let err = DoctorError::CommandSpawn {
        command: "echo hi".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell"),
    };
    assert!(err.to_string().contains("echo hi"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mwi_doctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use mwi_doctor::cli::Cli;

    let cli = Cli::parse_from(["mwi-doctor", "--plain"]);
    assert!(cli.plain);
}
