use super::normalized;
use super::parse;
use crate::override_schema;
use crate::SchemaInput;
use crate::SchemaInputError;
use std::io::Write;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn resolves_literal_sdl() -> Result<()> {
    let doc = SchemaInput::from("type User { id: ID! }").resolve("schema")?;
    assert_eq!(doc.to_string(), normalized("type User { id: ID! }"));
    Ok(())
}

#[test]
fn passes_documents_through() -> Result<()> {
    let doc = parse("scalar Url");
    assert_eq!(SchemaInput::from(doc.clone()).resolve("schema")?, doc);
    Ok(())
}

#[test]
fn blank_sdl_is_invalid() {
    let result = SchemaInput::from("  \n\t").resolve("overrides");
    assert_eq!(result, Err(SchemaInputError::InvalidInput {
        label: "overrides".to_string(),
    }));
}

#[test]
fn parse_errors_carry_the_label() {
    let result = SchemaInput::from("type User {").resolve("schema");
    assert!(matches!(
        result,
        Err(SchemaInputError::ParseError { ref source_name, .. }) if source_name == "schema"
    ));
}

#[test]
fn reads_files_from_paths() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "type Post {{ id: ID! }}")?;

    let doc = SchemaInput::from(file.path()).resolve("schema")?;
    assert_eq!(doc.to_string(), normalized("type Post { id: ID! }"));

    let merged = override_schema(
        file.path().to_path_buf(),
        "type Post { title: String @create }",
    )?;
    assert_eq!(merged.to_string(), normalized("type Post { id: ID! title: String }"));
    Ok(())
}

#[test]
fn directories_are_not_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let result = SchemaInput::from(dir.path()).resolve("schema");
    assert_eq!(result, Err(SchemaInputError::PathIsNotAFile(dir.path().to_path_buf())));

    let missing = dir.path().join("missing.graphql");
    let result = SchemaInput::Path(missing.clone()).resolve("schema");
    assert_eq!(result, Err(SchemaInputError::PathIsNotAFile(missing)));
    Ok(())
}

#[test]
fn rejects_non_utf8_files() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(&[0x74, 0x79, 0x70, 0x65, 0x20, 0xff, 0xfe])?;

    let result = SchemaInput::from(file.path()).resolve("schema");
    assert!(matches!(
        result,
        Err(SchemaInputError::FileDecodeError { ref file_path, .. })
            if file_path == file.path()
    ));

    let err = result.unwrap_err();
    let source = std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<std::string::FromUtf8Error>());
    assert_eq!(source.map(|utf8_err| utf8_err.as_bytes().len()), Some(7));
    Ok(())
}

#[test]
fn read_errors_compare_by_kind() {
    let denied = |path: &str| SchemaInputError::FileReadError {
        file_path: PathBuf::from(path),
        err: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };
    let interrupted = SchemaInputError::FileReadError {
        file_path: PathBuf::from("schema.graphql"),
        err: std::io::Error::from(std::io::ErrorKind::Interrupted),
    };

    assert_eq!(denied("schema.graphql"), denied("schema.graphql"));
    assert_ne!(denied("schema.graphql"), denied("other.graphql"));
    assert_ne!(denied("schema.graphql"), interrupted);

    let err = denied("schema.graphql");
    let kind = std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(std::io::Error::kind);
    assert_eq!(kind, Some(std::io::ErrorKind::PermissionDenied));
}

#[test]
fn infer_distinguishes_paths_from_sdl() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "scalar Url")?;
    let path_text = file.path().display().to_string();

    assert_eq!(
        SchemaInput::infer(path_text.as_str()),
        SchemaInput::Path(PathBuf::from(path_text.as_str())),
    );
    assert_eq!(
        SchemaInput::infer("scalar Url"),
        SchemaInput::Sdl("scalar Url".to_string()),
    );
    assert_eq!(
        SchemaInput::infer("does/not/exist.graphql"),
        SchemaInput::Sdl("does/not/exist.graphql".to_string()),
    );
    Ok(())
}
