use super::*;

/// Tests that files at every depth are discovered.
///
/// Verifies that the traversal is unbounded in depth and reports paths relative to
/// the root as segments.
///
/// Expected: Ok with one entry per command file
#[test]
fn finds_files_at_every_depth() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_command("ping.js", CommandSource::new("ping", "Pong"))
        .with_command("utility/help.js", CommandSource::new("help", "Help"))
        .with_command("utility/fun/deep/er/roll.js", CommandSource::new("roll", "Roll"))
        .build()?;
    let root = test.commands_root();

    let mut paths: Vec<String> = CommandFileRepository::new(&root)
        .find_all()
        .iter()
        .map(|file| file.relative_path())
        .collect();
    paths.sort();

    assert_eq!(
        paths,
        vec!["ping.js", "utility/fun/deep/er/roll.js", "utility/help.js"]
    );

    Ok(())
}

/// Tests that only files with the command extension are read.
///
/// Expected: Ok with the `.json` and `.md` files ignored
#[test]
fn ignores_other_extensions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_command("utility/ping.js", CommandSource::new("ping", "Pong"))
        .with_file("utility/data.json", "{\"name\": \"x\"}")
        .with_file("README.md", "name: 'readme'")
        .build()?;
    let root = test.commands_root();

    let files = CommandFileRepository::new(&root).find_all();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].segments, vec!["utility", "ping.js"]);

    Ok(())
}

/// Tests that a missing root yields no files rather than an error.
///
/// Expected: Ok with empty vector
#[test]
fn missing_root_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().without_commands_root().build()?;
    let root = test.commands_root();
    let repo = CommandFileRepository::new(&root);

    assert!(!repo.root_exists());
    assert!(repo.find_all().is_empty());

    Ok(())
}

/// Tests that invalid UTF-8 is read lossily instead of being skipped.
///
/// Expected: Ok with the binary file present and its text replaced
#[test]
fn reads_binary_files_lossily() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file("broken.js", test_utils::fixture::BINARY_SOURCE)
        .build()?;
    let root = test.commands_root();

    let files = CommandFileRepository::new(&root).find_all();

    assert_eq!(files.len(), 1);
    assert!(files[0].content.contains('\u{FFFD}'));

    Ok(())
}

/// Tests that a file failing to read does not abort the traversal.
///
/// Expected: Ok with the readable siblings still returned
#[test]
fn skips_unreadable_files() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_command("utility/ping.js", CommandSource::new("ping", "Pong"))
        .with_command("utility/secret.js", CommandSource::new("secret", "Hidden"))
        .with_command("music/play.js", CommandSource::new("play", "Play"))
        .build()?;
    let root = test.commands_root();

    let mut files = CommandFileRepository::new(&root).find_all_with(|path| {
        if path.ends_with("secret.js") {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
        } else {
            std::fs::read(path)
        }
    });
    files.sort_by_key(|file| file.relative_path());

    let paths: Vec<String> = files.iter().map(|file| file.relative_path()).collect();
    assert_eq!(paths, vec!["music/play.js", "utility/ping.js"]);
    assert!(files[1].content.contains("Pong"));

    Ok(())
}
