use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_partial_coverage() -> Result<()> {
    let test = CliTest::project(&[
        (
            "App/Views/Menu.cs",
            r#"
  public class Menu {
      public string Open => Translate("a.b");
      public string Close => _localizer["c.d"];
  }
  "#,
        ),
        ("App/Program.cs", r#"Console.WriteLine(Translate("a.b"));"#),
        (
            "App/Resources/translations.csv",
            "key,en,de\na.b,Open,Öffnen\nx.y,\"Yes, no\",\"Ja, nein\"\n",
        ),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert_eq!(result.stderr, "");
    assert_snapshot!(result.stdout, @r"
    Translation file at: App/Resources/translations.csv

    Found 2 keys in 2 project files.
    Found 2 keys in translation file.

    Code Coverage: 50.00 % (50.00 % missing)
    Not In Use: 1

    - Missing Keys -
    c.d


    - Unused Keys -
    x.y
    ");

    Ok(())
}

#[test]
fn test_bare_invocation_runs_check() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"GetString("greeting");"#),
        (
            "App/translations.json",
            r#"{"greeting": {"en": "Hi"}, "farewell": {"en": "Bye"}}"#,
        ),
    ])?;

    let result = run(&mut test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Translation file at: App/translations.json"));
    assert!(result.stdout.contains("Code Coverage: 100.00 % (0.00 % missing)"));
    assert!(result.stdout.ends_with("- Unused Keys -\nfarewell\n"));

    Ok(())
}

#[test]
fn test_exit_code_is_missing_count() -> Result<()> {
    let test = CliTest::project(&[
        (
            "App/Program.cs",
            r#"Translate("one"); Translate("two"); Translate("three"); Translate("one");"#,
        ),
        ("App/translations.csv", "key,en\n"),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(3));
    assert!(result.stdout.contains("Found 0 keys in translation file."));
    assert!(result.stdout.contains("Code Coverage: 0.00 % (100.00 % missing)"));
    assert!(result.stdout.contains("- Missing Keys -\none\ntwo\nthree\n"));

    Ok(())
}

#[test]
fn test_no_project_detected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Program.cs", r#"Translate("a.b");"#)?;
    test.write_file("translations.csv", "key,en\na.b,A\n")?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert_eq!(result.stdout, "");
    assert!(result.stderr.starts_with("Error: No project could be detected"));

    Ok(())
}

#[test]
fn test_no_translation_file() -> Result<()> {
    let test = CliTest::project(&[("App/Program.cs", r#"Translate("a.b");"#)])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert_eq!(
        result.stderr,
        "Error: No translation file found (looked for translations.csv, translations.json)\n"
    );

    Ok(())
}

#[test]
fn test_broken_resource_is_a_warning() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/translations.json", "{ \"a.b\": "),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stderr
            .starts_with("warning: Could not load translations.json")
    );
    assert!(result.stdout.contains("- Missing Keys -\na.b\n"));

    Ok(())
}

#[test]
fn test_explicit_root_and_resource() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/translations.csv", "key,en\n"),
        ("i18n/strings.tsv", "key\ten\na.b\tA\n"),
    ])?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("App"))
        .arg("..")
        .args(["--resource", "../i18n/strings.tsv"]);
    let result = run(&mut cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.starts_with("Translation file at: i18n/strings.tsv\n"));

    Ok(())
}

#[test]
fn test_resource_relative_to_working_directory() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/translations.csv", "key,en\n"),
        ("i18n/strings.tsv", "key\ten\na.b\tA\n"),
    ])?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("i18n"))
        .arg(test.root())
        .args(["--resource", "strings.tsv"]);
    let result = run(&mut cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.starts_with("Translation file at: i18n/strings.tsv\n"));

    Ok(())
}

#[test]
fn test_verbose_details() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/translations.json", "\u{feff}{\"a.b\": {\"en\": \"A\"}}"),
    ])?;

    let result = run(test.check_command().arg("-v"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stderr.contains("note: Read 1 of 1 source file(s)\n"));
    assert!(result.stderr.contains("note: Loaded App/translations.json as json\n"));

    Ok(())
}

#[test]
fn test_ignored_build_output() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/obj/Debug/Generated.cs", r#"Translate("generated.only");"#),
        ("App/translations.csv", "key,en\na.b,A\n"),
    ])?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Found 1 keys in 1 project files."));

    Ok(())
}

#[test]
fn test_config_patterns() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"L("a.b"); Translate("ignored");"#),
        ("App/translations.csv", "key,en\na.b,A\n"),
    ])?;
    test.write_file(
        ".transcovrc.json",
        r#"{ "patterns": [{ "regex": "\\bL\\(\"([a-z.]+)\"\\)", "group": 1 }] }"#,
    )?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Found 1 keys in 1 project files."));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::project(&[("App/translations.csv", "key,en\n")])?;
    test.write_file(".transcovrc.json", r#"{ "patterns": [{ "regex": "(" }] }"#)?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.starts_with("Error: Invalid regex in 'patterns'"));

    Ok(())
}

#[test]
fn test_unreadable_source_strict_and_lenient() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b");"#),
        ("App/translations.csv", "key,en\na.b,A\n"),
    ])?;
    std::fs::write(test.root().join("App/Latin1.cs"), [0xe9u8, 0x00, 0xff])?;

    let lenient = run(&mut test.check_command())?;
    assert_eq!(lenient.code, Some(0));
    assert_eq!(
        lenient.stderr,
        "warning: 1 source file(s) could not be read (use -v for details)\n"
    );

    let strict = run(test.check_command().arg("--strict"))?;
    assert_eq!(strict.code, Some(1));
    assert_eq!(strict.stderr, "Error: 1 source file(s) could not be read\n");

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::project(&[
        ("App/Program.cs", r#"Translate("a.b"); Translate("c.d");"#),
        ("App/translations.csv", "key,en\na.b,A\nx.y,X\n"),
    ])?;

    let result = run(test.check_command().args(["--format", "json"]))?;
    assert_eq!(result.code, Some(1));

    let value: Value = serde_json::from_str(&result.stdout)?;
    assert_eq!(value["resourceFile"], "App/translations.csv");
    assert_eq!(value["coverage"], 50.0);
    assert_eq!(value["covered"], serde_json::json!(["a.b"]));
    assert_eq!(value["missing"], serde_json::json!(["c.d"]));
    assert_eq!(value["unused"], serde_json::json!(["x.y"]));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("--help"))?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Usage: transcov"));
    assert!(result.stdout.contains("init"));
    assert!(result.stdout.contains("--strict"));

    Ok(())
}
