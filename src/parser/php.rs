//! PHP trait scanner.
//!
//! Extracts from a `.php` source file:
//! - the doc-comment before `trait Name` → TraitDoc.description
//! - each doc-comment before a public `function name(` → MethodInfo, kept
//!   only when the comment declares steps
//!
//! Attributes (`#[...]`) and blank lines may sit between a comment and the
//! declaration it documents. Any other line drops the pending comment.

use crate::model::*;
use crate::parser::comment;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_TRAIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^trait\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:(?:public|protected|private|static|final|abstract)\s+)*)function\s+&?([A-Za-z_][A-Za-z0-9_]*)\s*\(")
        .unwrap()
});

static RE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\[").unwrap());

/// Scan a PHP source file for documented step traits, in declaration order.
///
/// Returns an empty list when the file declares no trait.
pub fn scan(content: &str, path: &Path) -> Result<Vec<TraitDoc>> {
    let mut traits: Vec<TraitDoc> = Vec::new();
    let mut pending: Option<String> = None;
    let mut block: Option<Vec<&str>> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        // Inside a doc-comment: collect until the closing line.
        if let Some(lines) = block.as_mut() {
            lines.push(line);
            if closes_block(trimmed) {
                pending = block.take().map(|l| l.join("\n"));
            }
            continue;
        }

        if trimmed.starts_with("/**") {
            if trimmed.len() > 3 && trimmed.ends_with("*/") {
                pending = Some(line.to_string());
            } else {
                block = Some(vec![line]);
            }
            continue;
        }

        if trimmed.is_empty() || RE_ATTRIBUTE.is_match(trimmed) {
            continue;
        }

        if let Some(caps) = RE_TRAIT.captures(trimmed) {
            let description = pending
                .take()
                .map(|c| comment::description(&c))
                .unwrap_or_default();
            tracing::debug!(trait_name = &caps[1], file = %path.display(), "found trait");
            traits.push(TraitDoc {
                name: caps[1].to_string(),
                description,
                methods: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = RE_FUNCTION.captures(trimmed) {
            let modifiers = &caps[1];
            let name = &caps[2];
            let doc_comment = pending.take();
            if modifiers.contains("private") || modifiers.contains("protected") {
                continue;
            }
            if let (Some(t), Some(c)) = (traits.last_mut(), doc_comment) {
                let parsed = comment::parse(&c).with_context(|| {
                    format!("{}: {}::{}", path.display(), t.name, name)
                })?;
                if let Some(doc) = parsed {
                    let method = MethodInfo::new(&t.name, &t.description, name, doc);
                    t.methods.push(method);
                }
            }
            continue;
        }

        pending = None;
    }

    Ok(traits)
}

/// Whether a line inside a doc-comment ends it.
///
/// Gutter lines (`* ...`) never do, so `* Match src/*/` stays prose.
fn closes_block(trimmed: &str) -> bool {
    trimmed.starts_with("*/") || (trimmed.ends_with("*/") && !trimmed.starts_with('*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"<?php

declare(strict_types=1);

namespace Acme\BehatSteps;

use Behat\Gherkin\Node\TableNode;

/**
 * Create and assert files.
 *
 * Second paragraph.
 */
trait FileTrait {

  /**
   * Create files.
   *
   * @code
   *   Given the following files:
   *     | name |
   *     | a.txt |
   * @endcode
   *
   * @Given the following files:
   */
  #[Deprecated]
  public function fileCreate(TableNode $files): void {
  }

  /**
   * Internal helper.
   */
  protected function fileHelper(): void {
  }

  /**
   * Assert a file exists.
   *
   * @Then the file :name should exist
   */
  public function fileAssertExists(string $name): void {
  }

  /**
   * Not a step.
   */
  public function fileReset(): void {
  }

  public function undocumented(): void {
  }

}
"#;

    #[test]
    fn scans_trait_and_step_methods() {
        let traits = scan(SOURCE, Path::new("src/FileTrait.php")).unwrap();
        assert_eq!(traits.len(), 1);
        let doc = &traits[0];
        assert_eq!(doc.name, "FileTrait");
        assert_eq!(doc.description, "Create and assert files.");
        let names: Vec<_> = doc.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["fileCreate", "fileAssertExists"]);

        let create = &doc.methods[0];
        assert_eq!(create.class_name, "FileTrait");
        assert_eq!(create.class_description, "Create and assert files.");
        assert_eq!(create.doc.steps, vec!["@Given the following files:"]);
        assert_eq!(
            create.doc.example,
            "Given the following files:\n  | name |\n  | a.txt |\n"
        );
        assert_eq!(doc.methods[1].doc.example, "");
    }

    #[test]
    fn file_without_trait() {
        let input = "<?php\n/**\n * @When I go\n */\nfunction free() {}\n";
        assert!(scan(input, Path::new("src/helpers.php")).unwrap().is_empty());
    }

    #[test]
    fn comment_separated_by_code_is_dropped() {
        let input = "<?php\ntrait T {\n  /**\n   * @When I go\n   */\n  protected $x;\n  public function go() {}\n}\n";
        let doc = &scan(input, Path::new("src/T.php")).unwrap()[0];
        assert!(doc.methods.is_empty());
    }

    #[test]
    fn single_line_comment() {
        let input = "<?php\ntrait T {\n  /** @When I go home */\n  public function goHome() {}\n}\n";
        let doc = &scan(input, Path::new("src/T.php")).unwrap()[0];
        assert_eq!(doc.methods[0].doc.steps, vec!["@When I go home"]);
    }

    #[test]
    fn parse_error_names_the_method() {
        let input = "<?php\ntrait T {\n  /**\n   * @When I go\n   * @code\n   */\n  public function go() {}\n}\n";
        let err = scan(input, Path::new("src/T.php")).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("T::go"), "{}", message);
        assert!(message.contains("Example not closed"), "{}", message);
    }

    #[test]
    fn close_marker_look_alike_keeps_the_block_open() {
        let input = "<?php\ntrait FileTrait {\n  /**\n   * List files.\n   *\n   * Match files under src/*/\n   *\n   * @When I list files\n   */\n  public function listFiles() {}\n}\n";
        let doc = &scan(input, Path::new("src/FileTrait.php")).unwrap()[0];
        let names: Vec<_> = doc.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["listFiles"]);
        assert_eq!(doc.methods[0].doc.steps, vec!["@When I list files"]);
    }

    #[test]
    fn text_before_close_marker_ends_block() {
        assert!(closes_block("*/"));
        assert!(closes_block("last words */"));
        assert!(!closes_block("* Match src/*/"));
    }

    #[test]
    fn every_trait_in_a_file_is_kept() {
        let input = "<?php\ntrait FirstTrait {\n  /** @When I go first */\n  public function goFirst() {}\n}\ntrait SecondTrait {\n  /** @When I go second */\n  public function goSecond() {}\n}\n";
        let traits = scan(input, Path::new("src/FirstTrait.php")).unwrap();
        let names: Vec<_> = traits.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["FirstTrait", "SecondTrait"]);
        assert_eq!(traits[0].methods[0].name, "goFirst");
        assert_eq!(traits[1].methods[0].name, "goSecond");
        assert_eq!(traits[1].methods[0].class_name, "SecondTrait");
    }
}
