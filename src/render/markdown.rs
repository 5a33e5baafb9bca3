//! Step reference markdown renderer.
//!
//! Produces an index table followed by one section per trait. Each step
//! method becomes a collapsible `<details>` block holding its example.

use crate::error::RenderError;
use crate::model::{TraitDoc, TraitInfo};
use crate::naming;
use crate::render::table;
use std::path::Path;

/// Directory holding trait sources, relative to the project root.
pub const SOURCE_DIR: &str = "src";

/// Directory holding example feature files, relative to the project root.
pub const FEATURES_DIR: &str = "tests/behat/features";

/// Render the full step reference.
///
/// Every trait must have a source file at `src/<Trait>.php` under
/// `base_path`; the first missing one aborts rendering.
pub fn render(info: &TraitInfo, base_path: &Path) -> Result<String, RenderError> {
    let mut rows: Vec<(String, Vec<String>)> = Vec::with_capacity(info.len());
    let mut sections = String::new();

    for trait_doc in info.iter() {
        let source = source_path(&trait_doc.name);
        if !base_path.join(&source).exists() {
            return Err(RenderError::MissingSource { path: source });
        }
        let example = example_path(&trait_doc.name);
        tracing::debug!(
            trait_name = %trait_doc.name,
            methods = trait_doc.methods.len(),
            "rendering trait"
        );

        sections.push_str(&render_trait(trait_doc, &source, &example));

        rows.push((
            trait_doc.name.clone(),
            vec![
                format!("[{}](#{})", trait_doc.name, naming::anchor(&trait_doc.name)),
                escape_cell(class_description(trait_doc)),
            ],
        ));
    }

    let mut output = table::render(&["Class", "Description"], &rows);
    output.push('\n');
    output.push_str(&sections);
    Ok(output)
}

/// `src/<Trait>.php`
pub fn source_path(trait_name: &str) -> String {
    format!("{}/{}.php", SOURCE_DIR, trait_name)
}

/// `tests/behat/features/<snake_name>.feature`
pub fn example_path(trait_name: &str) -> String {
    format!("{}/{}.feature", FEATURES_DIR, naming::feature_name(trait_name))
}

fn render_trait(trait_doc: &TraitDoc, source: &str, example: &str) -> String {
    let mut out = String::new();
    out.push_str("\n---\n\n");
    out.push_str(&format!("## {}\n\n", trait_doc.name));
    out.push_str(&format!("[Source]({}), [Example]({})\n\n", source, example));

    for method in &trait_doc.methods {
        out.push_str("<details>\n");
        out.push_str(&format!(
            "  <summary><code>{}</code></summary>\n\n",
            method.doc.steps.join("</code><br/><code>")
        ));
        if !method.doc.description.is_empty() {
            out.push_str(&method.doc.description);
            out.push_str("\n\n");
        }
        let fence = code_fence(&method.doc.example);
        out.push_str(&format!("{}gherkin\n", fence));
        out.push_str(&method.doc.example);
        out.push_str(&format!("{}\n\n", fence));
        out.push_str("</details>\n\n");
    }
    out
}

/// Trait description, falling back to what its methods carry.
fn class_description(trait_doc: &TraitDoc) -> &str {
    if !trait_doc.description.is_empty() {
        return &trait_doc.description;
    }
    trait_doc
        .methods
        .first()
        .map(|m| m.class_description.as_str())
        .unwrap_or("")
}

/// Backtick fence longer than any backtick run inside `text`, at least three.
fn code_fence(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MethodDoc, MethodInfo};
    use std::fs;
    use tempfile::TempDir;

    fn project(traits: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        for name in traits {
            fs::write(dir.path().join(format!("src/{}.php", name)), "<?php\n").unwrap();
        }
        dir
    }

    fn file_trait() -> TraitDoc {
        TraitDoc {
            name: "FileDownloadTrait".to_string(),
            description: "Download files.".to_string(),
            methods: vec![MethodInfo::new(
                "FileDownloadTrait",
                "Download files.",
                "fileDownloadAssertContains",
                MethodDoc {
                    steps: vec!["@Then the downloaded file should contain :text".to_string()],
                    description: "Assert the downloaded file content.".to_string(),
                    example: "Then the downloaded file should contain \"x\"\n".to_string(),
                },
            )],
        }
    }

    #[test]
    fn empty_info_is_a_newline() {
        let dir = project(&[]);
        assert_eq!(render(&TraitInfo::new(), dir.path()).unwrap(), "\n");
    }

    #[test]
    fn renders_table_and_section() {
        let dir = project(&["FileDownloadTrait"]);
        let info: TraitInfo = vec![file_trait()].into_iter().collect();
        let out = render(&info, dir.path()).unwrap();

        let expected = concat!(
            "| Class | Description |\n",
            "| --- | --- |\n",
            "| [FileDownloadTrait](#filedownloadtrait) | Download files. |\n",
            "\n",
            "---\n",
            "\n",
            "## FileDownloadTrait\n",
            "\n",
            "[Source](src/FileDownloadTrait.php), [Example](tests/behat/features/file_download.feature)\n",
            "\n",
            "<details>\n",
            "  <summary><code>@Then the downloaded file should contain :text</code></summary>\n",
            "\n",
            "Assert the downloaded file content.\n",
            "\n",
            "```gherkin\n",
            "Then the downloaded file should contain \"x\"\n",
            "```\n",
            "\n",
            "</details>\n",
            "\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn missing_source_aborts() {
        let dir = project(&["FileDownloadTrait"]);
        let mut other = file_trait();
        other.name = "CookieTrait".to_string();
        let info: TraitInfo = vec![file_trait(), other].into_iter().collect();
        let err = render(&info, dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Source file src/CookieTrait.php does not exist"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let dir = project(&["FileDownloadTrait"]);
        let info: TraitInfo = vec![file_trait()].into_iter().collect();
        assert_eq!(
            render(&info, dir.path()).unwrap(),
            render(&info, dir.path()).unwrap()
        );
    }

    #[test]
    fn multiple_steps_joined_in_summary() {
        let dir = project(&["FileDownloadTrait"]);
        let mut t = file_trait();
        t.methods[0].doc.steps = vec!["@Given a".to_string(), "@When b".to_string()];
        let info: TraitInfo = vec![t].into_iter().collect();
        let out = render(&info, dir.path()).unwrap();
        assert!(out.contains("<summary><code>@Given a</code><br/><code>@When b</code></summary>"));
    }

    #[test]
    fn fence_outgrows_backticks_in_example() {
        assert_eq!(code_fence("Then I see \"x\"\n"), "```");
        assert_eq!(code_fence("a `b` c"), "```");
        assert_eq!(code_fence("```\nnested\n```\n"), "````");

        let dir = project(&["FileDownloadTrait"]);
        let mut t = file_trait();
        t.methods[0].doc.example = "Then the file should contain:\n  \"\"\"\n  ```\n  \"\"\"\n".to_string();
        let info: TraitInfo = vec![t].into_iter().collect();
        let out = render(&info, dir.path()).unwrap();
        assert!(out.contains("````gherkin\nThen the file should contain:\n"));
        assert!(out.contains("  ```\n  \"\"\"\n````\n\n</details>"));
    }

    #[test]
    fn pipes_in_description_are_escaped() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
    }

    #[test]
    fn paths() {
        assert_eq!(source_path("HTTPTrait"), "src/HTTPTrait.php");
        assert_eq!(example_path("HTTPTrait"), "tests/behat/features/h_t_t_p.feature");
    }
}
