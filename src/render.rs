//! Built-in entity template: turns a [`GenerationContext`] into the scaffold
//! source file and writes it under the output root.
//!
//! The template is assembled by ordinary string building; every derived field
//! of the context lands somewhere in the output. The collector never calls
//! into this module: rendering is strictly downstream of the returned
//! context, and `--json` skips it entirely.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{ApiType, GenerationContext};

/// A rendered scaffold ready to be written under the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    /// Path relative to the output root.
    pub relative_path: String,
    pub content: String,
}

/// Render the entity module for one generation run.
pub fn render_entity(ctx: &GenerationContext) -> RenderedFile {
    let fn_name = entity_fn_name(ctx);
    let call_name = format!("{}{}", ctx.api_type, ctx.function_name);
    let rule = banner_rule();

    let mut content = String::new();

    // Banner: the SDK call signature with the per-parameter doc block.
    content.push_str(&rule);
    content.push('\n');
    if ctx.params.is_empty() {
        content.push_str(&format!(";; sdk.entities.{call_name}();\n"));
    } else {
        content.push_str(&format!(";; sdk.entities.{call_name}({{\n"));
        content.push_str(&ctx.doc_params);
        content.push_str(";; });\n");
    }
    content.push_str(&rule);
    content.push_str("\n\n");

    if let Some(def) = spec_def(ctx, &fn_name) {
        content.push_str(&def);
        content.push('\n');
    }

    content.push_str(&format!("(def-sdk-fn {fn_name}\n"));
    content.push_str(&format!(
        "  \"{} request for the {} entity.\"\n",
        ctx.api_type.http_method(),
        ctx.normal_name
    ));
    if ctx.params.is_empty() {
        content.push_str(&format!("  {{:topic-key :{fn_name}-response}}\n"));
    } else {
        content.push_str(&format!("  {{:validation ::{fn_name}-params\n"));
        content.push_str(&format!("   :topic-key :{fn_name}-response}}\n"));
    }
    content.push_str("  [params]\n");
    content.push_str("  ;; request implementation goes here\n");
    content.push_str("  )\n");

    RenderedFile {
        relative_path: format!("{fn_name}.cljs"),
        content,
    }
}

/// Write a rendered file under `root`, creating directories as needed.
/// Refuses to clobber an existing file.
pub fn write_file(root: &Path, file: &RenderedFile) -> Result<PathBuf> {
    let path = root.join(&file.relative_path);

    if path.exists() {
        bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    fs::write(&path, &file.content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

/// Generated function name: `<action>-<kebab target>`.
///
/// Create/Update/Delete on a plural entity name act on one record, so they
/// use the singular kebab form; Get keeps the plural (a list endpoint).
fn entity_fn_name(ctx: &GenerationContext) -> String {
    let target = if ctx.plural_check && ctx.api_type != ApiType::Get {
        &ctx.kebab_name_no_last_letter
    } else {
        &ctx.kebab_name
    };
    format!("{}-{}", ctx.api_type, target)
}

/// The `s/def` validation block, or `None` when there are no parameters.
fn spec_def(ctx: &GenerationContext, fn_name: &str) -> Option<String> {
    if ctx.params.is_empty() {
        return None;
    }

    let mut def = format!("(s/def ::{fn_name}-params\n  (s/keys");
    if !ctx.req_spec_params.is_empty() {
        def.push_str(" :req-un [");
        def.push_str(&ctx.req_spec_params);
        def.push(']');
    }
    if !ctx.opt_spec_params.is_empty() {
        if ctx.req_spec_params.is_empty() {
            def.push_str(" :opt-un [");
        } else {
            def.push_str("\n          :opt-un [");
        }
        def.push_str(&ctx.opt_spec_params);
        def.push(']');
    }
    def.push_str("))\n");

    Some(def)
}

fn banner_rule() -> String {
    format!(";; {} ;;", "-".repeat(74))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::derive_context;
    use crate::types::{Answers, ParamType, Parameter};
    use tempfile::TempDir;

    fn make_context(name: &str, api_type: ApiType, params: Vec<Parameter>) -> GenerationContext {
        let answers = Answers {
            name: name.to_string(),
            api_type,
            params: String::new(),
        };
        derive_context(&answers, params)
    }

    fn sample_params() -> Vec<Parameter> {
        vec![
            Parameter::new("active", ParamType::Boolean, true),
            Parameter::new("name", ParamType::String, false),
        ]
    }

    #[test]
    fn test_render_get_keeps_plural_name() {
        let ctx = make_context("mediaCollections", ApiType::Get, sample_params());
        let file = render_entity(&ctx);

        assert_eq!(file.relative_path, "get-media-collections.cljs");
        assert!(file.content.contains(";; sdk.entities.getMediaCollections({"));
        assert!(file.content.contains("(def-sdk-fn get-media-collections"));
    }

    #[test]
    fn test_render_update_singularizes_plural_name() {
        let ctx = make_context("mediaCollections", ApiType::Update, sample_params());
        let file = render_entity(&ctx);

        assert_eq!(file.relative_path, "update-media-collection.cljs");
        assert!(file.content.contains("(def-sdk-fn update-media-collection"));
        // The banner call name always uses the full capitalized form.
        assert!(file.content.contains(";; sdk.entities.updateMediaCollections({"));
    }

    #[test]
    fn test_render_singular_name_unchanged_across_actions() {
        for api_type in ApiType::ALL {
            let ctx = make_context("session", api_type, Vec::new());
            let file = render_entity(&ctx);
            assert_eq!(
                file.relative_path,
                format!("{}-session.cljs", api_type.as_str())
            );
        }
    }

    #[test]
    fn test_render_interpolates_doc_and_spec_blocks() {
        let ctx = make_context("mediaCollections", ApiType::Get, sample_params());
        let content = render_entity(&ctx).content;

        assert!(content.contains(";;   active: {{boolean}} (required),\n"));
        assert!(content.contains(";;   name: {{string}} (optional),\n"));
        assert!(content.contains(":req-un [::specs/active ]"));
        assert!(content.contains(":opt-un [::specs/name ]"));
        assert!(content.contains(":validation ::get-media-collections-params"));
        assert!(content.contains(":topic-key :get-media-collections-response"));
        assert!(content.contains("\"GET request for the media collections entity.\""));
    }

    #[test]
    fn test_render_without_params_exact_output() {
        let ctx = make_context("session", ApiType::Create, Vec::new());
        let file = render_entity(&ctx);
        let rule = banner_rule();

        let expected = format!(
            "{rule}\n\
             ;; sdk.entities.createSession();\n\
             {rule}\n\
             \n\
             (def-sdk-fn create-session\n  \
             \"POST request for the session entity.\"\n  \
             {{:topic-key :create-session-response}}\n  \
             [params]\n  \
             ;; request implementation goes here\n  \
             )\n"
        );

        assert_eq!(file.relative_path, "create-session.cljs");
        assert_eq!(file.content, expected);
    }

    #[test]
    fn test_render_without_params_has_no_validation() {
        let ctx = make_context("session", ApiType::Delete, Vec::new());
        let content = render_entity(&ctx).content;

        assert!(!content.contains("s/def"));
        assert!(!content.contains(":validation"));
        assert!(content.contains(";; sdk.entities.deleteSession();"));
    }

    #[test]
    fn test_render_optional_only_params() {
        let params = vec![Parameter::new("name", ParamType::String, false)];
        let ctx = make_context("queues", ApiType::Get, params);
        let content = render_entity(&ctx).content;

        assert!(content.contains("(s/keys :opt-un [::specs/name ]))"));
        assert!(!content.contains(":req-un"));
    }

    #[test]
    fn test_write_file_creates_directories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src").join("entities");
        let ctx = make_context("users", ApiType::Get, Vec::new());
        let file = render_entity(&ctx);

        let written = write_file(&root, &file).unwrap();

        assert!(written.ends_with("get-users.cljs"));
        assert_eq!(fs::read_to_string(&written).unwrap(), file.content);
    }

    #[test]
    fn test_write_file_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let ctx = make_context("users", ApiType::Get, Vec::new());
        let file = render_entity(&ctx);

        write_file(temp.path(), &file).unwrap();
        let err = write_file(temp.path(), &file).unwrap_err();

        assert!(err.to_string().contains("refusing to overwrite"));
    }
}
