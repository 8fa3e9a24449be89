//! The scaffold parameter collector: interactive answers in, context out.
//!
//! One call runs the whole question sequence through a [`Prompter`]: entity
//! name, api method, the comma-separated parameter list, then two
//! per-parameter batches (required flags first, then types). The batches are
//! merged by name and handed to [`crate::context::derive_context`]. No files
//! are touched here and nothing is retried; a failed or cancelled prompt
//! aborts the run with no partial output.

use anyhow::{Context, Result};

use crate::context;
use crate::prompt::Prompter;
use crate::types::{Answers, ApiType, GenerationContext, ParamType};

const PARAMS_HELP: &str =
    r#"Comma-separated, e.g. "active,name,description". No spaces. Leave blank for none."#;

/// Run the interactive question sequence and derive the generation context.
///
/// The required batch fully completes before the first type prompt is
/// issued; both batches follow the input order of the parameter list. A
/// blank parameter answer skips both batches entirely.
pub fn collect(prompter: &mut dyn Prompter) -> Result<GenerationContext> {
    let name = prompter.input("Entity name (camelCase)", None)?;

    let api_options: Vec<&str> = ApiType::ALL.iter().map(|a| a.http_method()).collect();
    let index = prompter.select("Choose an api method", &api_options)?;
    let api_type = *ApiType::ALL
        .get(index)
        .with_context(|| format!("api selection {index} out of range"))?;

    let raw_params = prompter.input("Parameters", Some(PARAMS_HELP))?;
    let param_names = context::split_params(&raw_params);

    // First batch: one required flag per raw name, in input order.
    let mut required = Vec::with_capacity(param_names.len());
    for param in &param_names {
        required.push(prompter.confirm(&format!("Is \"{param}\" a required parameter?"))?);
    }

    // Second batch: types, same order. Repeated names are asked again in
    // both batches; the merge keeps the last answers.
    let type_options: Vec<&str> = ParamType::ALL.iter().map(|t| t.as_str()).collect();
    let mut types = Vec::with_capacity(param_names.len());
    for param in &param_names {
        let index = prompter.select(&format!("What is \"{param}\"'s type?"), &type_options)?;
        let param_type = *ParamType::ALL
            .get(index)
            .with_context(|| format!("type selection {index} out of range"))?;
        types.push(param_type);
    }

    let params = context::merge_parameters(&param_names, &required, &types);
    let answers = Answers {
        name,
        api_type,
        params: raw_params,
    };

    Ok(context::derive_context(&answers, params))
}
