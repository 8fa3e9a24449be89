//! Derivation pipeline: raw answers in, [`GenerationContext`] out.
//!
//! Splits the comma-separated parameter input, merges the two per-parameter
//! answer batches into ordered records, partitions them, and assembles the
//! textual artifacts the template interpolates. Every function here is pure;
//! the artifacts are recomputed from the parameter list, never mutated
//! incrementally.

use crate::strings;
use crate::types::{Answers, GenerationContext, ParamType, Parameter};

/// Split the raw comma-separated parameter input into raw names.
///
/// A blank input yields no parameters. Entries are not trimmed: the prompt
/// documents a no-spaces convention, and a non-compliant name surfaces
/// verbatim in the generated output instead of aborting the run.
pub fn split_params(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Merge the required and type answer batches into one record per name.
///
/// The three slices are parallel (same length, same order, as produced by the
/// two prompt batches). The merge is an ordered association keyed by name: a
/// record keeps the position of the name's first occurrence, and a repeated
/// name overwrites the earlier record's answers (last write wins).
pub fn merge_parameters(
    names: &[String],
    required: &[bool],
    types: &[ParamType],
) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = Vec::with_capacity(names.len());

    for ((name, &is_required), &param_type) in names.iter().zip(required).zip(types) {
        match merged.iter_mut().find(|p| p.name == *name) {
            Some(existing) => {
                existing.required = is_required;
                existing.param_type = param_type;
            }
            None => merged.push(Parameter::new(name.clone(), param_type, is_required)),
        }
    }

    merged
}

/// One doc-comment line per parameter, in input order:
/// `;;   <name>: {{<type>}} (required|optional),` plus line break.
pub fn doc_params(params: &[Parameter]) -> String {
    let mut out = String::new();

    for param in params {
        let requirement = if param.required { "required" } else { "optional" };
        out.push_str(";;   ");
        out.push_str(&param.name);
        out.push_str(": {{");
        out.push_str(param.param_type.as_str());
        out.push_str("}} (");
        out.push_str(requirement);
        out.push_str("),\n");
    }

    out
}

/// Spec reference tokens for the given subset, one `::specs/<kebab-name> `
/// per parameter. Every token carries a trailing space, the last included.
pub fn spec_refs(params: &[&Parameter]) -> String {
    let mut out = String::new();

    for param in params {
        out.push_str("::specs/");
        out.push_str(&strings::kebab_case(&param.name));
        out.push(' ');
    }

    out
}

/// Compute every derived artifact for one generation run.
pub fn derive_context(answers: &Answers, params: Vec<Parameter>) -> GenerationContext {
    let (required, optional): (Vec<&Parameter>, Vec<&Parameter>) =
        params.iter().partition(|p| p.required);

    let doc = doc_params(&params);
    let req = spec_refs(&required);
    let opt = spec_refs(&optional);

    GenerationContext {
        name: answers.name.clone(),
        api_type: answers.api_type,
        function_name: strings::capitalize_first(&answers.name),
        kebab_name: strings::kebab_case(&answers.name),
        kebab_name_no_last_letter: strings::kebab_case_drop_last(&answers.name),
        normal_name: strings::human_words(&answers.name),
        plural_check: answers.name.ends_with('s'),
        doc_params: doc,
        req_spec_params: req,
        opt_spec_params: opt,
        params,
    }
}
