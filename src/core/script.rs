use crate::domain::model::AccountMapping;

pub const DEFAULT_SOURCE_TAG: &str = "account";
pub const DEFAULT_TARGET_TAG: &str = "account_name";

/// Tag keys used by the generated `apply` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub source_tag: String,
    pub target_tag: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            target_tag: DEFAULT_TARGET_TAG.to_string(),
        }
    }
}

/// Double-quoted Starlark string literal for `value`.
pub fn quote_starlark(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Renders the Telegraf Starlark processor script for `mapping`.
pub fn render_script(mapping: &AccountMapping, options: &ScriptOptions) -> String {
    let source_tag = quote_starlark(&options.source_tag);
    let target_tag = quote_starlark(&options.target_tag);

    let mut lines = vec![
        "# Generated by account-tag-mapper. Do not edit.".to_string(),
        format!("# {} account mappings", mapping.len()),
        "def apply(metric):".to_string(),
        "    mapping = {".to_string(),
    ];

    for (account_id, name) in mapping {
        lines.push(format!(
            "        {}: {},",
            quote_starlark(account_id),
            quote_starlark(name)
        ));
    }

    lines.push("    }".to_string());
    lines.push(format!("    if {} in metric.tags:", source_tag));
    lines.push(format!("        account_id = metric.tags[{}]", source_tag));
    lines.push("        if account_id in mapping:".to_string());
    lines.push(format!(
        "            metric.tags[{}] = mapping[account_id]",
        target_tag
    ));
    lines.push("    return metric".to_string());

    let mut script = lines.join("\n");
    script.push('\n');
    script
}
