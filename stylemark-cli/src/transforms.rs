//! CLI-specific transforms
//!
//! Inspection views over a decoded document. Each transform shows one of the
//! representations the codec moves through on export:
//!
//! - `style-array`: the legacy integer codes, one output line per text line. A line that
//!   ended in a newline ends with the newline sentinel, so the lines joined with commas
//!   are a valid `--styles` argument for `stylemark encode`.
//! - `runs`: one line per style run, `start..end  style  "text"`.
//! - `spans-json`: the text and its spans as JSON (the `json` format).
//!
//! Example: `stylemark inspect notes.md runs`

use stylemark_babel::common::runs::style_runs;
use stylemark_babel::formats::json::to_json_string;
use stylemark_babel::model::{StyleMark, StyledText};
use stylemark_babel::options::CodecOptions;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["style-array", "runs", "spans-json"];

/// Transform used when none is named
pub const DEFAULT_TRANSFORM: &str = "runs";

/// Execute a named transform on a decoded document
///
/// # Examples
///
/// ```ignore
/// let doc = decode_markdown("**a**b", &CodecOptions::default());
/// let output = execute_transform(&doc, "style-array", &CodecOptions::default())?;
/// assert_eq!(output, "1,0\n");
/// ```
pub fn execute_transform(
    doc: &StyledText,
    transform_name: &str,
    options: &CodecOptions,
) -> Result<String, String> {
    match transform_name {
        "style-array" => Ok(style_array_lines(doc, options)),
        "runs" => Ok(runs_listing(doc, options)),
        "spans-json" => to_json_string(doc)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn style_array_lines(doc: &StyledText, options: &CodecOptions) -> String {
    let marks = doc.style_array(options.extract.pair_policy);
    let mut output = String::new();
    let mut line: Vec<String> = Vec::new();
    for mark in &marks {
        line.push(mark.to_code(options.newline_sentinel).to_string());
        if mark.is_newline() {
            output.push_str(&line.join(","));
            output.push('\n');
            line.clear();
        }
    }
    if !line.is_empty() {
        output.push_str(&line.join(","));
        output.push('\n');
    }
    output
}

fn runs_listing(doc: &StyledText, options: &CodecOptions) -> String {
    let chars: Vec<char> = doc.text().chars().collect();
    let marks = doc.style_array(options.extract.pair_policy);
    let mut output = String::new();
    for run in style_runs(&marks) {
        let text: String = chars[run.range()].iter().collect();
        let label = match run.mark {
            StyleMark::Newline => "newline".to_string(),
            StyleMark::Styled(set) => set.to_string(),
        };
        output.push_str(&format!("{}..{}  {label}  {text:?}\n", run.start, run.end));
    }
    output
}
