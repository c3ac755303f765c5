use std::fmt::Write as _;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::{
    constants::prompts::DOWNLOAD_FILE_NAME,
    models::{
        domain::{
            generation::{MAX_MARKS, MAX_QUESTIONS, MIN_MARKS, MIN_QUESTIONS},
            BloomLevel,
        },
        dto::request::GenerateQuestionsForm,
    },
    views::labels::LabelVariant,
};

const STYLE: &str = "
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 18rem; padding: 1rem; background: #f7f7f9; min-height: 100vh; }
main { flex: 1; padding: 1rem 2rem; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; }
label { display: block; margin-top: 0.75rem; font-weight: bold; }
input, select, textarea { width: 100%; box-sizing: border-box; }
button, a.download { display: block; width: 100%; margin-top: 1rem; padding: 0.6rem; box-sizing: border-box; text-align: center; }
.error { color: #a00; }
.hint { color: #555; }
.success { color: #070; }
.result { background-color: #f0f2f6; padding: 20px; border-radius: 10px; border-left: 5px solid #1f77b4; }
footer { text-align: center; color: #666; margin-top: 2rem; }
";

/// What to show below the form.
#[derive(Debug)]
pub enum PageOutcome<'a> {
    Empty,
    Error {
        message: &'a str,
        hint: Option<&'a str>,
    },
    Generated(&'a str),
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The text as a `data:` URI, so the saved file keeps its exact bytes.
pub fn text_data_uri(text: &str) -> String {
    format!("data:text/plain;charset=utf-8;base64,{}", BASE64.encode(text))
}

/// Generated text as an HTML fragment with line breaks preserved.
pub fn render_result_html(text: &str) -> String {
    escape_html(&text.replace("\r\n", "\n")).replace('\n', "<br>")
}

pub fn render_page(
    variant: LabelVariant,
    form: &GenerateQuestionsForm,
    outcome: &PageOutcome<'_>,
) -> String {
    let labels = variant.labels();
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape_html(labels.page_title),
        STYLE
    );

    html.push_str("<aside>\n<h2>Bloom's Taxonomy Levels</h2>\n<ul>\n");
    for level in BloomLevel::ALL {
        let _ = writeln!(
            html,
            "<li><strong>{}</strong>: {}</li>",
            level.as_str(),
            level.description()
        );
    }
    html.push_str("</ul>\n</aside>\n<main>\n");

    let _ = write!(
        html,
        "<h1>{}</h1>\n<p>{}</p>\n<form method=\"post\" action=\"/generate\">\n<input type=\"hidden\" name=\"variant\" value=\"{}\">\n",
        escape_html(labels.heading),
        escape_html(labels.tagline),
        variant.as_str()
    );

    // the key is never echoed back into the page
    let _ = write!(
        html,
        "<label for=\"api_key\">{}</label>\n<input type=\"password\" id=\"api_key\" name=\"api_key\" autocomplete=\"off\">\n",
        escape_html(labels.api_key)
    );

    html.push_str("<div class=\"columns\">\n<div>\n");
    let _ = write!(
        html,
        "<label for=\"marks_per_question\">{}</label>\n<input type=\"number\" id=\"marks_per_question\" name=\"marks_per_question\" min=\"{}\" max=\"{}\" step=\"1\" value=\"{}\" required>\n",
        escape_html(labels.marks),
        MIN_MARKS,
        MAX_MARKS,
        escape_html(&form.marks_per_question)
    );
    let _ = write!(
        html,
        "<label for=\"topics\">{}</label>\n<textarea id=\"topics\" name=\"topics\" rows=\"4\" placeholder=\"{}\">{}</textarea>\n",
        escape_html(labels.topics),
        escape_html(labels.topics_placeholder),
        escape_html(&form.topics)
    );
    html.push_str("</div>\n<div>\n");

    let _ = write!(
        html,
        "<label for=\"bloom_level\">{}</label>\n<select id=\"bloom_level\" name=\"bloom_level\">\n",
        escape_html(labels.bloom_level)
    );
    for level in BloomLevel::ALL {
        let selected = if level == form.bloom_level {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{0}\"{1}>{0}</option>",
            level.as_str(),
            selected
        );
    }
    html.push_str("</select>\n");
    let _ = write!(
        html,
        "<label for=\"number_of_questions\">{}</label>\n<input type=\"number\" id=\"number_of_questions\" name=\"number_of_questions\" min=\"{}\" max=\"{}\" step=\"1\" value=\"{}\" required>\n",
        escape_html(labels.question_count),
        MIN_QUESTIONS,
        MAX_QUESTIONS,
        escape_html(&form.number_of_questions)
    );
    html.push_str("</div>\n</div>\n<hr>\n");

    for (name, label, placeholder, value, rows) in [
        (
            "syllabus_content",
            labels.syllabus,
            labels.syllabus_placeholder,
            &form.syllabus_content,
            6,
        ),
        (
            "additional_guidelines",
            labels.guidelines,
            labels.guidelines_placeholder,
            &form.additional_guidelines,
            4,
        ),
        (
            "example_format",
            labels.example_format,
            labels.example_placeholder,
            &form.example_format,
            6,
        ),
    ] {
        let _ = write!(
            html,
            "<label for=\"{0}\">{1}</label>\n<textarea id=\"{0}\" name=\"{0}\" rows=\"{2}\" placeholder=\"{3}\">{4}</textarea>\n",
            name,
            escape_html(label),
            rows,
            escape_html(placeholder),
            escape_html(value)
        );
    }

    let _ = write!(
        html,
        "<button type=\"submit\">{}</button>\n</form>\n",
        escape_html(labels.submit)
    );

    match outcome {
        PageOutcome::Empty => {}
        PageOutcome::Error { message, hint } => {
            let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(message));
            if let Some(hint) = hint {
                let _ = writeln!(html, "<p class=\"hint\">{}</p>", escape_html(hint));
            }
        }
        PageOutcome::Generated(text) => {
            let _ = write!(
                html,
                "<p class=\"success\">{}</p>\n<hr>\n<h3>{}</h3>\n<div class=\"result\">{}</div>\n<hr>\n",
                escape_html(labels.success),
                escape_html(labels.result_heading),
                render_result_html(text)
            );
            let _ = write!(
                html,
                "<label for=\"content\">{}</label>\n<textarea id=\"content\" rows=\"12\" readonly>{}</textarea>\n<a class=\"download\" href=\"{}\" download=\"{}\">{}</a>\n",
                escape_html(labels.copy_heading),
                escape_html(text),
                text_data_uri(text),
                DOWNLOAD_FILE_NAME,
                escape_html(labels.download)
            );
        }
    }

    let _ = write!(
        html,
        "<footer>{}</footer>\n</main>\n</body>\n</html>\n",
        escape_html(labels.footer_tip)
    );

    html
}
