use std::fmt::{self, Write};

use verbum_protocol::{FiniteForms, ImperativeForms, InflectionTree, Mood, NonFinite, Number, Person, VoiceForms};

use super::{ProcessError, Processor};

/// Renders the paradigm as a standalone HTML page, one table per tense.
#[derive(Debug, Clone, Default)]
pub struct HtmlProcessor {
    /// Page heading, usually the principal parts as typed.
    pub title: Option<String>,
}

impl HtmlProcessor {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()) }
    }
}

impl Processor for HtmlProcessor {
    fn process(&self, tree: &InflectionTree) -> Result<String, ProcessError> {
        let mut out = String::new();
        render_page(&mut out, self.title.as_deref().unwrap_or("Conjugation"), tree)
            .map_err(|_| ProcessError::Render)?;
        Ok(out)
    }
}

/// Escapes the characters that matter inside element content and attribute values.
fn escape(text: &str) -> String {
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

fn heading(label: &str) -> String {
    escape(&label.replace('_', " "))
}

fn render_page(out: &mut String, title: &str, tree: &InflectionTree) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"la\">")?;
    writeln!(out, "<head><meta charset=\"utf-8\"><title>{}</title></head>", escape(title))?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{}</h1>", escape(title))?;

    render_meta(out, tree)?;
    for (voice, forms) in &tree.voices {
        writeln!(out, "<section class=\"voice\" id=\"{}\">", voice.label())?;
        writeln!(out, "<h2>{}</h2>", voice.label())?;
        render_voice(out, forms)?;
        writeln!(out, "</section>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn render_meta(out: &mut String, tree: &InflectionTree) -> fmt::Result {
    let meta = &tree.meta;
    if let Some(glosses) = &meta.translation {
        let glosses: Vec<String> = glosses.iter().map(|g| escape(g)).collect();
        writeln!(out, "<p class=\"translation\">{}</p>", glosses.join("; "))?;
    }

    let mut tags = Vec::new();
    if meta.is_deponent {
        tags.push("deponent");
    }
    if meta.is_defective {
        tags.push("defective");
    }
    if !tags.is_empty() {
        writeln!(out, "<p class=\"flags\">{}</p>", tags.join(", "))?;
    }
    Ok(())
}

fn render_voice(out: &mut String, forms: &VoiceForms) -> fmt::Result {
    for mood in [Mood::Indicative, Mood::Subjunctive] {
        if let Some(tenses) = forms.finite(mood) {
            writeln!(out, "<section class=\"mood\"><h3>{}</h3>", mood.label())?;
            for (tense, finite) in tenses {
                render_finite(out, tense, finite)?;
            }
            writeln!(out, "</section>")?;
        }
    }

    if let Some(tenses) = &forms.imperative {
        writeln!(out, "<section class=\"mood\"><h3>{}</h3>", Mood::Imperative.label())?;
        for (tense, persons) in tenses {
            render_imperative(out, tense, persons)?;
        }
        writeln!(out, "</section>")?;
    }

    for category in NonFinite::ALL {
        if let Some(entries) = forms.non_finite(category) {
            writeln!(out, "<table class=\"non-finite\"><caption>{}</caption>", category.label())?;
            for (label, form) in entries {
                writeln!(out, "<tr><th>{}</th><td>{}</td></tr>", heading(label), escape(form))?;
            }
            writeln!(out, "</table>")?;
        }
    }
    Ok(())
}

fn number_header(out: &mut String) -> fmt::Result {
    write!(out, "<tr><th></th>")?;
    for number in Number::ALL {
        write!(out, "<th>{}</th>", number.label())?;
    }
    writeln!(out, "</tr>")
}

fn render_finite(out: &mut String, tense: &str, forms: &FiniteForms) -> fmt::Result {
    writeln!(out, "<table class=\"tense\"><caption>{}</caption>", heading(tense))?;
    number_header(out)?;
    for person in Person::ALL {
        write!(out, "<tr><th>{}</th>", person.label())?;
        for number in Number::ALL {
            write!(out, "<td>{}</td>", escape(forms.get(number, person).unwrap_or("")))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}

fn render_imperative(out: &mut String, tense: &str, persons: &[(Person, ImperativeForms)]) -> fmt::Result {
    writeln!(out, "<table class=\"tense\"><caption>{}</caption>", heading(tense))?;
    number_header(out)?;
    for (person, forms) in persons {
        write!(out, "<tr><th>{}</th>", person.label())?;
        for number in Number::ALL {
            write!(out, "<td>{}</td>", escape(forms.get(number).unwrap_or("")))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}
