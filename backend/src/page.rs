//! Server-rendered HTML for the ballot and the error pages.

use shared::CandidateOptions;

use crate::styles;

pub struct BallotPage<'a> {
    pub options: &'a CandidateOptions,
    pub hostname: &'a str,
    /// Option the visitor just voted for, marked with a check.
    pub vote: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> BallotPage<'a> {
    pub fn new(options: &'a CandidateOptions, hostname: &'a str) -> Self {
        Self { options, hostname, vote: None, error: None }
    }

    pub fn with_vote(mut self, vote: &'a str) -> Self {
        self.vote = Some(vote);
        self
    }

    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }

    pub fn render(&self) -> String {
        let title = format!("{} vs {}!", escape(self.options.option_a()), escape(self.options.option_b()));
        let mut body = String::new();

        if let Some(error) = self.error {
            body.push_str(&format!(r#"<div class="{}" role="alert">{}</div>"#, styles::alert_style("error"), escape(error)));
        }

        body.push_str(&format!(r#"<form method="POST" action="/" class="{}">"#, styles::SPACE_Y_BASE));
        for option in self.options.iter() {
            let chosen = self.vote == Some(option);
            body.push_str(&format!(
                r#"<button type="submit" name="vote" value="{value}" class="{class}">{label}{check}</button>"#,
                value = escape(option),
                class = styles::option_button(chosen),
                label = escape(option),
                check = if chosen { format!(r#" <span class="{}">&#10004;</span>"#, styles::MEGA_PULSE) } else { String::new() },
            ));
        }
        body.push_str("</form>");

        if let Some(vote) = self.vote {
            body.push_str(&format!(
                r#"<p class="{} mt-4 text-center">Your vote for {} has been recorded. You can change it at any time.</p>"#,
                styles::TEXT_MUTED,
                escape(vote)
            ));
        }

        body.push_str(&format!(
            r#"<p class="{} mt-8 text-center">Processed by container ID {}</p>"#,
            styles::TEXT_MUTED,
            escape(self.hostname)
        ));

        layout(&title, &body)
    }
}

pub fn render_error(status: u16, message: &str) -> String {
    let body = format!(
        r#"<div class="{}">{} {}</div><p class="{}"><a href="/">Back to the ballot</a></p>"#,
        styles::alert_style("error"),
        status,
        escape(message),
        styles::TEXT_MUTED
    );
    layout(&format!("Error {}", status), &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
<link rel="stylesheet" href="/static/style.css">
</head>
<body class="{page}">
<main class="{card}">
<h1 class="{heading}">{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = title,
        page = styles::BG_PAGE,
        card = styles::CARD,
        heading = styles::HEADING_LG,
        body = body,
    )
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ballot_lists_both_options() {
        let options = CandidateOptions::new("Cats", "Dogs").unwrap();
        let html = BallotPage::new(&options, "web-1").render();

        assert!(html.contains("<title>Cats vs Dogs!</title>"));
        assert!(html.contains(r#"name="vote" value="Cats""#));
        assert!(html.contains(r#"name="vote" value="Dogs""#));
        assert!(html.contains("Processed by container ID web-1"));
        assert!(!html.contains("&#10004;"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_ballot_marks_vote_and_error() {
        let options = CandidateOptions::new("Cats", "Dogs").unwrap();

        let voted = BallotPage::new(&options, "web-1").with_vote("Dogs").render();
        assert_eq!(voted.matches("&#10004;").count(), 1);
        assert!(voted.contains("Your vote for Dogs has been recorded"));

        let failed = BallotPage::new(&options, "web-1").with_error("Vote store unavailable").render();
        assert!(failed.contains("Vote store unavailable"));
        assert!(!failed.contains("&#10004;"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let options = CandidateOptions::new("<b>Cats</b>", "Dogs & \"Pups\"").unwrap();
        let html = BallotPage::new(&options, "<host>").render();

        assert!(!html.contains("<b>Cats</b>"));
        assert!(html.contains("&lt;b&gt;Cats&lt;/b&gt;"));
        assert!(html.contains("Dogs &amp; &quot;Pups&quot;"));
        assert!(html.contains("&lt;host&gt;"));
    }

    #[test]
    fn test_error_page() {
        let html = render_error(404, "The requested resource was not found.");
        assert!(html.contains("<title>Error 404</title>"));
        assert!(html.contains("The requested resource was not found."));
    }
}
