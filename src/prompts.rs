pub const ARTICLE: &str = include_str!("../data/prompts/article.txt");
pub const PREVIEW: &str = include_str!("../data/prompts/preview.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.trim_end().to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} and {{b}}", &[("a", "cats")]), "cats and {{b}}");
    }

    #[test]
    fn test_templates_have_title_placeholder() {
        assert!(ARTICLE.contains("`{{title}}`"));
        assert!(PREVIEW.contains("`{{title}}`"));
    }

    #[test]
    fn test_article_template_text() {
        assert_eq!(
            render(ARTICLE, &[("title", "Moon Sold")]),
            "Generate a satirical news article with the following title: `Moon Sold`. \
             Output in HTML instead of markdown. Style it like a real news website."
        );
    }

    #[test]
    fn test_preview_template_text() {
        assert_eq!(
            render(PREVIEW, &[("title", "Moon Sold")]),
            "Return the preview text for a satirical news article with the following title: \
             `Moon Sold`. Just a couple sentences."
        );
    }
}
