//! Markdown rendering for the text tools that return formatted content
//! (article generator, SEO optimizer).

use pulldown_cmark::{html, Parser};
use yew::prelude::*;

pub fn to_html_string(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn render(source: &str) -> Html {
    let rendered = AttrValue::from(to_html_string(source));
    html! {
        <div class="markdown-body">{ Html::from_html_unchecked(rendered) }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_emphasis_come_through() {
        let out = to_html_string("# Title\n\nSome **bold** text.");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<strong>bold</strong>"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(to_html_string("hello"), "<p>hello</p>\n");
    }
}
