//! Rendered filter output.

/// The markup generated for one filtered block instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuotoneMarkup {
    /// Filter id, also the instance class name.
    pub id: String,
    /// Scoped selector the rule targets.
    pub selector: String,
    /// The SVG filter definition; absent for `unset` rules.
    pub svg: Option<String>,
    /// The stylesheet rule.
    pub css: String,
}

impl DuotoneMarkup {
    /// Returns the markup ready to insert into a document body.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(svg) = &self.svg {
            html.push_str(svg);
        }
        html.push_str("<style>");
        html.push_str(&self.css);
        html.push_str("</style>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_without_svg() {
        let markup = DuotoneMarkup {
            id: "wp-duotone-1".into(),
            selector: ".a".into(),
            svg: None,
            css: ".a{filter:none;}".into(),
        };
        assert_eq!(markup.to_html(), "<style>.a{filter:none;}</style>");
    }

    #[test]
    fn test_to_html_with_svg() {
        let markup = DuotoneMarkup {
            id: "f".into(),
            selector: ".a".into(),
            svg: Some("<svg></svg>".into()),
            css: ".a{filter:url(#f);}".into(),
        };
        assert_eq!(
            markup.to_html(),
            "<svg></svg><style>.a{filter:url(#f);}</style>"
        );
    }
}
