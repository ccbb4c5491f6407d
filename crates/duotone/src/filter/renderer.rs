//! Template-backed filter renderer.

use minijinja::{context, AutoEscape, Environment};
use once_cell::sync::OnceCell;

use super::error::RenderError;
use super::markup::DuotoneMarkup;
use super::templates::{FILTER_RULE, FILTER_SVG, TEMPLATES, UNSET_RULE};
use crate::color::ChannelTables;

static SHARED: OnceCell<FilterRenderer> = OnceCell::new();

/// Renders duotone filters and stylesheet rules.
///
/// Templates are compiled once when the renderer is created. Most callers
/// use the process-wide instance from [`FilterRenderer::shared`].
///
/// # Example
///
/// ```rust
/// use duotone::FilterRenderer;
///
/// let renderer = FilterRenderer::new().unwrap();
/// let markup = renderer
///     .filter_markup("wp-duotone-1", ".editor-styles-wrapper .wp-duotone-1 img", &["#000", "#fff"])
///     .unwrap();
///
/// assert_eq!(
///     markup.css,
///     ".editor-styles-wrapper .wp-duotone-1 img{filter:url(#wp-duotone-1);}",
/// );
/// assert!(markup.svg.unwrap().contains(r#"<feFuncR type="table" tableValues="0 1"/>"#));
/// ```
pub struct FilterRenderer {
    env: Environment<'static>,
}

impl FilterRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".svg") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Returns the process-wide renderer, creating it on first use.
    pub fn shared() -> Result<&'static FilterRenderer, RenderError> {
        SHARED.get_or_try_init(FilterRenderer::new)
    }

    /// Renders the SVG filter definition for `colors`.
    pub fn svg<S: AsRef<str>>(&self, id: &str, colors: &[S]) -> Result<String, RenderError> {
        let tables = ChannelTables::from_colors(colors);
        let tmpl = self.env.get_template(FILTER_SVG)?;
        Ok(tmpl.render(context! {
            id => id,
            red => ChannelTables::format(&tables.red),
            green => ChannelTables::format(&tables.green),
            blue => ChannelTables::format(&tables.blue),
            alpha => ChannelTables::format(&tables.alpha),
        })?)
    }

    /// Renders the rule applying filter `id` to `selector`.
    pub fn stylesheet(&self, selector: &str, id: &str) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(FILTER_RULE)?;
        Ok(tmpl.render(context! { selector => selector, id => id })?)
    }

    /// Renders the rule removing any filter from `selector`.
    pub fn unset_stylesheet(&self, selector: &str) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(UNSET_RULE)?;
        Ok(tmpl.render(context! { selector => selector })?)
    }

    /// Renders the filter and its rule for one instance.
    pub fn filter_markup<S: AsRef<str>>(
        &self,
        id: &str,
        selector: &str,
        colors: &[S],
    ) -> Result<DuotoneMarkup, RenderError> {
        Ok(DuotoneMarkup {
            id: id.to_string(),
            selector: selector.to_string(),
            svg: Some(self.svg(id, colors)?),
            css: self.stylesheet(selector, id)?,
        })
    }

    /// Renders the rule that cancels inherited filters for one instance.
    pub fn unset_markup(&self, id: &str, selector: &str) -> Result<DuotoneMarkup, RenderError> {
        Ok(DuotoneMarkup {
            id: id.to_string(),
            selector: selector.to_string(),
            svg: None,
            css: self.unset_stylesheet(selector)?,
        })
    }
}

impl std::fmt::Debug for FilterRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRenderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_contains_tables() {
        let renderer = FilterRenderer::new().unwrap();
        let svg = renderer.svg("wp-duotone-3", &["#000000", "#ff0000"]).unwrap();

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"<filter id="wp-duotone-3">"#));
        assert!(svg.contains(r#"<feFuncR type="table" tableValues="0 1"/>"#));
        assert!(svg.contains(r#"<feFuncG type="table" tableValues="0 0"/>"#));
        assert!(svg.contains(r#"<feFuncB type="table" tableValues="0 0"/>"#));
        assert!(svg.contains(r#"<feFuncA type="table" tableValues="1 1"/>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_svg_keeps_one_entry_per_color() {
        let renderer = FilterRenderer::new().unwrap();
        let svg = renderer
            .svg("f", &["#fff", "not-a-color", "rebeccapurple"])
            .unwrap();
        assert!(svg.contains(r#"<feFuncR type="table" tableValues="1 0 0.4"/>"#));
        assert!(svg.contains(r#"<feFuncA type="table" tableValues="1 1 1"/>"#));
    }

    #[test]
    fn test_svg_escapes_id() {
        let renderer = FilterRenderer::new().unwrap();
        let svg = renderer.svg(r#"x"><script>"#, &["#000"]).unwrap();
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_stylesheet_is_not_escaped() {
        let renderer = FilterRenderer::new().unwrap();
        let css = renderer.stylesheet(".a > img", "f1").unwrap();
        assert_eq!(css, ".a > img{filter:url(#f1);}");
    }

    #[test]
    fn test_unset_stylesheet() {
        let renderer = FilterRenderer::new().unwrap();
        assert_eq!(
            renderer.unset_stylesheet(".a img").unwrap(),
            ".a img{filter:none;}"
        );
    }

    #[test]
    fn test_unset_markup_has_no_svg() {
        let renderer = FilterRenderer::shared().unwrap();
        let markup = renderer.unset_markup("f1", ".a").unwrap();
        assert!(markup.svg.is_none());
        assert_eq!(markup.css, ".a{filter:none;}");
    }
}
