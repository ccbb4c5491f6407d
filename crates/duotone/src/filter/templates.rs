//! Built-in templates.
//!
//! Template names ending in `.svg` are HTML-escaped; stylesheet templates are
//! emitted verbatim since selectors may contain `>` and quotes.

pub(crate) const FILTER_SVG: &str = "filter.svg";
pub(crate) const FILTER_RULE: &str = "rule.css";
pub(crate) const UNSET_RULE: &str = "unset.css";

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (
        FILTER_SVG,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 0 0" width="0" height="0" "#,
            r#"focusable="false" role="none" aria-hidden="true" "#,
            r#"style="visibility: hidden; position: absolute; left: -9999px; overflow: hidden;">"#,
            r#"<defs><filter id="{{ id }}">"#,
            r#"<feColorMatrix color-interpolation-filters="sRGB" type="matrix" "#,
            r#"values=".299 .587 .114 0 0 .299 .587 .114 0 0 .299 .587 .114 0 0 .299 .587 .114 0 0"/>"#,
            r#"<feComponentTransfer color-interpolation-filters="sRGB">"#,
            r#"<feFuncR type="table" tableValues="{{ red }}"/>"#,
            r#"<feFuncG type="table" tableValues="{{ green }}"/>"#,
            r#"<feFuncB type="table" tableValues="{{ blue }}"/>"#,
            r#"<feFuncA type="table" tableValues="{{ alpha }}"/>"#,
            r#"</feComponentTransfer>"#,
            r#"<feComposite in2="SourceGraphic" operator="in"/>"#,
            r#"</filter></defs></svg>"#,
        ),
    ),
    (FILTER_RULE, "{{ selector }}{filter:url(#{{ id }});}"),
    (UNSET_RULE, "{{ selector }}{filter:none;}"),
];
