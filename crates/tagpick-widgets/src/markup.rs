#![forbid(unsafe_code)]

//! HTML projection of tag pickers.
//!
//! Output keeps the class-name hooks of [`tagpick_core::hooks`] so existing
//! page scripts and stylesheets keep working. Rendering is a pure function
//! of widget state; nothing is cached between renders.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Markup characters in labels or search term | Escaped |
//! | No options | Dropdown holds only search, "all tags", and the no-result message |
//! | Zero chip cap | `N+` counter only; placeholder only when nothing is selected |

use std::borrow::Cow;

use tagpick_core::hooks;

use crate::Widget;
use crate::option::ALL_TAGS_VALUE;
use crate::registry::{Registry, WidgetId};
use crate::select::TagSelect;

const INDENT: &str = "  ";
const HIDDEN: (&str, &str) = ("style", "display: none");
const REMOVE_GLYPH: &str = "×";

/// Escape text content.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape an attribute value (double-quoted).
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs = |c: char| matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\''));
    if !input.chars().any(needs) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Join the classes whose flag is set.
fn class_list(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line-oriented HTML writer, one element or text node per line.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    out: String,
    depth: usize,
}

impl Markup {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn line_start(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.line_start();
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attr(value));
            self.out.push('"');
        }
    }

    /// Open an element; children are indented until [`Markup::close`].
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    /// Close the innermost open element.
    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line_start();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Write an element with text content on one line.
    pub fn leaf(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.start_tag(tag, attrs);
        self.out.push('>');
        self.out.push_str(&escape_text(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Write a void element such as `<input>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs);
        self.out.push_str(">\n");
    }

    /// Write a text node on its own line.
    pub fn text(&mut self, text: &str) {
        self.line_start();
        self.out.push_str(&escape_text(text));
        self.out.push('\n');
    }

    /// Rendered HTML.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Render any widget to a string.
#[must_use]
pub fn render_to_string(widget: &impl Widget) -> String {
    let mut markup = Markup::new();
    widget.render(&mut markup);
    markup.into_string()
}

fn render_select(select: &TagSelect, id: Option<WidgetId>, out: &mut Markup) {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "widget_render",
        widget = "TagSelect",
        options = select.options().len(),
        selected = select.selection().len(),
        open = select.is_open()
    )
    .entered();

    let config = select.config();
    let filter = select.filter();
    let view = select.chip_view();

    let root_class = class_list(&[
        (hooks::CUSTOM_SELECT, true),
        (hooks::OPEN, select.is_open()),
        (hooks::SEARCH_ACTIVE, filter.search_active),
    ]);
    let id_attr = id.map(|id| id.to_string());
    let mut root_attrs = vec![("class", root_class.as_str())];
    if let Some(id) = id_attr.as_deref() {
        root_attrs.push(("id", id));
    }
    out.open("div", &root_attrs);

    // Select box with chips or placeholder.
    out.open("div", &[("class", hooks::SELECT_BOX)]);
    out.open("div", &[("class", hooks::SELECTED_OPTIONS)]);
    if view.is_placeholder() {
        out.leaf("span", &[("class", hooks::PLACEHOLDER)], &config.placeholder);
    }
    for chip in &view.chips {
        out.open("span", &[("class", hooks::TAG), ("data-value", chip.value.as_str())]);
        out.text(&chip.label);
        out.leaf(
            "span",
            &[("class", hooks::REMOVE_TAG), ("data-value", chip.value.as_str())],
            REMOVE_GLYPH,
        );
        out.close("span");
    }
    if let Some(counter) = view.overflow_label() {
        out.leaf("span", &[("class", hooks::TAG_OVERFLOW)], &counter);
    }
    out.close("div");
    out.close("div");

    // Dropdown.
    out.open("div", &[("class", hooks::OPTIONS)]);
    out.void(
        "input",
        &[
            ("type", "text"),
            ("class", hooks::SEARCH_TAGS),
            ("placeholder", config.search_placeholder.as_str()),
            ("value", select.search_term()),
        ],
    );
    out.leaf(
        "button",
        &[("type", "button"), ("class", hooks::CLEAR)],
        REMOVE_GLYPH,
    );

    let all_class = class_list(&[
        (hooks::OPTION, true),
        (hooks::ALL_TAGS, true),
        (hooks::ACTIVE, select.selection().all_tags_active()),
    ]);
    out.leaf(
        "div",
        &[
            ("class", all_class.as_str()),
            ("data-value", ALL_TAGS_VALUE),
            ("tabindex", "0"),
        ],
        &config.all_tags_label,
    );

    for option in select.options() {
        let class = class_list(&[
            (hooks::OPTION, true),
            (hooks::ACTIVE, select.is_selected(&option.value)),
        ]);
        let mut attrs = vec![
            ("class", class.as_str()),
            ("data-value", option.value.as_str()),
            ("tabindex", "0"),
        ];
        if !filter.is_visible(&option.value) {
            attrs.push(HIDDEN);
        }
        out.leaf("div", &attrs, &option.label);
    }

    let mut no_result_attrs = vec![("class", hooks::NO_RESULT_MESSAGE)];
    if !filter.show_no_results() {
        no_result_attrs.push(HIDDEN);
    }
    out.leaf("div", &no_result_attrs, &config.no_results_message);
    out.close("div");

    // Form field and inline error.
    out.void(
        "input",
        &[
            ("type", "hidden"),
            ("class", hooks::TAGS_INPUT),
            ("name", config.input_name.as_str()),
            ("value", view.hidden_input_value.as_str()),
        ],
    );
    let mut error_attrs = vec![("class", hooks::ERROR)];
    if !select.error_visible() {
        error_attrs.push(HIDDEN);
    }
    out.leaf("span", &error_attrs, &config.required_message);

    out.close("div");
}

impl Widget for TagSelect {
    fn render(&self, out: &mut Markup) {
        render_select(self, None, out);
    }
}

impl Widget for Registry {
    fn render(&self, out: &mut Markup) {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("registry_render", widgets = self.len()).entered();

        for (id, select) in self.iter() {
            render_select(select, Some(id), out);
        }
    }
}
