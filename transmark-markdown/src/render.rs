//! Markdown-to-HTML rendering with translation-status annotations.
//!
//! The event stream is transformed once per document: each heading loses
//! its raw attribute block, gains an `id` attribute (explicit or slugified)
//! and, when the attributes call for it, an inline "since" span inside the
//! heading element and an out-of-date notice block immediately after it.
//! The transformed stream is owned by a single render call and never
//! shared or revisited.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{
  CowStr,
  Event,
  HeadingLevel,
  Parser,
  Tag,
  TagEnd,
  TextMergeStream,
  html,
};

use crate::{
  segment::{HeadingAttrs, MarkdownOptions, split_attr_block},
  utils::{slugify, version_to_human},
};

/// Options for annotated HTML rendering.
///
/// One value per document. The URL bases are joined with [`basename`] to
/// produce the commit-history and edit links in out-of-date notices; a
/// link is omitted when its base is unset.
///
/// [`basename`]: RenderOptions::basename
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
  /// Parser configuration, shared with segmentation.
  pub markdown: MarkdownOptions,

  /// Product name shown in "since" annotations (`since acme v4.16`).
  pub product: Option<String>,

  /// Base URL of the commit-history view for the rendered document.
  pub history_url_base: Option<String>,

  /// Base URL of the edit view for the rendered document.
  pub edit_url_base: Option<String>,

  /// Base filename of the document being rendered.
  pub basename: String,
}

/// A heading span buffered out of the event stream until its end tag.
struct BufferedHeading<'a> {
  level: HeadingLevel,
  inner: Vec<Event<'a>>,
  text:  String,
}

/// Render `source` to HTML with translation-status annotations.
#[must_use]
pub fn render_html(source: &str, options: &RenderOptions) -> String {
  let parser =
    Parser::new_ext(source, options.markdown.to_parser_options());

  let mut events: Vec<Event> = Vec::new();
  let mut heading: Option<BufferedHeading> = None;

  // The raw parser may fragment adjacent text; merged runs keep a heading's
  // trailing attribute block inside a single text event.
  for event in TextMergeStream::new(parser) {
    match event {
      Event::Start(Tag::Heading { level, .. }) => {
        heading = Some(BufferedHeading {
          level,
          inner: Vec::new(),
          text: String::new(),
        });
      },
      Event::End(TagEnd::Heading(_)) => {
        if let Some(buffered) = heading.take() {
          flush_heading(buffered, options, &mut events);
        }
      },
      other => match heading.as_mut() {
        Some(buffered) => {
          if let Event::Text(text) | Event::Code(text) = &other {
            buffered.text.push_str(text);
          }
          buffered.inner.push(other);
        },
        None => events.push(other),
      },
    }
  }

  let mut output = String::with_capacity(source.len() * 3 / 2);
  html::push_html(&mut output, events.into_iter());
  output
}

/// Emit a buffered heading with its annotations.
fn flush_heading<'a>(
  buffered: BufferedHeading<'a>,
  options: &RenderOptions,
  events: &mut Vec<Event<'a>>,
) {
  let BufferedHeading { level, mut inner, text } = buffered;
  let (clean_text, block) = split_attr_block(&text);
  let attrs = block.map(HeadingAttrs::parse).unwrap_or_default();

  if block.is_some() {
    strip_attr_block_text(&mut inner);
  }

  let id = attrs
    .id
    .clone()
    .unwrap_or_else(|| slugify(clean_text));
  events.push(Event::Start(Tag::Heading {
    level,
    id: Some(CowStr::from(id)),
    classes: attrs.classes.iter().cloned().map(CowStr::from).collect(),
    attrs: Vec::new(),
  }));
  events.append(&mut inner);
  if let Some(introduced) = &attrs.introduced {
    events.push(Event::InlineHtml(CowStr::from(since_span(
      introduced, options,
    ))));
  }
  events.push(Event::End(TagEnd::Heading(level)));

  if let Some(translated) = &attrs.translated
    && !translated.is_empty()
  {
    events.push(Event::Html(CowStr::from(out_of_date_notice(
      translated, options,
    ))));
  }
}

/// The attribute block is literal text at the end of the heading; drop it
/// from the final text event so it never leaks into the output.
fn strip_attr_block_text(inner: &mut Vec<Event>) {
  let Some(Event::Text(last)) = inner.last_mut() else {
    return;
  };
  let trimmed = last.trim_end();
  let Some(start) = trimmed.rfind('{') else {
    return;
  };
  let clean = trimmed[..start].trim_end().to_string();
  if clean.is_empty() {
    inner.pop();
  } else {
    *last = CowStr::from(clean);
  }
}

fn since_span(introduced: &str, options: &RenderOptions) -> String {
  let version = version_to_human(introduced);
  let label = match &options.product {
    Some(product) => format!("{product} v{version}"),
    None => format!("v{version}"),
  };
  format!(
    r#"<span class="introduced">since {}</span>"#,
    encode_text(&label)
  )
}

fn out_of_date_notice(translated: &str, options: &RenderOptions) -> String {
  let version = version_to_human(translated);
  let label = match &options.product {
    Some(product) => format!("{product} v{version}"),
    None => format!("v{version}"),
  };

  let mut notice = format!(
    "<i>\nOut-of-date! This section's translation was last updated for {}",
    encode_text(&label)
  );
  if let Some(base) = &options.history_url_base {
    let href = join_url(base, &options.basename);
    let _ = write!(
      notice,
      "\n(<a href=\"{}\">what changed?</a>)",
      encode_double_quoted_attribute(&href)
    );
  }
  if let Some(base) = &options.edit_url_base {
    let href = join_url(base, &options.basename);
    let _ = write!(
      notice,
      "\n(<a href=\"{}\">contribute</a>)",
      encode_double_quoted_attribute(&href)
    );
  }
  notice.push_str("\n</i>\n");
  notice
}

fn join_url(base: &str, basename: &str) -> String {
  format!("{}/{basename}", base.trim_end_matches('/'))
}
