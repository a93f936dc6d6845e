#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use transmark_markdown::{RenderOptions, render_html};

fn acme_options() -> RenderOptions {
  RenderOptions {
    product: Some("acme".to_string()),
    history_url_base: Some(
      "https://github.com/acme/acme/commits/main/docs".to_string(),
    ),
    edit_url_base: Some("https://github.com/acme/acme/edit/main/docs".to_string()),
    basename: "userguide".to_string(),
    ..RenderOptions::default()
  }
}

#[test]
fn test_render_since_annotation() {
  let html = render_html(
    "# heading {#heading_id introduced=\"4_16\"}",
    &acme_options(),
  );
  assert_eq!(
    html,
    "<h1 id=\"heading_id\">heading<span class=\"introduced\">since acme \
     v4.16</span></h1>\n"
  );
}

#[test]
fn test_render_since_annotation_without_product() {
  let html = render_html(
    "# heading {#heading_id introduced=\"4_16\"}",
    &RenderOptions::default(),
  );
  assert_eq!(
    html,
    "<h1 id=\"heading_id\">heading<span class=\"introduced\">since \
     v4.16</span></h1>\n"
  );
}

#[test]
fn test_render_since_class() {
  let html = render_html(
    "# heading {#heading_id .since-4_10}",
    &RenderOptions::default(),
  );
  assert_eq!(
    html,
    "<h1 id=\"heading_id\">heading<span class=\"introduced\">since \
     v4.10</span></h1>\n"
  );
}

#[test]
fn test_render_translation_status() {
  let html = render_html(
    "# heading {#heading_id translated=\"4_17\"}",
    &acme_options(),
  );
  assert_eq!(
    html,
    concat!(
      "<h1 id=\"heading_id\">heading</h1>\n",
      "<i>\n",
      "Out-of-date! This section's translation was last updated for acme \
       v4.17\n",
      "(<a href=\"https://github.com/acme/acme/commits/main/docs/userguide\">\
       what changed?</a>)\n",
      "(<a href=\"https://github.com/acme/acme/edit/main/docs/userguide\">\
       contribute</a>)\n",
      "</i>\n",
    )
  );
}

#[test]
fn test_render_translation_status_without_links() {
  let html = render_html(
    "# heading {#heading_id translated=\"4_17\"}",
    &RenderOptions::default(),
  );
  assert_eq!(
    html,
    concat!(
      "<h1 id=\"heading_id\">heading</h1>\n",
      "<i>\n",
      "Out-of-date! This section's translation was last updated for \
       v4.17\n",
      "</i>\n",
    )
  );
}

#[test]
fn test_render_empty_translated_marker_is_not_annotated() {
  let html = render_html(
    "# heading {#heading_id translated=\"\"}",
    &RenderOptions::default(),
  );
  assert_eq!(html, "<h1 id=\"heading_id\">heading</h1>\n");
}

#[test]
fn test_render_assigns_slug_ids() {
  let html = render_html("## Getting Started", &RenderOptions::default());
  assert_eq!(html, "<h2 id=\"getting-started\">Getting Started</h2>\n");
}

#[test]
fn test_render_keeps_other_classes() {
  let html = render_html("# heading {#h .note}", &RenderOptions::default());
  assert_eq!(html, "<h1 id=\"h\" class=\"note\">heading</h1>\n");
}

#[test]
fn test_render_passes_body_through() {
  let html = render_html(
    "# title {#t}\n\nSome *emphasised* text.\n",
    &RenderOptions::default(),
  );
  assert_eq!(
    html,
    "<h1 id=\"t\">title</h1>\n<p>Some <em>emphasised</em> text.</p>\n"
  );
}

#[test]
fn test_render_heading_with_inline_code() {
  let html = render_html(
    "## Install with `nix-env` {#install}\n",
    &RenderOptions::default(),
  );
  assert_eq!(
    html,
    "<h2 id=\"install\">Install with <code>nix-env</code></h2>\n"
  );
}

#[test]
fn test_render_table_support() {
  let html = render_html(
    "# t {#t}\n\n| a | b |\n|---|---|\n| 1 | 2 |\n",
    &RenderOptions::default(),
  );
  assert!(html.contains("<table>"));
  assert!(html.contains("<td>1</td>"));
}
