// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML rendering for the search page.

use std::fmt::Write;

use crate::search_form::SearchPage;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

pub fn render_search_page(page: &SearchPage) -> String {
	let query = page.form.query.as_deref().unwrap_or_default();

	let mut html = String::from(
		"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
		 <title>Image Finder</title>\n</head>\n<body>\n<h1>Image Finder</h1>\n",
	);

	html.push_str("<form method=\"post\" action=\"/\">\n");
	for error in &page.errors {
		let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(error));
	}
	let _ = writeln!(
		html,
		"<input type=\"text\" name=\"query\" value=\"{}\" required>",
		escape_html(query)
	);
	html.push_str("<button type=\"submit\">Search</button>\n</form>\n");

	if !page.images.is_empty() {
		html.push_str("<ul class=\"results\">\n");
		for image in &page.images {
			let photographer = escape_html(&image.photographer);
			let _ = writeln!(
				html,
				"<li><a href=\"{}\"><img src=\"{}\" alt=\"Photo by {photographer}\"></a>\
				 <span class=\"photographer\">{photographer}</span></li>",
				escape_html(&image.url),
				escape_html(&image.preview_url),
			);
		}
		html.push_str("</ul>\n");
	}

	html.push_str("</body>\n</html>\n");
	html
}
