// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Prompt construction for the fact-check chat completion.

use verity_search_newsapi::Article;

/// Fixed system instruction sent with every fact-check request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that fact-checks news articles.";

/// Builds the article context block: one `"title: description"` line per
/// article, joined by newlines. Articles without a description contribute
/// an empty right-hand side; fewer articles never leave dangling
/// separators.
pub fn build_context(articles: &[Article]) -> String {
	articles
		.iter()
		.map(|article| {
			format!(
				"{}: {}",
				article.title,
				article.description.as_deref().unwrap_or_default()
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Embeds the claim and article context into the fixed instruction template.
pub fn build_user_prompt(claim: &str, context: &str) -> String {
	format!(
		"Based on the following articles, fact-check the statement: \"{claim}\". Here are the articles:\n{context}"
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn article(title: &str, description: Option<&str>) -> Article {
		Article {
			title: title.to_string(),
			description: description.map(str::to_string),
			..Default::default()
		}
	}

	#[test]
	fn context_joins_lines_in_order() {
		let articles = vec![
			article("First title", Some("first description")),
			article("Second title", Some("second description")),
			article("Third title", Some("third description")),
		];

		assert_eq!(
			build_context(&articles),
			"First title: first description\n\
			 Second title: second description\n\
			 Third title: third description"
		);
	}

	#[test]
	fn context_has_no_separator_artifacts_for_fewer_articles() {
		let articles = vec![article("Only one", Some("line"))];
		let context = build_context(&articles);
		assert_eq!(context, "Only one: line");
		assert!(!context.contains('\n'));
	}

	#[test]
	fn empty_articles_yield_empty_context() {
		assert_eq!(build_context(&[]), "");
	}

	#[test]
	fn missing_description_renders_empty() {
		let articles = vec![article("Headline", None)];
		assert_eq!(build_context(&articles), "Headline: ");
	}

	#[test]
	fn user_prompt_embeds_claim_and_context() {
		let context = "A: a\nB: b";
		let prompt = build_user_prompt("the earth is flat", context);
		assert_eq!(
			prompt,
			"Based on the following articles, fact-check the statement: \
			 \"the earth is flat\". Here are the articles:\nA: a\nB: b"
		);
	}
}
