// Colored terminal output for ranked articles, statistics and digests.
//
// main.rs delegates all printing here so the engine modules stay free of
// presentation concerns.

use colored::Colorize;

use crate::articles::models::Sentiment;
use crate::digest::Digest;
use crate::lexicon::{Lexicon, Priority};
use crate::pipeline::filter::PipelineOutput;

/// Display the ranked article list.
pub fn display_ranked(output: &PipelineOutput<'_>) {
    if output.articles.is_empty() {
        println!("No articles matched the filters.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranked Articles ({}) ===", output.articles.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<60} {:>6}  {:<8}  {}",
        "Rank".dimmed(),
        "Title".dimmed(),
        "Score".dimmed(),
        "Tone".dimmed(),
        "Source".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for (i, article) in output.articles.iter().enumerate() {
        println!(
            "  {:>4}. {:<60} {:>6.2}  {:<8}  {}",
            i + 1,
            super::truncate_chars(&article.title, 57),
            article.relevance_score,
            colorize_sentiment(article.sentiment),
            article.source.dimmed(),
        );
    }

    if !output.groups.is_empty() {
        println!("\n  {}", "Merged duplicates:".bold());
        for group in &output.groups {
            for removed in group.removed() {
                println!(
                    "    {} {}  {}  {}",
                    "-".red(),
                    super::truncate_chars(&removed.title, 50).dimmed(),
                    "kept".dimmed(),
                    super::truncate_chars(&group.survivor().title, 50),
                );
            }
        }
    }
}

/// Display processing statistics for a pipeline run.
pub fn display_statistics(output: &PipelineOutput<'_>) {
    println!("\n{}", "=== Processing Statistics ===".bold());
    println!("  Articles in: {}", output.stages.input);
    if let Some(n) = output.stages.after_keyword {
        println!("  After keyword filter: {n}");
    }
    if let Some(n) = output.stages.after_category {
        println!("  After category filter: {n}");
    }
    if let Some(n) = output.stages.after_source {
        println!("  After source filter: {n}");
    }
    println!("  Duplicates removed: {}", output.duplicates_removed);
    println!("  Unique articles: {}", output.articles.len());

    if !output.articles.is_empty() {
        println!("  Average relevance score: {:.2}", output.average_score());
        println!("  Articles by category:");
        for (category, count) in output.category_counts() {
            println!("    - {category}: {count}");
        }
    }
}

/// Display a compiled digest.
pub fn display_digest(digest: &Digest<'_>) {
    println!("{}", "=".repeat(80));
    println!("{}", digest.title.to_uppercase().bold());
    println!("{}", digest.date.dimmed());
    println!("Total articles: {}", digest.total_articles);
    println!("{}", "=".repeat(80));

    for section in &digest.sections {
        println!();
        println!("{}", section.category.as_str().to_uppercase().bold().cyan());
        println!("{}", "-".repeat(40).dimmed());
        println!("Summary: {}", section.summary.italic());
        println!();

        for (i, article) in section.articles.iter().enumerate() {
            println!("{}. {}", i + 1, article.title.bold());
            println!(
                "   Source: {} | Relevance: {:.2} | {}",
                article.source,
                article.relevance_score,
                colorize_sentiment(article.sentiment),
            );
            println!("   {}", super::truncate_chars(&article.body, 150).dimmed());
            if !article.keywords.is_empty() {
                let keywords: Vec<&str> =
                    article.keywords.iter().take(5).map(String::as_str).collect();
                println!("   Keywords: {}", keywords.join(", "));
            }
            println!();
        }
    }

    println!("{}", "=".repeat(80));
}

/// Display the active lexicon.
pub fn display_lexicon(lexicon: &Lexicon) {
    println!("\n{}", "=== Lexicon ===".bold());
    println!(
        "  Weights: high {:.1}, medium {:.1}, low {:.1} (title bonus x{:.1})",
        lexicon.weights.high, lexicon.weights.medium, lexicon.weights.low, lexicon.title_bonus,
    );
    println!(
        "  Thresholds: similarity {:.2}, title duplicate {:.2}",
        lexicon.thresholds.similarity, lexicon.thresholds.title_duplicate,
    );

    for (category, keywords) in &lexicon.categories {
        println!("\n  {}", category.as_str().bold());
        for (priority, list) in [
            (Priority::High, &keywords.high),
            (Priority::Medium, &keywords.medium),
            (Priority::Low, &keywords.low),
        ] {
            println!("    {:<7} {}", priority.as_str().dimmed(), list.join(", "));
        }
    }

    println!("\n  {} {}", "Positive:".green(), lexicon.positive.join(", "));
    println!("  {} {}", "Negative:".red(), lexicon.negative.join(", "));
}

/// Colorize a sentiment label.
fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green(),
        Sentiment::Negative => sentiment.as_str().red(),
        Sentiment::Neutral => sentiment.as_str().dimmed(),
    }
}
