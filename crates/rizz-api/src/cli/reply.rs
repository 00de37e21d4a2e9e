//! One-shot reply: `rizz reply "<message>"`.

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use rizz_core::controller::{ControllerError, FALLBACK_MESSAGE};
use rizz_types::reply::ReplyRequest;

use crate::cli::ReplyOptions;
use crate::state::AppState;

/// Build the request from the positional message and the slider flags.
pub fn build_request(message: String, options: ReplyOptions) -> ReplyRequest {
    ReplyRequest::new(message)
        .with_interest(options.interest)
        .with_tone(options.tone)
        .with_style(options.style)
}

/// Spinner shown while the backend is thinking. Hidden for JSON/quiet output.
pub fn thinking_spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message("Thinking of something good...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Generate one reply and print it.
///
/// # Examples
///
/// ```bash
/// rizz reply "what are you up to this weekend?" --interest 8 --style playful
/// ```
pub async fn reply(
    state: &AppState,
    message: String,
    options: ReplyOptions,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let request = build_request(message, options);

    let spinner = thinking_spinner(json || quiet);
    let result = state.controller.generate(&request).await;
    spinner.finish_and_clear();

    let reply = match result {
        Ok(reply) => reply,
        Err(ControllerError::EmptyMessage) => {
            anyhow::bail!("Nothing to reply to: the message is empty");
        }
        Err(e) => {
            if !json {
                eprintln!("{} {}", style("✗").red().bold(), style(FALLBACK_MESSAGE).dim());
            }
            return Err(anyhow::Error::new(e).context("Reply generation failed"));
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "reply": reply,
                "style": request.style,
                "interest": request.interest,
                "tone": request.tone,
            }))?
        );
        return Ok(());
    }

    if quiet {
        println!("{reply}");
        return Ok(());
    }

    println!();
    println!(
        "  {} {}  {}",
        style("✓").green().bold(),
        style(request.style).magenta().bold(),
        style(format!("interest {}/10 · tone {}/10", request.interest, request.tone)).dim()
    );
    println!();
    println!("  {}", style(&reply).cyan());
    println!();

    Ok(())
}
