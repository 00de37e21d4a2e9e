//! Interactive session: `rizz chat`.
//!
//! Every round asks for the received message, then the sliders and style
//! (defaulting to the previous round's picks), and prints the reply. All
//! rounds go through the same conversation, so the backend sees the history.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};

use rizz_core::controller::FALLBACK_MESSAGE;
use rizz_types::reply::{ReplyStyle, Scale};

use crate::cli::reply::{build_request, thinking_spinner};
use crate::cli::ReplyOptions;
use crate::state::AppState;

/// Words that end the session when typed as the message.
const QUIT_WORDS: [&str; 3] = ["/quit", "/exit", "/q"];

pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || QUIT_WORDS.contains(&input)
}

pub async fn chat(state: &AppState, options: ReplyOptions, json: bool) -> Result<()> {
    let mut current = options;

    if !json {
        println!();
        println!("  {}", style("RizzSite").magenta().bold());
        println!(
            "  {}",
            style("Paste what they sent. Empty line or /quit to stop.").dim()
        );
        println!();
    }

    loop {
        let message: String = Input::new()
            .with_prompt("They said")
            .allow_empty(true)
            .interact_text()?;
        if is_quit(&message) {
            break;
        }

        current.interest = Input::<Scale>::new()
            .with_prompt("Interest (1-10)")
            .default(current.interest)
            .interact_text()?;
        current.tone = Input::<Scale>::new()
            .with_prompt("Tone (1-10)")
            .default(current.tone)
            .interact_text()?;

        let labels: Vec<&str> = ReplyStyle::ALL.iter().map(|s| s.label()).collect();
        let selected = ReplyStyle::ALL
            .iter()
            .position(|s| *s == current.style)
            .unwrap_or_default();
        let choice = Select::new()
            .with_prompt("Style")
            .items(&labels)
            .default(selected)
            .interact()?;
        current.style = ReplyStyle::ALL[choice];

        let request = build_request(message, current);
        let spinner = thinking_spinner(json);
        let result = state.controller.generate(&request).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) if json => {
                println!("{}", serde_json::json!({ "reply": reply, "style": request.style }));
            }
            Ok(reply) => {
                println!();
                println!("  {} {}", style("→").magenta().bold(), style(&reply).cyan());
                println!();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Chat round failed");
                if json {
                    println!("{}", serde_json::json!({ "error": FALLBACK_MESSAGE }));
                } else {
                    println!();
                    println!("  {} {}", style("✗").red().bold(), style(FALLBACK_MESSAGE).dim());
                    println!();
                }
            }
        }
    }

    if !json {
        let turns = state.controller.history().len();
        let unanswered = state.controller.unanswered_count();
        println!(
            "  {}",
            style(format!(
                "{turns} turns this session, {unanswered} without a reply."
            ))
            .dim()
        );
    }

    Ok(())
}
