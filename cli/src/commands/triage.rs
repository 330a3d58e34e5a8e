use clap::Args;
use opsengine_core::{Ticket, TriageEngine};
use serde_json::json;

use super::render_result_text;
use crate::util::{EXIT_OK, print_json, read_text_from_file, usage_error};

pub const ANONYMOUS_CUSTOMER: &str = "anonymous";

#[derive(Args)]
pub struct TriageArgs {
    /// Ticket content (omit to use --file)
    pub content: Option<String>,

    /// Read ticket content from file (use '-' for stdin)
    #[arg(long, short = 'f', conflicts_with = "content")]
    pub file: Option<String>,

    /// Ticket identifier (auto-generated if omitted)
    #[arg(long)]
    pub ticket_id: Option<String>,

    /// Customer identifier
    #[arg(long, default_value = ANONYMOUS_CUSTOMER)]
    pub customer_id: String,

    /// Include per-SOP keyword scores and matched risk triggers
    #[arg(long)]
    pub explain: bool,

    /// Print a human-readable block instead of JSON
    #[arg(long, conflicts_with = "explain")]
    pub text: bool,
}

pub fn run(engine: &TriageEngine, args: TriageArgs) -> i32 {
    let content = match resolve_content(args.content, args.file.as_deref()) {
        Ok(c) => c,
        Err(message) => {
            return usage_error(
                &message,
                Some("Pass ticket text as an argument, or use --file <path> / --file - for stdin"),
            );
        }
    };

    let ticket_id = args
        .ticket_id
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let ticket = Ticket::new(ticket_id, args.customer_id, content);
    let result = engine.process(&ticket);

    if args.text {
        print!("{}", render_result_text(&result));
        return EXIT_OK;
    }

    if args.explain {
        let explanation = engine.explain(&ticket);
        print_json(&json!({
            "result": result,
            "explanation": explanation,
        }))
    } else {
        print_json(&result)
    }
}

/// Ticket text from the positional argument or a file. Blank text is a usage error.
fn resolve_content(content: Option<String>, file: Option<&str>) -> Result<String, String> {
    let raw = match (content, file) {
        (Some(c), _) => c,
        (None, Some(path)) => read_text_from_file(path)?,
        (None, None) => return Err("Ticket content is required".to_string()),
    };
    if raw.trim().is_empty() {
        return Err("Ticket content is empty".to_string());
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use opsengine_core::TriageEngine;

    use super::{ANONYMOUS_CUSTOMER, TriageArgs, resolve_content, run};
    use crate::util::{EXIT_OK, EXIT_USAGE};

    fn args(content: &str) -> TriageArgs {
        TriageArgs {
            content: Some(content.to_string()),
            file: None,
            ticket_id: Some("TKT-1".to_string()),
            customer_id: ANONYMOUS_CUSTOMER.to_string(),
            explain: false,
            text: false,
        }
    }

    #[test]
    fn blank_content_exits_with_usage_error() {
        let engine = TriageEngine::default();
        assert_eq!(run(&engine, args("  \t\n")), EXIT_USAGE);
        let missing = TriageArgs {
            content: None,
            ..args("")
        };
        assert_eq!(run(&engine, missing), EXIT_USAGE);
    }

    #[test]
    fn valid_content_exits_ok_in_every_output_mode() {
        let engine = TriageEngine::default();
        assert_eq!(run(&engine, args("Where is my money?")), EXIT_OK);
        let explain = TriageArgs {
            explain: true,
            ..args("My account is frozen")
        };
        assert_eq!(run(&engine, explain), EXIT_OK);
        let text = TriageArgs {
            text: true,
            ..args("hello")
        };
        assert_eq!(run(&engine, text), EXIT_OK);
    }

    #[test]
    fn positional_content_is_used_verbatim() {
        let content = resolve_content(Some("  Where is my money?".to_string()), None).unwrap();
        assert_eq!(content, "  Where is my money?");
    }

    #[test]
    fn blank_or_missing_content_is_rejected() {
        assert!(resolve_content(Some("   \n".to_string()), None).is_err());
        assert!(resolve_content(None, None).is_err());
    }

    #[test]
    fn content_can_come_from_file() {
        let path = std::env::temp_dir()
            .join(format!("opsengine-ticket-{}.txt", std::process::id()));
        std::fs::write(&path, "My utility bill was rejected").unwrap();
        let content = resolve_content(None, path.to_str());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(content.unwrap(), "My utility bill was rejected");
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = resolve_content(None, Some("/nonexistent/ticket.txt")).unwrap_err();
        assert!(err.contains("/nonexistent/ticket.txt"));
    }
}
