use clap::Args;
use opsengine_core::{Ticket, TriageEngine, TriageResult};
use serde_json::json;

use super::render_result_text;
use crate::util::{EXIT_OK, print_json};

#[derive(Args)]
pub struct DemoArgs {
    /// Print human-readable blocks instead of JSON
    #[arg(long)]
    pub text: bool,
}

/// The reference tickets: a KYC rejection, a delay query, and an escalation.
pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            "TKT-101",
            "CUST-A",
            "Why was my utility bill rejected? It shows my name clearly.",
        ),
        Ticket::new("TKT-102", "CUST-B", "Where is my money? I sent it 4 hours ago."),
        Ticket::new(
            "TKT-103",
            "CUST-C",
            "My account is frozen! This is theft! \
             I will call my lawyer if you don't release my funds.",
        ),
    ]
}

/// Each incoming ticket followed by its decision block.
pub fn render_demo_text(tickets: &[Ticket], results: &[TriageResult]) -> String {
    let mut out = String::new();
    for (ticket, result) in tickets.iter().zip(results) {
        out.push_str(&format!(">>> INCOMING TICKET: {}\n", ticket.id));
        out.push_str(&format!("Content: {}\n", ticket.content));
        out.push_str(&render_result_text(result));
        out.push('\n');
    }
    out
}

pub fn run(engine: &TriageEngine, args: DemoArgs) -> i32 {
    let tickets = demo_tickets();
    let results = engine.process_batch(&tickets);

    if args.text {
        print!("{}", render_demo_text(&tickets, &results));
        return EXIT_OK;
    }

    print_json(&json!({
        "catalog_fingerprint": engine.repository().fingerprint(),
        "results": results,
    }))
}
