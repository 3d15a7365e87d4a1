//! Ensemble CLI — interactive multi-agent shell.
//!
//! Builds the four demo agents (research, analysis, writing, coordination),
//! then reads lines from stdin. Directives: `exit` ends the session,
//! `switch:<name>` changes the current agent, blank input is skipped;
//! anything else goes to the current agent verbatim.

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use ensemble::config::EnsembleConfig;
use ensemble::error::Error;
use ensemble::prelude::*;
use ensemble::provider::google::GoogleProvider;
use ensemble::tools::builtin::{
    analyze_data_tool, create_content_tool, search_information_tool,
};

#[derive(Parser, Debug)]
#[command(name = "ensemble", about = "Multi-agent conversational shell")]
struct Cli {
    /// Gemini model to use for all agents.
    #[arg(long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Sampling temperature.
    #[arg(long)]
    temperature: Option<f64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = EnsembleConfig::from_env();
    let api_key = config
        .get_api_key("google")
        .ok_or_else(|| Error::Authentication("Missing GOOGLE_API_KEY".into()))?;

    let settings = CompletionSettings {
        temperature: cli.temperature,
        ..Default::default()
    };

    let make_provider = || {
        let mut provider = GoogleProvider::new(cli.model.clone(), api_key.clone());
        if let Some(url) = config.get_base_url("google") {
            provider = provider.with_base_url(url);
        }
        Arc::new(provider)
    };

    let mut orchestrator = Orchestrator::new();

    orchestrator.add_agent(
        Agent::new(
            "ResearchAgent",
            "Research Specialist",
            "You are a research specialist. Your job is to gather and summarize information \
             on various topics. Use the search_information tool when needed.",
            make_provider(),
        )
        .with_settings(settings.clone())
        .with_tool(search_information_tool()),
    )?;

    orchestrator.add_agent(
        Agent::new(
            "AnalystAgent",
            "Data Analyst",
            "You are a data analyst. Your job is to analyze data and provide insights. \
             Use the analyze_data tool when needed.",
            make_provider(),
        )
        .with_settings(settings.clone())
        .with_tool(analyze_data_tool()),
    )?;

    orchestrator.add_agent(
        Agent::new(
            "WriterAgent",
            "Content Writer",
            "You are a professional content writer. Your job is to create well-written \
             content on various topics. Use the create_content tool when needed.",
            make_provider(),
        )
        .with_settings(settings.clone())
        .with_tool(create_content_tool()),
    )?;

    orchestrator.add_agent(
        Agent::new(
            "Coordinator",
            "Task Coordinator",
            "You are a coordinator that routes tasks to specialized agents. You have access \
             to three agents:\n\
             1. ResearchAgent - for research and information gathering\n\
             2. AnalystAgent - for data analysis\n\
             3. WriterAgent - for content creation\n\n\
             When a user asks a question, determine which agent(s) should handle it and \
             explain your routing decision.",
            make_provider(),
        )
        .with_settings(settings.clone()),
    )?;

    println!("Agents:");
    for summary in orchestrator.agents() {
        println!("  {} — {}", summary.name, summary.role);
    }
    println!("Commands: switch:<name>, exit\n");

    // Session-local pointer: which agent receives un-prefixed input.
    let mut current = "Coordinator".to_string();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("You (talking to {current}): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_string();

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if let Some(name) = input.strip_prefix("switch:") {
            let name = name.trim();
            if orchestrator.contains(name) {
                current = name.to_string();
                println!("Switched to {name}\n");
            } else {
                println!("Agent '{name}' not found\n");
            }
            continue;
        }

        if input.is_empty() {
            continue;
        }

        let agent = orchestrator
            .get_mut(&current)
            .expect("current agent is always registered");
        match agent.process(input).await {
            Ok(response) => println!("\n{current}: {response}\n"),
            Err(e) => eprintln!("\n{current} failed: {e}\n"),
        }
    }

    Ok(())
}
