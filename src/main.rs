//! Interactive demo REPL for the Medora health-guidance engine.
//!
//! Reads one line per turn from stdin and runs it through the conversational
//! flow. Two slash commands bypass the chat flow and hit the auxiliary
//! lookups directly:
//!
//! - `/med <name>` — medication info card
//! - `/previsit <patient name>` — pre-visit summary from the demo directory

use std::io::{self, BufRead, Write};

use medora::{
    config, previsit, ConversationSession, HealthAssistant, MedicationFormulary,
    PatientDirectory,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    config::init_tracing();
    tracing::info!("{} chat demo v{}", config::APP_NAME, config::APP_VERSION);

    let assistant = HealthAssistant::new();
    let formulary = MedicationFormulary::builtin();
    let directory = PatientDirectory::demo();
    let mut session = ConversationSession::with_welcome();

    if let Some(welcome) = session.history().first() {
        println!("{}\n", welcome.content);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        if let Some(name) = text.strip_prefix("/med ") {
            println!("\n{}\n", formulary.medication_info(name.trim()));
            continue;
        }
        if let Some(name) = text.strip_prefix("/previsit ") {
            match directory.find(name.trim()) {
                Some(snapshot) => println!("\n{}\n", previsit::previsit_summary(snapshot)),
                None => println!("\nNo patient named \"{}\" in the demo directory.\n", name.trim()),
            }
            continue;
        }

        let turn = assistant.submit(&mut session, text).await;
        println!("\n{}\n", turn.content);
    }

    tracing::info!(
        session = %session.id(),
        turns = session.history().len(),
        title = %session.title(),
        "session closed"
    );
    Ok(())
}
