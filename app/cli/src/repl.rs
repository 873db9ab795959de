//! Interactive chat loop with persistent history.

use crate::client::BackendClient;
use crate::config;
use anyhow::Result;
use console::style;
use indicatif::ProgressBar;
use rustyline::error::ReadlineError;
use std::{path::PathBuf, time::Duration};

/// Interactive chat loop over a backend client.
pub struct ChatRepl {
    client: BackendClient,
    editor: rustyline::DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new REPL for the given backend client.
    pub fn new(client: BackendClient) -> Result<Self> {
        let mut editor = rustyline::DefaultEditor::new()?;
        let history_path = config::history_file_path();
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
        Ok(Self {
            client,
            editor,
            history_path,
        })
    }

    /// Run the interactive loop until Ctrl+D.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", style("Waypoint travel agent").bold());
        println!("Ask me anything about travel! (Ctrl+D to exit)");
        println!("---");

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);
                    self.ask(&line).await;
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    /// Send one prompt and render the outcome.
    async fn ask(&self, prompt: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Thinking...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = self.client.ask(prompt).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(answer) => println!("{}", style(answer).green()),
            Err(e) => eprintln!("{}", style(e.to_string()).red()),
        }
    }

    /// Save readline history to disk.
    fn save_history(&mut self) {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }
    }
}
