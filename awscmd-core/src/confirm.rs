//! Confirmation gate for operations that change remote state.

use std::io::{self, BufRead, Write};

/// Asks the caller whether a mutating call may proceed.
pub trait Prompter: Send + Sync {
    fn ask(&self, message: &str) -> io::Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin.
///
/// Without a TTY on stdin there is nobody to ask, so the answer is "no" and
/// the caller is pointed at `--yes`.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, message: &str) -> io::Result<bool> {
        if !atty::is(atty::Stream::Stdin) {
            eprintln!("{message}");
            eprintln!("Not confirmed: run interactively in a TTY or pass --yes to proceed.");
            return Ok(false);
        }

        let mut stderr = io::stderr();
        write!(stderr, "{message} [y/N]: ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

pub struct ConfirmationGate {
    assume_yes: bool,
    prompter: Box<dyn Prompter>,
}

impl ConfirmationGate {
    pub fn new(assume_yes: bool, prompter: Box<dyn Prompter>) -> Self {
        Self {
            assume_yes,
            prompter,
        }
    }

    /// Gate backed by the terminal, skipped entirely when `assume_yes` is set.
    pub fn terminal(assume_yes: bool) -> Self {
        Self::new(assume_yes, Box::new(TerminalPrompter))
    }

    pub fn confirm(&self, operation: &str, service: &str, target: &str) -> io::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        self.prompter.ask(&format!(
            "Performing operation \"{operation}\" ({service}) on target \"{target}\". Continue?"
        ))
    }
}

impl std::fmt::Debug for ConfirmationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationGate")
            .field("assume_yes", &self.assume_yes)
            .finish_non_exhaustive()
    }
}

/// Scripted prompters for tests in this and dependent crates.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use super::Prompter;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Always gives the same answer and counts how often it was asked.
    #[derive(Debug, Clone)]
    pub struct ScriptedPrompter {
        answer: bool,
        asked: Arc<AtomicUsize>,
    }

    impl ScriptedPrompter {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn asked(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.asked)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&self, _message: &str) -> io::Result<bool> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }
}
