use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_ms: 50,
            deleting_ms: 30,
            pause_ms: 2000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterMode {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    NoPhrases,
}

impl fmt::Display for TypewriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypewriterError::NoPhrases => write!(f, "typewriter needs at least one phrase"),
        }
    }
}

impl std::error::Error for TypewriterError {}

/// Type, pause, delete, next phrase; the final phrase is typed once and kept.
///
/// The machine owns no timer. `next_delay_ms` says how long the caller should
/// wait before the next `tick`, and `None` means it is finished.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    index: usize,
    shown: usize,
    display: String,
    mode: TypewriterMode,
    complete: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        let mut machine = Self {
            phrases,
            config,
            index: 0,
            shown: 0,
            display: String::new(),
            mode: TypewriterMode::Typing,
            complete: false,
        };
        machine.settle();
        Ok(machine)
    }

    pub fn config(&self) -> TypewriterConfig {
        self.config
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_typing(&self) -> bool {
        self.mode == TypewriterMode::Typing
    }

    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn next_delay_ms(&self) -> Option<u32> {
        if self.complete {
            return None;
        }
        let delay = match self.mode {
            TypewriterMode::Typing if self.shown < self.phrase_len() => self.config.typing_ms,
            TypewriterMode::Typing => self.config.pause_ms,
            TypewriterMode::Deleting => self.config.deleting_ms,
        };
        Some(delay)
    }

    /// Runs the action of the pending timer. No-op once complete.
    pub fn tick(&mut self) {
        if self.complete {
            return;
        }
        match self.mode {
            TypewriterMode::Typing => {
                let next = self.phrases[self.index].chars().nth(self.shown);
                match next {
                    Some(ch) => {
                        self.display.push(ch);
                        self.shown += 1;
                    }
                    None => self.mode = TypewriterMode::Deleting,
                }
            }
            TypewriterMode::Deleting => {
                if self.display.pop().is_some() {
                    self.shown -= 1;
                }
            }
        }
        self.settle();
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.shown = 0;
        self.display.clear();
        self.mode = TypewriterMode::Typing;
        self.complete = false;
        self.settle();
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.phrases.len()
    }

    // Transitions that happen without waiting on a timer.
    fn settle(&mut self) {
        loop {
            match self.mode {
                TypewriterMode::Typing => {
                    if self.shown == self.phrase_len() && self.is_last() {
                        self.complete = true;
                    }
                    return;
                }
                TypewriterMode::Deleting => {
                    if self.shown > 0 {
                        return;
                    }
                    self.index += 1;
                    self.mode = TypewriterMode::Typing;
                }
            }
        }
    }
}
